//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Delays small enough that a few rounds finish in well under a second
pub const QUICK_CONFIG: &str = r#"
elves = 6

[vacation]
min = "0ms"
max = "2ms"

[delivery]
min = "0ms"
max = "1ms"

[toy_making]
min = "0ms"
max = "2ms"

[consultation]
min = "0ms"
max = "1ms"
"#;

/// A scratch directory holding configuration files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project with `workshop.toml` holding [`QUICK_CONFIG`]
    pub fn quick() -> Self {
        let project = Self::empty();
        project.file("workshop.toml", QUICK_CONFIG);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn workshop(&self) -> CliBuilder {
        let mut cmd = workshop_cmd();
        cmd.current_dir(self.path());
        CliBuilder { cmd }
    }
}

/// Path to the `workshop` binary in this profile's target directory.
///
/// The binary belongs to another workspace member, so cargo does not export
/// `CARGO_BIN_EXE_workshop` here. It is built on first use when missing.
pub fn workshop_bin() -> &'static Path {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        // target/<profile>/deps/specs-<hash>
        let exe = std::env::current_exe().unwrap();
        let profile_dir = exe.parent().and_then(Path::parent).unwrap();
        let bin = profile_dir.join(format!("workshop{}", std::env::consts::EXE_SUFFIX));

        if !bin.is_file() {
            let mut build = std::process::Command::new(env!("CARGO"));
            build.args(["build", "--package", "workshop", "--bin", "workshop"]);
            if profile_dir.file_name().is_some_and(|name| name == "release") {
                build.arg("--release");
            }
            let status = build.status().unwrap();
            assert!(status.success(), "building the workshop binary failed");
        }
        assert!(bin.is_file(), "workshop binary missing at {}", bin.display());
        bin
    })
}

/// The CLI binary with logging left at its default
pub fn workshop_cmd() -> Command {
    let mut cmd = Command::new(workshop_bin());
    cmd.env_remove("RUST_LOG");
    cmd.timeout(std::time::Duration::from_secs(30));
    cmd
}

pub fn workshop() -> CliBuilder {
    CliBuilder {
        cmd: workshop_cmd(),
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and expect exit code 0
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(
            run.success,
            "expected success\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }

    /// Run and expect a non-zero exit code
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(
            !run.success,
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }
}

pub struct RunAssert {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {needle:?}\nstdout:\n{}",
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {needle:?}\nstdout:\n{}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {needle:?}\nstderr:\n{}",
            self.stderr
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.as_str(), expected);
        self
    }

    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}
