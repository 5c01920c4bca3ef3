//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    workshop()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("config");
}

#[test]
fn run_help_lists_stop_conditions() {
    workshop()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--rounds")
        .stdout_has("--groups")
        .stdout_has("--elves")
        .stdout_has("--format");
}

#[test]
fn binary_resolves_from_the_workspace_target_dir() {
    assert!(workshop_bin().is_file());
    workshop()
        .args(&["--version"])
        .passes()
        .stdout_has("workshop 0.1.0");
}
