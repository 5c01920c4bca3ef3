//! Config command specs
//!
//! Verify the effective configuration is printed as TOML.

use crate::prelude::*;

#[test]
fn defaults_are_printed() {
    workshop()
        .args(&["config"])
        .passes()
        .stdout_has("elves = 15")
        .stdout_has("[vacation]")
        .stdout_has("min = \"1s\"")
        .stdout_has("[delivery]")
        .stdout_has("[toy_making]")
        .stdout_has("[consultation]");
}

#[test]
fn elves_flag_overrides_file() {
    let temp = Project::quick();
    temp.workshop()
        .args(&["config", "--config", "workshop.toml", "--elves", "11"])
        .passes()
        .stdout_has("elves = 11")
        .stdout_has("max = \"2ms\"");
}

#[test]
fn printed_config_reads_back_unchanged() {
    let temp = Project::quick();
    let first = temp
        .workshop()
        .args(&["config", "--config", "workshop.toml"])
        .passes();
    temp.file("echo.toml", &first.stdout);

    temp.workshop()
        .args(&["config", "--config", "echo.toml"])
        .passes()
        .stdout_eq(&first.stdout);
}
