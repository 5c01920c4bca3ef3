//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    workshop().args(&["deliver"]).fails();
}

#[test]
fn missing_config_file_is_reported() {
    let temp = Project::empty();
    temp.workshop()
        .args(&["config", "--config", "nope.toml"])
        .fails()
        .stderr_has("nope.toml");
}

#[test]
fn zero_elves_is_rejected() {
    workshop()
        .args(&["run", "--elves", "0", "--rounds", "1"])
        .fails()
        .stderr_has("elves must be at least 1");
}

#[test]
fn inverted_range_is_rejected() {
    let temp = Project::empty();
    temp.file("bad.toml", "[delivery]\nmin = \"2s\"\nmax = \"1s\"\n");
    temp.workshop()
        .args(&["config", "--config", "bad.toml"])
        .fails()
        .stderr_has("delivery");
}

#[test]
fn reindeer_count_is_not_configurable() {
    let temp = Project::empty();
    temp.file("bad.toml", "reindeer = 12\n");
    temp.workshop()
        .args(&["config", "--config", "bad.toml"])
        .fails()
        .stderr_has("reindeer");
}

#[test]
fn unknown_format_fails() {
    workshop()
        .args(&["run", "--format", "yaml", "--rounds", "1"])
        .fails();
}
