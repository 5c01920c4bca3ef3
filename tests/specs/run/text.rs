//! Text output specs for the run command

use crate::prelude::*;

#[test]
fn stops_after_requested_rounds() {
    let temp = Project::quick();
    let run = temp
        .workshop()
        .args(&["run", "--config", "workshop.toml", "--rounds", "2"])
        .passes()
        .stdout_has("All reindeer returned, waking Santa!")
        .stdout_has("Santa: all reindeer returned, preparing the sleigh. (round 1)")
        .stdout_has("Santa: reindeer finished delivery, back to sleep. (round 2)")
        .stdout_lacks("(round 3)");

    let last = run.lines().last().copied().unwrap_or_default().to_string();
    assert!(
        last.starts_with("Workshop closed after 2 rounds"),
        "unexpected last line {last:?}"
    );
}

#[test]
fn stops_after_requested_groups() {
    let temp = Project::quick();
    temp.workshop()
        .args(&["run", "--config", "workshop.toml", "--groups", "2"])
        .passes()
        .stdout_has("A group of 3 elves formed, waking Santa!")
        .stdout_has("Santa: done helping this group of elves. (group 2)")
        .stdout_has("and 2 elf groups.");
}

#[test]
fn no_reindeer_hitch_before_the_round_starts() {
    let temp = Project::quick();
    let run = temp
        .workshop()
        .args(&["run", "--config", "workshop.toml", "--rounds", "3"])
        .passes();

    let mut round_open = false;
    for line in run.lines() {
        if line.starts_with("Santa: all reindeer returned") {
            round_open = true;
        } else if line.starts_with("Santa: reindeer finished delivery") {
            round_open = false;
        } else if line.contains("is being harnessed") || line.contains("finished delivery.") {
            assert!(round_open, "{line:?} outside a round");
        }
    }
}

#[test]
fn logs_stay_off_stdout() {
    let temp = Project::quick();
    temp.workshop()
        .env("RUST_LOG", "debug")
        .args(&["run", "--config", "workshop.toml", "--rounds", "1"])
        .passes()
        .stderr_has("workshop open")
        .stdout_lacks("workshop open");
}
