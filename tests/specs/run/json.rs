//! JSON output specs for the run command

use crate::prelude::*;
use serde_json::Value;

fn records(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn one_record_per_line_in_sequence_order() {
    let temp = Project::quick();
    let run = temp
        .workshop()
        .args(&[
            "run",
            "--config",
            "workshop.toml",
            "--rounds",
            "1",
            "--groups",
            "1",
            "--format",
            "json",
        ])
        .passes();

    let records = records(&run.stdout);
    assert!(!records.is_empty());

    let sequences: Vec<u64> = records
        .iter()
        .map(|r| r["sequence"].as_u64().unwrap())
        .collect();
    assert!(sequences.windows(2).all(|w| w[0] < w[1]));

    let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"santa:round:finished"));
    assert!(names.contains(&"santa:group:finished"));
}

#[test]
fn round_start_carries_the_whole_team() {
    let temp = Project::quick();
    let run = temp
        .workshop()
        .args(&[
            "run",
            "--config",
            "workshop.toml",
            "--rounds",
            "1",
            "--format",
            "json",
        ])
        .passes();

    let started = records(&run.stdout)
        .into_iter()
        .find(|r| r["name"] == "santa:round:started")
        .unwrap();
    assert_eq!(started["event"]["type"], "round_started");
    assert_eq!(started["event"]["round"], 1);
    assert_eq!(started["event"]["reindeer"].as_array().unwrap().len(), 9);
}

#[test]
fn json_output_has_no_summary_line() {
    let temp = Project::quick();
    temp.workshop()
        .args(&[
            "run",
            "--config",
            "workshop.toml",
            "--groups",
            "1",
            "--format",
            "json",
        ])
        .passes()
        .stdout_lacks("Workshop closed");
}
