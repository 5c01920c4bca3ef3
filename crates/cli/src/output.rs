// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for workshop events

use clap::ValueEnum;
use workshop_core::{ElfId, Event, EventRecord, REINDEER_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print one event record in the specified format
pub fn print_record(record: &EventRecord, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in render_text(&record.event) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(record)?),
    }
    Ok(())
}

/// Human-readable lines for an event
pub fn render_text(event: &Event) -> Vec<String> {
    match event {
        Event::ReindeerReturned { reindeer, returned } => {
            let mut lines = vec![format!(
                "Reindeer {} returned. Count = {}",
                reindeer.0, returned
            )];
            if *returned == REINDEER_COUNT {
                lines.push("All reindeer returned, waking Santa!".to_string());
            }
            lines
        }
        Event::ReindeerHarnessed { reindeer, .. } => {
            vec![format!("Reindeer {} is being harnessed.", reindeer.0)]
        }
        Event::ReindeerDelivered { reindeer, .. } => {
            vec![format!("Reindeer {} finished delivery.", reindeer.0)]
        }
        Event::ElfQueued { elf, waiting } => {
            vec![format!("Elf {} needs help. Current waiting = {}", elf.0, waiting)]
        }
        Event::ElfGroupFormed { .. } => {
            vec!["A group of 3 elves formed, waking Santa!".to_string()]
        }
        Event::ElfConsulting { elf, .. } => {
            vec![format!("Elf {} is being helped by Santa.", elf.0)]
        }
        Event::ElfHelped { elf, .. } => vec![format!("Elf {} got help.", elf.0)],
        Event::RoundStarted { round, .. } => vec![format!(
            "Santa: all reindeer returned, preparing the sleigh. (round {})",
            round
        )],
        Event::RoundFinished { round } => vec![format!(
            "Santa: reindeer finished delivery, back to sleep. (round {})",
            round
        )],
        Event::GroupStarted { group, elves } => vec![format!(
            "Santa: a group of 3 elves needs help. (group {}: elves {})",
            group,
            elf_list(elves)
        )],
        Event::GroupFinished { group, .. } => vec![format!(
            "Santa: done helping this group of elves. (group {})",
            group
        )],
    }
}

fn elf_list(elves: &[ElfId]) -> String {
    elves
        .iter()
        .map(|e| e.0.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
