// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run command: open the workshop and print its events

use super::config::ConfigSource;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use workshop_sim::{Progress, RandomPacer, Simulation, StopAt};

#[derive(clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    source: ConfigSource,

    /// Stop once this many reindeer rounds have finished
    #[arg(long)]
    rounds: Option<u64>,

    /// Stop once this many elf groups have been helped
    #[arg(long)]
    groups: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let config = args.source.load()?;
    let stop = StopAt {
        rounds: args.rounds,
        groups: args.groups,
    };

    let interrupted = CancellationToken::new();
    let token = interrupted.clone();
    ctrlc::set_handler(move || token.cancel())?;

    let mut sim = Simulation::start(&config, Arc::new(RandomPacer::new(config.clone())))?;
    let mut progress = Progress::default();

    while !progress.reached(&stop) {
        tokio::select! {
            record = sim.next_event() => {
                let Some(record) = record else { break };
                output::print_record(&record, args.format)?;
                progress.observe(&record.event);
            }
            _ = interrupted.cancelled() => {
                eprintln!("\nClosing the workshop...");
                break;
            }
        }
    }

    let snapshot = sim.shutdown().await?;
    if args.format == OutputFormat::Text {
        println!(
            "Workshop closed after {} rounds and {} elf groups.",
            progress.rounds, progress.groups
        );
    }
    tracing::debug!(?snapshot, "final state");
    Ok(())
}
