// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading shared by the subcommands

use anyhow::{Context, Result};
use std::path::PathBuf;
use workshop_sim::SimConfig;

/// Where the configuration comes from
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigSource {
    /// Configuration file (TOML)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of elves, overriding the configuration file
    #[arg(long)]
    pub elves: Option<u32>,
}

impl ConfigSource {
    /// Defaults, then the file, then command-line overrides
    pub fn load(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(elves) = self.elves {
            config.elves = elves;
        }
        config.validate()?;

        tracing::debug!(?config, "effective configuration");
        Ok(config)
    }
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    source: ConfigSource,
}

pub fn handle(args: ConfigArgs) -> Result<()> {
    let config = args.source.load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}
