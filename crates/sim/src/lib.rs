// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! workshop-sim: drives the workshop coordinator with simulated actors
//!
//! Reindeer and elves are independent tokio tasks whose idle and working
//! times come from a [`Pacer`]. The driver reads the coordinator's event
//! stream and decides when to stop.

pub mod actors;
pub mod config;
pub mod pacing;
pub mod simulation;

pub use config::{ConfigError, DelayRange, SimConfig};
pub use pacing::{Activity, InstantPacer, Pacer, RandomPacer};
pub use simulation::{Progress, Simulation, SimulationError, StopAt};
