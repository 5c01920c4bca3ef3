// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A running workshop
//!
//! [`Simulation::start`] spawns Santa's arbiter, the nine reindeer and the
//! configured elves on the current tokio runtime. The handle yields the
//! coordinator's events in publication order and shuts everything down.

use crate::actors::{run_elf, run_reindeer};
use crate::config::{ConfigError, SimConfig};
use crate::pacing::Pacer;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use workshop_core::{
    reindeer_team, Clock, Coordinator, CoordinatorError, ElfId, Event, EventReceiver,
    EventRecord, SystemClock, WorkshopSnapshot,
};

/// Errors from running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("coordinator error: {0}")]
    Coordinator(#[from] CoordinatorError),
    #[error("actor task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

type ActorTask = JoinHandle<Result<(), CoordinatorError>>;

/// Handle to a running workshop
pub struct Simulation<C: Clock = SystemClock> {
    coordinator: Coordinator<C>,
    events: EventReceiver,
    cancel: CancellationToken,
    arbiter: ActorTask,
    actors: Vec<ActorTask>,
}

impl Simulation<SystemClock> {
    pub fn start(config: &SimConfig, pacer: Arc<dyn Pacer>) -> Result<Self, SimulationError> {
        Self::start_with_clock(config, pacer, SystemClock)
    }
}

impl<C: Clock> Simulation<C> {
    pub fn start_with_clock(
        config: &SimConfig,
        pacer: Arc<dyn Pacer>,
        clock: C,
    ) -> Result<Self, SimulationError> {
        config.validate()?;

        let coordinator = Coordinator::with_clock(clock);
        // Installed before any actor runs so no event is missed
        let events = coordinator.events().set_global_handler();
        let cancel = CancellationToken::new();

        let arbiter = {
            let coordinator = coordinator.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move { coordinator.run_arbiter(&cancel).await })
        };

        let mut actors = Vec::with_capacity(workshop_core::REINDEER_COUNT + config.elves as usize);
        for reindeer in reindeer_team() {
            actors.push(tokio::spawn(run_reindeer(
                coordinator.clone(),
                reindeer,
                Arc::clone(&pacer),
                cancel.clone(),
            )));
        }
        for id in 1..=config.elves {
            actors.push(tokio::spawn(run_elf(
                coordinator.clone(),
                ElfId(id),
                Arc::clone(&pacer),
                cancel.clone(),
            )));
        }

        tracing::info!(elves = config.elves, "workshop open");
        Ok(Self {
            coordinator,
            events,
            cancel,
            arbiter,
            actors,
        })
    }

    pub fn coordinator(&self) -> &Coordinator<C> {
        &self.coordinator
    }

    /// Next event published by the workshop
    pub async fn next_event(&mut self) -> Option<EventRecord> {
        self.events.recv().await
    }

    /// Cancel every actor and the arbiter, wait for them to stop and return
    /// the final counters.
    ///
    /// Work already admitted finishes first, so this returns after at most
    /// one delivery or consultation.
    pub async fn shutdown(self) -> Result<WorkshopSnapshot, SimulationError> {
        self.cancel.cancel();

        let mut tasks = self.actors;
        tasks.push(self.arbiter);
        join_all(tasks).await?;

        let snapshot = self.coordinator.snapshot();
        tracing::info!(
            rounds = snapshot.rounds,
            groups = snapshot.groups,
            "workshop closed"
        );
        Ok(snapshot)
    }
}

/// Join every task, then report the first failure.
///
/// A cancelled task counts as a clean stop.
async fn join_all(tasks: Vec<ActorTask>) -> Result<(), SimulationError> {
    let mut first_error = None;
    for task in tasks {
        let outcome = match task.await {
            Ok(Ok(())) => continue,
            Ok(Err(e)) if e.is_cancelled() => continue,
            Ok(Err(e)) => SimulationError::from(e),
            Err(e) => SimulationError::from(e),
        };
        tracing::warn!(error = %outcome, "actor ended with an error");
        first_error.get_or_insert(outcome);
    }
    first_error.map_or(Ok(()), Err)
}

/// When a run should end on its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopAt {
    /// Finished reindeer rounds to wait for
    pub rounds: Option<u64>,
    /// Finished elf groups to wait for
    pub groups: Option<u64>,
}

impl StopAt {
    /// Whether any target is set at all
    pub fn is_bounded(&self) -> bool {
        self.rounds.is_some() || self.groups.is_some()
    }
}

/// Finished rounds and groups seen on the event stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub rounds: u64,
    pub groups: u64,
}

impl Progress {
    pub fn observe(&mut self, event: &Event) {
        match event {
            Event::RoundFinished { round } => self.rounds = *round,
            Event::GroupFinished { group, .. } => self.groups = *group,
            _ => {}
        }
    }

    /// True once every configured target is met; never true when unbounded
    pub fn reached(&self, stop: &StopAt) -> bool {
        stop.is_bounded()
            && stop.rounds.is_none_or(|target| self.rounds >= target)
            && stop.groups.is_none_or(|target| self.groups >= target)
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
