// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reindeer and elf loops
//!
//! Each actor alternates between its own idle activity and a visit to the
//! workshop, forever or until cancelled. A cancelled actor ends cleanly; any
//! other coordinator error ends it with that error.

use crate::pacing::{Activity, Pacer};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use workshop_core::{Clock, Coordinator, CoordinatorError, ElfId, ReindeerId};

/// Vacation, return, deliver, repeat
pub async fn run_reindeer<C: Clock>(
    coordinator: Coordinator<C>,
    reindeer: ReindeerId,
    pacer: Arc<dyn Pacer>,
    cancel: CancellationToken,
) -> Result<(), CoordinatorError> {
    loop {
        tokio::select! {
            _ = pacer.pace(Activity::Vacation) => {}
            _ = cancel.cancelled() => break,
        }

        tracing::debug!(%reindeer, "back from vacation");
        let delivery = pacer.pace(Activity::Delivery);
        if !settle(coordinator.reindeer_arrive(reindeer, delivery, &cancel).await)? {
            break;
        }
    }
    tracing::debug!(%reindeer, "stopped");
    Ok(())
}

/// Make toys, ask for help, get helped, repeat
pub async fn run_elf<C: Clock>(
    coordinator: Coordinator<C>,
    elf: ElfId,
    pacer: Arc<dyn Pacer>,
    cancel: CancellationToken,
) -> Result<(), CoordinatorError> {
    loop {
        tokio::select! {
            _ = pacer.pace(Activity::ToyMaking) => {}
            _ = cancel.cancelled() => break,
        }

        tracing::debug!(%elf, "needs help");
        let consultation = pacer.pace(Activity::Consultation);
        if !settle(coordinator.elf_arrive(elf, consultation, &cancel).await)? {
            break;
        }
    }
    tracing::debug!(%elf, "stopped");
    Ok(())
}

/// Whether the actor should keep going after a visit
fn settle(result: Result<(), CoordinatorError>) -> Result<bool, CoordinatorError> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.is_cancelled() => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "actors_tests.rs"]
mod tests;
