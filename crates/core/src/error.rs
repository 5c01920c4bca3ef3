// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for workshop coordination

use crate::actor::{ElfId, ReindeerId};
use thiserror::Error;

/// Why the state machine refused an input.
///
/// The coordinator only feeds inputs whose guard it has already observed,
/// so a rejection means the caller broke the protocol (for example the same
/// reindeer arriving twice in one round).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{0} already returned this round")]
    AlreadyReturned(ReindeerId),
    #[error("all reindeer for round {round} are already back")]
    BarrierFull { round: u64 },
    #[error("{0} is not being harnessed")]
    NotHarnessed(ReindeerId),
    #[error("{0} already finished delivery this round")]
    AlreadyHitched(ReindeerId),
    #[error("{0} is already waiting for Santa")]
    AlreadyQueued(ElfId),
    #[error("the waiting room is closed")]
    WaitingRoomClosed,
    #[error("{0} is not in the group being helped")]
    NotInConsultation(ElfId),
    #[error("{0} was already helped")]
    AlreadyHelped(ElfId),
}

/// Errors returned by the coordinator's entry points
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("wait cancelled")]
    Cancelled,
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),
}

impl CoordinatorError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CoordinatorError::Cancelled)
    }
}
