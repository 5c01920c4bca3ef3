// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects requested by workshop state transitions

use crate::error::Rejection;
use crate::events::Event;

/// Side effects the coordinator performs after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Publish an event on the bus
    Emit(Event),
    /// Broadcast to everyone blocked on a wait queue
    Wake(Waiters),
    /// The input was refused and the state left untouched
    Reject(Rejection),
}

/// The wait queues of the workshop monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waiters {
    /// The arbiter's idle wait
    Santa,
    /// Reindeer back early while the previous round is still full
    Stable,
    /// Reindeer waiting to be harnessed
    Sleigh,
    /// Elves waiting for a free place in the next group
    WaitingRoom,
    /// Admitted elves waiting for Santa to start helping
    Consultation,
}

impl std::fmt::Display for Waiters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Waiters::Santa => write!(f, "santa"),
            Waiters::Stable => write!(f, "stable"),
            Waiters::Sleigh => write!(f, "sleigh"),
            Waiters::WaitingRoom => write!(f, "waiting-room"),
            Waiters::Consultation => write!(f, "consultation"),
        }
    }
}
