// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workshop events and their stamped records

use crate::actor::{ElfId, ReindeerId};
use serde::{Deserialize, Serialize};

/// Discrete, orderable things that happen in the workshop.
///
/// Actor-level events (`reindeer:*`, `elf:*`) report progress of a single
/// caller. `santa:*` events are the arbiter's phase transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    // Reindeer events
    ReindeerReturned {
        reindeer: ReindeerId,
        returned: usize,
    },
    ReindeerHarnessed {
        reindeer: ReindeerId,
        round: u64,
    },
    ReindeerDelivered {
        reindeer: ReindeerId,
        hitched: usize,
    },

    // Elf events
    ElfQueued {
        elf: ElfId,
        waiting: usize,
    },
    ElfGroupFormed {
        elves: Vec<ElfId>,
    },
    ElfConsulting {
        elf: ElfId,
        group: u64,
    },
    ElfHelped {
        elf: ElfId,
        helped: usize,
    },

    // Arbiter phase transitions
    RoundStarted {
        round: u64,
        reindeer: Vec<ReindeerId>,
    },
    RoundFinished {
        round: u64,
    },
    GroupStarted {
        group: u64,
        elves: Vec<ElfId>,
    },
    GroupFinished {
        group: u64,
        elves: Vec<ElfId>,
    },
}

impl Event {
    /// Colon-separated name used for pattern subscriptions
    pub fn name(&self) -> &'static str {
        match self {
            Event::ReindeerReturned { .. } => "reindeer:returned",
            Event::ReindeerHarnessed { .. } => "reindeer:harnessed",
            Event::ReindeerDelivered { .. } => "reindeer:delivered",

            Event::ElfQueued { .. } => "elf:queued",
            Event::ElfGroupFormed { .. } => "elf:group:formed",
            Event::ElfConsulting { .. } => "elf:consulting",
            Event::ElfHelped { .. } => "elf:helped",

            Event::RoundStarted { .. } => "santa:round:started",
            Event::RoundFinished { .. } => "santa:round:finished",
            Event::GroupStarted { .. } => "santa:group:started",
            Event::GroupFinished { .. } => "santa:group:finished",
        }
    }

    /// True for the arbiter's round/group start and end events
    pub fn is_phase_transition(&self) -> bool {
        matches!(
            self,
            Event::RoundStarted { .. }
                | Event::RoundFinished { .. }
                | Event::GroupStarted { .. }
                | Event::GroupFinished { .. }
        )
    }
}

/// An event as delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Monotonic sequence number, starting at 1
    pub sequence: u64,
    /// Milliseconds since the bus was created
    pub elapsed_ms: u64,
    pub name: &'static str,
    pub event: Event,
}
