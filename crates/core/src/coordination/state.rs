// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workshop state machine
//!
//! Holds the reindeer barrier, the elf waiting room and Santa's current
//! phase. Transitions are pure: they return the next state together with
//! the events to publish and the wait queues to wake. The async monitor in
//! [`super::coordinator`] owns the single instance behind one mutex.

use super::effect::{Effect, Waiters};
use crate::actor::{ElfId, ReindeerId, ELF_GROUP_SIZE, REINDEER_COUNT};
use crate::error::Rejection;
use crate::events::Event;
use serde::Serialize;

/// What Santa is doing right now
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Asleep, waiting for a full team or a full group
    #[default]
    Idle,
    /// Harnessing the team and delivering toys
    Delivering,
    /// Helping the current group of elves
    Helping,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Delivering => write!(f, "delivering"),
            Phase::Helping => write!(f, "helping"),
        }
    }
}

/// Inputs that drive workshop transitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkshopInput {
    /// A reindeer is back from vacation
    ReindeerReturned { reindeer: ReindeerId },
    /// A harnessed reindeer finished its delivery
    ReindeerHitched { reindeer: ReindeerId },
    /// An elf took a place in the waiting room
    ElfQueued { elf: ElfId },
    /// An elf in the current group has been helped
    ElfHelped { elf: ElfId },
    /// The arbiter re-evaluates its guards
    Tick,
}

/// Counters and flags as seen from outside the monitor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WorkshopSnapshot {
    pub reindeer_returned: usize,
    pub reindeer_hitched: usize,
    pub elves_waiting: usize,
    pub elves_helped: usize,
    pub reindeer_phase: bool,
    pub elf_phase: bool,
    pub rounds: u64,
    pub groups: u64,
}

/// Shared state of the workshop.
///
/// Santa's two phase flags are folded into a single [`Phase`], so they can
/// never both be raised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkshopState {
    /// Reindeer back in the current round, in arrival order
    returned: Vec<ReindeerId>,
    /// Reindeer that finished delivery in the current round
    hitched: Vec<ReindeerId>,
    /// Elves admitted to the current group, in admission order
    waiting: Vec<ElfId>,
    /// Elves of the current group that have been helped
    helped: Vec<ElfId>,
    phase: Phase,
    /// Rounds started so far; the active round's number while delivering
    rounds: u64,
    /// Groups started so far; the active group's number while helping
    groups: u64,
}

impl WorkshopState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reindeer_returned(&self) -> usize {
        self.returned.len()
    }

    pub fn reindeer_hitched(&self) -> usize {
        self.hitched.len()
    }

    pub fn elves_waiting(&self) -> usize {
        self.waiting.len()
    }

    pub fn elves_helped(&self) -> usize {
        self.helped.len()
    }

    pub fn reindeer_phase(&self) -> bool {
        self.phase == Phase::Delivering
    }

    pub fn elf_phase(&self) -> bool {
        self.phase == Phase::Helping
    }

    /// Number of the current (or most recent) round
    pub fn round(&self) -> u64 {
        self.rounds
    }

    /// Number of the current (or most recent) elf group
    pub fn group(&self) -> u64 {
        self.groups
    }

    /// A returning reindeer may join the barrier
    pub fn barrier_open(&self) -> bool {
        self.returned.len() < REINDEER_COUNT
    }

    /// Admitted reindeer may go and harness
    pub fn sleigh_ready(&self) -> bool {
        self.phase == Phase::Delivering
    }

    /// An arriving elf may take a place in the next group
    pub fn waiting_room_open(&self) -> bool {
        self.waiting.len() < ELF_GROUP_SIZE && self.phase != Phase::Helping
    }

    /// Admitted elves may go in to see Santa
    pub fn consultation_open(&self) -> bool {
        self.phase == Phase::Helping
    }

    pub fn snapshot(&self) -> WorkshopSnapshot {
        WorkshopSnapshot {
            reindeer_returned: self.reindeer_returned(),
            reindeer_hitched: self.reindeer_hitched(),
            elves_waiting: self.elves_waiting(),
            elves_helped: self.elves_helped(),
            reindeer_phase: self.reindeer_phase(),
            elf_phase: self.elf_phase(),
            rounds: self.rounds,
            groups: self.groups,
        }
    }

    /// Verify the structural invariants, naming the first one that fails
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        if self.returned.len() > REINDEER_COUNT {
            return Err("more reindeer returned than the team holds");
        }
        if self.hitched.len() > self.returned.len() {
            return Err("more reindeer hitched than returned");
        }
        if !self.hitched.is_empty() && self.phase != Phase::Delivering {
            return Err("reindeer hitched outside a delivery");
        }
        if self.hitched.iter().any(|r| !self.returned.contains(r)) {
            return Err("hitched reindeer missing from the round");
        }
        if self.waiting.len() > ELF_GROUP_SIZE {
            return Err("waiting room over capacity");
        }
        if self.helped.len() > self.waiting.len() {
            return Err("more elves helped than waiting");
        }
        if !self.helped.is_empty() && self.phase != Phase::Helping {
            return Err("elves helped outside a consultation");
        }
        if self.helped.iter().any(|e| !self.waiting.contains(e)) {
            return Err("helped elf missing from the group");
        }
        if self.phase == Phase::Delivering && self.returned.len() != REINDEER_COUNT {
            return Err("delivering without a full team");
        }
        if self.phase == Phase::Helping && self.waiting.len() != ELF_GROUP_SIZE {
            return Err("helping without a full group");
        }
        Ok(())
    }

    /// Pure state transition function
    pub fn transition(&self, input: WorkshopInput) -> (WorkshopState, Vec<Effect>) {
        let mut next = self.clone();
        let mut effects = Vec::new();

        match input {
            WorkshopInput::ReindeerReturned { reindeer } => {
                if !self.barrier_open() {
                    effects.push(Effect::Reject(Rejection::BarrierFull {
                        round: self.rounds + 1,
                    }));
                } else if self.returned.contains(&reindeer) {
                    effects.push(Effect::Reject(Rejection::AlreadyReturned(reindeer)));
                } else {
                    next.returned.push(reindeer);
                    let returned = next.returned.len();
                    effects.push(Effect::Emit(Event::ReindeerReturned { reindeer, returned }));
                    if returned == REINDEER_COUNT {
                        effects.push(Effect::Wake(Waiters::Santa));
                    }
                }
            }

            WorkshopInput::ReindeerHitched { reindeer } => {
                if !self.sleigh_ready() || !self.returned.contains(&reindeer) {
                    effects.push(Effect::Reject(Rejection::NotHarnessed(reindeer)));
                } else if self.hitched.contains(&reindeer) {
                    effects.push(Effect::Reject(Rejection::AlreadyHitched(reindeer)));
                } else {
                    next.hitched.push(reindeer);
                    let hitched = next.hitched.len();
                    effects.push(Effect::Emit(Event::ReindeerDelivered { reindeer, hitched }));
                    if hitched == REINDEER_COUNT {
                        effects.push(Effect::Wake(Waiters::Santa));
                    }
                }
            }

            WorkshopInput::ElfQueued { elf } => {
                if !self.waiting_room_open() {
                    effects.push(Effect::Reject(Rejection::WaitingRoomClosed));
                } else if self.waiting.contains(&elf) {
                    effects.push(Effect::Reject(Rejection::AlreadyQueued(elf)));
                } else {
                    next.waiting.push(elf);
                    let waiting = next.waiting.len();
                    effects.push(Effect::Emit(Event::ElfQueued { elf, waiting }));
                    if waiting == ELF_GROUP_SIZE {
                        effects.push(Effect::Emit(Event::ElfGroupFormed {
                            elves: next.waiting.clone(),
                        }));
                        // With a full team back the arbiter is already awake for
                        // the reindeer and reaches this group afterwards.
                        if self.returned.len() < REINDEER_COUNT {
                            effects.push(Effect::Wake(Waiters::Santa));
                        }
                    }
                }
            }

            WorkshopInput::ElfHelped { elf } => {
                if !self.consultation_open() || !self.waiting.contains(&elf) {
                    effects.push(Effect::Reject(Rejection::NotInConsultation(elf)));
                } else if self.helped.contains(&elf) {
                    effects.push(Effect::Reject(Rejection::AlreadyHelped(elf)));
                } else {
                    next.helped.push(elf);
                    let helped = next.helped.len();
                    effects.push(Effect::Emit(Event::ElfHelped { elf, helped }));
                    if helped == ELF_GROUP_SIZE {
                        effects.push(Effect::Wake(Waiters::Santa));
                    }
                }
            }

            WorkshopInput::Tick => match self.phase {
                // Reindeer are checked first: a full team preempts a full group
                Phase::Idle if self.returned.len() == REINDEER_COUNT => {
                    next.phase = Phase::Delivering;
                    next.rounds += 1;
                    effects.push(Effect::Emit(Event::RoundStarted {
                        round: next.rounds,
                        reindeer: next.returned.clone(),
                    }));
                    effects.push(Effect::Wake(Waiters::Sleigh));
                }
                Phase::Idle if self.waiting.len() == ELF_GROUP_SIZE => {
                    next.phase = Phase::Helping;
                    next.groups += 1;
                    effects.push(Effect::Emit(Event::GroupStarted {
                        group: next.groups,
                        elves: next.waiting.clone(),
                    }));
                    effects.push(Effect::Wake(Waiters::Consultation));
                }
                Phase::Delivering if self.hitched.len() == REINDEER_COUNT => {
                    next.phase = Phase::Idle;
                    next.hitched.clear();
                    next.returned.clear();
                    effects.push(Effect::Emit(Event::RoundFinished { round: self.rounds }));
                    effects.push(Effect::Wake(Waiters::Stable));
                }
                Phase::Helping if self.helped.len() == ELF_GROUP_SIZE => {
                    next.phase = Phase::Idle;
                    next.helped.clear();
                    let elves = std::mem::take(&mut next.waiting);
                    effects.push(Effect::Emit(Event::GroupFinished {
                        group: self.groups,
                        elves,
                    }));
                    effects.push(Effect::Wake(Waiters::WaitingRoom));
                }
                _ => {}
            },
        }

        (next, effects)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
