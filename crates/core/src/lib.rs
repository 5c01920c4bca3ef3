// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! workshop-core: rendezvous coordinator for Santa, his reindeer and the elves
//!
//! This crate provides:
//! - A pure state machine for the reindeer barrier and the elf waiting room
//! - An async monitor that blocks arriving actors until their phase starts
//! - The arbiter loop that serves a full team before a full group
//! - Ordered, pattern-routable events for every transition

pub mod actor;
pub mod clock;
pub mod coordination;
pub mod error;
pub mod events;

pub use actor::{reindeer_team, ElfId, ReindeerId, ELF_GROUP_SIZE, REINDEER_COUNT};
pub use clock::{Clock, FakeClock, SystemClock};
pub use coordination::{
    Coordinator, Effect, Phase, Waiters, WorkshopInput, WorkshopSnapshot, WorkshopState,
};
pub use error::{CoordinatorError, Rejection};
pub use events::{Event, EventBus, EventPattern, EventReceiver, EventRecord, Subscription};

// Re-exported so callers can cancel waits without naming tokio-util themselves
pub use tokio_util::sync::CancellationToken;
