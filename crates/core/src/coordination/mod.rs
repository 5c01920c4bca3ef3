// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workshop coordination
//!
//! This module provides:
//! - **WorkshopState** - pure transitions over counters and Santa's phase
//! - **Effect** - events to publish and wait queues to wake after a transition
//! - **Coordinator** - the shared monitor actors and the arbiter block on

mod coordinator;
mod effect;
mod state;

pub use coordinator::Coordinator;
pub use effect::{Effect, Waiters};
pub use state::{Phase, WorkshopInput, WorkshopSnapshot, WorkshopState};
