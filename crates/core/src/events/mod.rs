// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observable workshop events
//!
//! This module provides:
//! - `Event` - what happened, with a colon-separated `name()`
//! - `EventBus` - stamps events with a sequence number and routes them
//! - `EventPattern` - pattern matching for event subscriptions

mod bus;
mod event;
mod subscription;

pub use bus::{EventBus, EventReceiver, EventSender};
pub use event::{Event, EventRecord};
pub use subscription::{EventPattern, SubscriberId, Subscription};
