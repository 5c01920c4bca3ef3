// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for fanning workshop events out to subscribers

use super::event::{Event, EventRecord};
use super::subscription::{SubscriberId, Subscription};
use crate::clock::{Clock, SystemClock};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;
use tokio::sync::mpsc;

/// Sender for event delivery
pub type EventSender = mpsc::UnboundedSender<EventRecord>;
/// Receiver for event delivery
pub type EventReceiver = mpsc::UnboundedReceiver<EventRecord>;

/// Stamps events with a sequence number and routes them to subscribers.
///
/// Stamping and delivery happen under one lock, so every receiver sees
/// records in strictly increasing `sequence` order.
pub struct EventBus<C: Clock = SystemClock> {
    subscribers: Arc<RwLock<HashMap<SubscriberId, (Subscription, EventSender)>>>,
    /// Receives every event regardless of pattern
    global_handler: Arc<RwLock<Option<EventSender>>>,
    sequence: Arc<Mutex<u64>>,
    clock: C,
    started: Instant,
}

impl EventBus<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> EventBus<C> {
    pub fn with_clock(clock: C) -> Self {
        let started = clock.now();
        Self {
            subscribers: Arc::new(RwLock::new(HashMap::new())),
            global_handler: Arc::new(RwLock::new(None)),
            sequence: Arc::new(Mutex::new(0)),
            clock,
            started,
        }
    }

    /// Subscribe to events matching the subscription's patterns
    pub fn subscribe(&self, subscription: Subscription) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = subscription.id.clone();

        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        subs.insert(id, (subscription, tx));

        rx
    }

    pub fn unsubscribe(&self, id: &SubscriberId) {
        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        subs.remove(id);
    }

    /// Install the handler that receives all events, replacing any previous one
    pub fn set_global_handler(&self) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut handler = self
            .global_handler
            .write()
            .unwrap_or_else(|e| e.into_inner());
        *handler = Some(tx);
        rx
    }

    /// Stamp and deliver an event, returning the record that was sent
    pub fn publish(&self, event: Event) -> EventRecord {
        let mut sequence = self.sequence.lock().unwrap_or_else(|e| e.into_inner());
        *sequence += 1;

        let record = EventRecord {
            sequence: *sequence,
            elapsed_ms: self.clock.millis_since(self.started),
            name: event.name(),
            event,
        };

        if let Some(tx) = self
            .global_handler
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            // Closed receivers are not an error; the observer went away
            let _ = tx.send(record.clone());
        }

        let subs = self.subscribers.read().unwrap_or_else(|e| e.into_inner());
        for (subscription, tx) in subs.values() {
            if subscription.matches(record.name) {
                let _ = tx.send(record.clone());
            }
        }

        record
    }

    /// Sequence number of the most recently published event
    pub fn current_sequence(&self) -> u64 {
        *self.sequence.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl Default for EventBus<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Clone for EventBus<C> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
            global_handler: Arc::clone(&self.global_handler),
            sequence: Arc::clone(&self.sequence),
            clock: self.clock.clone(),
            started: self.started,
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
