// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendezvous coordinator
//!
//! An async monitor around [`WorkshopState`]: one mutex guards the state and
//! each wait queue is a [`Notify`] woken by broadcast. Every wait re-checks
//! its guard after waking, because a broadcast does not promise the guard
//! holds for every waiter.
//!
//! Counters change only inside short critical sections. The unit of work an
//! admitted actor performs (delivering, being helped) runs with the lock
//! released.

use super::effect::{Effect, Waiters};
use super::state::{WorkshopInput, WorkshopSnapshot, WorkshopState};
use crate::actor::{ElfId, ReindeerId};
use crate::clock::{Clock, SystemClock};
use crate::error::{CoordinatorError, Rejection};
use crate::events::{Event, EventBus, EventReceiver, Subscription};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
struct Signals {
    santa: Notify,
    stable: Notify,
    sleigh: Notify,
    waiting_room: Notify,
    consultation: Notify,
}

impl Signals {
    fn queue(&self, waiters: Waiters) -> &Notify {
        match waiters {
            Waiters::Santa => &self.santa,
            Waiters::Stable => &self.stable,
            Waiters::Sleigh => &self.sleigh,
            Waiters::WaitingRoom => &self.waiting_room,
            Waiters::Consultation => &self.consultation,
        }
    }
}

struct Inner<C: Clock> {
    state: Mutex<WorkshopState>,
    signals: Signals,
    events: EventBus<C>,
}

/// Shared handle to the workshop monitor.
///
/// Clones refer to the same state. Exactly one task should run
/// [`Coordinator::run_arbiter`]; any number of actors may call the
/// arrival entry points concurrently.
pub struct Coordinator<C: Clock = SystemClock> {
    inner: Arc<Inner<C>>,
}

impl Coordinator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Coordinator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Clone for Coordinator<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> Coordinator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(WorkshopState::new()),
                signals: Signals::default(),
                events: EventBus::with_clock(clock),
            }),
        }
    }

    /// The bus every workshop event is published on
    pub fn events(&self) -> &EventBus<C> {
        &self.inner.events
    }

    /// Subscribe to workshop events matching the subscription's patterns
    pub fn subscribe(&self, subscription: Subscription) -> EventReceiver {
        self.inner.events.subscribe(subscription)
    }

    /// Counters and flags as of now
    pub fn snapshot(&self) -> WorkshopSnapshot {
        self.lock().snapshot()
    }

    /// A reindeer back from vacation joins the team and delivers.
    ///
    /// Waits for a place in the current round, then for Santa to start
    /// harnessing, then runs `delivery` without holding the lock and records
    /// the finished delivery. Cancellation is honoured only while waiting; a
    /// cancelled reindeer keeps whatever it already committed.
    pub async fn reindeer_arrive<F>(
        &self,
        reindeer: ReindeerId,
        delivery: F,
        cancel: &CancellationToken,
    ) -> Result<(), CoordinatorError>
    where
        F: Future<Output = ()>,
    {
        self.wait_until(Waiters::Stable, cancel, |state| {
            state
                .barrier_open()
                .then(|| self.execute(state, WorkshopInput::ReindeerReturned { reindeer }))
        })
        .await??;

        self.wait_until(Waiters::Sleigh, cancel, |state| {
            state.sleigh_ready().then(|| {
                let round = state.round();
                tracing::debug!(%reindeer, round, "harnessed");
                self.inner
                    .events
                    .publish(Event::ReindeerHarnessed { reindeer, round });
            })
        })
        .await?;

        delivery.await;

        let mut state = self.lock();
        self.execute(&mut state, WorkshopInput::ReindeerHitched { reindeer })?;
        Ok(())
    }

    /// An elf that needs help joins the next group and sees Santa.
    ///
    /// Waits for a place in a group that is not being served, then for Santa
    /// to start helping that group, then runs `consultation` without holding
    /// the lock and records that the elf was helped.
    pub async fn elf_arrive<F>(
        &self,
        elf: ElfId,
        consultation: F,
        cancel: &CancellationToken,
    ) -> Result<(), CoordinatorError>
    where
        F: Future<Output = ()>,
    {
        self.wait_until(Waiters::WaitingRoom, cancel, |state| {
            state
                .waiting_room_open()
                .then(|| self.execute(state, WorkshopInput::ElfQueued { elf }))
        })
        .await??;

        self.wait_until(Waiters::Consultation, cancel, |state| {
            state.consultation_open().then(|| {
                let group = state.group();
                tracing::debug!(%elf, group, "being helped");
                self.inner.events.publish(Event::ElfConsulting { elf, group });
            })
        })
        .await?;

        consultation.await;

        let mut state = self.lock();
        self.execute(&mut state, WorkshopInput::ElfHelped { elf })?;
        Ok(())
    }

    /// Santa's loop: sleep until a full team or a full group is waiting,
    /// serve it, repeat. Reindeer win whenever both are ready.
    ///
    /// Runs until `cancel` fires, then returns [`CoordinatorError::Cancelled`].
    pub async fn run_arbiter(&self, cancel: &CancellationToken) -> Result<(), CoordinatorError> {
        tracing::info!("santa is asleep");
        loop {
            let woken = self.inner.signals.santa.notified();

            if self.tick()? {
                continue;
            }

            tokio::select! {
                _ = woken => {}
                _ = cancel.cancelled() => {
                    tracing::info!("santa stopped");
                    return Err(CoordinatorError::Cancelled);
                }
            }
        }
    }

    /// Evaluate the arbiter's guards once. Returns whether a phase changed.
    pub fn tick(&self) -> Result<bool, CoordinatorError> {
        let mut state = self.lock();
        let before = state.phase();
        self.execute(&mut state, WorkshopInput::Tick)?;
        Ok(state.phase() != before)
    }

    fn lock(&self) -> MutexGuard<'_, WorkshopState> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Block on `queue` until `attempt` yields a value.
    ///
    /// The waiter registers before checking, so a broadcast issued after the
    /// check and before the wait is never missed.
    async fn wait_until<T>(
        &self,
        queue: Waiters,
        cancel: &CancellationToken,
        mut attempt: impl FnMut(&mut WorkshopState) -> Option<T>,
    ) -> Result<T, CoordinatorError> {
        let notify = self.inner.signals.queue(queue);
        loop {
            if cancel.is_cancelled() {
                return Err(CoordinatorError::Cancelled);
            }

            let woken = notify.notified();
            {
                let mut state = self.lock();
                if let Some(value) = attempt(&mut state) {
                    return Ok(value);
                }
            }

            tracing::trace!(%queue, "waiting");
            tokio::select! {
                _ = woken => {}
                _ = cancel.cancelled() => return Err(CoordinatorError::Cancelled),
            }
        }
    }

    /// Apply a transition to the locked state and carry out its effects
    fn execute(&self, state: &mut WorkshopState, input: WorkshopInput) -> Result<(), Rejection> {
        let (next, effects) = state.transition(input);
        *state = next;
        debug_assert_eq!(state.check_invariants(), Ok(()));

        for effect in effects {
            match effect {
                Effect::Emit(event) => {
                    log_event(&event);
                    self.inner.events.publish(event);
                }
                Effect::Wake(waiters) => self.inner.signals.queue(waiters).notify_waiters(),
                Effect::Reject(rejection) => {
                    tracing::warn!(%rejection, "input rejected");
                    return Err(rejection);
                }
            }
        }
        Ok(())
    }
}

fn log_event(event: &Event) {
    match event {
        Event::RoundStarted { round, .. } => {
            tracing::info!(round, "all reindeer back, preparing the sleigh")
        }
        Event::RoundFinished { round } => tracing::info!(round, "delivery finished"),
        Event::GroupStarted { group, elves } => {
            tracing::info!(group, ?elves, "helping a group of elves")
        }
        Event::GroupFinished { group, .. } => tracing::info!(group, "done helping elves"),
        other => tracing::debug!(event = other.name(), "workshop event"),
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
