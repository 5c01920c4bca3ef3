// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pacing of the simulated work
//!
//! The coordinator treats the time an actor spends on vacation, delivering,
//! making toys or being helped as opaque. A [`Pacer`] decides how long each
//! of those takes.

use crate::config::{DelayRange, SimConfig};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Something an actor spends time on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    /// A reindeer away between rounds
    Vacation,
    /// A harnessed reindeer delivering toys
    Delivery,
    /// An elf working until it needs help
    ToyMaking,
    /// An elf being helped by Santa
    Consultation,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Vacation,
        Activity::Delivery,
        Activity::ToyMaking,
        Activity::Consultation,
    ];
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activity::Vacation => write!(f, "vacation"),
            Activity::Delivery => write!(f, "delivery"),
            Activity::ToyMaking => write!(f, "toy_making"),
            Activity::Consultation => write!(f, "consultation"),
        }
    }
}

/// Decides how long each activity takes
#[async_trait]
pub trait Pacer: Send + Sync + 'static {
    /// Duration of the next occurrence of `activity`
    fn delay(&self, activity: Activity) -> Duration;

    /// Spend the time `activity` takes
    async fn pace(&self, activity: Activity) {
        let delay = self.delay(activity);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Draws each delay uniformly from the configured range
#[derive(Debug, Clone)]
pub struct RandomPacer {
    config: SimConfig,
}

impl RandomPacer {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Pacer for RandomPacer {
    fn delay(&self, activity: Activity) -> Duration {
        sample(self.config.range(activity))
    }
}

fn sample(range: DelayRange) -> Duration {
    if range.min >= range.max {
        return range.min;
    }
    rand::rng().random_range(range.min..=range.max)
}

/// Every activity completes immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

#[async_trait]
impl Pacer for InstantPacer {
    fn delay(&self, _activity: Activity) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
#[path = "pacing_tests.rs"]
mod tests;
