// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actor identities and the structural constants of the protocol

use serde::{Deserialize, Serialize};

/// Every round harnesses exactly this many reindeer.
pub const REINDEER_COUNT: usize = 9;

/// Elves are served in groups of exactly this size.
pub const ELF_GROUP_SIZE: usize = 3;

/// Identifier for a reindeer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReindeerId(pub u32);

impl std::fmt::Display for ReindeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reindeer-{}", self.0)
    }
}

impl From<u32> for ReindeerId {
    fn from(n: u32) -> Self {
        ReindeerId(n)
    }
}

/// Identifier for an elf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElfId(pub u32);

impl std::fmt::Display for ElfId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "elf-{}", self.0)
    }
}

impl From<u32> for ElfId {
    fn from(n: u32) -> Self {
        ElfId(n)
    }
}

/// The full reindeer team, numbered from 1
pub fn reindeer_team() -> impl Iterator<Item = ReindeerId> {
    (1..=REINDEER_COUNT as u32).map(ReindeerId)
}
