// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event name patterns and subscriptions

/// Pattern over colon-separated event names.
///
/// - `santa:round:started` matches exactly that name
/// - `elf:*` matches one segment: `elf:queued` but not `elf:group:formed`
/// - `santa:**` matches everything under `santa:`
/// - `*` or `**` alone match every event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventPattern(String);

impl EventPattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    /// Pattern matching every event
    pub fn all() -> Self {
        Self::new("**")
    }

    pub fn matches(&self, event_name: &str) -> bool {
        if self.0.is_empty() {
            return false;
        }
        if self.0 == "*" || self.0 == "**" {
            return true;
        }

        let pattern: Vec<&str> = self.0.split(':').collect();
        let name: Vec<&str> = event_name.split(':').collect();
        segments_match(&pattern, &name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn segments_match(pattern: &[&str], name: &[&str]) -> bool {
    match (pattern.split_first(), name.split_first()) {
        (None, None) => true,
        (Some((&"**", _)), _) => true,
        (Some((&"*", rest)), Some((_, name_rest))) => segments_match(rest, name_rest),
        (Some((p, rest)), Some((n, name_rest))) if p == n => segments_match(rest, name_rest),
        _ => false,
    }
}

/// Handle used to unsubscribe
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub String);

/// A named interest in one or more event patterns
#[derive(Clone, Debug)]
pub struct Subscription {
    pub id: SubscriberId,
    pub patterns: Vec<EventPattern>,
}

impl Subscription {
    pub fn new(id: impl Into<String>, patterns: Vec<EventPattern>) -> Self {
        Self {
            id: SubscriberId(id.into()),
            patterns,
        }
    }

    pub fn matches(&self, event_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(event_name))
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
