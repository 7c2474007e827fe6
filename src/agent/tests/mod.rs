//! Unit tests for the agent module.
//!
//! Tests are organised by layer: domain behaviour, the search pipeline,
//! validation rules, and service orchestration.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

mod search_tests;

/// Clock pinned to a fixed instant.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses an RFC 3339 instant for fixtures.
pub(crate) fn instant(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid RFC 3339 instant")
}
