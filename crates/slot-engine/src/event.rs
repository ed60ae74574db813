//! Event and slot value types consumed and produced by the engine.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque participant identifier, as issued by the calling service.
pub type UserId = u64;

/// A calendar event as seen by the engine: a time interval, a cancellation
/// flag, and the set of participants it occupies.
///
/// The interval is half-open, `[start, end)`. The engine does not enforce
/// `start < end`; an inverted event simply never blocks anything under the
/// half-open overlap rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub participant_ids: HashSet<UserId>,
}

/// A candidate free slot of exactly the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
