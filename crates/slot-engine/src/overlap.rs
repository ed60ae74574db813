//! Half-open interval overlap predicate.
//!
//! All intervals in this crate are half-open: `[start, end)`. Two intervals
//! that merely touch (one ends exactly when the other starts) do NOT overlap,
//! so a meeting ending at 10:00 never blocks a slot starting at 10:00.

use chrono::{DateTime, Utc};

/// Whether the half-open intervals `[a_start, a_end)` and `[b_start, b_end)`
/// overlap: `a_start < b_end && b_start < a_end`.
///
/// An inverted interval (`start >= end`) can only satisfy this when the other
/// interval strictly contains its reversed span; intervals that are inverted
/// and out of range are inert rather than rejected.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}
