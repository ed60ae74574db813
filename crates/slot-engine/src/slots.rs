//! The fixed-step free-slot scan.
//!
//! Filters the input down to the relevant events (not cancelled, sharing at
//! least one required participant, overlapping the window), then steps a
//! duration-sized candidate across the window on a fixed 30-minute grid and
//! keeps every candidate no relevant event overlaps.
//!
//! The 30-minute step is deliberately independent of the requested duration:
//! it keeps results aligned to conventional meeting-start boundaries at the
//! cost of missing windows that only exist off-grid. The scan starts the grid
//! at `window_start`, not at any canonical origin such as midnight.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::event::{Event, TimeSlot, UserId};
use crate::overlap::overlaps;

/// Fixed grid step, in minutes, by which the scan cursor advances.
pub const SCAN_STEP_MINUTES: i64 = 30;

/// Filter to the events that can block a slot for this query, sorted by start.
///
/// Sorting is for deterministic debugging output only; the per-candidate scan
/// checks every relevant event regardless of order.
fn relevant_events<'a>(
    events: &'a [Event],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    participant_ids: &HashSet<UserId>,
) -> Vec<&'a Event> {
    let mut relevant: Vec<&Event> = events
        .iter()
        .filter(|e| {
            !e.cancelled
                && e.participant_ids.iter().any(|id| participant_ids.contains(id))
                && overlaps(e.start, e.end, window_start, window_end)
        })
        .collect();

    relevant.sort_by_key(|e| (e.start, e.end));
    relevant
}

/// Find all candidate meeting slots of exactly `duration` in
/// `[window_start, window_end)` during which every required participant is
/// free, sampled on a fixed 30-minute grid starting at `window_start`.
///
/// An event blocks a candidate when its interval half-open-overlaps the
/// candidate; touching endpoints do not block. Cancelled events and events
/// sharing no participant with `participant_ids` never block. With an empty
/// `participant_ids`, no event is relevant and every grid candidate is free.
///
/// The function is total: a non-positive `duration`, an inverted window, or a
/// duration longer than the window all yield an empty result rather than an
/// error. Callers that need to distinguish "malformed query" from "no slots"
/// validate first via [`crate::SlotQuery::validate`].
pub fn find_free_slots(
    events: &[Event],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration: Duration,
    participant_ids: &HashSet<UserId>,
) -> Vec<TimeSlot> {
    if duration <= Duration::zero() {
        return Vec::new();
    }

    let relevant = relevant_events(events, window_start, window_end, participant_ids);
    let step = Duration::minutes(SCAN_STEP_MINUTES);

    let mut slots = Vec::new();
    let mut current = window_start;

    while current < window_end {
        // Near the end of the representable datetime range these additions
        // overflow; no further candidate can fit, so the scan just stops.
        let Some(candidate_end) = current.checked_add_signed(duration) else {
            break;
        };
        if candidate_end > window_end {
            break;
        }

        let free = !relevant
            .iter()
            .any(|e| overlaps(e.start, e.end, current, candidate_end));

        if free {
            slots.push(TimeSlot {
                start: current,
                end: candidate_end,
            });
        }

        current = match current.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }

    slots
}

/// Find the first free slot for the query, or `None` if the window has none.
///
/// Delegates to [`find_free_slots`]; the result is the chronologically first
/// grid candidate that is free.
pub fn find_first_free_slot(
    events: &[Event],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration: Duration,
    participant_ids: &HashSet<UserId>,
) -> Option<TimeSlot> {
    find_free_slots(events, window_start, window_end, duration, participant_ids)
        .into_iter()
        .next()
}
