//! Query value object with upfront validation.
//!
//! The scan itself never fails; it degrades to an empty result for
//! unsatisfiable or ill-formed inputs. A caller that needs to report
//! "malformed query" separately from "no slots found" builds a [`SlotQuery`]
//! and calls [`SlotQuery::validate`] before running the scan.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::event::{Event, TimeSlot, UserId};
use crate::slots;

/// Free-slot search parameters as received from a calling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuery {
    /// Start of the search window (UTC).
    pub window_start: DateTime<Utc>,
    /// End of the search window (UTC).
    pub window_end: DateTime<Utc>,
    /// Requested meeting duration in minutes.
    pub duration_minutes: i64,
    /// Required attendees; empty means no event can block a slot.
    #[serde(default)]
    pub participant_ids: HashSet<UserId>,
}

impl SlotQuery {
    /// Check that the query can produce a non-trivial result.
    ///
    /// # Errors
    /// Returns `SlotError::NonPositiveDuration` for a zero or negative
    /// duration, and `SlotError::InvertedWindow` when the window start is not
    /// strictly before its end.
    pub fn validate(&self) -> Result<()> {
        if self.duration_minutes <= 0 {
            return Err(SlotError::NonPositiveDuration(self.duration_minutes));
        }
        if self.window_start >= self.window_end {
            return Err(SlotError::InvertedWindow {
                start: self.window_start,
                end: self.window_end,
            });
        }
        Ok(())
    }

    /// The requested duration as a chrono `Duration`.
    ///
    /// Saturates at `Duration::MAX` for minute counts beyond chrono's range;
    /// the scan then finds no fitting candidate instead of panicking.
    pub fn duration(&self) -> Duration {
        Duration::try_minutes(self.duration_minutes).unwrap_or(Duration::MAX)
    }

    /// Run the free-slot scan for this query over the given events.
    pub fn find_free_slots(&self, events: &[Event]) -> Vec<TimeSlot> {
        slots::find_free_slots(
            events,
            self.window_start,
            self.window_end,
            self.duration(),
            &self.participant_ids,
        )
    }

    /// First free slot for this query, or `None`.
    pub fn find_first_free_slot(&self, events: &[Event]) -> Option<TimeSlot> {
        slots::find_first_free_slot(
            events,
            self.window_start,
            self.window_end,
            self.duration(),
            &self.participant_ids,
        )
    }
}
