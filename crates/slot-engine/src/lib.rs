//! # slot-engine
//!
//! Deterministic free-slot discovery over calendar event sets.
//!
//! Given the events that might block a group of participants, a search window,
//! and a desired meeting duration, the engine computes the ordered list of
//! candidate time windows in which all required participants are simultaneously
//! free. It is a pure, synchronous computation over read-only inputs: the
//! caller (an HTTP service, a CLI, a test) fetches the candidate events and
//! hands them in as a slice.
//!
//! ## Modules
//!
//! - [`event`] — event and slot value types
//! - [`overlap`] — half-open interval overlap predicate
//! - [`slots`] — the fixed-step free-slot scan
//! - [`query`] — query value object with upfront validation
//! - [`error`] — error types

pub mod error;
pub mod event;
pub mod overlap;
pub mod query;
pub mod slots;

pub use error::SlotError;
pub use event::{Event, TimeSlot, UserId};
pub use query::SlotQuery;
pub use slots::{find_first_free_slot, find_free_slots, SCAN_STEP_MINUTES};
