//! Error types for slot-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("window start {start} is not before window end {end}")]
    InvertedWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("duration must be positive, got {0} minutes")]
    NonPositiveDuration(i64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
