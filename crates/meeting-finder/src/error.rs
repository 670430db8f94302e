//! Error types for meeting-finder input validation.
//!
//! The search itself never fails. These errors come from the validating
//! constructors and from parsing input documents.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid time range [{start}, {end}): bounds must satisfy 0 <= start < end <= 1440")]
    InvalidTimeRange { start: u32, end: u32 },

    #[error("Invalid clock time: {0}")]
    InvalidClock(String),

    #[error("Invalid meeting duration: {0} minutes (must be greater than zero)")]
    InvalidDuration(u32),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
