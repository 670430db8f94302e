//! Half-open time-of-day intervals measured in minutes from midnight.
//!
//! A [`TimeRange`] covers `[start, end)` with `0 <= start < end <= 1440`.
//! Ranges that touch end-to-start do not overlap.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// Minutes in one day; also the exclusive end of [`TimeRange::WHOLE_DAY`].
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// An immutable `[start, end)` interval within a single day.
///
/// Ranges order by start, then by duration. Since both share a start when the
/// tie-break applies, comparing ends gives the same result, which is what the
/// derived ordering does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: u32 = 0;
    /// Last minute of the day, inclusive.
    pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;
    /// `[00:00, 24:00)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: 0,
        end: MINUTES_PER_DAY,
    };

    /// Build a range from its start and end.
    ///
    /// When `inclusive` is true, `end` names the last minute inside the range
    /// and the stored exclusive bound is `end + 1`.
    ///
    /// Bounds are a caller precondition; use [`TimeRange::try_from_start_end`]
    /// for untrusted input.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Self {
        let end = if inclusive { end + 1 } else { end };
        debug_assert!(
            start < end && end <= MINUTES_PER_DAY,
            "invalid time range [{start}, {end})"
        );
        Self { start, end }
    }

    /// Build a range starting at `start` that lasts `duration` minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Self {
        Self::from_start_end(start, start + duration, false)
    }

    /// Checked version of [`TimeRange::from_start_end`].
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidTimeRange` if the range would be empty,
    /// inverted, or extend past the end of the day.
    pub fn try_from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let exclusive_end = if inclusive { end.saturating_add(1) } else { end };
        if start >= exclusive_end || exclusive_end > MINUTES_PER_DAY {
            return Err(SchedulerError::InvalidTimeRange {
                start,
                end: exclusive_end,
            });
        }
        Ok(Self {
            start,
            end: exclusive_end,
        })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// True iff the two ranges share at least one minute.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff `other` lies entirely inside `self`.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True iff `minute` falls inside the range.
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Order by end, then by start.
    pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end).then(a.start.cmp(&b.start))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            format_clock(self.start),
            format_clock(self.end)
        )
    }
}

/// Convert a wall-clock hour and minute into minutes from midnight.
pub fn minutes_of_day(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

/// Parse an `HH:MM` clock string into minutes from midnight.
///
/// `24:00` is accepted and denotes the end of the day.
///
/// # Errors
/// Returns `SchedulerError::InvalidClock` for anything else that is not a
/// valid 24-hour clock time.
pub fn parse_clock(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|e| SchedulerError::InvalidClock(format!("'{}': {}", s, e)))?;
    Ok(minutes_of_day(time.hour(), time.minute()))
}

/// Render minutes from midnight as `HH:MM`; 1440 renders as `24:00`.
pub fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// ---------------------------------------------------------------------------
// Deserialization: bounds may be minute counts or "HH:MM" strings
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum ClockValue {
    Minutes(u32),
    Clock(String),
}

impl ClockValue {
    fn to_minutes(&self) -> Result<u32> {
        match self {
            ClockValue::Minutes(m) => Ok(*m),
            ClockValue::Clock(s) => parse_clock(s),
        }
    }
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: ClockValue,
    end: ClockValue,
    #[serde(default)]
    inclusive: bool,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = SchedulerError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::try_from_start_end(raw.start.to_minutes()?, raw.end.to_minutes()?, raw.inclusive)
    }
}
