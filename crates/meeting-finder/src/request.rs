//! Meeting requests: how long, who must attend, and who would ideally attend.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// A request to find room for a meeting of `duration` minutes.
///
/// `attendees` are mandatory. `optional_attendees` are honoured only when at
/// least one slot suits everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    duration: u32,
    attendees: HashSet<String>,
    #[serde(default)]
    optional_attendees: HashSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(duration: u32, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
        }
    }

    /// Replace the optional attendee set.
    #[must_use]
    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single optional attendee.
    #[must_use]
    pub fn with_optional_attendee(mut self, attendee: impl Into<String>) -> Self {
        self.optional_attendees.insert(attendee.into());
        self
    }

    /// Requested length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &HashSet<String> {
        &self.optional_attendees
    }

    /// Reject requests the search treats as a caller precondition.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidDuration` for a zero-minute meeting.
    pub fn validate(&self) -> Result<()> {
        if self.duration == 0 {
            return Err(SchedulerError::InvalidDuration(self.duration));
        }
        Ok(())
    }
}
