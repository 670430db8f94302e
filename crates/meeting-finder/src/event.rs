//! Busy events: a time range plus the attendees it occupies.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An existing event on the attendees' calendars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    title: String,
    when: TimeRange,
    attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    /// True iff any of `people` attends this event.
    pub fn involves_any(&self, people: &HashSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}
