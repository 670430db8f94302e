//! JSON input documents for front ends that drive the search.
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "when": {"start": "09:00", "end": "09:30"}, "attendees": ["alice"]}
//!   ],
//!   "request": {"duration": 30, "attendees": ["alice"], "optional_attendees": ["carol"]}
//! }
//! ```
//!
//! Time bounds may be minute counts or `HH:MM` strings. Every range is checked
//! while parsing and the request duration is checked afterwards, so a parsed
//! [`QueryInput`] always satisfies the search's preconditions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::Event;
use crate::query::{self, MeetingSlots};
use crate::request::MeetingRequest;

/// A complete search: the busy events and the meeting to place among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl QueryInput {
    /// Parse and validate an input document.
    ///
    /// # Errors
    /// Returns `SchedulerError::Json` for malformed JSON or invalid time ranges,
    /// and `SchedulerError::InvalidDuration` for a zero-minute request.
    pub fn from_json(json: &str) -> Result<Self> {
        let input: QueryInput = serde_json::from_str(json)?;
        input.request.validate()?;
        Ok(input)
    }

    /// Run the search over this input.
    pub fn run(&self) -> MeetingSlots {
        query::find_meeting_slots(&self.events, &self.request)
    }
}
