//! # meeting-finder
//!
//! Finds every time-of-day interval in a single day during which a meeting can
//! be held, given the attendees' existing busy events.
//!
//! Slots that suit every attendee, mandatory and optional alike, are preferred.
//! When the optional attendees' calendars leave no room at all, the search falls
//! back to the mandatory attendees alone.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_finder::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_end(600, 660, false),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(30, ["alice"]);
//!
//! let slots = query(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![
//!         TimeRange::from_start_end(0, 600, false),
//!         TimeRange::from_start_end(660, 1440, false),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Half-open minute-of-day intervals
//! - [`event`] — Busy events and their attendees
//! - [`request`] — Meeting requests (duration, mandatory and optional attendees)
//! - [`query`] — The free-slot search
//! - [`input`] — Validated JSON input documents for callers
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod input;
pub mod query;
pub mod request;
pub mod time_range;

pub use error::SchedulerError;
pub use event::Event;
pub use input::QueryInput;
pub use query::{find_first_slot, find_meeting_slots, query, MeetingSlots, SlotTier};
pub use request::MeetingRequest;
pub use time_range::TimeRange;
