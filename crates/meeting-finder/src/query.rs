//! Find every free slot in the day that can hold a requested meeting.
//!
//! Two free lists start out as the whole day. One tracks time that suits the
//! mandatory attendees; the other also respects the optional attendees. Each
//! relevant event is subtracted from the lists it affects, and any free piece
//! shorter than the requested duration is dropped on the spot. The everyone
//! list wins when it still has a slot; otherwise the mandatory list is returned.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// Which set of attendees the returned slots were computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotTier {
    /// Slots suit mandatory and optional attendees alike.
    Everyone,
    /// Optional attendees left no room; slots suit the mandatory attendees only.
    MandatoryOnly,
}

/// Result of a meeting search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSlots {
    pub tier: SlotTier,
    /// Disjoint free ranges sorted by start, each at least the requested duration.
    pub slots: Vec<TimeRange>,
}

/// Find the free slots for `request` given the attendees' busy `events`.
///
/// Returns an empty list when no slot exists. The result does not depend on
/// the order of `events`.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    find_meeting_slots(events, request).slots
}

/// Like [`query`], but also reports whether optional attendees were honoured.
pub fn find_meeting_slots(events: &[Event], request: &MeetingRequest) -> MeetingSlots {
    let min_duration = request.duration();
    if min_duration > TimeRange::WHOLE_DAY.duration() {
        debug!(min_duration, "requested duration exceeds a whole day");
        return MeetingSlots {
            tier: SlotTier::MandatoryOnly,
            slots: Vec::new(),
        };
    }

    let mut free_mandatory = vec![TimeRange::WHOLE_DAY];
    let mut free_all = vec![TimeRange::WHOLE_DAY];

    for event in events {
        let hits_mandatory = event.involves_any(request.attendees());
        let hits_optional = event.involves_any(request.optional_attendees());

        if !hits_mandatory && !hits_optional {
            trace!(title = event.title(), "event has no requested attendees; skipping");
            continue;
        }

        let busy = event.when();
        if hits_mandatory {
            free_mandatory = subtract(free_mandatory, busy, min_duration);
        }
        free_all = subtract(free_all, busy, min_duration);
    }

    if free_all.is_empty() {
        debug!(
            slots = free_mandatory.len(),
            "no slot suits optional attendees; falling back to mandatory attendees"
        );
        MeetingSlots {
            tier: SlotTier::MandatoryOnly,
            slots: free_mandatory,
        }
    } else {
        debug!(slots = free_all.len(), "found slots for every attendee");
        MeetingSlots {
            tier: SlotTier::Everyone,
            slots: free_all,
        }
    }
}

/// The earliest slot that fits `request`, if any.
///
/// Delegates to [`find_meeting_slots`], so the everyone-first preference applies.
pub fn find_first_slot(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    find_meeting_slots(events, request).slots.into_iter().next()
}

/// Remove `busy` from every range in `free`, producing a new free list.
///
/// Pieces left before and after `busy` are kept only if they can still hold
/// `min_duration` minutes. Input order is preserved, so a sorted list stays
/// sorted.
fn subtract(free: Vec<TimeRange>, busy: TimeRange, min_duration: u32) -> Vec<TimeRange> {
    let mut remaining = Vec::with_capacity(free.len() + 1);

    for slot in free {
        if !busy.overlaps(&slot) {
            remaining.push(slot);
            continue;
        }
        if busy.contains(&slot) {
            continue;
        }

        // Either `busy` sits strictly inside `slot` (two pieces) or it clips
        // one edge (one piece).
        if slot.start() < busy.start() {
            keep_if_long_enough(&mut remaining, slot.start(), busy.start(), min_duration);
        }
        if busy.end() < slot.end() {
            keep_if_long_enough(&mut remaining, busy.end(), slot.end(), min_duration);
        }
    }

    remaining
}

fn keep_if_long_enough(out: &mut Vec<TimeRange>, start: u32, end: u32, min_duration: u32) {
    if end - start >= min_duration {
        out.push(TimeRange::from_start_end(start, end, false));
    }
}
