//! WASM bindings for meeting-finder.
//!
//! Exposes the meeting search to JavaScript via `wasm-bindgen`. Input and
//! output cross the boundary as JSON strings; the input document shape is the
//! one accepted by [`meeting_finder::QueryInput`].
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-finder-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-finder-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_finder_wasm.wasm
//! ```

use meeting_finder::time_range::format_clock;
use meeting_finder::{QueryInput, SlotTier, TimeRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto {
    start: String,
    end: String,
    start_minute: u32,
    end_minute: u32,
    duration_minutes: u32,
}

impl From<&TimeRange> for SlotDto {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_clock(range.start()),
            end: format_clock(range.end()),
            start_minute: range.start(),
            end_minute: range.end(),
            duration_minutes: range.duration(),
        }
    }
}

#[derive(Serialize)]
struct SlotsDto {
    tier: SlotTier,
    slots: Vec<SlotDto>,
}

// ---------------------------------------------------------------------------
// Shared plumbing (plain Rust so it can be tested off-wasm)
// ---------------------------------------------------------------------------

fn meeting_times_json(input_json: &str) -> Result<String, String> {
    let input = QueryInput::from_json(input_json).map_err(|e| e.to_string())?;
    let result = input.run();
    let dto = SlotsDto {
        tier: result.tier,
        slots: result.slots.iter().map(SlotDto::from).collect(),
    };
    serde_json::to_string(&dto).map_err(|e| format!("Serialization error: {}", e))
}

fn first_meeting_time_json(input_json: &str) -> Result<String, String> {
    let input = QueryInput::from_json(input_json).map_err(|e| e.to_string())?;
    let first = input.run().slots.first().map(SlotDto::from);
    serde_json::to_string(&first).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every free slot for the meeting described by `input_json`.
///
/// Returns a JSON string `{"tier": ..., "slots": [...]}` where each slot has
/// `start`/`end` as `HH:MM`, the same bounds in minutes, and `duration_minutes`.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(input_json: &str) -> Result<String, JsValue> {
    meeting_times_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Find the earliest free slot for the meeting described by `input_json`.
///
/// Returns a JSON slot object, or `null` when no slot exists.
#[wasm_bindgen(js_name = "findFirstMeetingTime")]
pub fn find_first_meeting_time(input_json: &str) -> Result<String, JsValue> {
    first_meeting_time_json(input_json).map_err(|e| JsValue::from_str(&e))
}
