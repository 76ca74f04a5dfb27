//! Recorded pointer-event files and their replay.
//!
//! An event file is a JSON array:
//!
//! ```json
//! [
//!   { "kind": "down", "day": "MONDAY", "slot": 2 },
//!   { "kind": "enter", "day": "MONDAY", "slot": 5 },
//!   { "kind": "up" }
//! ]
//! ```

use slotweek_editor::{GridHost, PointerEvent};
use slotweek_schedule::AvailabilityForm;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads and parses an event file.
pub fn load_events(path: &Path) -> Result<Vec<PointerEvent>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    parse_events(&content).map_err(|e| Error::parse(path, e))
}

/// Parses event JSON.
pub fn parse_events(json: &str) -> std::result::Result<Vec<PointerEvent>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Feeds `events` to the form in order.
///
/// A recording that stops mid-drag is closed as if the pointer had been
/// released outside the grid.
pub fn replay<H: GridHost>(form: &mut AvailabilityForm<H>, events: &[PointerEvent]) {
    for event in events {
        form.dispatch(*event);
    }
    if form.editor().is_dragging() {
        tracing::debug!("Event stream ended mid-drag; cancelling");
        form.editor_mut().cancel();
    }
    tracing::debug!(
        events = events.len(),
        selected = form.bitmap().selected_count(),
        "Events replayed"
    );
}
