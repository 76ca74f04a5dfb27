//! Pointer events delivered by the grid view.

use serde::{Deserialize, Serialize};
use slotweek_core::{Day, SlotIndex};
use std::fmt;

/// A pointer event on the availability grid.
///
/// `Down` and `Enter` carry the cell under the pointer. `Up` is the matching
/// release; `Leave` is the window-level release-or-leave signal that must end
/// a drag even when the pointer is outside every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Pointer pressed on a cell.
    Down {
        /// Row of the cell
        day: Day,
        /// Column of the cell
        slot: SlotIndex,
    },

    /// Pointer moved into a cell.
    Enter {
        /// Row of the cell
        day: Day,
        /// Column of the cell
        slot: SlotIndex,
    },

    /// Pointer released over the grid.
    Up,

    /// Global release or pointer left the window.
    Leave,
}

impl PointerEvent {
    /// Short lower-case name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PointerEvent::Down { .. } => "down",
            PointerEvent::Enter { .. } => "enter",
            PointerEvent::Up => "up",
            PointerEvent::Leave => "leave",
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerEvent::Down { day, slot } | PointerEvent::Enter { day, slot } => {
                write!(f, "{} {day}@{slot}", self.kind())
            }
            PointerEvent::Up | PointerEvent::Leave => f.write_str(self.kind()),
        }
    }
}
