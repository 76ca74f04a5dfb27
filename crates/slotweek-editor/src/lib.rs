#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Slotweek Editor
//!
//! Turns click-and-drag gestures on the weekly availability grid into writes
//! on a [`SlotBitmap`](slotweek_core::SlotBitmap).
//!
//! # Usage
//!
//! ```rust
//! use slotweek_core::{compress_day, Day, SlotIndex};
//! use slotweek_editor::{RecordingHost, SelectionController};
//!
//! let mut editor = SelectionController::new(RecordingHost::new());
//! editor.begin(Day::Monday, SlotIndex::new(2).unwrap());
//! editor.extend(Day::Monday, SlotIndex::new(5).unwrap());
//! editor.end();
//!
//! let ranges = compress_day(editor.bitmap(), Day::Monday);
//! assert_eq!(ranges[0].to_string(), "09:00 – 11:00");
//! ```

pub mod controller;
pub mod error;
pub mod event;
pub mod host;
pub mod policy;

mod proptests;

pub use controller::{DragMode, DragSession, DragState, SelectionController};
pub use error::{Error, Result};
pub use event::PointerEvent;
pub use host::{GridHost, ListenerId, RecordingHost};
pub use policy::ExtendPolicy;
