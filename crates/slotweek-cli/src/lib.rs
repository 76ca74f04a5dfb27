//! # slotweek-cli
//!
//! Headless host for the weekly availability editor.
//!
//! Recorded pointer events stand in for a live grid view: they are replayed
//! against [`AvailabilityForm`](slotweek_schedule::AvailabilityForm) with a
//! [`RecordingHost`](slotweek_editor::RecordingHost), and the result is
//! printed as a preview or as the schedule-creation request JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod events;
pub mod form_file;

pub use cli::{Cli, Command, ConfigAction};
pub use config::SlotweekConfig;
pub use error::{Error, Result};
