#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Slotweek Schedule
//!
//! Turns a painted weekly grid plus the form fields around it into a
//! validated schedule-creation request, and hands that request to a
//! [`ScheduleSubmitter`].
//!
//! # Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slotweek_core::{Day, SlotIndex};
//! use slotweek_editor::{PointerEvent, RecordingHost};
//! use slotweek_schedule::{AvailabilityForm, ScheduleBuilder};
//!
//! let fields = ScheduleBuilder::new()
//!     .with_organization("Chess Club")
//!     .with_facility(3)
//!     .with_validity(
//!         NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//!         NaiveDate::from_ymd_opt(2026, 6, 26).unwrap(),
//!     );
//! let mut form = AvailabilityForm::new(RecordingHost::new()).with_fields(fields);
//!
//! form.dispatch(PointerEvent::Down { day: Day::Monday, slot: SlotIndex::new(2).unwrap() });
//! form.dispatch(PointerEvent::Enter { day: Day::Monday, slot: SlotIndex::new(5).unwrap() });
//! form.dispatch(PointerEvent::Up);
//!
//! let request = form.draft().unwrap().to_request();
//! assert_eq!(request.schedules[0].rental_start_time, "09:00");
//! assert_eq!(request.schedules[0].rental_end_time, "11:00");
//! ```

pub mod builder;
pub mod draft;
pub mod error;
pub mod form;
pub mod payload;
pub mod submit;
pub mod types;

mod proptests;

pub use builder::ScheduleBuilder;
pub use draft::ScheduleDraft;
pub use error::{Error, Result, ValidationError};
pub use form::AvailabilityForm;
pub use payload::{CreateScheduleRequest, ScheduleEntry};
pub use submit::{MockSubmitter, ScheduleSubmitter, SubmissionReceipt};
pub use types::{FacilityId, ScheduleType};
