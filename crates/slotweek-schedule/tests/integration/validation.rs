//! Form validation as seen through the availability form.

use crate::common::{blank_form, date, paint};
use slotweek_core::Day;
use slotweek_schedule::{ScheduleType, ValidationError};

#[test]
fn test_each_missing_field_reported() {
    let mut form = blank_form();
    paint(&mut form, Day::Monday, 0, 1);

    form.fields_mut().set_valid_end_date(None);
    assert_eq!(form.draft().unwrap_err(), ValidationError::MissingEndDate);

    form.fields_mut().set_valid_start_date(None);
    assert_eq!(form.draft().unwrap_err(), ValidationError::MissingStartDate);

    form.fields_mut().set_facility(None);
    assert_eq!(form.draft().unwrap_err(), ValidationError::MissingFacility);

    form.fields_mut().set_organization(" ");
    assert_eq!(form.draft().unwrap_err(), ValidationError::EmptyOrganization);
}

#[test]
fn test_equal_dates_rejected() {
    let mut form = blank_form();
    paint(&mut form, Day::Monday, 0, 1);
    form.fields_mut().set_valid_start_date(Some(date(2026, 6, 26)));

    let err = form.draft().unwrap_err();
    assert_eq!(err.field(), "validEndDate");
}

#[test]
fn test_schedule_type_flows_into_request() {
    let mut form = blank_form();
    paint(&mut form, Day::Monday, 0, 1);
    form.fields_mut().set_schedule_type("seminar".parse::<ScheduleType>().unwrap());

    let request = form.draft().unwrap().to_request();
    assert_eq!(request.schedule_type, ScheduleType::Seminar);
}

#[test]
fn test_draft_does_not_disturb_form() {
    let mut form = blank_form();
    paint(&mut form, Day::Monday, 0, 1);
    let before = form.bitmap().clone();

    let _ = form.draft();
    let _ = form.draft();
    assert_eq!(form.bitmap(), &before);
    assert!(!form.editor().is_dragging());
}
