//! What the painted grid turns into on the wire.

use crate::common::{blank_form, click, paint};
use slotweek_core::Day;
use slotweek_schedule::CreateScheduleRequest;

#[test]
fn test_two_monday_blocks() {
    let mut form = blank_form();
    paint(&mut form, Day::Monday, 2, 5);
    paint(&mut form, Day::Monday, 10, 13);

    assert_eq!(
        form.preview(),
        vec!["MONDAY: 09:00 – 11:00, 13:00 – 15:00".to_string()]
    );

    let request = form.draft().unwrap().to_request();
    let json: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "organization": "Chess Club",
            "scheduleType": "CLUB",
            "facilityId": 3,
            "schedules": [
                { "dayOfWeek": "MONDAY", "rentalStartTime": "09:00", "rentalEndTime": "11:00" },
                { "dayOfWeek": "MONDAY", "rentalStartTime": "13:00", "rentalEndTime": "15:00" }
            ],
            "validStartDate": "2026-03-02",
            "validEndDate": "2026-06-26"
        })
    );
}

#[test]
fn test_last_slot_closes_at_end_of_day() {
    let mut form = blank_form();
    paint(&mut form, Day::Saturday, 24, 27);

    let request = form.draft().unwrap().to_request();
    assert_eq!(request.schedules.len(), 1);
    assert_eq!(request.schedules[0].rental_start_time, "20:00");
    assert_eq!(request.schedules[0].rental_end_time, "22:00");
}

#[test]
fn test_whole_day_is_one_entry() {
    let mut form = blank_form();
    paint(&mut form, Day::Sunday, 0, 27);

    let entries = form.draft().unwrap().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].rental_start_time, "08:00");
    assert_eq!(entries[0].rental_end_time, "22:00");
}

#[test]
fn test_days_listed_monday_first() {
    let mut form = blank_form();
    click(&mut form, Day::Sunday, 0);
    click(&mut form, Day::Wednesday, 4);
    click(&mut form, Day::Monday, 27);

    let days: Vec<Day> = form
        .draft()
        .unwrap()
        .entries()
        .iter()
        .map(|e| e.day_of_week)
        .collect();
    assert_eq!(days, vec![Day::Monday, Day::Wednesday, Day::Sunday]);
}

#[test]
fn test_deselect_splits_block() {
    let mut form = blank_form();
    paint(&mut form, Day::Tuesday, 0, 7);
    paint(&mut form, Day::Tuesday, 3, 4);

    let rendered: Vec<String> = form
        .draft()
        .unwrap()
        .ranges(Day::Tuesday)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["08:00 – 09:30", "10:30 – 12:00"]);
}

#[test]
fn test_reopen_stored_request() {
    let json = r#"{
        "organization": "Choir",
        "scheduleType": "MEETING",
        "facilityId": 8,
        "schedules": [
            { "dayOfWeek": "FRIDAY", "rentalStartTime": "18:30", "rentalEndTime": "20:00" }
        ],
        "validStartDate": "2026-01-05",
        "validEndDate": "2026-02-05"
    }"#;
    let request = CreateScheduleRequest::from_json(json).unwrap();
    let mut form = slotweek_schedule::AvailabilityForm::from_request(
        slotweek_editor::RecordingHost::new(),
        &request,
    )
    .unwrap();
    assert_eq!(form.preview(), vec!["FRIDAY: 18:30 – 20:00".to_string()]);

    // extend the block by one slot and rebuild
    click(&mut form, Day::Friday, 24);
    let rebuilt = form.draft().unwrap().to_request();
    assert_eq!(rebuilt.schedules[0].rental_end_time, "20:30");
    assert_eq!(rebuilt.organization, "Choir");
}
