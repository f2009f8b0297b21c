//! End-to-end booking flow tests driven through the public update loop

use chrono::NaiveDate;

use innkeep_app::handler::update;
use innkeep_app::message::Message;
use innkeep_app::state::{AppState, UiMode};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn process(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn type_name(state: &mut AppState, name: &str) {
    for c in name.chars() {
        process(state, Message::NameInput { c });
    }
}

#[test]
fn complete_booking_is_stored_and_navigates_back() {
    let mut state = AppState::new();

    process(&mut state, Message::OpenBookingForm);
    type_name(&mut state, "Alice");

    // Two-phase range selection: 2024-06-01 .. 2024-06-05
    state.open_date_dialog(date(2024, 6, 1));
    process(&mut state, Message::DateDialogPick);
    process(&mut state, Message::DateDialogAdvance);
    for _ in 0..4 {
        process(&mut state, Message::DateDialogNextDay);
    }
    process(&mut state, Message::DateDialogPick);
    process(&mut state, Message::DateDialogConfirm);

    process(&mut state, Message::SubmitBooking);

    // Exactly one append with exactly the entered fields
    assert_eq!(state.store.len(), 1);
    let entry = state.store.last().unwrap();
    assert_eq!(entry.name(), "Alice");
    assert_eq!(entry.arrival_date(), date(2024, 6, 1));
    assert_eq!(entry.departure_date(), date(2024, 6, 5));

    // Navigation back to the home screen, draft gone
    assert_eq!(state.ui_mode, UiMode::Home);
    assert!(state.draft.is_none());
}

#[test]
fn empty_name_blocks_submission_with_one_notice() {
    let mut state = AppState::new();

    process(&mut state, Message::OpenBookingForm);
    process(&mut state, Message::SubmitBooking);

    assert!(state.store.is_empty());
    assert_eq!(state.ui_mode, UiMode::AddBooking);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices.latest().unwrap().message, "Name cannot be empty");
}

#[test]
fn missing_dates_block_submission_silently() {
    let mut state = AppState::new();

    process(&mut state, Message::OpenBookingForm);
    type_name(&mut state, "Bob");
    process(&mut state, Message::SubmitBooking);

    assert!(state.store.is_empty());
    assert!(state.notices.is_empty());
    assert_eq!(state.ui_mode, UiMode::AddBooking);
}

#[test]
fn inverted_range_keeps_dialog_open_and_draft_clean() {
    let mut state = AppState::new();

    process(&mut state, Message::OpenBookingForm);
    type_name(&mut state, "Alice");

    state.open_date_dialog(date(2024, 6, 10));
    process(&mut state, Message::DateDialogPick);
    process(&mut state, Message::DateDialogAdvance);
    for _ in 0..3 {
        process(&mut state, Message::DateDialogPrevDay);
    }
    process(&mut state, Message::DateDialogPick);
    process(&mut state, Message::DateDialogConfirm);

    assert_eq!(state.ui_mode, UiMode::DateRangeDialog);
    assert!(state
        .notices
        .latest()
        .unwrap()
        .message
        .contains("End date must be after start date"));

    let draft = state.draft.as_ref().unwrap();
    assert!(draft.arrival_date.is_none());
    assert!(draft.departure_date.is_none());
}

#[test]
fn cancelling_the_dialog_never_touches_the_draft() {
    let mut state = AppState::new();

    process(&mut state, Message::OpenBookingForm);
    state.open_date_dialog(date(2024, 6, 1));
    process(&mut state, Message::DateDialogPick);
    process(&mut state, Message::DateDialogCancel);

    let draft = state.draft.as_ref().unwrap();
    assert!(draft.arrival_date.is_none());
    assert!(draft.departure_date.is_none());
    assert_eq!(state.ui_mode, UiMode::AddBooking);

    // With a committed range, cancel from the end phase keeps it
    state
        .draft
        .as_mut()
        .unwrap()
        .set_range(date(2024, 6, 1), date(2024, 6, 5));
    state.open_date_dialog(date(2024, 7, 1));
    process(&mut state, Message::DateDialogAdvance);
    process(&mut state, Message::DateDialogNextWeek);
    process(&mut state, Message::DateDialogPick);
    process(&mut state, Message::DateDialogCancel);

    let draft = state.draft.as_ref().unwrap();
    assert_eq!(draft.arrival_date, Some(date(2024, 6, 1)));
    assert_eq!(draft.departure_date, Some(date(2024, 6, 5)));
}

#[test]
fn second_booking_appends_to_the_same_store() {
    let mut state = AppState::new();

    for (guest, start_day) in [("Alice", 1), ("Bob", 10)] {
        process(&mut state, Message::OpenBookingForm);
        type_name(&mut state, guest);
        state.open_date_dialog(date(2024, 6, start_day));
        process(&mut state, Message::DateDialogPick);
        process(&mut state, Message::DateDialogAdvance);
        process(&mut state, Message::DateDialogNextDay);
        process(&mut state, Message::DateDialogPick);
        process(&mut state, Message::DateDialogConfirm);
        process(&mut state, Message::SubmitBooking);
        assert_eq!(state.ui_mode, UiMode::Home);
    }

    assert_eq!(state.store.len(), 2);
    assert_eq!(state.store.entries()[0].name(), "Alice");
    assert_eq!(state.store.entries()[1].name(), "Bob");
}
