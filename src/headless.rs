//! Headless mode - JSON event output for scripting and E2E testing
//!
//! Runs the same update loop as the TUI without a terminal: the booking is
//! entered through messages, including the two-phase date dialog, and the
//! outcome is written to stdout as NDJSON (one JSON event per line).
//!
//! # Example Output
//!
//! ```json
//! {"event":"booking_added","name":"Alice","arrival_date":"2024-06-01","departure_date":"2024-06-05","nights":4,"timestamp":1717200000000}
//! {"event":"booking_rejected","reason":"Name cannot be empty","timestamp":1717200000000}
//! ```

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::io::{self, Write};

use innkeep_app::handler::update;
use innkeep_app::message::Message;
use innkeep_app::state::AppState;
use innkeep_core::prelude::*;
use innkeep_core::NoticeLevel;

/// Input for one non-interactive booking entry.
#[derive(Debug, Clone)]
pub struct HeadlessEntry {
    pub name: String,
    /// Arrival date as `YYYY-MM-DD`; omitted dates leave the draft range empty
    pub arrival: Option<String>,
    /// Departure date as `YYYY-MM-DD`
    pub departure: Option<String>,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Booking validated and appended to the store
    BookingAdded {
        name: String,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
        nights: i64,
        timestamp: i64,
    },

    /// Submission blocked; `reason` is the user-facing message when one was
    /// raised
    BookingRejected { reason: String, timestamp: i64 },

    /// Transient notice raised while processing
    Notice {
        level: String,
        message: String,
        timestamp: i64,
    },
}

/// Run one booking entry through the real update loop and report the outcome.
pub fn run(entry: HeadlessEntry) -> Result<()> {
    let arrival = parse_date(entry.arrival.as_deref())?;
    let departure = parse_date(entry.departure.as_deref())?;

    let mut state = AppState::new();
    process(&mut state, Message::OpenBookingForm);

    for c in entry.name.chars() {
        process(&mut state, Message::NameInput { c });
    }

    // The date dialog is the only writer of draft dates; drive it the same
    // way the TUI does. A partial pair never reaches the draft (the dialog
    // guards require both endpoints), so it is left untouched here too.
    if let (Some(arrival), Some(departure)) = (arrival, departure) {
        enter_range(&mut state, arrival, departure);
    }

    process(&mut state, Message::SubmitBooking);

    report(&state)
}

/// Drive the two-phase dialog: pick the start, advance, walk the cursor to
/// the end date, pick it, confirm.
fn enter_range(state: &mut AppState, arrival: NaiveDate, departure: NaiveDate) {
    state.open_date_dialog(arrival);

    process(state, Message::DateDialogPick);
    process(state, Message::DateDialogAdvance);

    let delta = (departure - arrival).num_days();
    let step = if delta >= 0 {
        Message::DateDialogNextDay
    } else {
        Message::DateDialogPrevDay
    };
    for _ in 0..delta.abs() {
        process(state, step.clone());
    }

    process(state, Message::DateDialogPick);
    process(state, Message::DateDialogConfirm);

    // An inverted range leaves the dialog open; dismiss it so the rejection
    // surfaces through the normal submission path.
    if state.date_dialog.is_some() {
        process(state, Message::DateDialogCancel);
    }
}

fn report(state: &AppState) -> Result<()> {
    let timestamp = Utc::now().timestamp_millis();

    for notice in state.notices.iter() {
        emit(&HeadlessEvent::Notice {
            level: level_name(notice.level).to_string(),
            message: notice.message.clone(),
            timestamp,
        })?;
    }

    match state.store.last() {
        Some(entry) => emit(&HeadlessEvent::BookingAdded {
            name: entry.name().to_string(),
            arrival_date: entry.arrival_date(),
            departure_date: entry.departure_date(),
            nights: entry.nights(),
            timestamp,
        }),
        None => {
            let reason = state
                .notices
                .latest()
                .map(|n| n.message.clone())
                .unwrap_or_else(|| "incomplete booking draft".to_string());
            emit(&HeadlessEvent::BookingRejected { reason, timestamp })
        }
    }
}

fn emit(event: &HeadlessEvent) -> Result<()> {
    let line = serde_json::to_string(event)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    Ok(())
}

fn process(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn parse_date(input: Option<&str>) -> Result<Option<NaiveDate>> {
    match input {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| Error::invalid_date(s)),
    }
}

fn level_name(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    }
}
