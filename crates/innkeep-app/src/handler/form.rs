//! Booking form and submission handlers

use innkeep_core::prelude::*;
use innkeep_core::{BookingEntry, Notice};

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.open_booking_form();
    UpdateResult::none()
}

pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    state.request_cancel_form();
    UpdateResult::none()
}

pub fn handle_confirm_discard(state: &mut AppState) -> UpdateResult {
    state.confirm_discard();
    UpdateResult::none()
}

pub fn handle_cancel_discard(state: &mut AppState) -> UpdateResult {
    state.cancel_discard();
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.form_focus = state.form_focus.next();
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.form_focus = state.form_focus.prev();
    UpdateResult::none()
}

pub fn handle_name_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(draft) = state.draft.as_mut() {
        draft.name.push(c);
    }
    UpdateResult::none()
}

pub fn handle_name_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(draft) = state.draft.as_mut() {
        draft.name.pop();
    }
    UpdateResult::none()
}

pub fn handle_name_clear(state: &mut AppState) -> UpdateResult {
    if let Some(draft) = state.draft.as_mut() {
        draft.name.clear();
    }
    UpdateResult::none()
}

/// Validate the draft and commit it to the store.
///
/// - Blank name: one "name required" notice per attempt, no entry produced.
/// - Missing date(s): no entry and no notice; the empty range field is the
///   only signal.
/// - Otherwise: build the entry, append it to the store and navigate back.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(draft) = state.draft.as_mut() else {
        return UpdateResult::none();
    };

    draft.name_invalid = draft.name.trim().is_empty();
    if draft.name_invalid {
        state.notices.push(Notice::warning(Error::EmptyName.to_string()));
        return UpdateResult::none();
    }

    let (Some(arrival), Some(departure)) = (draft.arrival_date, draft.departure_date) else {
        debug!("submission skipped: incomplete date range");
        return UpdateResult::none();
    };

    match BookingEntry::new(draft.name.clone(), arrival, departure) {
        Ok(entry) => {
            let guest = entry.name().to_string();
            match state.store.append(entry) {
                Ok(()) => {
                    state.notices.push(Notice::info(format!("Booking added for {guest}")));
                    state.close_booking_form();
                }
                Err(err) => {
                    warn!("booking rejected: {}", err);
                    state.notices.push(Notice::error(err.to_string()));
                }
            }
        }
        // Unreachable with the guards above, but the constructor owns the
        // invariants; surface rather than unwrap.
        Err(err) => {
            state.notices.push(Notice::warning(err.to_string()));
        }
    }

    UpdateResult::none()
}
