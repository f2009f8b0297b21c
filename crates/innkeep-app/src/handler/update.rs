//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{date_dialog, form, keys::handle_key, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.notices.expire();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Booking Form Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenBookingForm => form::handle_open(state),

        Message::CancelBookingForm => form::handle_cancel(state),

        Message::ConfirmDiscard => form::handle_confirm_discard(state),

        Message::CancelDiscard => form::handle_cancel_discard(state),

        Message::FormFocusNext => form::handle_focus_next(state),

        Message::FormFocusPrev => form::handle_focus_prev(state),

        Message::NameInput { c } => form::handle_name_input(state, c),

        Message::NameBackspace => form::handle_name_backspace(state),

        Message::NameClear => form::handle_name_clear(state),

        Message::SubmitBooking => form::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Date Dialog Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDateDialog => date_dialog::handle_open(state),

        Message::DateDialogPick => date_dialog::handle_pick(state),

        Message::DateDialogAdvance => date_dialog::handle_advance(state),

        Message::DateDialogConfirm => date_dialog::handle_confirm(state),

        Message::DateDialogCancel => date_dialog::handle_cancel(state),

        Message::DateDialogPrevDay => date_dialog::handle_cursor(state, |d| d.cursor_prev_day()),

        Message::DateDialogNextDay => date_dialog::handle_cursor(state, |d| d.cursor_next_day()),

        Message::DateDialogPrevWeek => date_dialog::handle_cursor(state, |d| d.cursor_prev_week()),

        Message::DateDialogNextWeek => date_dialog::handle_cursor(state, |d| d.cursor_next_week()),

        Message::DateDialogPrevMonth => {
            date_dialog::handle_cursor(state, |d| d.cursor_prev_month())
        }

        Message::DateDialogNextMonth => {
            date_dialog::handle_cursor(state, |d| d.cursor_next_month())
        }
    }
}
