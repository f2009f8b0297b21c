//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormField, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Home => handle_key_home(key),
        UiMode::AddBooking => handle_key_form(state, key),
        UiMode::DateRangeDialog => handle_key_date_dialog(state, key),
        UiMode::ConfirmDiscard => handle_key_confirm_discard(key),
    }
}

/// Handle key events on the home screen
fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // 'a' or '+' opens the booking form
        InputKey::Char('a' | '+') => Some(Message::OpenBookingForm),

        _ => None,
    }
}

/// Handle key events on the booking form.
///
/// The name field captures plain characters, so form shortcuts live on
/// Ctrl chords and navigation keys only.
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelBookingForm),

        // Force quit even mid-edit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Save from anywhere on the form
        InputKey::CharCtrl('s') => Some(Message::SubmitBooking),

        // Field navigation
        InputKey::Tab | InputKey::Down => Some(Message::FormFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FormFocusPrev),

        // Enter acts on the focused field
        InputKey::Enter => match state.form_focus {
            FormField::Name => Some(Message::FormFocusNext),
            FormField::DateRange => Some(Message::OpenDateDialog),
            FormField::Save => Some(Message::SubmitBooking),
        },

        // Name editing
        InputKey::Backspace if state.form_focus == FormField::Name => {
            Some(Message::NameBackspace)
        }
        InputKey::CharCtrl('u') if state.form_focus == FormField::Name => {
            Some(Message::NameClear)
        }
        InputKey::Char(c) if state.form_focus == FormField::Name => {
            Some(Message::NameInput { c })
        }

        _ => None,
    }
}

/// Handle key events in the date-range dialog
fn handle_key_date_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    use crate::date_dialog::SelectorPhase;

    match key {
        InputKey::Esc => Some(Message::DateDialogCancel),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // The confirm control is "Next" while picking the start date and
        // "OK" while picking the end date.
        InputKey::Enter => match state.date_dialog.as_ref().map(|d| d.phase) {
            Some(SelectorPhase::SelectingStart) => Some(Message::DateDialogAdvance),
            Some(SelectorPhase::SelectingEnd) => Some(Message::DateDialogConfirm),
            None => None,
        },

        // Space picks the highlighted day
        InputKey::Char(' ') => Some(Message::DateDialogPick),

        // Calendar navigation (arrows + vim keys)
        InputKey::Left | InputKey::Char('h') => Some(Message::DateDialogPrevDay),
        InputKey::Right | InputKey::Char('l') => Some(Message::DateDialogNextDay),
        InputKey::Up | InputKey::Char('k') => Some(Message::DateDialogPrevWeek),
        InputKey::Down | InputKey::Char('j') => Some(Message::DateDialogNextWeek),
        InputKey::PageUp | InputKey::Char('[') => Some(Message::DateDialogPrevMonth),
        InputKey::PageDown | InputKey::Char(']') => Some(Message::DateDialogNextMonth),

        _ => None,
    }
}

/// Handle key events in the discard confirmation dialog
fn handle_key_confirm_discard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDiscard),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDiscard),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
