//! Date-range dialog handlers

use innkeep_core::Notice;

use crate::date_dialog::{DateRangeDialogState, SelectorPhase};
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    let today = chrono::Local::now().date_naive();
    state.open_date_dialog(today);
    UpdateResult::none()
}

pub fn handle_pick(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = state.date_dialog.as_mut() {
        dialog.pick();
    }
    UpdateResult::none()
}

/// Move from start to end selection. Advancing with no start date picked is
/// rejected with a notice instead of silently falling through.
pub fn handle_advance(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.date_dialog.as_mut() else {
        return UpdateResult::none();
    };

    if dialog.can_advance() {
        dialog.advance();
    } else {
        state.notices.push(Notice::warning("Select a start date first"));
    }
    UpdateResult::none()
}

/// Validate and apply the selection. Guard failures raise a notice and keep
/// the dialog open in end selection so the user can fix the range.
pub fn handle_confirm(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.date_dialog.as_ref() else {
        return UpdateResult::none();
    };

    // The confirm control doubles as "Next" while the start date is being
    // picked.
    if dialog.phase == SelectorPhase::SelectingStart {
        return handle_advance(state);
    }

    match dialog.confirm() {
        Ok((start, end)) => {
            if let Some(draft) = state.draft.as_mut() {
                draft.set_range(start, end);
            }
            state.close_date_dialog();
        }
        Err(err) => {
            state.notices.push(Notice::warning(err.to_string()));
        }
    }
    UpdateResult::none()
}

/// Dismiss the dialog, discarding the whole selection unconditionally.
pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    state.close_date_dialog();
    UpdateResult::none()
}

/// Apply a cursor movement to the open dialog.
pub fn handle_cursor(
    state: &mut AppState,
    movement: impl FnOnce(&mut DateRangeDialogState),
) -> UpdateResult {
    if let Some(dialog) = state.date_dialog.as_mut() {
        movement(dialog);
    }
    UpdateResult::none()
}
