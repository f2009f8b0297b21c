//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notice expiry)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Booking Form Messages
    // ─────────────────────────────────────────────────────────
    /// Open the booking form with a fresh draft
    OpenBookingForm,
    /// Back out of the form (may ask to confirm discarding a dirty draft)
    CancelBookingForm,
    /// Discard the draft from the confirmation dialog
    ConfirmDiscard,
    /// Keep editing from the confirmation dialog
    CancelDiscard,

    /// Move focus to the next form field
    FormFocusNext,
    /// Move focus to the previous form field
    FormFocusPrev,

    /// Append a character to the guest name
    NameInput { c: char },
    /// Delete the last character of the guest name
    NameBackspace,
    /// Clear the guest name
    NameClear,

    /// Validate the draft and commit it to the store
    SubmitBooking,

    // ─────────────────────────────────────────────────────────
    // Date Dialog Messages
    // ─────────────────────────────────────────────────────────
    /// Open the date-range dialog over the form
    OpenDateDialog,
    /// Copy the calendar cursor into the current phase's date
    DateDialogPick,
    /// Move from start selection to end selection
    DateDialogAdvance,
    /// Validate the selection and hand the range to the draft
    DateDialogConfirm,
    /// Dismiss the dialog, discarding the selection
    DateDialogCancel,

    /// Calendar cursor movement
    DateDialogPrevDay,
    DateDialogNextDay,
    DateDialogPrevWeek,
    DateDialogNextWeek,
    DateDialogPrevMonth,
    DateDialogNextMonth,
}
