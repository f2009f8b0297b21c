//! Application state (Model in TEA pattern)

use chrono::NaiveDate;

use crate::config::Settings;
use crate::date_dialog::DateRangeDialogState;
use crate::draft::BookingDraft;
use crate::store::BookingStore;
use innkeep_core::NoticeQueue;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Home screen with the store summary and key hints
    #[default]
    Home,

    /// Booking entry form (name + date range + save)
    AddBooking,

    /// Date-range dialog on top of the form
    DateRangeDialog,

    /// Confirmation dialog before discarding a dirty draft
    ConfirmDiscard,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Focusable fields on the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    DateRange,
    Save,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::DateRange,
            Self::DateRange => Self::Save,
            Self::Save => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Save,
            Self::DateRange => Self::Name,
            Self::Save => Self::DateRange,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::DateRange => "Select Date Range",
            Self::Save => "Save",
        }
    }
}

/// Complete application state
#[derive(Debug, Default)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub phase: AppPhase,
    pub settings: Settings,

    /// Shared store of committed bookings
    pub store: BookingStore,

    /// In-progress form state; `Some` only while the form screen is open
    pub draft: Option<BookingDraft>,

    /// Focused form field; reset when the form opens
    pub form_focus: FormField,

    /// Modal date-range selection; `Some` only while the dialog is open
    pub date_dialog: Option<DateRangeDialogState>,

    /// Transient notices the presentation layer drains
    pub notices: NoticeQueue,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────
    // Booking Form Navigation
    // ─────────────────────────────────────────────────────────

    /// Open the booking form with a fresh draft.
    pub fn open_booking_form(&mut self) {
        self.draft = Some(BookingDraft::new());
        self.form_focus = FormField::Name;
        self.ui_mode = UiMode::AddBooking;
    }

    /// Leave the form and return to the home screen, discarding the draft
    /// and any open dialog.
    pub fn close_booking_form(&mut self) {
        self.draft = None;
        self.date_dialog = None;
        self.ui_mode = UiMode::Home;
    }

    /// Back out of the form. A dirty draft asks for confirmation first when
    /// `behavior.confirm_discard` is set.
    pub fn request_cancel_form(&mut self) {
        let dirty = self.draft.as_ref().is_some_and(|d| d.is_dirty());
        if dirty && self.settings.behavior.confirm_discard {
            self.ui_mode = UiMode::ConfirmDiscard;
        } else {
            self.close_booking_form();
        }
    }

    /// Confirm discarding the draft (from the confirmation dialog).
    pub fn confirm_discard(&mut self) {
        self.close_booking_form();
    }

    /// Keep editing (from the confirmation dialog).
    pub fn cancel_discard(&mut self) {
        self.ui_mode = UiMode::AddBooking;
    }

    // ─────────────────────────────────────────────────────────
    // Date Dialog
    // ─────────────────────────────────────────────────────────

    /// Open the date-range dialog over the form. Only possible while the
    /// form is on screen and no dialog is open.
    pub fn open_date_dialog(&mut self, today: NaiveDate) {
        if self.ui_mode != UiMode::AddBooking {
            return;
        }
        let Some(draft) = self.draft.as_ref() else {
            return;
        };
        self.date_dialog = Some(DateRangeDialogState::for_range(
            draft.arrival_date,
            draft.departure_date,
            today,
        ));
        self.ui_mode = UiMode::DateRangeDialog;
    }

    /// Close the dialog and return to the form.
    pub fn close_date_dialog(&mut self) {
        self.date_dialog = None;
        self.ui_mode = UiMode::AddBooking;
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
