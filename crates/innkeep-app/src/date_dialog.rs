//! Date-range dialog state machine
//!
//! Two-phase selection: pick a start date, advance, pick an end date,
//! confirm. The state machine is driven by messages and knows nothing about
//! rendering; the TUI draws a calendar around [`DateRangeDialogState::cursor`]
//! and the handlers translate key events into the transitions below.
//!
//! Transitions:
//! - `SelectingStart` → `SelectingEnd` via advance, only once a start date
//!   has been picked.
//! - `SelectingEnd` → closed via [`DateRangeDialogState::confirm`], which
//!   requires both dates present and `start <= end`; any guard failure keeps
//!   the dialog open.
//! - Cancel closes from either phase and discards the whole selection.

use chrono::{Days, Months, NaiveDate};

use innkeep_core::{Error, Result};

/// Which endpoint of the range is currently being chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorPhase {
    #[default]
    SelectingStart,
    SelectingEnd,
}

impl SelectorPhase {
    /// Dialog heading for the current phase.
    pub fn title(&self) -> &'static str {
        match self {
            SelectorPhase::SelectingStart => "Select Start Date",
            SelectorPhase::SelectingEnd => "Select End Date",
        }
    }

    /// Label of the confirm control for the current phase.
    pub fn confirm_label(&self) -> &'static str {
        match self {
            SelectorPhase::SelectingStart => "Next",
            SelectorPhase::SelectingEnd => "OK",
        }
    }
}

/// Modal-local selection state, created when the dialog opens and discarded
/// on cancel or confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeDialogState {
    pub phase: SelectorPhase,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    /// Calendar highlight the cursor keys move. Picking copies it into the
    /// current phase's date.
    pub cursor: NaiveDate,
}

impl DateRangeDialogState {
    /// Fresh dialog with the calendar opened at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            phase: SelectorPhase::SelectingStart,
            start_date: None,
            end_date: None,
            cursor: today,
        }
    }

    /// Dialog preloaded with an already-complete range from the draft.
    /// An incomplete draft range opens a fresh dialog instead.
    pub fn for_range(
        arrival: Option<NaiveDate>,
        departure: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        match (arrival, departure) {
            (Some(start), Some(end)) => Self {
                phase: SelectorPhase::SelectingStart,
                start_date: Some(start),
                end_date: Some(end),
                cursor: start,
            },
            _ => Self::new(today),
        }
    }

    /// Copy the cursor into the current phase's date.
    pub fn pick(&mut self) {
        match self.phase {
            SelectorPhase::SelectingStart => self.start_date = Some(self.cursor),
            SelectorPhase::SelectingEnd => self.end_date = Some(self.cursor),
        }
    }

    /// Whether the start phase may advance to end selection.
    pub fn can_advance(&self) -> bool {
        self.start_date.is_some()
    }

    /// Move to end selection. Callers check [`Self::can_advance`] first; the
    /// cursor jumps to the best anchor for the end date.
    pub fn advance(&mut self) {
        self.phase = SelectorPhase::SelectingEnd;
        if let Some(anchor) = self.end_date.or(self.start_date) {
            self.cursor = anchor;
        }
    }

    /// Validate the selection for confirmation.
    ///
    /// Returns the `(start, end)` pair when both dates are present and
    /// ordered; otherwise the guard error to surface as a notice. The dialog
    /// stays open on any error.
    pub fn confirm(&self) -> Result<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                if start <= end {
                    Ok((start, end))
                } else {
                    Err(Error::inverted_range(start, end))
                }
            }
            _ => Err(Error::MissingDates),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Cursor movement
    // ─────────────────────────────────────────────────────────

    pub fn cursor_prev_day(&mut self) {
        if let Some(d) = self.cursor.checked_sub_days(Days::new(1)) {
            self.cursor = d;
        }
    }

    pub fn cursor_next_day(&mut self) {
        if let Some(d) = self.cursor.checked_add_days(Days::new(1)) {
            self.cursor = d;
        }
    }

    pub fn cursor_prev_week(&mut self) {
        if let Some(d) = self.cursor.checked_sub_days(Days::new(7)) {
            self.cursor = d;
        }
    }

    pub fn cursor_next_week(&mut self) {
        if let Some(d) = self.cursor.checked_add_days(Days::new(7)) {
            self.cursor = d;
        }
    }

    pub fn cursor_prev_month(&mut self) {
        if let Some(d) = self.cursor.checked_sub_months(Months::new(1)) {
            self.cursor = d;
        }
    }

    pub fn cursor_next_month(&mut self) {
        if let Some(d) = self.cursor.checked_add_months(Months::new(1)) {
            self.cursor = d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fresh_dialog_starts_selecting_start() {
        let dialog = DateRangeDialogState::new(date(2024, 6, 15));
        assert_eq!(dialog.phase, SelectorPhase::SelectingStart);
        assert!(dialog.start_date.is_none());
        assert!(dialog.end_date.is_none());
        assert_eq!(dialog.cursor, date(2024, 6, 15));
    }

    #[test]
    fn test_pick_sets_date_for_current_phase() {
        let mut dialog = DateRangeDialogState::new(date(2024, 6, 15));
        dialog.pick();
        assert_eq!(dialog.start_date, Some(date(2024, 6, 15)));

        dialog.advance();
        dialog.cursor_next_day();
        dialog.pick();
        assert_eq!(dialog.end_date, Some(date(2024, 6, 16)));
    }

    #[test]
    fn test_cannot_advance_without_start() {
        let dialog = DateRangeDialogState::new(date(2024, 6, 15));
        assert!(!dialog.can_advance());
    }

    #[test]
    fn test_advance_anchors_cursor_on_start() {
        let mut dialog = DateRangeDialogState::new(date(2024, 6, 15));
        dialog.pick();
        dialog.cursor_prev_month();
        dialog.advance();
        assert_eq!(dialog.phase, SelectorPhase::SelectingEnd);
        assert_eq!(dialog.cursor, date(2024, 6, 15));
    }

    #[test]
    fn test_confirm_ordered_range() {
        let mut dialog = DateRangeDialogState::new(date(2024, 6, 1));
        dialog.pick();
        dialog.advance();
        dialog.cursor_next_week();
        dialog.pick();

        let (start, end) = dialog.confirm().unwrap();
        assert_eq!(start, date(2024, 6, 1));
        assert_eq!(end, date(2024, 6, 8));
    }

    #[test]
    fn test_confirm_same_day_range() {
        let mut dialog = DateRangeDialogState::new(date(2024, 6, 1));
        dialog.pick();
        dialog.advance();
        dialog.pick();
        assert!(dialog.confirm().is_ok());
    }

    #[test]
    fn test_confirm_missing_end_reports_missing_dates() {
        let mut dialog = DateRangeDialogState::new(date(2024, 6, 1));
        dialog.pick();
        dialog.advance();
        assert!(matches!(dialog.confirm(), Err(Error::MissingDates)));
    }

    #[test]
    fn test_confirm_inverted_range_keeps_state() {
        let mut dialog = DateRangeDialogState::new(date(2024, 6, 10));
        dialog.pick();
        dialog.advance();
        dialog.cursor_prev_week();
        dialog.pick();

        assert!(matches!(
            dialog.confirm(),
            Err(Error::InvertedRange { .. })
        ));
        // Selection survives the failed guard so the user can fix it.
        assert_eq!(dialog.phase, SelectorPhase::SelectingEnd);
        assert_eq!(dialog.start_date, Some(date(2024, 6, 10)));
        assert_eq!(dialog.end_date, Some(date(2024, 6, 3)));
    }

    #[test]
    fn test_for_range_preloads_complete_range() {
        let dialog = DateRangeDialogState::for_range(
            Some(date(2024, 6, 1)),
            Some(date(2024, 6, 5)),
            date(2024, 7, 1),
        );
        assert_eq!(dialog.start_date, Some(date(2024, 6, 1)));
        assert_eq!(dialog.end_date, Some(date(2024, 6, 5)));
        assert_eq!(dialog.cursor, date(2024, 6, 1));
    }

    #[test]
    fn test_for_range_partial_is_fresh() {
        let dialog =
            DateRangeDialogState::for_range(Some(date(2024, 6, 1)), None, date(2024, 7, 1));
        assert!(dialog.start_date.is_none());
        assert_eq!(dialog.cursor, date(2024, 7, 1));
    }

    #[test]
    fn test_cursor_movement() {
        let mut dialog = DateRangeDialogState::new(date(2024, 6, 15));
        dialog.cursor_next_day();
        assert_eq!(dialog.cursor, date(2024, 6, 16));
        dialog.cursor_prev_week();
        assert_eq!(dialog.cursor, date(2024, 6, 9));
        dialog.cursor_next_month();
        assert_eq!(dialog.cursor, date(2024, 7, 9));
        dialog.cursor_prev_day();
        assert_eq!(dialog.cursor, date(2024, 7, 8));
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(SelectorPhase::SelectingStart.title(), "Select Start Date");
        assert_eq!(SelectorPhase::SelectingStart.confirm_label(), "Next");
        assert_eq!(SelectorPhase::SelectingEnd.title(), "Select End Date");
        assert_eq!(SelectorPhase::SelectingEnd.confirm_label(), "OK");
    }
}
