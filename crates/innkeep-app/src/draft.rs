//! Screen-scoped booking draft

use chrono::NaiveDate;
use serde::Serialize;

use innkeep_core::format_range;

/// The mutable, not-yet-submitted form state for one booking entry.
///
/// Created when the form screen opens, discarded on back navigation or a
/// successful submission; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    /// Guest name, edited one keystroke at a time.
    pub name: String,

    /// Arrival date, set only by the date-range dialog.
    pub arrival_date: Option<NaiveDate>,

    /// Departure date, set only by the date-range dialog.
    pub departure_date: Option<NaiveDate>,

    /// Result of the last submission's name validation. Highlights the name
    /// field until the next submission re-evaluates it.
    pub name_invalid: bool,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a confirmed date range from the dialog.
    pub fn set_range(&mut self, arrival: NaiveDate, departure: NaiveDate) {
        self.arrival_date = Some(arrival);
        self.departure_date = Some(departure);
    }

    /// Both endpoints chosen.
    pub fn has_complete_range(&self) -> bool {
        self.arrival_date.is_some() && self.departure_date.is_some()
    }

    /// Display text for the date-range field: empty until both dates are
    /// chosen, then `"<arrival> - <departure>"` in `dd.mm.yyyy` format.
    pub fn range_label(&self) -> String {
        match (self.arrival_date, self.departure_date) {
            (Some(arrival), Some(departure)) => format_range(arrival, departure),
            _ => String::new(),
        }
    }

    /// Whether the user has entered anything worth confirming before discard.
    pub fn is_dirty(&self) -> bool {
        !self.name.is_empty() || self.arrival_date.is_some() || self.departure_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_draft_is_clean() {
        let draft = BookingDraft::new();
        assert!(draft.name.is_empty());
        assert!(!draft.has_complete_range());
        assert!(!draft.is_dirty());
        assert!(!draft.name_invalid);
    }

    #[test]
    fn test_range_label_empty_until_both_dates() {
        let mut draft = BookingDraft::new();
        assert_eq!(draft.range_label(), "");

        draft.arrival_date = Some(date(2024, 6, 1));
        assert_eq!(draft.range_label(), "");

        draft.departure_date = Some(date(2024, 6, 5));
        assert_eq!(draft.range_label(), "01.06.2024 - 05.06.2024");
    }

    #[test]
    fn test_set_range() {
        let mut draft = BookingDraft::new();
        draft.set_range(date(2024, 6, 1), date(2024, 6, 5));
        assert!(draft.has_complete_range());
    }

    #[test]
    fn test_dirty_tracking() {
        let mut draft = BookingDraft::new();
        draft.name.push('A');
        assert!(draft.is_dirty());

        let mut draft = BookingDraft::new();
        draft.arrival_date = Some(date(2024, 6, 1));
        assert!(draft.is_dirty());
    }
}
