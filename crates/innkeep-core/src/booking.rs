//! Booking records and calendar date formatting

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};

/// Fixed display format for calendar dates (`dd.mm.yyyy`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format a single date for display.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format an arrival/departure pair as `"<arrival> - <departure>"`.
pub fn format_range(arrival: NaiveDate, departure: NaiveDate) -> String {
    format!("{} - {}", format_date(arrival), format_date(departure))
}

/// A committed booking record: a guest name plus an arrival/departure pair.
///
/// Constructed only through [`BookingEntry::new`], which enforces the
/// invariants (trimmed non-empty name, `arrival_date <= departure_date`).
/// Immutable thereafter; ownership is handed to the booking store on a
/// successful submission.
///
/// Serializes for headless output. Deliberately not `Deserialize`: a derived
/// impl would bypass the constructor invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingEntry {
    name: String,
    arrival_date: NaiveDate,
    departure_date: NaiveDate,
}

impl BookingEntry {
    /// Create a validated booking entry.
    pub fn new(
        name: impl Into<String>,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if arrival_date > departure_date {
            return Err(Error::inverted_range(arrival_date, departure_date));
        }
        Ok(Self {
            name,
            arrival_date,
            departure_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_date(&self) -> NaiveDate {
        self.arrival_date
    }

    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Display label for the stay, e.g. `"01.06.2024 - 05.06.2024"`.
    pub fn date_range_label(&self) -> String {
        format_range(self.arrival_date, self.departure_date)
    }

    /// Number of nights between arrival and departure.
    ///
    /// A same-day arrival/departure counts as zero nights.
    pub fn nights(&self) -> i64 {
        (self.departure_date - self.arrival_date).num_days()
    }
}
