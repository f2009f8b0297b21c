//! Shared in-memory booking store

use innkeep_core::prelude::*;
use innkeep_core::BookingEntry;

/// Maximum number of stored bookings.
pub const MAX_BOOKINGS: usize = 256;

/// Append-only in-memory store of committed bookings.
///
/// The submission handler is the sole write path, and the store is only ever
/// touched from the event loop thread, so no locking discipline is needed.
#[derive(Debug, Default)]
pub struct BookingStore {
    entries: Vec<BookingEntry>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed booking, taking ownership of the record.
    pub fn append(&mut self, entry: BookingEntry) -> Result<()> {
        if self.entries.len() >= MAX_BOOKINGS {
            return Err(Error::store_full(MAX_BOOKINGS));
        }

        info!(
            guest = entry.name(),
            stay = %entry.date_range_label(),
            "booking added"
        );
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[BookingEntry] {
        &self.entries
    }

    /// The most recently appended booking, if any.
    pub fn last(&self) -> Option<&BookingEntry> {
        self.entries.last()
    }
}
