//! Application error types with rich context

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Booking Validation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Please select both start and end dates!")]
    MissingDates,

    #[error("End date must be after start date!")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("Not a valid calendar date: {input}")]
    InvalidDate { input: String },

    // ─────────────────────────────────────────────────────────────
    // Store Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Booking store is full (maximum of {max} entries)")]
    StoreFull { max: usize },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn inverted_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::InvertedRange { start, end }
    }

    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    pub fn store_full(max: usize) -> Self {
        Self::StoreFull { max }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Validation and date-range errors block the current submission or
    /// confirmation and re-render the same screen; they never propagate.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EmptyName
                | Error::MissingDates
                | Error::InvertedRange { .. }
                | Error::InvalidDate { .. }
                | Error::StoreFull { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::Io(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_error_display_messages() {
        let err = Error::EmptyName;
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = Error::MissingDates;
        assert!(err.to_string().contains("both start and end dates"));

        let err = Error::inverted_range(date(2024, 6, 5), date(2024, 6, 1));
        assert!(err.to_string().contains("End date must be after start date"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_validation_errors_are_recoverable() {
        assert!(Error::EmptyName.is_recoverable());
        assert!(Error::MissingDates.is_recoverable());
        assert!(Error::inverted_range(date(2024, 6, 5), date(2024, 6, 1)).is_recoverable());
        assert!(Error::store_full(256).is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".to_string()).is_fatal());
        assert!(!Error::EmptyName.is_fatal());
        assert!(!Error::config("bad key").is_fatal());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::invalid_date("2024-13-99");
        let _ = Error::store_full(9);
        let _ = Error::config("test");
    }
}
