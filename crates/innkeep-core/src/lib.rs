//! # innkeep-core - Core Domain Types
//!
//! Foundation crate for innkeep. Provides the booking domain types, error
//! handling, the transient notice queue, and the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Bookings (`booking`)
//! - [`BookingEntry`] - A committed booking record (guest name + date range)
//! - [`format_date`], [`format_range`] - Fixed `dd.mm.yyyy` display formatting
//!
//! ### Notices (`notice`)
//! - [`Notice`] - A transient, fire-and-forget user-facing message
//! - [`NoticeLevel`] - Notice severity (Info, Warning, Error)
//! - [`NoticeQueue`] - Bounded queue the presentation layer drains
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use innkeep_core::prelude::*;
//! ```

pub mod booking;
pub mod error;
pub mod logging;
pub mod notice;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use booking::{format_date, format_range, BookingEntry, DATE_FORMAT};
pub use error::{Error, Result, ResultExt};
pub use notice::{Notice, NoticeLevel, NoticeQueue};
