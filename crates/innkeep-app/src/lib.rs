//! innkeep-app - Application state and update logic for innkeep
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: an [`AppState`] model, a [`Message`] enum for every event, and
//! an `update()` function that is the only place state transitions happen.
//! Nothing in this crate touches a terminal; the TUI crate drives it.

pub mod config;
pub mod date_dialog;
pub mod draft;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod store;

// Re-export primary types
pub use config::Settings;
pub use date_dialog::{DateRangeDialogState, SelectorPhase};
pub use draft::BookingDraft;
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, FormField, UiMode};
pub use store::{BookingStore, MAX_BOOKINGS};
