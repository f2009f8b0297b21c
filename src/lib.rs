//! innkeep Library
//!
//! A TUI application for entering lodging booking records.

// Module declarations
pub mod headless;

// Re-export the workspace crates for consumers and integration tests
pub use innkeep_app as app;
pub use innkeep_tui as tui;

use innkeep_core::prelude::*;

/// Run the interactive TUI.
pub fn run() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    innkeep_core::logging::init()?;

    let settings = innkeep_app::config::load_settings();
    innkeep_tui::run(settings)
}

/// Run one non-interactive booking entry, emitting NDJSON events.
pub fn run_headless(entry: headless::HeadlessEntry) -> Result<()> {
    innkeep_core::logging::init()?;
    headless::run(entry)
}
