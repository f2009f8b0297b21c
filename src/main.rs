//! innkeep - A terminal UI for lodging booking entry
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use innkeep::headless::HeadlessEntry;
use innkeep_core::prelude::*;

/// innkeep - A terminal UI for lodging booking entry
#[derive(Parser, Debug)]
#[command(name = "innkeep")]
#[command(about = "A terminal UI for lodging booking entry", long_about = None)]
struct Args {
    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Guest name (headless mode)
    #[arg(long)]
    name: Option<String>,

    /// Arrival date, YYYY-MM-DD (headless mode)
    #[arg(long)]
    arrival: Option<String>,

    /// Departure date, YYYY-MM-DD (headless mode)
    #[arg(long)]
    departure: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.headless {
        let entry = HeadlessEntry {
            name: args.name.unwrap_or_default(),
            arrival: args.arrival,
            departure: args.departure,
        };
        return innkeep::run_headless(entry);
    }

    innkeep::run()
}
