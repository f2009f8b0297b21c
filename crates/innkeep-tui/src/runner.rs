//! Main run loop: poll events, update state, draw

use innkeep_app::config::Settings;
use innkeep_app::handler::update;
use innkeep_app::message::Message;
use innkeep_app::state::AppState;
use innkeep_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
pub fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    let result = run_loop(&mut term, &mut state);
    ratatui::restore();

    info!("innkeep exiting");
    result
}

fn run_loop(term: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }
    Ok(())
}

/// Process a message through the TEA update function, draining any
/// follow-up messages it produces.
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        msg = result.message;
    }
}
