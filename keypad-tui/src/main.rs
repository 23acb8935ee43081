//! keypad-tui - Terminal keypad for keypad
//!
//! Interactive on-screen calculator: type on the keyboard or, with mouse
//! capture on, click the buttons.

use keypad_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    error::{Result, TuiError},
    terminal::{install_panic_hook, restore_terminal, set_mouse_capture, setup_terminal, Tui},
    ui,
};
use libkeypad::{logging::LoggingConfig, Config};
use std::sync::Mutex;

fn main() -> Result<()> {
    let config = Config::load()?;

    // The terminal owns stderr while the UI runs, so logs only go to a file
    if let Ok(path) = std::env::var("KEYPAD_LOG_FILE") {
        let file = std::fs::File::create(&path)
            .map_err(|e| TuiError::Application(format!("Failed to open log file {}: {}", path, e)))?;
        LoggingConfig::from_section(&config.logging, false).init_with_writer(Mutex::new(file));
    }

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, config: &Config) -> Result<()> {
    let mut state = AppState::with_engine(config.engine);
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    tracing::info!(
        precision = config.engine.precision,
        tick_rate_ms = state.config.tick_rate_ms,
        "Starting keypad-tui"
    );

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state);
        })?;

        // Mouse hit-testing needs the grid of the frame just drawn
        let area = ui::keypad_area(terminal.size()?);
        if state.keypad_area != Some(area) {
            state = reduce(state, Action::KeypadArea(area));
        }

        let action: Action = event_handler.next()?.into();

        let mouse_was_enabled = state.mouse_enabled;
        state = reduce(state, action);

        if state.mouse_enabled != mouse_was_enabled {
            set_mouse_capture(terminal, state.mouse_enabled)?;
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!(display = state.calculator.display(), "Exiting keypad-tui");

    Ok(())
}
