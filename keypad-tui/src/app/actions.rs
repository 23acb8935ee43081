//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::{KeyEvent, MouseEvent};
use libkeypad::Command;
use ratatui::layout::Rect;

/// Actions that trigger state transitions
///
/// Actions are immutable data describing what happened; the reducer
/// (see `reducer.rs`) applies them to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event (when enabled)
    Mouse(MouseEvent),

    /// Periodic tick, fades the pressed-button highlight
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Calculator ===
    /// A keypad button was pressed (by key or by click)
    Press(Command),

    /// Where the keypad grid was last drawn, for mouse hit-testing
    KeypadArea(Rect),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Toggle mouse capture on/off
    ToggleMouse,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,
}
