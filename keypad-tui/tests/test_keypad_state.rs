//! Test keypad interaction state
//!
//! Mouse clicks, button highlighting and the status bar as driven
//! through actions.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use keypad_tui::app::keypad::{button_rect, BUTTONS};
use keypad_tui::app::state::HIGHLIGHT_TICKS;
use keypad_tui::app::{reduce, Action, AppState};
use libkeypad::{Command, Operator};
use ratatui::layout::Rect;

const AREA: Rect = Rect {
    x: 0,
    y: 4,
    width: 40,
    height: 21,
};

fn click_on(command: Command) -> Action {
    let button = BUTTONS.iter().find(|b| b.command == command).unwrap();
    let rect = button_rect(AREA, button);
    click_at(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn click_at(column: u16, row: u16) -> Action {
    Action::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn mouse_state() -> AppState {
    let state = reduce(AppState::new(), Action::ToggleMouse);
    reduce(state, Action::KeypadArea(AREA))
}

#[test]
fn test_click_presses_button() {
    let state = mouse_state();
    let state = reduce(state, click_on(Command::Digit(7)));
    let state = reduce(state, click_on(Command::Operator(Operator::Multiply)));
    let state = reduce(state, click_on(Command::Digit(6)));
    let state = reduce(state, click_on(Command::Equals));

    assert_eq!(state.calculator.display(), "42");
    assert_eq!(state.last_pressed, Some(Command::Equals));
}

#[test]
fn test_click_ignored_when_mouse_disabled() {
    let state = reduce(AppState::new(), Action::KeypadArea(AREA));
    let state = reduce(state, click_on(Command::Digit(5)));

    assert_eq!(state.calculator.display(), "0");
    assert!(state.last_pressed.is_none());
}

#[test]
fn test_click_ignored_without_keypad_area() {
    let state = reduce(AppState::new(), Action::ToggleMouse);
    let state = reduce(state, click_at(5, 10));

    assert!(state.last_pressed.is_none());
}

#[test]
fn test_click_outside_keypad_ignored() {
    let state = mouse_state();
    let state = reduce(state, click_at(5, 1));

    assert!(state.last_pressed.is_none());
}

#[test]
fn test_right_click_ignored() {
    let state = mouse_state();
    let state = reduce(
        state,
        Action::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 2,
            row: 20,
            modifiers: KeyModifiers::NONE,
        }),
    );

    assert!(state.last_pressed.is_none());
}

#[test]
fn test_click_ignored_while_help_visible() {
    let state = reduce(mouse_state(), Action::ShowHelp);
    let state = reduce(state, click_on(Command::Digit(1)));

    assert_eq!(state.calculator.display(), "0");
}

#[test]
fn test_press_highlights_button() {
    let state = reduce(AppState::new(), Action::Press(Command::Digit(3)));

    assert!(state.is_highlighted(Command::Digit(3)));
    assert!(!state.is_highlighted(Command::Digit(4)));
    assert_eq!(state.highlight_ticks, HIGHLIGHT_TICKS);
}

#[test]
fn test_toggle_mouse_sets_status() {
    let state = reduce(AppState::new(), Action::ToggleMouse);
    assert!(state.status.message.as_deref().unwrap().contains("enabled"));

    let state = reduce(state, Action::ToggleMouse);
    assert_eq!(state.status.message.as_deref(), Some("Mouse disabled"));
}

#[test]
fn test_error_keeps_ui_responsive() {
    let state = [
        Command::Digit(8),
        Command::Operator(Operator::Divide),
        Command::Digit(0),
        Command::Equals,
    ]
    .into_iter()
    .fold(AppState::new(), |state, cmd| reduce(state, Action::Press(cmd)));

    assert!(state.calculator.readout.is_error());

    let state = reduce(state, Action::Press(Command::Clear));
    assert_eq!(state.calculator.display(), "0");
}
