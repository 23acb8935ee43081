//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, no side effects. Calculator key presses are
//! forwarded to `libkeypad::reduce`, which is just as pure.

use super::actions::Action;
use super::keypad;
use super::state::{AppState, StatusBarState, HIGHLIGHT_TICKS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use libkeypad::{Command, MemoryCommand, Operator, ScientificFn};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// Deterministic: same inputs give the same output.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Mouse(mouse) => handle_mouse(state, mouse),
        Action::Tick => AppState {
            highlight_ticks: state.highlight_ticks.saturating_sub(1),
            ..state
        },
        Action::Resize(_, _) => AppState {
            // Stale until the next frame reports the new area
            keypad_area: None,
            ..state
        },

        // === Calculator ===
        Action::Press(command) => {
            let calculator = libkeypad::reduce(state.calculator, command);
            AppState {
                calculator,
                last_pressed: Some(command),
                highlight_ticks: HIGHLIGHT_TICKS,
                status: StatusBarState {
                    message: Some(format!("Pressed {}", command)),
                },
                ..state
            }
        }

        Action::KeypadArea(area) => AppState {
            keypad_area: Some(area),
            ..state
        },

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleMouse => {
            let mouse_enabled = !state.mouse_enabled;
            let message = if mouse_enabled {
                "Mouse enabled: click the keypad"
            } else {
                "Mouse disabled"
            };
            AppState {
                mouse_enabled,
                status: StatusBarState {
                    message: Some(message.to_string()),
                },
                ..state
            }
        }

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },
    }
}

/// Handle keyboard input
///
/// Global keys first, then the calculator keymap.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }

        // Toggle mouse
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            return reduce(state, Action::ToggleMouse);
        }

        // Hide help
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    // The keypad is hidden behind the overlay
    if state.help_visible {
        return state;
    }

    match key_command(key) {
        Some(command) => reduce(state, Action::Press(command)),
        None => state,
    }
}

/// Calculator keymap
///
/// Shifted symbols (`+`, `(`, `!`) arrive with SHIFT on some terminals, so
/// only CONTROL and ALT disqualify a character key.
pub fn key_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    let command = match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => Command::Digit(c as u8 - b'0'),
        KeyCode::Char('.') | KeyCode::Char(',') => Command::DecimalPoint,
        KeyCode::Char('+') => Command::Operator(Operator::Add),
        KeyCode::Char('-') => Command::Operator(Operator::Subtract),
        KeyCode::Char('*') | KeyCode::Char('x') => Command::Operator(Operator::Multiply),
        KeyCode::Char('/') => Command::Operator(Operator::Divide),
        KeyCode::Char('=') | KeyCode::Enter => Command::Equals,
        KeyCode::Backspace | KeyCode::Delete => Command::Clear,
        KeyCode::Char('(') => Command::OpenParen,
        KeyCode::Char(')') => Command::CloseParen,
        KeyCode::Char('s') => Command::Scientific(ScientificFn::Sin),
        KeyCode::Char('c') => Command::Scientific(ScientificFn::Cos),
        KeyCode::Char('t') => Command::Scientific(ScientificFn::Tan),
        KeyCode::Char('r') => Command::Scientific(ScientificFn::Sqrt),
        KeyCode::Char('w') => Command::Scientific(ScientificFn::Square),
        KeyCode::Char('l') => Command::Scientific(ScientificFn::Log10),
        KeyCode::Char('n') => Command::Scientific(ScientificFn::Ln),
        KeyCode::Char('!') => Command::Scientific(ScientificFn::Factorial),
        KeyCode::Char('i') => Command::Scientific(ScientificFn::Reciprocal),
        KeyCode::Char('e') => Command::Scientific(ScientificFn::Exp),
        KeyCode::F(5) => Command::Memory(MemoryCommand::Clear),
        KeyCode::F(6) => Command::Memory(MemoryCommand::Recall),
        KeyCode::F(7) => Command::Memory(MemoryCommand::Subtract),
        KeyCode::F(8) => Command::Memory(MemoryCommand::Add),
        _ => return None,
    };

    Some(command)
}

/// Left click on a keypad button presses it
fn handle_mouse(state: AppState, mouse: MouseEvent) -> AppState {
    if !state.mouse_enabled || state.help_visible {
        return state;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return state;
    }

    let hit = state
        .keypad_area
        .and_then(|area| keypad::hit_test(area, mouse.column, mouse.row));

    match hit {
        Some(command) => reduce(state, Action::Press(command)),
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::Press(Command::Digit(4)));

        // Original state unchanged
        assert_eq!(state_clone.calculator.display(), "0");
        assert!(state_clone.last_pressed.is_none());

        // New state has the change
        assert_eq!(new_state.calculator.display(), "4");
        assert_eq!(new_state.last_pressed, Some(Command::Digit(4)));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_highlight_fades_on_tick() {
        let mut state = reduce(AppState::new(), Action::Press(Command::Equals));
        assert!(state.is_highlighted(Command::Equals));

        for _ in 0..HIGHLIGHT_TICKS {
            state = reduce(state, Action::Tick);
        }
        assert!(!state.is_highlighted(Command::Equals));

        // Saturates at zero
        state = reduce(state, Action::Tick);
        assert_eq!(state.highlight_ticks, 0);
    }

    #[test]
    fn test_resize_forgets_keypad_area() {
        let state = reduce(AppState::new(), Action::KeypadArea(ratatui::layout::Rect::new(0, 5, 40, 21)));
        assert!(state.keypad_area.is_some());

        let state = reduce(state, Action::Resize(80, 24));
        assert!(state.keypad_area.is_none());
    }

    #[test]
    fn test_press_sets_status() {
        let state = reduce(AppState::new(), Action::Press(Command::Scientific(ScientificFn::Ln)));
        assert_eq!(state.status.message.as_deref(), Some("Pressed ln"));
    }
}
