//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//! - Keypad: The button grid shared by rendering and mouse input
//!
//! Calculator semantics live in `libkeypad`; the reducer here only routes
//! input to `libkeypad::reduce` and tracks UI concerns around it.

pub mod actions;
pub mod state;
pub mod reducer;
pub mod event;
pub mod keypad;

// Re-export commonly used types
pub use actions::Action;
pub use state::{AppState, StatusBarState, UiConfig};
pub use reducer::reduce;
