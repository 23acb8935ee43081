//! Error types for keypad-tui
//!
//! Wraps core errors and terminal/IO errors for unified error handling.
//! Calculation errors never show up here: they live in the readout.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core library error (configuration, input)
    #[error("Keypad error: {0}")]
    Keypad(#[from] libkeypad::KeypadError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application setup error
    #[error("Application error: {0}")]
    Application(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
