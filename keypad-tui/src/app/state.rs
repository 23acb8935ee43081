//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`).

use libkeypad::{CalculatorState, Command, EngineConfig};
use ratatui::layout::Rect;

/// Ticks a pressed button stays highlighted
pub const HIGHLIGHT_TICKS: u8 = 3;

/// Root application state
///
/// This is the single source of truth for the entire application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Mouse capture enabled?
    pub mouse_enabled: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Calculator core state
    pub calculator: CalculatorState,

    /// Last keypad button pressed, for highlighting
    pub last_pressed: Option<Command>,

    /// Remaining ticks of the pressed-button highlight
    pub highlight_ticks: u8,

    /// Keypad grid area from the last frame
    pub keypad_area: Option<Rect>,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_engine(EngineConfig::default())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        // Detect environment for sensible defaults
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("KEYPAD_TUI_NO_COLOR").is_err();

        let unicode_enabled = std::env::var("KEYPAD_TUI_ASCII").is_err();

        let tick_rate_ms = std::env::var("KEYPAD_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state whose calculator uses the given engine options
    pub fn with_engine(options: EngineConfig) -> Self {
        Self {
            should_quit: false,
            mouse_enabled: false,
            help_visible: false,
            calculator: CalculatorState::with_options(options),
            last_pressed: None,
            highlight_ticks: 0,
            keypad_area: None,
            status: StatusBarState::default(),
            config: UiConfig::default(),
        }
    }

    /// Should `command`'s button be drawn highlighted?
    pub fn is_highlighted(&self, command: Command) -> bool {
        self.highlight_ticks > 0 && self.last_pressed == Some(command)
    }
}
