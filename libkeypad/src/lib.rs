//! keypad - an immediate-mode scientific calculator core
//!
//! This library holds everything behind the keypad: the accumulator state
//! machine, the scientific functions, the memory register and the
//! expression trace. Front-ends only translate input into [`Command`]s and
//! draw the resulting [`CalculatorState`].

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod memory;
pub mod readout;
pub mod scientific;
pub mod trace;
pub mod types;

// Re-export commonly used types
pub use config::{Config, EngineConfig};
pub use engine::{reduce, Calculator, CalculatorState, Phase, Snapshot};
pub use error::{CalcError, ConfigError, KeypadError, Result};
pub use readout::{Readout, ERROR_TOKEN};
pub use types::{Command, MemoryCommand, Operator, ScientificFn};
