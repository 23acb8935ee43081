//! Immediate-mode accumulator state machine
//!
//! There is no expression evaluation: every operator press eagerly reduces
//! the pending operation against the running accumulator, so `2 + 3 × 4`
//! is `(2 + 3) × 4`.
//!
//! The transition itself is the pure function [`reduce`]:
//! `(CalculatorState, Command) -> CalculatorState`. [`Calculator`] is the
//! controller that owns one state and logs what happens to it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::CalcError;
use crate::memory::MemoryRegister;
use crate::readout::{format_number, Readout, ERROR_TOKEN};
use crate::scientific;
use crate::trace::ExpressionTrace;
use crate::types::{Command, MemoryCommand, Operator, ScientificFn};

/// Accumulator phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing pending
    Idle,
    /// An operator waits for its right operand
    PendingOp(Operator),
}

/// Complete calculator state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// What the display shows
    pub readout: Readout,

    /// Left operand of the pending operation
    pub accumulator: f64,

    /// Operator waiting for its right operand
    pub pending: Option<Operator>,

    /// Next digit starts a fresh number instead of appending
    pub new_entry: bool,

    pub memory: MemoryRegister,

    pub trace: ExpressionTrace,

    /// Survives Clear
    pub options: EngineConfig,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::with_options(EngineConfig::default())
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineConfig) -> Self {
        Self {
            readout: Readout::default(),
            accumulator: 0.0,
            pending: None,
            new_entry: true,
            memory: MemoryRegister::new(),
            trace: ExpressionTrace::new(),
            options,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.pending {
            Some(op) => Phase::PendingOp(op),
            None => Phase::Idle,
        }
    }

    /// Display text
    pub fn display(&self) -> &str {
        self.readout.text()
    }

    /// Value of the display, `None` while an error is shown
    fn operand(&self) -> Option<f64> {
        self.readout.value()
    }

    /// Serializable view of the state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.readout.text().to_string(),
            trace: self.trace.render(),
            error: self.readout.is_error(),
            pending: self.pending,
            memory: self.memory.recall(),
        }
    }
}

/// What a front-end shows after a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    pub trace: String,
    pub error: bool,
    pub pending: Option<Operator>,
    pub memory: Option<f64>,
}

/// Pure transition function
///
/// Calculation errors never escape: they become an error readout and the
/// session stays usable.
pub fn reduce(state: CalculatorState, command: Command) -> CalculatorState {
    match command {
        // Only reachable past `FromStr`, e.g. a deserialized command
        Command::Digit(d) if d > 9 => state,
        Command::Digit(d) => enter_key(state, &d.to_string()),
        Command::DecimalPoint => enter_key(state, "."),
        Command::Operator(op) => press_operator(state, op),
        Command::Equals => press_equals(state),
        Command::Clear => CalculatorState::with_options(state.options),
        Command::OpenParen => {
            let mut state = state;
            state.trace.open_paren();
            state
        }
        Command::CloseParen => {
            let mut state = state;
            state.trace.close_paren();
            state
        }
        Command::Memory(cmd) => press_memory(state, cmd),
        Command::Scientific(function) => press_scientific(state, function),
    }
}

/// Digit or decimal point
fn enter_key(mut state: CalculatorState, key: &str) -> CalculatorState {
    let is_point = key == ".";

    if state.new_entry || state.readout.is_error() {
        let text = if is_point { "0." } else { key };
        state.readout = Readout::entry(text);
        state.trace.start_number(text);
        state.new_entry = false;
        return state;
    }

    let current = state.readout.text().to_string();

    // One decimal point per number
    if is_point && current.contains('.') {
        return state;
    }

    if current == "0" {
        let text = if is_point { "0." } else { key };
        state.readout = Readout::entry(text);
        state.trace.set_number(text);
    } else {
        state.readout = Readout::entry(format!("{}{}", current, key));
        state.trace.append_to_number(key);
    }

    state
}

fn press_operator(mut state: CalculatorState, op: Operator) -> CalculatorState {
    let Some(value) = state.operand() else {
        return state;
    };

    state.new_entry = true;

    if state.pending.is_some() {
        if apply_pending(&mut state).is_err() {
            return state;
        }
    } else {
        state.accumulator = value;
    }

    state.pending = Some(op);
    state.trace.push_operator(op);
    state
}

fn press_equals(mut state: CalculatorState) -> CalculatorState {
    if state.pending.is_none() || state.readout.is_error() {
        return state;
    }

    state.new_entry = true;

    // A zero divisor has already switched the readout to the error token
    if apply_pending(&mut state).is_err() {
        return state;
    }
    state
}

/// Reduce `accumulator op display` in place.
///
/// On a zero divisor the display switches to the error token, the trace is
/// emptied, and accumulator and pending operator are left untouched.
fn apply_pending(state: &mut CalculatorState) -> Result<(), CalcError> {
    let (Some(op), Some(rhs)) = (state.pending, state.operand()) else {
        return Ok(());
    };

    if op == Operator::Divide && rhs == 0.0 {
        state.readout = Readout::error(ERROR_TOKEN);
        state.trace.clear();
        return Err(CalcError::DivideByZero);
    }

    let result = op.apply(state.accumulator, rhs);
    let text = format_number(result);

    state.accumulator = result;
    state.pending = None;
    state.trace.collapse_reduction(op, &text);
    state.readout = Readout::entry(text);
    Ok(())
}

fn press_scientific(mut state: CalculatorState, function: ScientificFn) -> CalculatorState {
    let Some(x) = state.operand() else {
        return state;
    };

    match scientific::evaluate(function, x, &state.options) {
        Ok(result) => {
            let text = format_number(result);
            state.trace.set_number(&text);
            state.readout = Readout::entry(text);
        }
        Err(e) => {
            state.readout = Readout::error(e.to_string());
        }
    }

    state.new_entry = true;
    state
}

fn press_memory(mut state: CalculatorState, cmd: MemoryCommand) -> CalculatorState {
    match cmd {
        MemoryCommand::Add => {
            if let Some(value) = state.operand() {
                state.memory.accumulate(value);
                state.new_entry = true;
            }
        }
        MemoryCommand::Subtract => {
            if let Some(value) = state.operand() {
                state.memory.subtract(value);
                state.new_entry = true;
            }
        }
        MemoryCommand::Recall => {
            if let Some(value) = state.memory.recall() {
                let text = format_number(value);
                state.trace.set_number(&text);
                state.readout = Readout::entry(text);
                state.new_entry = true;
            }
        }
        MemoryCommand::Clear => state.memory.clear(),
    }
    state
}

/// Controller owning one calculator session
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineConfig) -> Self {
        Self {
            state: CalculatorState::with_options(options),
        }
    }

    /// Apply one key press
    pub fn press(&mut self, command: Command) -> &CalculatorState {
        let was_error = self.state.readout.is_error();
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, command);

        debug!(
            command = %command,
            display = self.state.display(),
            pending = ?self.state.pending,
            "key pressed"
        );
        if self.state.readout.is_error() && !was_error {
            info!(command = %command, error = self.state.display(), "calculation error");
        }

        &self.state
    }

    /// Apply a sequence of key presses
    pub fn press_all<I>(&mut self, commands: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.press(command);
        }
        &self.state
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn trace(&self) -> String {
        self.state.trace.render()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}
