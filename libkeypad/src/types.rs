//! Core types for keypad
//!
//! Every button on the keypad maps to exactly one [`Command`]. Front-ends
//! translate their own input (keys, clicks, argv tokens) into commands and
//! feed them to the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeypadError;

/// Binary operators handled by the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown in the expression trace
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Raw IEEE operation, no guards.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary scientific functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Square,
    Log10,
    Ln,
    Factorial,
    Reciprocal,
    Exp,
}

impl ScientificFn {
    pub const ALL: [ScientificFn; 10] = [
        ScientificFn::Sin,
        ScientificFn::Cos,
        ScientificFn::Tan,
        ScientificFn::Sqrt,
        ScientificFn::Square,
        ScientificFn::Log10,
        ScientificFn::Ln,
        ScientificFn::Factorial,
        ScientificFn::Reciprocal,
        ScientificFn::Exp,
    ];

    /// Keypad label
    pub fn label(&self) -> &'static str {
        match self {
            ScientificFn::Sin => "sin",
            ScientificFn::Cos => "cos",
            ScientificFn::Tan => "tan",
            ScientificFn::Sqrt => "√",
            ScientificFn::Square => "x²",
            ScientificFn::Log10 => "log",
            ScientificFn::Ln => "ln",
            ScientificFn::Factorial => "n!",
            ScientificFn::Reciprocal => "1/x",
            ScientificFn::Exp => "e^x",
        }
    }
}

/// Memory register commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryCommand {
    /// M+
    Add,
    /// M-
    Subtract,
    /// MR
    Recall,
    /// MC
    Clear,
}

impl MemoryCommand {
    pub fn label(&self) -> &'static str {
        match self {
            MemoryCommand::Add => "M+",
            MemoryCommand::Subtract => "M-",
            MemoryCommand::Recall => "MR",
            MemoryCommand::Clear => "MC",
        }
    }
}

/// A single keypad press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum Command {
    /// Digit 0-9
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    OpenParen,
    CloseParen,
    Memory(MemoryCommand),
    Scientific(ScientificFn),
}

impl Command {
    /// Keypad label for this command
    pub fn label(&self) -> String {
        match self {
            Command::Digit(d) => d.to_string(),
            Command::DecimalPoint => ".".to_string(),
            Command::Operator(op) => op.symbol().to_string(),
            Command::Equals => "=".to_string(),
            Command::Clear => "C".to_string(),
            Command::OpenParen => "(".to_string(),
            Command::CloseParen => ")".to_string(),
            Command::Memory(m) => m.label().to_string(),
            Command::Scientific(f) => f.label().to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Command {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lower = token.to_lowercase();

        let command = match lower.as_str() {
            d if d.len() == 1 && d.as_bytes()[0].is_ascii_digit() => {
                Command::Digit(d.as_bytes()[0] - b'0')
            }
            "." => Command::DecimalPoint,
            "+" => Command::Operator(Operator::Add),
            "-" | "−" => Command::Operator(Operator::Subtract),
            "*" | "x" | "×" => Command::Operator(Operator::Multiply),
            "/" | "÷" => Command::Operator(Operator::Divide),
            "=" => Command::Equals,
            "c" | "clear" => Command::Clear,
            "(" => Command::OpenParen,
            ")" => Command::CloseParen,
            "m+" => Command::Memory(MemoryCommand::Add),
            "m-" => Command::Memory(MemoryCommand::Subtract),
            "mr" => Command::Memory(MemoryCommand::Recall),
            "mc" => Command::Memory(MemoryCommand::Clear),
            "sin" => Command::Scientific(ScientificFn::Sin),
            "cos" => Command::Scientific(ScientificFn::Cos),
            "tan" => Command::Scientific(ScientificFn::Tan),
            "sqrt" | "√" => Command::Scientific(ScientificFn::Sqrt),
            "sq" | "x^2" | "x²" => Command::Scientific(ScientificFn::Square),
            "log" => Command::Scientific(ScientificFn::Log10),
            "ln" => Command::Scientific(ScientificFn::Ln),
            "!" | "n!" => Command::Scientific(ScientificFn::Factorial),
            "1/x" | "recip" => Command::Scientific(ScientificFn::Reciprocal),
            "exp" | "e^x" => Command::Scientific(ScientificFn::Exp),
            _ => {
                return Err(KeypadError::InvalidInput(format!(
                    "unknown key '{}'",
                    token
                )))
            }
        };

        Ok(command)
    }
}

/// Parse one input token into the key presses it stands for.
///
/// Plain key tokens map to one command. Numeric tokens such as `12` or
/// `3.5` expand into one press per character, the way they would be typed.
pub fn tokenize(token: &str) -> Result<Vec<Command>, KeypadError> {
    let token = token.trim();

    let is_number = token.len() > 1
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().any(|c| c.is_ascii_digit());

    if is_number {
        return token
            .chars()
            .map(|c| c.to_string().parse::<Command>())
            .collect();
    }

    Ok(vec![token.parse()?])
}

/// Parse a whitespace separated key sequence.
pub fn parse_keys<'a, I>(tokens: I) -> Result<Vec<Command>, KeypadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut commands = Vec::new();
    for token in tokens {
        commands.extend(tokenize(token)?);
    }
    Ok(commands)
}
