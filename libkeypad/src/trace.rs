//! Expression trace
//!
//! The line above the readout that shows what was typed. It is bookkeeping
//! for the display only: nothing ever parses or evaluates it.

use serde::{Deserialize, Serialize};

use crate::types::Operator;

/// One token of the trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum TraceToken {
    Number(String),
    Operator(Operator),
    Open,
    Close,
}

impl TraceToken {
    pub fn text(&self) -> &str {
        match self {
            TraceToken::Number(text) => text.as_str(),
            TraceToken::Operator(op) => op.symbol(),
            TraceToken::Open => "(",
            TraceToken::Close => ")",
        }
    }
}

/// Ordered trace tokens plus the open-parenthesis counter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpressionTrace {
    tokens: Vec<TraceToken>,
    open_parens: u32,
}

impl ExpressionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_parens(&self) -> u32 {
        self.open_parens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First key of a new number
    pub fn start_number(&mut self, text: &str) {
        self.tokens.push(TraceToken::Number(text.to_string()));
    }

    /// Further keys of the number being typed
    pub fn append_to_number(&mut self, text: &str) {
        match self.tokens.last_mut() {
            Some(TraceToken::Number(current)) => current.push_str(text),
            _ => self.start_number(text),
        }
    }

    /// Replace the trailing number, or append one if the trace ends in
    /// anything else.
    pub fn set_number(&mut self, text: &str) {
        match self.tokens.last_mut() {
            Some(TraceToken::Number(current)) => *current = text.to_string(),
            _ => self.start_number(text),
        }
    }

    pub fn push_operator(&mut self, op: Operator) {
        self.tokens.push(TraceToken::Operator(op));
    }

    pub fn open_paren(&mut self) {
        self.open_parens += 1;
        self.tokens.push(TraceToken::Open);
    }

    /// Returns false (and leaves the trace alone) when nothing is open.
    pub fn close_paren(&mut self) -> bool {
        if self.open_parens == 0 {
            return false;
        }
        self.open_parens -= 1;
        self.tokens.push(TraceToken::Close);
        true
    }

    /// Rewrite the trailing `left op right` segment into the result.
    ///
    /// Parentheses around either operand stay where they are.
    pub fn collapse_reduction(&mut self, op: Operator, result: &str) {
        let op_index = self
            .tokens
            .iter()
            .rposition(|token| *token == TraceToken::Operator(op));

        let Some(index) = op_index else {
            self.set_number(result);
            return;
        };

        if let Some(offset) = self.tokens[index + 1..]
            .iter()
            .position(|token| matches!(token, TraceToken::Number(_)))
        {
            self.tokens.remove(index + 1 + offset);
        }
        self.tokens.remove(index);

        let result_token = TraceToken::Number(result.to_string());
        let left = self.tokens[..index]
            .iter()
            .rposition(|token| matches!(token, TraceToken::Number(_)));
        match left {
            Some(left) => self.tokens[left] = result_token,
            None => self.tokens.insert(index, result_token),
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
        self.open_parens = 0;
    }

    /// Tokens joined by single spaces
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(TraceToken::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
