//! Memory register (M+, M-, MR, MC)

use serde::{Deserialize, Serialize};

/// A single optional memory cell, independent of the accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRegister(Option<f64>);

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// M+. An empty register counts as zero.
    pub fn accumulate(&mut self, value: f64) {
        self.0 = Some(self.0.unwrap_or(0.0) + value);
    }

    /// M-. An empty register counts as zero.
    pub fn subtract(&mut self, value: f64) {
        self.0 = Some(self.0.unwrap_or(0.0) - value);
    }

    /// MR
    pub fn recall(&self) -> Option<f64> {
        self.0
    }

    /// MC
    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
