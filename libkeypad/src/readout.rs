//! The display value and number formatting
//!
//! The readout is kept as text so that an in-progress entry such as `"12."`
//! survives until the next key. Every computation parses it back to `f64`.

use serde::{Deserialize, Serialize};

/// Token shown when an arithmetic reduction divides by zero
pub const ERROR_TOKEN: &str = "Error";

/// What the display currently shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Readout {
    /// A number, possibly mid-entry
    Entry(String),
    /// An error message replacing the number
    Error(String),
}

impl Default for Readout {
    fn default() -> Self {
        Readout::Entry("0".to_string())
    }
}

impl Readout {
    pub fn entry(text: impl Into<String>) -> Self {
        Readout::Entry(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Readout::Error(message.into())
    }

    /// Text to draw
    pub fn text(&self) -> &str {
        match self {
            Readout::Entry(text) | Readout::Error(text) => text.as_str(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Readout::Error(_))
    }

    /// Numeric value of the entry. Errors have none.
    pub fn value(&self) -> Option<f64> {
        match self {
            Readout::Entry(text) => text.parse::<f64>().ok(),
            Readout::Error(_) => None,
        }
    }
}

/// Render a value for the display.
///
/// Shortest round-trip decimal without exponent. `-0` prints as `0`;
/// non-finite values print as `Infinity`, `-Infinity` and `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Round to a fixed number of decimal places (not significant digits).
pub fn round_fixed(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}
