//! Error types for keypad

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeypadError>;

#[derive(Error, Debug)]
pub enum KeypadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeypadError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            KeypadError::InvalidInput(_) => 3,
            KeypadError::Config(_) => 1,
            KeypadError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Calculation failures.
///
/// These never abort a session: the engine turns them into the readout text,
/// which is exactly the `Display` output of the variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Invalid input")]
    Domain,

    #[error("Undefined")]
    Undefined,

    #[error("Overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = KeypadError::InvalidInput("unknown key 'foo'".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let config_error = ConfigError::MissingField("engine.precision".to_string());
        let error = KeypadError::Config(config_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_io_error() {
        let error = KeypadError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        ));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = KeypadError::InvalidInput("unknown key 'foo'".to_string());
        assert_eq!(format!("{}", error), "Invalid input: unknown key 'foo'");
    }

    #[test]
    fn test_error_message_formatting_invalid_value() {
        let error = KeypadError::Config(ConfigError::InvalidValue {
            field: "engine.precision".to_string(),
            reason: "must be at most 15".to_string(),
        });
        assert_eq!(
            format!("{}", error),
            "Configuration error: Invalid value for engine.precision: must be at most 15"
        );
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("test".to_string());
        let keypad_error: KeypadError = config_error.into();

        match keypad_error {
            KeypadError::Config(_) => {}
            _ => panic!("Expected KeypadError::Config"),
        }
    }

    #[test]
    fn test_calc_error_readout_text() {
        assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalcError::Domain.to_string(), "Invalid input");
        assert_eq!(CalcError::Undefined.to_string(), "Undefined");
        assert_eq!(CalcError::Overflow.to_string(), "Overflow");
    }
}
