//! Configuration management for keypad
//!
//! The calculator runs fine without any file; front-ends load one if it
//! exists and fall back to defaults otherwise.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Widest rounding `format!` can round-trip meaningfully for an f64
pub const MAX_PRECISION: u32 = 15;

/// Largest n whose factorial is a finite f64
pub const MAX_FACTORIAL: u32 = 170;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub logging: LoggingSection,
}

/// Options that shape calculation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Decimal places kept on scientific results
    pub precision: u32,
    /// Largest factorial input; 170! is the last finite f64
    pub max_factorial: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: 8,
            max_factorial: MAX_FACTORIAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: String,
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error: defaults are returned.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.engine.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidValue {
                field: "engine.precision".to_string(),
                reason: format!("must be at most {}", MAX_PRECISION),
            }
            .into());
        }
        if self.engine.max_factorial > MAX_FACTORIAL {
            return Err(ConfigError::InvalidValue {
                field: "engine.max_factorial".to_string(),
                reason: format!("must be at most {}", MAX_FACTORIAL),
            }
            .into());
        }
        if self.logging.format.parse::<crate::logging::LogFormat>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format".to_string(),
                reason: format!("unknown format '{}'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("KEYPAD_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("keypad").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.engine.precision, 8);
        assert_eq!(config.engine.max_factorial, 170);
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[engine]\nprecision = 4\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.engine.precision, 4);
        assert_eq!(config.engine.max_factorial, 170);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_precision_out_of_range_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[engine]\nprecision = 40\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("engine.precision"));
    }

    #[test]
    fn test_factorial_cap_above_finite_range_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[engine]\nmax_factorial = 4000000000\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("engine.max_factorial"));
    }

    #[test]
    fn test_factorial_cap_at_limit_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[engine]\nmax_factorial = 170\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.engine.max_factorial, MAX_FACTORIAL);
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[engine\nprecision = ").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    #[serial]
    fn test_env_override_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[engine]\nmax_factorial = 20\n").unwrap();

        std::env::set_var("KEYPAD_CONFIG", &path);
        let config = Config::load();
        std::env::remove_var("KEYPAD_CONFIG");

        assert_eq!(config.unwrap().engine.max_factorial, 20);
    }

    #[test]
    #[serial]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        std::env::set_var("KEYPAD_CONFIG", &path);
        let config = Config::load();
        std::env::remove_var("KEYPAD_CONFIG");

        assert_eq!(config.unwrap(), Config::default());
    }
}
