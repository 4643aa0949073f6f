//! CLI configuration management
//!
//! Settings come from four sources, highest priority first:
//! 1. Command-line flags
//! 2. `BSM_*` environment variables
//! 3. TOML config file (`bsm.toml` by default; a missing file is not an error)
//! 4. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "BSM_LOG_LEVEL";
/// Environment variable overriding the journal file.
pub const ENV_LOG_FILE: &str = "BSM_LOG_FILE";
/// Environment variable overriding the session history file.
pub const ENV_HISTORY_FILE: &str = "BSM_HISTORY_FILE";
/// Environment variable overriding the parallel worker count.
pub const ENV_WORKERS: &str = "BSM_WORKERS";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Console log level (overridden by `RUST_LOG` when set)
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Append-only journal of priced results
    pub log_file: PathBuf,
    /// Session history carried between invocations
    pub history_file: PathBuf,
    /// Number of history lines loaded at start
    pub history_limit: usize,
    /// Implied-volatility pricing tolerance
    pub iv_tolerance: f64,
    /// Implied-volatility iteration cap
    pub iv_max_iterations: usize,
    /// Default Monte Carlo sample count
    pub mc_samples: usize,
    /// Default histogram bin count
    pub histogram_bins: usize,
    /// Default parallel worker count
    pub workers: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_file: PathBuf::from("bsm_sim_log.txt"),
            history_file: PathBuf::from("bsm_session_history.txt"),
            history_limit: 200,
            iv_tolerance: 1e-6,
            iv_max_iterations: 300,
            mc_samples: 100_000,
            histogram_bins: 30,
            workers: num_cpus::get(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `BSM_*` overrides read through `lookup`
    ///
    /// `lookup` is normally [`std::env::var`]; tests pass a map instead.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(log_file) = lookup(ENV_LOG_FILE) {
            self.log_file = PathBuf::from(log_file);
        }

        if let Some(history_file) = lookup(ENV_HISTORY_FILE) {
            self.history_file = PathBuf::from(history_file);
        }

        if let Some(workers) = lookup(ENV_WORKERS) {
            self.workers = workers.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_WORKERS.to_string(),
                value: workers.clone(),
            })?;
        }

        Ok(self)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Merge with command-line flags (flags take precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if let Some(history_file) = &cli.history_file {
            self.history_file = history_file.clone();
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !(self.iv_tolerance > 0.0 && self.iv_tolerance.is_finite()) {
            errors.push(format!(
                "iv_tolerance must be positive, got {}",
                self.iv_tolerance
            ));
        }
        if self.iv_max_iterations == 0 {
            errors.push("iv_max_iterations must be greater than 0".to_string());
        }
        if self.mc_samples == 0 {
            errors.push("mc_samples must be greater than 0".to_string());
        }
        if self.histogram_bins == 0 {
            errors.push("histogram_bins must be greater than 0".to_string());
        }
        if self.log_file.as_os_str().is_empty() {
            errors.push("log_file cannot be empty".to_string());
        }
        if self.history_file.as_os_str().is_empty() {
            errors.push("history_file cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: PathBuf,
    /// Log level override
    pub log_level: Option<String>,
    /// Journal file override
    pub log_file: Option<PathBuf>,
    /// History file override
    pub history_file: Option<PathBuf>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = CliConfig::load_or_default(&cli.config_file)?.with_env_overrides()?;
    config.merge_with_cli(cli)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.log_file, PathBuf::from("bsm_sim_log.txt"));
        assert_eq!(config.history_file, PathBuf::from("bsm_session_history.txt"));
        assert_eq!(config.history_limit, 200);
        assert_eq!(config.iv_tolerance, 1e-6);
        assert_eq!(config.iv_max_iterations, 300);
        assert_eq!(config.mc_samples, 100_000);
        assert_eq!(config.histogram_bins, 30);
        assert!(config.workers >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str(" Info ").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            log_level = "debug"
            mc_samples = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.mc_samples, 5000);
        assert_eq!(config.histogram_bins, 30);
    }

    #[test]
    fn test_invalid_log_level_in_toml() {
        let result: Result<CliConfig, _> = toml::from_str(r#"log_level = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = CliConfig::load_or_default(Path::new("/nonexistent/bsm.toml")).unwrap();
        assert_eq!(config.mc_samples, 100_000);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bsm.toml");
        std::fs::write(&path, "histogram_bins = 12\nworkers = 3\n").unwrap();

        let config = CliConfig::load_or_default(&path).unwrap();
        assert_eq!(config.histogram_bins, 12);
        assert_eq!(config.workers, 3);
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::default()
            .with_overrides(lookup_from(&[
                (ENV_LOG_LEVEL, "error"),
                (ENV_LOG_FILE, "/tmp/journal.txt"),
                (ENV_WORKERS, "6"),
            ]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.log_file, PathBuf::from("/tmp/journal.txt"));
        assert_eq!(config.workers, 6);
        assert_eq!(config.history_file, PathBuf::from("bsm_session_history.txt"));
    }

    #[test]
    fn test_bad_worker_override() {
        let err = CliConfig::default()
            .with_overrides(lookup_from(&[(ENV_WORKERS, "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_cli_beats_env() {
        let mut config = CliConfig::default()
            .with_overrides(lookup_from(&[(ENV_LOG_LEVEL, "error")]))
            .unwrap();
        let cli = CliOverrides {
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_validate_collects_errors() {
        let config = CliConfig {
            iv_tolerance: 0.0,
            iv_max_iterations: 0,
            mc_samples: 0,
            histogram_bins: 0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation errors, got {other:?}"),
        }
    }
}
