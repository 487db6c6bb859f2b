//! CLI configuration management.
//!
//! Handles loading of the resolver policies, log level and output format
//! from a TOML file with environment variable override support.
//!
//! ```toml
//! log_level = "info"
//! precision = 4
//! samples = [0.0, 4.0, 5.0, 6.0]
//!
//! [resolver]
//! boundary = "wrap"
//! mode = "linear"
//! write_strategy = "blend"
//! ```

use floatlist_core::math::resolver::{BoundaryPolicy, ResolverConfig, SampleMode, WriteStrategy};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Largest number of fractional digits worth printing for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Environment variable holds an unusable value
    #[error("Environment variable {name}: {reason}")]
    EnvError { name: &'static str, reason: String },

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
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
        match s.to_lowercase().as_str() {
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
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Resolver policies applied to every command
    pub resolver: ResolverConfig,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: LogLevel,

    /// Fractional digits printed per value; shortest round-trip form if unset
    pub precision: Option<usize>,

    /// Samples used when none are given on the command line
    pub samples: Option<Vec<f64>>,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from `path`, or the default config when the file
    /// does not exist.
    ///
    /// Returns the configuration and whether it came from the file. A file
    /// that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Some(boundary) = env_value::<BoundaryPolicy>("FLOATLIST_BOUNDARY")? {
            self.resolver.boundary = boundary;
        }

        if let Some(mode) = env_value::<SampleMode>("FLOATLIST_MODE")? {
            self.resolver.mode = mode;
        }

        if let Some(strategy) = env_value::<WriteStrategy>("FLOATLIST_WRITE_STRATEGY")? {
            self.resolver.write_strategy = strategy;
        }

        if let Some(level) = env_value::<LogLevel>("FLOATLIST_LOG_LEVEL")? {
            self.log_level = level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                errors.push(format!(
                    "precision {} exceeds maximum allowed ({})",
                    precision, MAX_PRECISION
                ));
            }
        }

        if let Some(samples) = &self.samples {
            if samples.is_empty() {
                errors.push("samples cannot be empty".to_string());
            }
            if let Some(pos) = samples.iter().position(|s| !s.is_finite()) {
                errors.push(format!("samples[{}] is not a finite number", pos));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Parse the environment variable `name` if it is set.
fn env_value<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::EnvError {
                name,
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
