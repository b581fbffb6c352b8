//! CLI configuration management
//!
//! Settings come from four layers, later layers winning:
//! built-in defaults, the TOML file, `VIABILITY_*` environment variables and
//! command-line flags.
//!
//! ```toml
//! log_level = "info"
//!
//! [defaults]
//! discount_rate = 0.10
//! tax_rate = 0.21
//! project_years = 5
//! inflation_rate = 0.03
//! iterations = 1000
//! seed = 42
//! variation_pct = 20.0
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::{CliError, Result};

/// File read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "viability.toml";

/// Largest accepted Monte Carlo iteration count.
pub const MAX_ITERATIONS: usize = viability_risk::monte_carlo::MAX_ITERATIONS;

/// Longest accepted evaluation horizon in years.
pub const MAX_PROJECT_YEARS: u32 = 50;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid configuration value '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("Environment variable {var}='{value}' could not be parsed: {reason}")]
    EnvError {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Configuration file error: {0}")]
    FileError(#[from] toml::de::Error),
}

/// Log levels accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
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

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl LogLevel {
    /// Directive for `tracing_subscriber::EnvFilter`.
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

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Analysis parameters used when an input record leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisDefaults {
    /// Discount rate as a fraction.
    pub discount_rate: f64,
    /// Flat tax rate as a fraction.
    pub tax_rate: f64,
    /// Evaluation horizon in years.
    pub project_years: u32,
    /// Annual OpEx inflation as a fraction.
    pub inflation_rate: f64,
    /// Monte Carlo iterations.
    pub iterations: usize,
    /// Monte Carlo master seed; drawn from entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Sensitivity swing in percent.
    pub variation_pct: f64,
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            tax_rate: viability_finance::DEFAULT_TAX_RATE,
            project_years: 5,
            inflation_rate: 0.03,
            iterations: viability_risk::monte_carlo::DEFAULT_ITERATIONS,
            seed: None,
            variation_pct: viability_risk::sensitivity::DEFAULT_VARIATION_PCT,
        }
    }
}

/// Effective CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Level used when `RUST_LOG` is unset.
    pub log_level: LogLevel,
    /// Analysis defaults.
    pub defaults: AnalysisDefaults,
}

impl Config {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load the file layer and the environment layer.
    ///
    /// Without an explicit `path`, a missing [`DEFAULT_CONFIG_PATH`] means
    /// built-in defaults. An explicit path that does not exist is an error.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) if !Path::new(path).exists() => {
                return Err(CliError::FileNotFound(path.to_string()));
            }
            Some(path) => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_toml_str(&std::fs::read_to_string(DEFAULT_CONFIG_PATH)?)?
            }
            None => Self::default(),
        };
        config.apply_env_with(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Apply `VIABILITY_*` overrides read through `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> std::result::Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("VIABILITY_LOG_LEVEL") {
            self.log_level = value.parse()?;
        }

        let d = &mut self.defaults;
        if let Some(value) = lookup("VIABILITY_DISCOUNT_RATE") {
            d.discount_rate = parse_env("VIABILITY_DISCOUNT_RATE", value)?;
        }
        if let Some(value) = lookup("VIABILITY_TAX_RATE") {
            d.tax_rate = parse_env("VIABILITY_TAX_RATE", value)?;
        }
        if let Some(value) = lookup("VIABILITY_PROJECT_YEARS") {
            d.project_years = parse_env("VIABILITY_PROJECT_YEARS", value)?;
        }
        if let Some(value) = lookup("VIABILITY_INFLATION_RATE") {
            d.inflation_rate = parse_env("VIABILITY_INFLATION_RATE", value)?;
        }
        if let Some(value) = lookup("VIABILITY_ITERATIONS") {
            d.iterations = parse_env("VIABILITY_ITERATIONS", value)?;
        }
        if let Some(value) = lookup("VIABILITY_SEED") {
            d.seed = Some(parse_env("VIABILITY_SEED", value)?);
        }
        if let Some(value) = lookup("VIABILITY_VARIATION_PCT") {
            d.variation_pct = parse_env("VIABILITY_VARIATION_PCT", value)?;
        }
        Ok(())
    }

    /// Apply command-line flags, the highest-priority layer.
    pub fn apply_overrides(&mut self, iterations: Option<usize>, seed: Option<u64>) {
        if let Some(iterations) = iterations {
            self.defaults.iterations = iterations;
        }
        if seed.is_some() {
            self.defaults.seed = seed;
        }
    }

    /// Check ranges once every layer has been applied.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let d = &self.defaults;
        if !(0.0..=1.0).contains(&d.discount_rate) {
            return Err(invalid(
                "discount_rate",
                format!("must be within [0, 1], got {}", d.discount_rate),
            ));
        }
        if !(0.0..=1.0).contains(&d.tax_rate) {
            return Err(invalid(
                "tax_rate",
                format!("must be within [0, 1], got {}", d.tax_rate),
            ));
        }
        if d.inflation_rate.is_nan() || d.inflation_rate < 0.0 {
            return Err(invalid(
                "inflation_rate",
                format!("must be non-negative, got {}", d.inflation_rate),
            ));
        }
        if !(1..=MAX_PROJECT_YEARS).contains(&d.project_years) {
            return Err(invalid(
                "project_years",
                format!("must be within [1, {MAX_PROJECT_YEARS}], got {}", d.project_years),
            ));
        }
        if !(1..=MAX_ITERATIONS).contains(&d.iterations) {
            return Err(invalid(
                "iterations",
                format!("must be within [1, {MAX_ITERATIONS}], got {}", d.iterations),
            ));
        }
        if !(d.variation_pct > 0.0 && d.variation_pct < 100.0) {
            return Err(invalid(
                "variation_pct",
                format!("must be within (0, 100), got {}", d.variation_pct),
            ));
        }
        debug!(log_level = %self.log_level, "Configuration validated");
        Ok(())
    }
}

fn invalid(key: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { key, reason }
}

fn parse_env<T>(var: &'static str, value: String) -> std::result::Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::EnvError {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
