//! CLI error type.

use crate::config::ConfigError;
use thiserror::Error;
use viability_capacity::CapacityError;
use viability_finance::FinanceError;
use viability_risk::RiskError;

/// Errors surfaced by the `viability` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Financial analysis failed: {0}")]
    Finance(#[from] FinanceError),

    #[error("Capacity analysis failed: {0}")]
    Capacity(#[from] CapacityError),

    #[error("Risk analysis failed: {0}")]
    Risk(#[from] RiskError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
