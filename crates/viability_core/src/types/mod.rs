//! Core error types shared by the numeric routines.
//!
//! # Re-exports
//!
//! - [`SolverError`], [`StatisticsError`] from `error`

pub mod error;

pub use error::{SolverError, StatisticsError};
