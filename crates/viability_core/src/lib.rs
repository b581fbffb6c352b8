//! # viability_core: Numeric Foundation for Investment Viability Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! viability_core is the bottom layer of the workspace, providing:
//! - Root-finding solvers used for internal rate of return (`math::solvers`)
//! - Descriptive statistics over simulated samples (`math::statistics`)
//! - Error types: `SolverError`, `StatisticsError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other viability_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use viability_core::math::solvers::{BrentSolver, SolverConfig};
//! use viability_core::math::statistics::percentile;
//!
//! // Rate at which 1000 invested returns 1100 after one year
//! let solver = BrentSolver::new(SolverConfig::default());
//! let rate = solver.find_root(|r: f64| 1100.0 / (1.0 + r) - 1000.0, 0.0, 1.0).unwrap();
//! assert!((rate - 0.10).abs() < 1e-9);
//!
//! // Linear-interpolated percentile
//! let p50 = percentile(&[1.0, 2.0, 3.0, 4.0], 50.0).unwrap();
//! assert!((p50 - 2.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for error and summary types

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;
