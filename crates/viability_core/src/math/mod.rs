//! Numerical building blocks.
//!
//! - [`solvers`]: root finding (Newton-Raphson, Brent, bracket search)
//! - [`statistics`]: moments and percentiles of simulated samples

pub mod solvers;
pub mod statistics;
