//! Monte Carlo simulation of project NPV.
//!
//! This module provides:
//! - [`DistributionSpec`]: normal, uniform, triangular and log-normal inputs
//! - [`MonteCarloConfig`]: iterations, seed and chunking, built through a
//!   validating builder
//! - [`SimulationRng`]: seeded generator with per-chunk sub-seeds
//! - [`NpvEvaluator`]: the model being simulated
//! - [`monte_carlo_simulation`]: the run itself, returning a
//!   [`MonteCarloResult`]
//!
//! # Reproducibility
//!
//! A run is a pure function of (master seed, distributions, iterations, chunk
//! size). Thread count never changes the samples or their order.

mod config;
mod distribution;
mod evaluator;
mod result;
mod rng;
mod simulation;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_ITERATIONS, MAX_ITERATIONS};
pub use distribution::{DistributionSpec, Sampler};
pub use evaluator::{NpvEvaluator, SampledParameters};
pub use result::{MonteCarloResult, Percentiles};
pub use rng::{derive_seed, entropy_seed, SimulationRng};
pub use simulation::monte_carlo_simulation;
