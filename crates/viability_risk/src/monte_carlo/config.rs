//! Monte Carlo simulation configuration.

use crate::error::RiskError;
use crate::parallel::{ParallelConfig, DEFAULT_CHUNK_SIZE};

/// Maximum number of iterations allowed.
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Iterations used when none are specified.
pub const DEFAULT_ITERATIONS: usize = 1_000;

/// Monte Carlo simulation configuration.
///
/// Immutable; use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use viability_risk::monte_carlo::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .iterations(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.iterations(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloConfig {
    iterations: usize,
    seed: Option<u64>,
    chunk_size: usize,
    parallel: ParallelConfig,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel: ParallelConfig::default(),
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of iterations to attempt.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the optional master seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the iterations per random stream.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the parallel execution settings.
    #[inline]
    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidConfig`] if:
    /// - `iterations` is 0 or greater than 10,000,000
    /// - `chunk_size` is 0
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(RiskError::InvalidConfig {
                name: "iterations",
                reason: format!(
                    "{} outside valid range [1, {MAX_ITERATIONS}]",
                    self.iterations
                ),
            });
        }
        if self.chunk_size == 0 {
            return Err(RiskError::InvalidConfig {
                name: "chunk_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields take their defaults: 1,000 iterations, no seed, chunks of
/// 256 iterations and the default parallel threshold.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    iterations: Option<usize>,
    seed: Option<u64>,
    chunk_size: Option<usize>,
    parallel: Option<ParallelConfig>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of iterations.
    ///
    /// # Arguments
    ///
    /// * `iterations` - Iterations in [1, 10_000_000]
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the master seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the master seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the iterations per random stream.
    ///
    /// Results depend on the chunk size but not on the thread count.
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Sets the parallel execution settings.
    #[inline]
    pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// See [`MonteCarloConfig::validate`].
    pub fn build(self) -> Result<MonteCarloConfig, RiskError> {
        let config = MonteCarloConfig {
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            seed: self.seed,
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            parallel: self.parallel.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
