//! Summary statistics of a simulated NPV distribution.

use crate::error::RiskError;
use viability_core::math::statistics::{mean, percentile_sorted, std_dev};

/// The seven reported percentiles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percentiles {
    /// 5th percentile.
    pub p5: f64,
    /// 10th percentile.
    pub p10: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median.
    pub p50: f64,
    /// 75th percentile.
    pub p75: f64,
    /// 90th percentile.
    pub p90: f64,
    /// 95th percentile.
    pub p95: f64,
}

/// Output of a Monte Carlo run.
///
/// Standard deviation is the population form; percentiles interpolate
/// linearly between order statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloResult {
    /// Samples that produced a finite NPV.
    pub iterations: usize,
    /// Samples attempted.
    pub requested_iterations: usize,
    /// Master seed of the run; rerunning with it reproduces the result.
    pub seed: u64,
    /// Mean NPV.
    pub mean: f64,
    /// Median NPV.
    pub median: f64,
    /// Standard deviation of NPV.
    pub std: f64,
    /// Smallest NPV.
    pub min: f64,
    /// Largest NPV.
    pub max: f64,
    /// Named percentiles.
    pub percentiles: Percentiles,
    /// Share of samples with NPV above zero, in percent.
    pub probability_positive_npv: f64,
    /// 5th percentile of NPV.
    pub value_at_risk_5pct: f64,
    /// `(p5, p95)`.
    pub confidence_interval_95: (f64, f64),
    /// Successful NPVs in sampling order.
    pub distribution_data: Vec<f64>,
}

impl MonteCarloResult {
    /// Summarise successful samples.
    ///
    /// # Errors
    ///
    /// [`RiskError::NoSuccessfulSamples`] when `samples` is empty.
    pub fn from_samples(
        samples: Vec<f64>,
        requested_iterations: usize,
        seed: u64,
    ) -> Result<Self, RiskError> {
        if samples.is_empty() {
            return Err(RiskError::NoSuccessfulSamples {
                requested: requested_iterations,
            });
        }

        let mut sorted = samples.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let at = |p: f64| percentile_sorted(&sorted, p);
        let percentiles = Percentiles {
            p5: at(5.0)?,
            p10: at(10.0)?,
            p25: at(25.0)?,
            p50: at(50.0)?,
            p75: at(75.0)?,
            p90: at(90.0)?,
            p95: at(95.0)?,
        };

        let positive = samples.iter().filter(|&&npv| npv > 0.0).count();

        Ok(Self {
            iterations: samples.len(),
            requested_iterations,
            seed,
            mean: mean(&samples)?,
            median: percentiles.p50,
            std: std_dev(&samples)?,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            probability_positive_npv: positive as f64 / samples.len() as f64 * 100.0,
            value_at_risk_5pct: percentiles.p5,
            confidence_interval_95: (percentiles.p5, percentiles.p95),
            percentiles,
            distribution_data: samples,
        })
    }

    /// `std / |mean|`; infinite when the mean is exactly zero.
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            f64::INFINITY
        } else {
            self.std / self.mean.abs()
        }
    }

    /// Samples that failed or returned a non-finite NPV.
    pub fn failed_iterations(&self) -> usize {
        self.requested_iterations - self.iterations
    }
}
