//! Descriptive statistics over simulated samples.
//!
//! Conventions:
//! - Standard deviation is the population form (divide by `n`).
//! - Percentiles interpolate linearly between order statistics, so
//!   `percentile(x, p)` sits at fractional rank `p/100 * (n - 1)`.

use crate::types::StatisticsError;

/// Arithmetic mean.
///
/// # Errors
///
/// [`StatisticsError::EmptySample`] when `values` is empty.
pub fn mean(values: &[f64]) -> Result<f64, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptySample);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation, `sqrt(sum((x - mean)^2) / n)`.
///
/// # Errors
///
/// [`StatisticsError::EmptySample`] when `values` is empty.
pub fn std_dev(values: &[f64]) -> Result<f64, StatisticsError> {
    let m = mean(values)?;
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Linear-interpolated percentile of an unsorted sample.
///
/// Sorts a copy of `values`; the input is left untouched.
///
/// # Arguments
///
/// * `values` - Sample observations
/// * `p` - Percentile in `[0, 100]`
///
/// # Errors
///
/// - [`StatisticsError::EmptySample`] when `values` is empty
/// - [`StatisticsError::InvalidPercentile`] when `p` is outside `[0, 100]`
///
/// # Example
///
/// ```
/// use viability_core::math::statistics::percentile;
///
/// let sample = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&sample, 0.0).unwrap(), 1.0);
/// assert_eq!(percentile(&sample, 100.0).unwrap(), 4.0);
/// assert!((percentile(&sample, 25.0).unwrap() - 1.75).abs() < 1e-12);
/// ```
pub fn percentile(values: &[f64], p: f64) -> Result<f64, StatisticsError> {
    let sorted = sorted_copy(values)?;
    percentile_sorted(&sorted, p)
}

/// Percentile of a sample already sorted in ascending order.
///
/// Same conventions as [`percentile`], without the sort.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Result<f64, StatisticsError> {
    if sorted.is_empty() {
        return Err(StatisticsError::EmptySample);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(StatisticsError::InvalidPercentile(p));
    }

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Median, the 50th percentile.
pub fn median(values: &[f64]) -> Result<f64, StatisticsError> {
    percentile(values, 50.0)
}

fn sorted_copy(values: &[f64]) -> Result<Vec<f64>, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptySample);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted)
}

/// Location and spread of a sample in one pass over a sorted copy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSummary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// 50th percentile.
    pub median: f64,
}

impl SampleSummary {
    /// Summarise a non-empty sample.
    ///
    /// # Errors
    ///
    /// [`StatisticsError::EmptySample`] when `values` is empty.
    pub fn from_values(values: &[f64]) -> Result<Self, StatisticsError> {
        let sorted = sorted_copy(values)?;
        Ok(Self {
            count: values.len(),
            mean: mean(values)?,
            std_dev: std_dev(values)?,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median: percentile_sorted(&sorted, 50.0)?,
        })
    }

    /// Coefficient of variation, `std_dev / |mean|`.
    ///
    /// Infinite when the mean is exactly zero.
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            f64::INFINITY
        } else {
            self.std_dev / self.mean.abs()
        }
    }
}
