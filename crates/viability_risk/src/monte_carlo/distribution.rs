//! Input distributions for simulated parameters.

use super::rng::SimulationRng;
use crate::error::RiskError;
use rand_distr::{LogNormal, Normal, Triangular, Uniform};
use std::collections::BTreeMap;

/// Distribution a simulated parameter is drawn from.
///
/// Serialised with a `distribution` tag, e.g.
/// `{"distribution": "triangular", "low": 0.0, "mode": 0.1, "high": 0.3}`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "distribution", rename_all = "snake_case")
)]
pub enum DistributionSpec {
    /// Gaussian with the given mean and standard deviation.
    Normal {
        /// Mean.
        mean: f64,
        /// Standard deviation, non-negative.
        std: f64,
    },
    /// Uniform on `[low, high]`.
    Uniform {
        /// Lower bound.
        low: f64,
        /// Upper bound, at least `low`.
        high: f64,
    },
    /// Triangular on `[low, high]` peaking at `mode`.
    Triangular {
        /// Lower bound.
        low: f64,
        /// Most likely value, within `[low, high]`.
        mode: f64,
        /// Upper bound.
        high: f64,
    },
    /// `exp(N(mean, sigma))`; `mean` and `sigma` describe the underlying normal.
    #[cfg_attr(feature = "serde", serde(rename = "lognormal"))]
    LogNormal {
        /// Mean of the underlying normal.
        mean: f64,
        /// Standard deviation of the underlying normal, non-negative.
        sigma: f64,
    },
}

impl DistributionSpec {
    /// Lower-case kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            DistributionSpec::Normal { .. } => "normal",
            DistributionSpec::Uniform { .. } => "uniform",
            DistributionSpec::Triangular { .. } => "triangular",
            DistributionSpec::LogNormal { .. } => "lognormal",
        }
    }

    /// Build a distribution from a kind name and named parameters.
    ///
    /// Extra entries in `params` are ignored. The result is validated.
    ///
    /// # Errors
    ///
    /// - [`RiskError::UnsupportedDistribution`] for an unknown kind
    /// - [`RiskError::MissingDistributionParameter`] when a parameter is absent
    /// - [`RiskError::InvalidDistribution`] when the parameters are unusable
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use viability_risk::DistributionSpec;
    ///
    /// let params = BTreeMap::from([("mean".to_string(), 0.10), ("std".to_string(), 0.02)]);
    /// let spec = DistributionSpec::from_params("normal", &params).unwrap();
    /// assert_eq!(spec, DistributionSpec::Normal { mean: 0.10, std: 0.02 });
    ///
    /// assert!(DistributionSpec::from_params("beta", &params).is_err());
    /// ```
    pub fn from_params(kind: &str, params: &BTreeMap<String, f64>) -> Result<Self, RiskError> {
        let kind = kind.trim().to_ascii_lowercase();
        let spec = match kind.as_str() {
            "normal" => DistributionSpec::Normal {
                mean: required(params, "normal", "mean")?,
                std: required(params, "normal", "std")?,
            },
            "uniform" => DistributionSpec::Uniform {
                low: required(params, "uniform", "low")?,
                high: required(params, "uniform", "high")?,
            },
            "triangular" => DistributionSpec::Triangular {
                low: required(params, "triangular", "low")?,
                mode: required(params, "triangular", "mode")?,
                high: required(params, "triangular", "high")?,
            },
            "lognormal" => DistributionSpec::LogNormal {
                mean: required(params, "lognormal", "mean")?,
                sigma: required(params, "lognormal", "sigma")?,
            },
            _ => return Err(RiskError::UnsupportedDistribution(kind)),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check that the parameters describe a samplable distribution.
    ///
    /// # Errors
    ///
    /// [`RiskError::InvalidDistribution`] for non-finite parameters, a
    /// negative spread, `low > high` or a mode outside `[low, high]`.
    pub fn validate(&self) -> Result<(), RiskError> {
        let distribution = self.kind();
        let invalid = |reason: String| Err(RiskError::InvalidDistribution {
            distribution,
            reason,
        });

        match *self {
            DistributionSpec::Normal { mean: centre, std: spread }
            | DistributionSpec::LogNormal {
                mean: centre,
                sigma: spread,
            } => {
                if !centre.is_finite() || !spread.is_finite() {
                    return invalid("parameters must be finite".to_string());
                }
                if spread < 0.0 {
                    return invalid(format!("spread must be non-negative, got {spread}"));
                }
            }
            DistributionSpec::Uniform { low, high } => {
                if !(high - low).is_finite() {
                    return invalid("bounds and their range must be finite".to_string());
                }
                if low > high {
                    return invalid(format!("low ({low}) exceeds high ({high})"));
                }
            }
            DistributionSpec::Triangular { low, mode, high } => {
                if !low.is_finite() || !mode.is_finite() || !high.is_finite() {
                    return invalid("parameters must be finite".to_string());
                }
                if low > high {
                    return invalid(format!("low ({low}) exceeds high ({high})"));
                }
                if mode < low || mode > high {
                    return invalid(format!("mode ({mode}) outside [{low}, {high}]"));
                }
            }
        }
        Ok(())
    }

    /// Validate and prepare a sampler.
    pub fn sampler(&self) -> Result<Sampler, RiskError> {
        self.validate()?;
        let distribution = self.kind();
        let rejected = |reason: String| RiskError::InvalidDistribution {
            distribution,
            reason,
        };

        let sampler = match *self {
            DistributionSpec::Normal { mean, std } => {
                Sampler::Normal(Normal::new(mean, std).map_err(|e| rejected(e.to_string()))?)
            }
            DistributionSpec::Uniform { low, high } => {
                Sampler::Uniform(Uniform::new_inclusive(low, high))
            }
            DistributionSpec::Triangular { low, high, .. } if low == high => {
                Sampler::Constant(low)
            }
            DistributionSpec::Triangular { low, mode, high } => Sampler::Triangular(
                Triangular::new(low, high, mode).map_err(|e| rejected(e.to_string()))?,
            ),
            DistributionSpec::LogNormal { mean, sigma } => Sampler::LogNormal(
                LogNormal::new(mean, sigma).map_err(|e| rejected(e.to_string()))?,
            ),
        };
        Ok(sampler)
    }
}

fn required(
    params: &BTreeMap<String, f64>,
    distribution: &'static str,
    parameter: &'static str,
) -> Result<f64, RiskError> {
    params
        .get(parameter)
        .copied()
        .ok_or(RiskError::MissingDistributionParameter {
            distribution,
            parameter,
        })
}

/// A validated, ready-to-draw distribution.
#[derive(Debug, Clone)]
pub enum Sampler {
    /// Gaussian.
    Normal(Normal<f64>),
    /// Uniform on a closed interval.
    Uniform(Uniform<f64>),
    /// Triangular.
    Triangular(Triangular<f64>),
    /// Log-normal.
    LogNormal(LogNormal<f64>),
    /// Degenerate distribution with all mass on one value.
    Constant(f64),
}

impl Sampler {
    /// Draw one value.
    #[inline]
    pub fn sample(&self, rng: &mut SimulationRng) -> f64 {
        match self {
            Sampler::Normal(d) => rng.sample(d),
            Sampler::Uniform(d) => rng.sample(d),
            Sampler::Triangular(d) => rng.sample(d),
            Sampler::LogNormal(d) => rng.sample(d),
            Sampler::Constant(value) => *value,
        }
    }
}
