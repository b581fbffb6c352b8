//! One-at-a-time sensitivity analysis (tornado ranking).

use crate::error::{EvaluationError, RiskError};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, warn};

/// Default swing applied to each parameter, in percent.
pub const DEFAULT_VARIATION_PCT: f64 = 20.0;

type NpvFn<'a> = Box<dyn Fn(f64) -> Result<f64, EvaluationError> + Send + Sync + 'a>;

/// A parameter to vary, with the NPV as a function of its value.
pub struct SensitivityParameter<'a> {
    name: String,
    base_value: f64,
    npv_fn: NpvFn<'a>,
}

impl<'a> SensitivityParameter<'a> {
    /// Parameter `name` at `base_value`, evaluated through `npv_fn`.
    pub fn new<F>(name: impl Into<String>, base_value: f64, npv_fn: F) -> Self
    where
        F: Fn(f64) -> Result<f64, EvaluationError> + Send + Sync + 'a,
    {
        Self {
            name: name.into(),
            base_value,
            npv_fn: Box::new(npv_fn),
        }
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base value.
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// NPV with the parameter set to `value`.
    pub fn npv_at(&self, value: f64) -> Result<f64, EvaluationError> {
        (self.npv_fn)(value)
    }
}

impl fmt::Debug for SensitivityParameter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensitivityParameter")
            .field("name", &self.name)
            .field("base_value", &self.base_value)
            .finish_non_exhaustive()
    }
}

/// NPV swing caused by one parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityRecord {
    /// Parameter name.
    pub parameter: String,
    /// Base value.
    pub base_value: f64,
    /// `base * (1 - variation)`.
    pub low_value: f64,
    /// `base * (1 + variation)`.
    pub high_value: f64,
    /// NPV at the base case.
    pub npv_base: f64,
    /// NPV at `low_value`.
    pub npv_low: f64,
    /// NPV at `high_value`.
    pub npv_high: f64,
    /// `|npv_high - npv_low|`.
    pub impact: f64,
    /// `impact / |npv_base| * 100`, or 0 when the base NPV is zero.
    pub impact_pct: f64,
}

/// Vary each parameter by `±variation_pct` percent and rank the NPV swings.
///
/// Parameters are evaluated in parallel. A parameter whose evaluation fails,
/// or yields a non-finite NPV, is left out of the result; the rest are
/// still reported. Records are sorted by impact, largest first; equal
/// impacts keep input order.
///
/// # Errors
///
/// [`RiskError::InvalidInput`] when `variation_pct` is negative or not finite.
///
/// # Example
///
/// ```
/// use viability_risk::sensitivity::{sensitivity_analysis, SensitivityParameter};
///
/// let parameters = vec![
///     SensitivityParameter::new("benefits", 100.0, |v| Ok(3.0 * v - 250.0)),
///     SensitivityParameter::new("costs", 10.0, |v| Ok(50.0 - v)),
/// ];
/// let tornado = sensitivity_analysis(50.0, &parameters, 20.0).unwrap();
///
/// assert_eq!(tornado[0].parameter, "benefits");
/// assert!((tornado[0].impact - 120.0).abs() < 1e-9);
/// assert!((tornado[1].impact - 4.0).abs() < 1e-9);
/// ```
pub fn sensitivity_analysis(
    base_npv: f64,
    parameters: &[SensitivityParameter<'_>],
    variation_pct: f64,
) -> Result<Vec<SensitivityRecord>, RiskError> {
    if !variation_pct.is_finite() || variation_pct < 0.0 {
        return Err(RiskError::InvalidInput {
            field: "variation_pct",
            reason: format!("must be a non-negative number, got {variation_pct}"),
        });
    }
    let variation = variation_pct / 100.0;

    let outcomes: Vec<Result<SensitivityRecord, &str>> = parameters
        .par_iter()
        .map(|parameter| {
            evaluate(parameter, base_npv, variation).ok_or(parameter.name())
        })
        .collect();

    let mut records = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(record) => records.push(record),
            Err(name) => skipped.push(name),
        }
    }
    if !skipped.is_empty() {
        warn!(
            skipped = skipped.len(),
            parameters = ?skipped,
            "Skipped sensitivity parameters that failed to evaluate"
        );
    }

    records.sort_by(|a, b| b.impact.total_cmp(&a.impact));
    debug!(
        parameters = records.len(),
        top = ?records.first().map(|r| r.parameter.as_str()),
        "Completed sensitivity analysis"
    );
    Ok(records)
}

fn evaluate(
    parameter: &SensitivityParameter<'_>,
    base_npv: f64,
    variation: f64,
) -> Option<SensitivityRecord> {
    let base_value = parameter.base_value();
    let low_value = base_value * (1.0 - variation);
    let high_value = base_value * (1.0 + variation);

    let npv_low = parameter.npv_at(low_value).ok().filter(|v| v.is_finite())?;
    let npv_high = parameter.npv_at(high_value).ok().filter(|v| v.is_finite())?;

    let impact = (npv_high - npv_low).abs();
    let impact_pct = if base_npv != 0.0 {
        impact / base_npv.abs() * 100.0
    } else {
        0.0
    };

    Some(SensitivityRecord {
        parameter: parameter.name().to_string(),
        base_value,
        low_value,
        high_value,
        npv_base: base_npv,
        npv_low,
        npv_high,
        impact,
        impact_pct,
    })
}
