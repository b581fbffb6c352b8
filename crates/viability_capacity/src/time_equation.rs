//! Time equations for processes with conditional steps.
//!
//! A [`TimeEquation`] is a rule table: a base unit time plus increments that
//! apply when a named condition is active (an international order, a rush
//! order, a custom configuration). It is built once and evaluated against
//! many condition sets.

use tracing::debug;

/// Extra minutes added when `condition` is active.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalTime {
    /// Condition name.
    pub condition: String,
    /// Minutes added per transaction.
    pub additional_time: f64,
}

impl ConditionalTime {
    /// New increment.
    pub fn new(condition: impl Into<String>, additional_time: f64) -> Self {
        Self {
            condition: condition.into(),
            additional_time,
        }
    }
}

/// Base unit time plus conditional increments.
///
/// # Example
///
/// ```
/// use viability_capacity::{build_time_equation, ConditionalTime};
///
/// let order_time = build_time_equation(
///     8.0,
///     vec![
///         ConditionalTime::new("international", 5.0),
///         ConditionalTime::new("custom", 3.0),
///     ],
/// );
///
/// assert_eq!(order_time.unit_time(&["international", "custom"]), 16.0);
/// assert_eq!(order_time.unit_time::<&str>(&[]), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeEquation {
    /// Minutes per transaction with no condition active.
    pub base_time: f64,
    /// Increments in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub increments: Vec<ConditionalTime>,
}

/// Compile a time equation from a base time and its increments.
pub fn build_time_equation(base_time: f64, increments: Vec<ConditionalTime>) -> TimeEquation {
    TimeEquation {
        base_time,
        increments,
    }
}

impl TimeEquation {
    /// Unit time for a set of active conditions.
    ///
    /// Each increment applies at most once however often its condition
    /// appears in `active`. Unknown active conditions are ignored.
    pub fn unit_time<S: AsRef<str>>(&self, active: &[S]) -> f64 {
        self.increments
            .iter()
            .filter(|inc| active.iter().any(|c| c.as_ref() == inc.condition))
            .fold(self.base_time, |time, inc| time + inc.additional_time)
    }
}

/// A named mix of active conditions with its volume.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionScenario {
    /// Scenario name.
    pub name: String,
    /// Active conditions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: Vec<String>,
    /// Transactions per period.
    #[cfg_attr(feature = "serde", serde(default = "default_volume"))]
    pub volume: u64,
}

#[cfg(feature = "serde")]
fn default_volume() -> u64 {
    1
}

impl ConditionScenario {
    /// New scenario.
    pub fn new<I, S>(name: impl Into<String>, conditions: I, volume: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            conditions: conditions.into_iter().map(Into::into).collect(),
            volume,
        }
    }
}

/// Time and cost of one scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioTime {
    /// Scenario name.
    pub scenario_name: String,
    /// Active conditions.
    pub conditions: Vec<String>,
    /// Transactions per period.
    pub volume: u64,
    /// Minutes per transaction.
    pub unit_time_minutes: f64,
    /// Minutes per period.
    pub total_time_minutes: f64,
    /// Cost per period.
    pub total_cost: f64,
}

/// Result of [`analyze_process_complexity`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexityAnalysis {
    /// Per-scenario figures.
    pub scenarios: Vec<ScenarioTime>,
    /// Minutes per period over all scenarios.
    pub total_time_minutes: f64,
    /// Cost per period over all scenarios.
    pub total_cost: f64,
    /// Volume-weighted mean unit time, 0 without volume.
    pub average_unit_time: f64,
}

/// Evaluate a time equation over named condition scenarios.
pub fn analyze_process_complexity(
    equation: &TimeEquation,
    scenarios: &[ConditionScenario],
    capacity_cost_rate: f64,
) -> ComplexityAnalysis {
    let rows: Vec<ScenarioTime> = scenarios
        .iter()
        .map(|scenario| {
            let unit_time = equation.unit_time(&scenario.conditions);
            let total_time = unit_time * scenario.volume as f64;
            ScenarioTime {
                scenario_name: scenario.name.clone(),
                conditions: scenario.conditions.clone(),
                volume: scenario.volume,
                unit_time_minutes: unit_time,
                total_time_minutes: total_time,
                total_cost: total_time * capacity_cost_rate,
            }
        })
        .collect();

    let total_time_minutes: f64 = rows.iter().map(|r| r.total_time_minutes).sum();
    let total_cost = rows.iter().map(|r| r.total_cost).sum();
    let total_volume: f64 = scenarios.iter().map(|s| s.volume as f64).sum();
    let average_unit_time = if total_volume == 0.0 {
        0.0
    } else {
        total_time_minutes / total_volume
    };

    ComplexityAnalysis {
        scenarios: rows,
        total_time_minutes,
        total_cost,
        average_unit_time,
    }
}

/// A candidate redesign of a process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessVariant {
    /// Variant name.
    pub name: String,
    /// Time equation after the change.
    pub time_equation: TimeEquation,
    /// One-off cost of the change.
    #[cfg_attr(feature = "serde", serde(default))]
    pub investment: f64,
}

/// A variant measured against the current process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantComparison {
    /// Variant name.
    pub name: String,
    /// One-off cost of the change.
    pub investment: f64,
    /// Variant evaluated over the shared scenarios.
    pub analysis: ComplexityAnalysis,
    /// Minutes saved per period versus current.
    pub time_saved_minutes: f64,
    /// Cost saved per period versus current.
    pub cost_saved: f64,
    /// Periods to recover the investment; infinite when nothing is saved.
    pub payback_periods: f64,
}

/// Current process and all candidates over the same scenarios.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessComparison {
    /// Current process.
    pub current: ComplexityAnalysis,
    /// Candidates in input order.
    pub variants: Vec<VariantComparison>,
}

/// Compare process variants with the current process.
///
/// Every variant is evaluated against the same condition scenarios at the
/// same cost rate. A variant with zero investment and positive savings pays
/// back immediately.
///
/// # Example
///
/// ```
/// use viability_capacity::{
///     build_time_equation, compare_process_variants, ConditionScenario, ConditionalTime,
///     ProcessVariant,
/// };
///
/// let current = build_time_equation(10.0, vec![ConditionalTime::new("manual_check", 6.0)]);
/// let automated = ProcessVariant {
///     name: "Automated check".to_string(),
///     time_equation: build_time_equation(10.0, vec![ConditionalTime::new("manual_check", 1.0)]),
///     investment: 25_000.0,
/// };
/// let scenarios = vec![ConditionScenario::new("Checked", ["manual_check"], 1_000)];
///
/// let comparison = compare_process_variants(&current, &[automated], &scenarios, 1.0);
/// assert_eq!(comparison.variants[0].time_saved_minutes, 5_000.0);
/// assert_eq!(comparison.variants[0].payback_periods, 5.0);
/// ```
pub fn compare_process_variants(
    current: &TimeEquation,
    variants: &[ProcessVariant],
    scenarios: &[ConditionScenario],
    capacity_cost_rate: f64,
) -> ProcessComparison {
    let baseline = analyze_process_complexity(current, scenarios, capacity_cost_rate);

    let compared = variants
        .iter()
        .map(|variant| {
            let analysis =
                analyze_process_complexity(&variant.time_equation, scenarios, capacity_cost_rate);
            let time_saved_minutes = baseline.total_time_minutes - analysis.total_time_minutes;
            let cost_saved = baseline.total_cost - analysis.total_cost;
            let payback_periods = if cost_saved > 0.0 {
                variant.investment / cost_saved
            } else {
                f64::INFINITY
            };
            VariantComparison {
                name: variant.name.clone(),
                investment: variant.investment,
                analysis,
                time_saved_minutes,
                cost_saved,
                payback_periods,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        variants = compared.len(),
        baseline_cost = baseline.total_cost,
        "Compared process variants"
    );

    ProcessComparison {
        current: baseline,
        variants: compared,
    }
}
