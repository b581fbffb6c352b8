//! Side-by-side evaluation of the three templates.

use super::generator::{generate_scenario, Scenario};
use super::template::ScenarioTemplate;
use tracing::debug;
use viability_finance::metrics::{comprehensive_metrics, FinancialMetrics, MetricsInputs};

/// Payback below this many years counts as acceptable for the best-NPV
/// scenario.
pub const ACCEPTABLE_PAYBACK_YEARS: f64 = 3.0;

const BOTH_REASON: &str = "This scenario offers both the highest NPV and fastest payback period.";
const VALUE_REASON: &str = "This scenario maximizes value with acceptable payback period.";
const RISK_ADJUSTED_REASON: &str = "This scenario offers the best risk-adjusted return.";

/// A scenario together with its metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioResult {
    /// Scenario figures.
    pub scenario: Scenario,
    /// Metrics for the scenario.
    pub financial_metrics: FinancialMetrics,
}

/// One row of the NPV ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedScenario {
    /// Template.
    pub scenario: ScenarioTemplate,
    /// Display name.
    pub name: String,
    /// Net present value.
    pub npv: f64,
    /// ROI in percent.
    pub roi_pct: f64,
    /// Simple payback in years.
    pub payback_years: f64,
    /// Risk score (1-10).
    pub risk_score: u8,
    /// Scenario CapEx.
    pub capex: f64,
}

impl RankedScenario {
    /// `risk_score / (npv + 1)`; lower is better. Infinite when `npv = -1`.
    pub fn risk_adjusted_key(&self) -> f64 {
        let denominator = self.npv + 1.0;
        if denominator == 0.0 {
            f64::INFINITY
        } else {
            f64::from(self.risk_score) / denominator
        }
    }
}

/// Which rule selected the recommended scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecommendationBasis {
    /// Highest NPV and fastest payback coincide.
    NpvAndPayback,
    /// Highest NPV is positive and pays back within three years.
    ValueWithAcceptablePayback,
    /// Fallback to the best risk-adjusted scenario.
    RiskAdjusted,
}

impl RecommendationBasis {
    /// Explanatory sentence for the rule.
    pub fn reason(&self) -> &'static str {
        match self {
            RecommendationBasis::NpvAndPayback => BOTH_REASON,
            RecommendationBasis::ValueWithAcceptablePayback => VALUE_REASON,
            RecommendationBasis::RiskAdjusted => RISK_ADJUSTED_REASON,
        }
    }
}

/// Recommended template with its rationale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Recommended template.
    pub recommended_scenario: ScenarioTemplate,
    /// Rule that fired.
    pub basis: RecommendationBasis,
    /// Rationale text.
    pub reason: String,
}

/// Ranking and winners across the three scenarios.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioComparison {
    /// Scenarios ordered by NPV, highest first; ties keep template order.
    pub ranking_by_npv: Vec<RankedScenario>,
    /// Highest NPV.
    pub best_npv: ScenarioTemplate,
    /// Shortest simple payback.
    pub best_payback: ScenarioTemplate,
    /// Lowest `risk_score / (npv + 1)`.
    pub best_risk_adjusted: ScenarioTemplate,
    /// Synthesised recommendation.
    pub recommendation: Recommendation,
}

/// Output of [`compare_scenarios`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioComparisonReport {
    /// The three scenarios in template order.
    pub scenarios: Vec<ScenarioResult>,
    /// Ranking and recommendation.
    pub comparison: ScenarioComparison,
}

/// Generate all three templates, evaluate each and rank them.
///
/// Each scenario's CapEx serves as both initial investment and invested
/// capital; ROIC uses the default tax rate. The recommendation rule is:
///
/// 1. If the best-NPV and best-payback scenarios coincide, recommend it.
/// 2. Else if the best-NPV scenario has positive NPV and pays back in under
///    three years, recommend it.
/// 3. Otherwise recommend the best risk-adjusted scenario.
///
/// # Example
///
/// ```
/// use viability_risk::{compare_scenarios, ScenarioTemplate};
///
/// let report = compare_scenarios(500_000.0, 50_000.0, 200_000.0, 5, 0.10);
/// assert_eq!(report.scenarios.len(), 3);
/// assert_eq!(report.comparison.best_npv, ScenarioTemplate::BudgetConscious);
/// assert!(!report.comparison.recommendation.reason.is_empty());
/// ```
pub fn compare_scenarios(
    base_capex: f64,
    base_opex: f64,
    base_benefits: f64,
    project_years: u32,
    discount_rate: f64,
) -> ScenarioComparisonReport {
    let scenarios: Vec<ScenarioResult> = ScenarioTemplate::ALL
        .iter()
        .map(|&template| {
            let scenario = generate_scenario(template, base_capex, base_opex, base_benefits);
            let inputs = MetricsInputs::new(
                scenario.capex,
                scenario.annual_benefits,
                scenario.opex_yearly,
                project_years,
                discount_rate,
                scenario.capex,
            );
            ScenarioResult {
                financial_metrics: comprehensive_metrics(&inputs),
                scenario,
            }
        })
        .collect();

    let comparison = rank(&scenarios);
    debug!(
        best_npv = %comparison.best_npv,
        best_payback = %comparison.best_payback,
        recommended = %comparison.recommendation.recommended_scenario,
        "Compared scenarios"
    );

    ScenarioComparisonReport {
        scenarios,
        comparison,
    }
}

fn rank(scenarios: &[ScenarioResult]) -> ScenarioComparison {
    let mut ranking: Vec<RankedScenario> = scenarios
        .iter()
        .map(|result| RankedScenario {
            scenario: result.scenario.template,
            name: result.scenario.name.clone(),
            npv: result.financial_metrics.npv,
            roi_pct: result.financial_metrics.roi_pct,
            payback_years: result.financial_metrics.payback_period_years,
            risk_score: result.scenario.risk_score,
            capex: result.scenario.capex,
        })
        .collect();
    ranking.sort_by(|a, b| b.npv.total_cmp(&a.npv));

    let best_npv = &ranking[0];
    let best_payback = first_minimum(&ranking, |r| r.payback_years);
    let best_risk_adjusted = first_minimum(&ranking, RankedScenario::risk_adjusted_key);

    let (recommended, basis) = if best_npv.scenario == best_payback.scenario {
        (best_npv.scenario, RecommendationBasis::NpvAndPayback)
    } else if best_npv.npv > 0.0 && best_npv.payback_years < ACCEPTABLE_PAYBACK_YEARS {
        (best_npv.scenario, RecommendationBasis::ValueWithAcceptablePayback)
    } else {
        (best_risk_adjusted.scenario, RecommendationBasis::RiskAdjusted)
    };

    ScenarioComparison {
        best_npv: best_npv.scenario,
        best_payback: best_payback.scenario,
        best_risk_adjusted: best_risk_adjusted.scenario,
        recommendation: Recommendation {
            recommended_scenario: recommended,
            basis,
            reason: basis.reason().to_string(),
        },
        ranking_by_npv: ranking,
    }
}

/// First row with the smallest key; later rows must be strictly smaller to win.
fn first_minimum<F>(rows: &[RankedScenario], key: F) -> &RankedScenario
where
    F: Fn(&RankedScenario) -> f64,
{
    let mut best = &rows[0];
    let mut best_key = key(best);
    for row in &rows[1..] {
        let k = key(row);
        if k < best_key {
            best = row;
            best_key = k;
        }
    }
    best
}
