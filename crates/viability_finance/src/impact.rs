//! Financial-impact assessment: aggregators chained into the metrics engine.

use crate::aggregators::lifecycle::{life_cycle_cost, project_opex};
use crate::aggregators::{
    CapExBreakdown, CapitalAnalysis, CapitalInputs, CostReductionInputs, LifeCycleCost,
    OpExBreakdown, RevenueEnhancement, RevenueInputs, SavingsSummary, DEFAULT_INFLATION_RATE,
};
use crate::error::FinanceError;
use crate::metrics::{comprehensive_metrics, FinancialMetrics, MetricsInputs, DEFAULT_TAX_RATE};
use tracing::debug;

/// Everything needed to assess one automation project.
///
/// Missing fields in serialised input take the defaults of
/// [`FinancialImpactInputs::default`]: 5 years, 10% discount rate, 21% tax
/// and 3% OpEx inflation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinancialImpactInputs {
    /// Capital figures for ROIC.
    pub capital: CapitalInputs,
    /// Operating cost baselines and reductions.
    pub cost_reduction: CostReductionInputs,
    /// Revenue gains, if any.
    pub revenue: Option<RevenueInputs>,
    /// Up-front investment by category.
    pub capex: CapExBreakdown,
    /// First-year operating costs by category.
    pub opex: OpExBreakdown,
    /// Evaluation horizon.
    pub project_years: u32,
    /// Discount rate as a fraction.
    pub discount_rate: f64,
    /// Flat tax rate as a fraction.
    pub tax_rate: f64,
    /// Annual OpEx inflation as a fraction.
    pub inflation_rate: f64,
}

impl Default for FinancialImpactInputs {
    fn default() -> Self {
        Self {
            capital: CapitalInputs::default(),
            cost_reduction: CostReductionInputs::default(),
            revenue: None,
            capex: CapExBreakdown::default(),
            opex: OpExBreakdown::default(),
            project_years: 5,
            discount_rate: 0.10,
            tax_rate: DEFAULT_TAX_RATE,
            inflation_rate: DEFAULT_INFLATION_RATE,
        }
    }
}

impl FinancialImpactInputs {
    /// Check rates and horizon.
    ///
    /// # Errors
    ///
    /// [`FinanceError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FinanceError> {
        if !(0.0..=1.0).contains(&self.discount_rate) {
            return Err(FinanceError::invalid(
                "discount_rate",
                format!("must be within [0, 1], got {}", self.discount_rate),
            ));
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(FinanceError::invalid(
                "tax_rate",
                format!("must be within [0, 1], got {}", self.tax_rate),
            ));
        }
        if self.inflation_rate.is_nan() || self.inflation_rate < 0.0 {
            return Err(FinanceError::invalid(
                "inflation_rate",
                format!("must be non-negative, got {}", self.inflation_rate),
            ));
        }
        if self.project_years == 0 {
            return Err(FinanceError::invalid("project_years", "must be at least 1"));
        }
        if self.capex.total() < 0.0 {
            return Err(FinanceError::invalid("capex", "total must be non-negative"));
        }
        if self.opex.total() < 0.0 {
            return Err(FinanceError::invalid("opex", "total must be non-negative"));
        }
        Ok(())
    }
}

/// Result of [`assess_financial_impact`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinancialImpactReport {
    /// Fixed, working and invested capital.
    pub capital: CapitalAnalysis,
    /// Per-category savings.
    pub cost_savings: SavingsSummary,
    /// Revenue gains, present only with a positive quality premium.
    pub revenue_enhancement: Option<RevenueEnhancement>,
    /// CapEx by category.
    pub capex: CapExBreakdown,
    /// Sum of CapEx categories.
    pub capex_total: f64,
    /// First-year OpEx by category.
    pub opex_yearly: OpExBreakdown,
    /// Sum of first-year OpEx categories.
    pub opex_yearly_total: f64,
    /// OpEx per year under inflation.
    pub opex_projection: Vec<f64>,
    /// CapEx plus projected OpEx.
    pub life_cycle: LifeCycleCost,
    /// Metrics for the flat annual cash flow.
    pub financial_metrics: FinancialMetrics,
}

/// Assess a project end to end.
///
/// Initial investment is the CapEx total. Annual benefits are cost savings
/// plus any revenue enhancement, annual costs are the first-year OpEx total,
/// and the ROIC denominator is the invested capital.
///
/// # Errors
///
/// [`FinanceError::InvalidInput`] when [`FinancialImpactInputs::validate`] fails.
///
/// # Example
///
/// ```
/// use viability_finance::aggregators::{CapExBreakdown, CostReductionInputs, OpExBreakdown};
/// use viability_finance::{assess_financial_impact, FinancialImpactInputs};
///
/// let inputs = FinancialImpactInputs {
///     cost_reduction: CostReductionInputs::from_named([("staffing", 500_000.0, 40.0)]).unwrap(),
///     capex: CapExBreakdown { hardware: 400_000.0, ..Default::default() },
///     opex: OpExBreakdown { maintenance_contracts: 25_000.0, ..Default::default() },
///     ..Default::default()
/// };
///
/// let report = assess_financial_impact(&inputs).unwrap();
/// assert_eq!(report.financial_metrics.annual_net_cash_flow, 175_000.0);
/// assert_eq!(report.opex_projection.len(), 5);
/// ```
pub fn assess_financial_impact(
    inputs: &FinancialImpactInputs,
) -> Result<FinancialImpactReport, FinanceError> {
    inputs.validate()?;

    let capital = inputs.capital.analyse();
    let cost_savings = inputs.cost_reduction.total_savings();
    let revenue_enhancement = inputs.revenue.as_ref().and_then(RevenueInputs::assess);

    let capex_total = inputs.capex.total();
    let opex_yearly_total = inputs.opex.total();
    let opex_projection = project_opex(opex_yearly_total, inputs.project_years, inputs.inflation_rate);
    let life_cycle = life_cycle_cost(capex_total, &opex_projection);

    let annual_benefits = cost_savings.total_annual_savings
        + revenue_enhancement
            .as_ref()
            .map_or(0.0, |r| r.total_annual_enhancement);

    let metrics_inputs = MetricsInputs::new(
        capex_total,
        annual_benefits,
        opex_yearly_total,
        inputs.project_years,
        inputs.discount_rate,
        capital.invested_capital,
    )
    .with_tax_rate(inputs.tax_rate);
    let financial_metrics = comprehensive_metrics(&metrics_inputs);

    debug!(
        annual_benefits,
        capex_total,
        invested_capital = capital.invested_capital,
        "Assessed financial impact"
    );

    Ok(FinancialImpactReport {
        capital,
        cost_savings,
        revenue_enhancement,
        capex: inputs.capex,
        capex_total,
        opex_yearly: inputs.opex,
        opex_yearly_total,
        opex_projection,
        life_cycle,
        financial_metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_inputs() -> FinancialImpactInputs {
        FinancialImpactInputs {
            capital: CapitalInputs {
                project_capital: 500_000.0,
                ..Default::default()
            },
            cost_reduction: CostReductionInputs::from_named([
                ("maintenance_unscheduled", 400_000.0, 25.0),
                ("staffing", 500_000.0, 20.0),
            ])
            .unwrap(),
            capex: CapExBreakdown {
                hardware: 300_000.0,
                installation: 200_000.0,
                ..Default::default()
            },
            opex: OpExBreakdown {
                maintenance_contracts: 30_000.0,
                cybersecurity: 20_000.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_assessment_matches_direct_metrics() {
        let report = assess_financial_impact(&sample_inputs()).unwrap();

        assert_relative_eq!(report.cost_savings.total_annual_savings, 200_000.0, epsilon = 1e-6);
        assert_eq!(report.capex_total, 500_000.0);
        assert_eq!(report.opex_yearly_total, 50_000.0);
        assert_eq!(report.capital.invested_capital, 500_000.0);
        assert!(report.revenue_enhancement.is_none());

        let direct = comprehensive_metrics(&MetricsInputs::new(
            500_000.0, 200_000.0, 50_000.0, 5, 0.10, 500_000.0,
        ));
        assert_relative_eq!(report.financial_metrics.npv, direct.npv, epsilon = 1e-6);
        assert_relative_eq!(report.financial_metrics.roic_pct, 23.7, epsilon = 1e-6);
    }

    #[test]
    fn test_revenue_enhancement_adds_to_benefits() {
        let inputs = FinancialImpactInputs {
            revenue: Some(RevenueInputs {
                current_revenue: 2_000_000.0,
                quality_premium_pct: 2.5,
                ..Default::default()
            }),
            ..sample_inputs()
        };
        let report = assess_financial_impact(&inputs).unwrap();
        assert_relative_eq!(
            report.financial_metrics.annual_net_cash_flow,
            200_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_projection_follows_horizon_and_inflation() {
        let inputs = FinancialImpactInputs {
            project_years: 3,
            inflation_rate: 0.10,
            ..sample_inputs()
        };
        let report = assess_financial_impact(&inputs).unwrap();
        assert_eq!(report.opex_projection.len(), 3);
        assert_relative_eq!(report.opex_projection[2], 60_500.0, epsilon = 1e-6);
        assert_relative_eq!(
            report.life_cycle.total_life_cycle_cost,
            500_000.0 + 50_000.0 + 55_000.0 + 60_500.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_validation_rejects_bad_rates() {
        let inputs = FinancialImpactInputs {
            discount_rate: 1.5,
            ..sample_inputs()
        };
        assert!(matches!(
            assess_financial_impact(&inputs),
            Err(FinanceError::InvalidInput {
                field: "discount_rate",
                ..
            })
        ));

        let inputs = FinancialImpactInputs {
            project_years: 0,
            ..sample_inputs()
        };
        assert!(inputs.validate().is_err());

        let inputs = FinancialImpactInputs {
            inflation_rate: f64::NAN,
            ..sample_inputs()
        };
        assert!(inputs.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise_with_defaults() {
        let json = r#"{
            "cost_reduction": {
                "baseline_costs": {"staffing": 100000.0},
                "reduction_pct": {"staffing": 50.0}
            },
            "capex": {"hardware": 100000.0}
        }"#;
        let inputs: FinancialImpactInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.project_years, 5);
        assert_eq!(inputs.tax_rate, DEFAULT_TAX_RATE);

        let report = assess_financial_impact(&inputs).unwrap();
        assert_relative_eq!(report.financial_metrics.payback_period_years, 2.0, epsilon = 1e-9);
    }
}
