//! Flat-cash-flow project model driven by simulation and sensitivity analysis.

use crate::error::EvaluationError;
use crate::monte_carlo::{NpvEvaluator, SampledParameters};
use crate::scenarios::Scenario;
use crate::sensitivity::SensitivityParameter;
use viability_finance::metrics::npv;
use viability_finance::CashFlowSeries;

/// Replaces the initial investment.
pub const INITIAL_INVESTMENT: &str = "initial_investment";
/// Replaces the annual benefits.
pub const ANNUAL_BENEFITS: &str = "annual_benefits";
/// Replaces the annual costs.
pub const ANNUAL_COSTS: &str = "annual_costs";
/// Replaces the discount rate.
pub const DISCOUNT_RATE: &str = "discount_rate";
/// Scales the investment by `1 + x`.
pub const COST_OVERRUN: &str = "cost_overrun";
/// Scales the annual benefits by `x`.
pub const BENEFIT_REALIZATION: &str = "benefit_realization";

/// A project with one up-front investment and flat annual flows.
///
/// # Example
///
/// ```
/// use viability_risk::ProjectModel;
///
/// let model = ProjectModel::new(500_000.0, 200_000.0, 50_000.0, 5, 0.10);
/// assert!((model.npv() - 68_618.015_4).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectModel {
    /// Year-0 outlay.
    pub initial_investment: f64,
    /// Benefits per year.
    pub annual_benefits: f64,
    /// Operating costs per year.
    pub annual_costs: f64,
    /// Horizon in years.
    pub project_years: u32,
    /// Discount rate as a fraction.
    pub discount_rate: f64,
}

impl ProjectModel {
    /// Parameter names [`ProjectModel::npv_with`] understands.
    pub const PARAMETERS: [&'static str; 6] = [
        INITIAL_INVESTMENT,
        ANNUAL_BENEFITS,
        ANNUAL_COSTS,
        DISCOUNT_RATE,
        COST_OVERRUN,
        BENEFIT_REALIZATION,
    ];

    /// New model.
    pub fn new(
        initial_investment: f64,
        annual_benefits: f64,
        annual_costs: f64,
        project_years: u32,
        discount_rate: f64,
    ) -> Self {
        Self {
            initial_investment,
            annual_benefits,
            annual_costs,
            project_years,
            discount_rate,
        }
    }

    /// Model of a generated scenario: its CapEx, benefits and OpEx.
    pub fn from_scenario(scenario: &Scenario, project_years: u32, discount_rate: f64) -> Self {
        Self::new(
            scenario.capex,
            scenario.annual_benefits,
            scenario.opex_yearly,
            project_years,
            discount_rate,
        )
    }

    /// Base-case NPV.
    pub fn npv(&self) -> f64 {
        let flows = CashFlowSeries::flat(self.annual_benefits - self.annual_costs, self.project_years);
        npv(self.initial_investment, flows.as_slice(), self.discount_rate)
    }

    /// NPV with some inputs replaced or scaled by sampled values.
    ///
    /// Absolute replacements apply first, then `cost_overrun` and
    /// `benefit_realization` scale the result.
    ///
    /// # Errors
    ///
    /// - [`EvaluationError::OutOfRange`] when the discount rate is at or
    ///   below -100%
    /// - [`EvaluationError::Failed`] when the NPV is not finite
    pub fn npv_with(&self, params: &SampledParameters<'_>) -> Result<f64, EvaluationError> {
        let mut model = *self;
        if let Some(value) = params.get(INITIAL_INVESTMENT) {
            model.initial_investment = value;
        }
        if let Some(value) = params.get(ANNUAL_BENEFITS) {
            model.annual_benefits = value;
        }
        if let Some(value) = params.get(ANNUAL_COSTS) {
            model.annual_costs = value;
        }
        if let Some(value) = params.get(DISCOUNT_RATE) {
            model.discount_rate = value;
        }
        if let Some(overrun) = params.get(COST_OVERRUN) {
            model.initial_investment *= 1.0 + overrun;
        }
        if let Some(realisation) = params.get(BENEFIT_REALIZATION) {
            model.annual_benefits *= realisation;
        }
        model.checked_npv()
    }

    /// Ready-made sensitivity parameters: investment, benefits, costs and
    /// discount rate, each varied alone around this model.
    pub fn sensitivity_parameters(&self) -> Vec<SensitivityParameter<'static>> {
        let base = *self;
        vec![
            SensitivityParameter::new(INITIAL_INVESTMENT, base.initial_investment, move |v| {
                ProjectModel {
                    initial_investment: v,
                    ..base
                }
                .checked_npv()
            }),
            SensitivityParameter::new(ANNUAL_BENEFITS, base.annual_benefits, move |v| {
                ProjectModel {
                    annual_benefits: v,
                    ..base
                }
                .checked_npv()
            }),
            SensitivityParameter::new(ANNUAL_COSTS, base.annual_costs, move |v| {
                ProjectModel {
                    annual_costs: v,
                    ..base
                }
                .checked_npv()
            }),
            SensitivityParameter::new(DISCOUNT_RATE, base.discount_rate, move |v| {
                ProjectModel {
                    discount_rate: v,
                    ..base
                }
                .checked_npv()
            }),
        ]
    }

    fn checked_npv(&self) -> Result<f64, EvaluationError> {
        if self.discount_rate.is_nan() || self.discount_rate <= -1.0 {
            return Err(EvaluationError::OutOfRange {
                name: DISCOUNT_RATE.to_string(),
                reason: format!("must exceed -1, got {}", self.discount_rate),
            });
        }
        let value = self.npv();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvaluationError::Failed(format!("non-finite NPV {value}")))
        }
    }
}

impl NpvEvaluator for ProjectModel {
    fn evaluate(&self, params: &SampledParameters<'_>) -> Result<f64, EvaluationError> {
        self.npv_with(params)
    }

    fn accepts(&self, name: &str) -> bool {
        Self::PARAMETERS.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensitivity::sensitivity_analysis;
    use approx::assert_relative_eq;

    fn reference() -> ProjectModel {
        ProjectModel::new(500_000.0, 200_000.0, 50_000.0, 5, 0.10)
    }

    fn with(model: &ProjectModel, entries: &[(&str, f64)]) -> Result<f64, EvaluationError> {
        let names: Vec<String> = entries.iter().map(|(k, _)| k.to_string()).collect();
        let values: Vec<f64> = entries.iter().map(|&(_, v)| v).collect();
        model.npv_with(&SampledParameters::new(&names, &values))
    }

    #[test]
    fn test_base_npv() {
        assert_relative_eq!(reference().npv(), 68_618.015_411, epsilon = 1e-5);
    }

    #[test]
    fn test_no_parameters_is_base_case() {
        let model = reference();
        assert_relative_eq!(with(&model, &[]).unwrap(), model.npv(), epsilon = 1e-9);
    }

    #[test]
    fn test_overrun_and_realisation_scale() {
        let model = reference();
        // Investment 550,000; benefits 180,000; cash flow 130,000
        let expected = ProjectModel::new(550_000.0, 180_000.0, 50_000.0, 5, 0.10).npv();
        let value = with(&model, &[(COST_OVERRUN, 0.1), (BENEFIT_REALIZATION, 0.9)]).unwrap();
        assert_relative_eq!(value, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_replacements_apply_before_scaling() {
        let model = reference();
        let expected = ProjectModel::new(800_000.0, 200_000.0, 50_000.0, 5, 0.10).npv();
        let value = with(&model, &[(INITIAL_INVESTMENT, 400_000.0), (COST_OVERRUN, 1.0)]).unwrap();
        assert_relative_eq!(value, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_rate_is_evaluation_error() {
        let model = reference();
        assert!(matches!(
            with(&model, &[(DISCOUNT_RATE, -1.0)]),
            Err(EvaluationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_accepts_only_known_names() {
        let model = reference();
        assert!(model.accepts(BENEFIT_REALIZATION));
        assert!(!model.accepts("labour_rate"));
    }

    #[test]
    fn test_reference_tornado() {
        let model = reference();
        let parameters = model.sensitivity_parameters();
        let tornado = sensitivity_analysis(model.npv(), &parameters, 20.0).unwrap();
        let order: Vec<&str> = tornado.iter().map(|r| r.parameter.as_str()).collect();

        assert_eq!(
            order,
            vec![ANNUAL_BENEFITS, INITIAL_INVESTMENT, ANNUAL_COSTS, DISCOUNT_RATE]
        );
        assert_relative_eq!(tornado[0].impact, 303_262.941_553, epsilon = 1e-4);
        assert_relative_eq!(tornado[1].impact, 200_000.0, epsilon = 1e-6);
        assert_relative_eq!(tornado[2].impact, 75_815.735_388, epsilon = 1e-4);
        assert_relative_eq!(tornado[3].impact, 58_190.075_210, epsilon = 1e-4);
    }
}
