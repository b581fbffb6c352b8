//! Applying a template to base figures.

use super::template::{Multipliers, RiskLevel, ScenarioTemplate};
use crate::error::RiskError;

/// Optional replacements for a template's constants.
///
/// Fields left as `None` keep the template's value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioOverrides {
    /// Replacement CapEx multiplier.
    pub capex_multiplier: Option<f64>,
    /// Replacement OpEx multiplier.
    pub opex_multiplier: Option<f64>,
    /// Replacement benefit multiplier.
    pub benefit_multiplier: Option<f64>,
    /// Replacement implementation duration.
    pub implementation_months: Option<u32>,
    /// Replacement risk score (1-10).
    pub risk_score: Option<u8>,
}

impl ScenarioOverrides {
    /// Reject negative or non-finite multipliers and scores outside 1-10.
    pub fn validate(&self) -> Result<(), RiskError> {
        let multipliers = [
            ("capex_multiplier", self.capex_multiplier),
            ("opex_multiplier", self.opex_multiplier),
            ("benefit_multiplier", self.benefit_multiplier),
        ];
        for (field, value) in multipliers {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(RiskError::InvalidInput {
                        field,
                        reason: format!("must be a non-negative number, got {value}"),
                    });
                }
            }
        }
        if let Some(score) = self.risk_score {
            if !(1..=10).contains(&score) {
                return Err(RiskError::InvalidInput {
                    field: "risk_score",
                    reason: format!("must be between 1 and 10, got {score}"),
                });
            }
        }
        Ok(())
    }
}

/// A template applied to base CapEx, OpEx and benefit figures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Source template.
    pub template: ScenarioTemplate,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Scenario CapEx.
    pub capex: f64,
    /// Scenario OpEx per year.
    pub opex_yearly: f64,
    /// Scenario benefits per year.
    pub annual_benefits: f64,
    /// Implementation duration in months.
    pub implementation_months: u32,
    /// Qualitative risk level of the template.
    pub risk_level: RiskLevel,
    /// Risk score on a 1-10 scale.
    pub risk_score: u8,
    /// Multipliers that produced the figures.
    pub multipliers: Multipliers,
}

/// Apply `template` to base figures.
///
/// # Example
///
/// ```
/// use viability_risk::{generate_scenario, ScenarioTemplate};
///
/// let scenario = generate_scenario(ScenarioTemplate::BudgetConscious, 500_000.0, 50_000.0, 200_000.0);
/// assert_eq!(scenario.capex, 300_000.0);
/// assert_eq!(scenario.opex_yearly, 35_000.0);
/// assert_eq!(scenario.annual_benefits, 150_000.0);
/// ```
pub fn generate_scenario(
    template: ScenarioTemplate,
    base_capex: f64,
    base_opex: f64,
    base_benefits: f64,
) -> Scenario {
    build(
        template,
        template.multipliers(),
        template.implementation_months(),
        template.risk_score(),
        (base_capex, base_opex, base_benefits),
    )
}

/// Apply `template` with some of its constants replaced.
///
/// # Errors
///
/// [`RiskError::InvalidInput`] when an override is out of range.
pub fn generate_scenario_with(
    template: ScenarioTemplate,
    base_capex: f64,
    base_opex: f64,
    base_benefits: f64,
    overrides: &ScenarioOverrides,
) -> Result<Scenario, RiskError> {
    overrides.validate()?;
    let defaults = template.multipliers();
    let multipliers = Multipliers {
        capex: overrides.capex_multiplier.unwrap_or(defaults.capex),
        opex: overrides.opex_multiplier.unwrap_or(defaults.opex),
        benefits: overrides.benefit_multiplier.unwrap_or(defaults.benefits),
    };
    Ok(build(
        template,
        multipliers,
        overrides
            .implementation_months
            .unwrap_or_else(|| template.implementation_months()),
        overrides.risk_score.unwrap_or_else(|| template.risk_score()),
        (base_capex, base_opex, base_benefits),
    ))
}

/// Look a template up by name and apply it.
///
/// # Errors
///
/// [`RiskError::UnknownTemplate`] when `name` is not a template key.
pub fn generate_named_scenario(
    name: &str,
    base_capex: f64,
    base_opex: f64,
    base_benefits: f64,
) -> Result<Scenario, RiskError> {
    let template: ScenarioTemplate = name.parse()?;
    Ok(generate_scenario(template, base_capex, base_opex, base_benefits))
}

fn build(
    template: ScenarioTemplate,
    multipliers: Multipliers,
    implementation_months: u32,
    risk_score: u8,
    (base_capex, base_opex, base_benefits): (f64, f64, f64),
) -> Scenario {
    Scenario {
        template,
        name: template.name().to_string(),
        description: template.description().to_string(),
        capex: base_capex * multipliers.capex,
        opex_yearly: base_opex * multipliers.opex,
        annual_benefits: base_benefits * multipliers.benefits,
        implementation_months,
        risk_level: template.risk_level(),
        risk_score,
        multipliers,
    }
}
