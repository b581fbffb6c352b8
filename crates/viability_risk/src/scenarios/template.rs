//! The three canonical scenario templates.

use crate::error::RiskError;
use std::fmt;
use std::str::FromStr;

/// Multipliers applied to base CapEx, OpEx and annual benefits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multipliers {
    /// CapEx multiplier.
    pub capex: f64,
    /// Annual OpEx multiplier.
    pub opex: f64,
    /// Annual benefit multiplier.
    pub benefits: f64,
}

/// Qualitative implementation risk attached to a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RiskLevel {
    /// Very low risk.
    VeryLow,
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
}

impl RiskLevel {
    /// Snake-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "very_low",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Investment scenario template.
///
/// Each variant carries fixed multipliers, an implementation duration and a
/// qualitative risk score on a 1-10 scale.
///
/// | Template | CapEx x | OpEx x | Benefit x | Months | Risk score |
/// |---|---|---|---|---|---|
/// | `BudgetConscious` | 0.60 | 0.70 | 0.75 | 12 | 5 |
/// | `StrategicImplementation` | 1.00 | 1.00 | 1.00 | 8 | 3 |
/// | `EnterpriseTransformation` | 1.50 | 1.20 | 1.30 | 6 | 2 |
///
/// # Example
///
/// ```
/// use viability_risk::ScenarioTemplate;
///
/// let template: ScenarioTemplate = "budget_conscious".parse().unwrap();
/// assert_eq!(template, ScenarioTemplate::BudgetConscious);
/// assert_eq!(template.multipliers().capex, 0.6);
/// assert_eq!(template.risk_score(), 5);
///
/// assert!("aggressive".parse::<ScenarioTemplate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScenarioTemplate {
    /// Minimal investment with proven ROI.
    BudgetConscious,
    /// Balanced approach with optimal risk-reward.
    StrategicImplementation,
    /// Comprehensive solution with maximum benefits.
    EnterpriseTransformation,
}

impl ScenarioTemplate {
    /// Every template, in canonical order.
    pub const ALL: [ScenarioTemplate; 3] = [
        ScenarioTemplate::BudgetConscious,
        ScenarioTemplate::StrategicImplementation,
        ScenarioTemplate::EnterpriseTransformation,
    ];

    /// Snake-case key.
    pub fn key(&self) -> &'static str {
        match self {
            ScenarioTemplate::BudgetConscious => "budget_conscious",
            ScenarioTemplate::StrategicImplementation => "strategic_implementation",
            ScenarioTemplate::EnterpriseTransformation => "enterprise_transformation",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioTemplate::BudgetConscious => "Budget Conscious",
            ScenarioTemplate::StrategicImplementation => "Strategic Implementation",
            ScenarioTemplate::EnterpriseTransformation => "Enterprise Transformation",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            ScenarioTemplate::BudgetConscious => "Minimal investment with proven ROI",
            ScenarioTemplate::StrategicImplementation => {
                "Balanced approach with optimal risk-reward"
            }
            ScenarioTemplate::EnterpriseTransformation => {
                "Comprehensive solution with maximum benefits"
            }
        }
    }

    /// CapEx, OpEx and benefit multipliers.
    pub fn multipliers(&self) -> Multipliers {
        match self {
            ScenarioTemplate::BudgetConscious => Multipliers {
                capex: 0.6,
                opex: 0.7,
                benefits: 0.75,
            },
            ScenarioTemplate::StrategicImplementation => Multipliers {
                capex: 1.0,
                opex: 1.0,
                benefits: 1.0,
            },
            ScenarioTemplate::EnterpriseTransformation => Multipliers {
                capex: 1.5,
                opex: 1.2,
                benefits: 1.3,
            },
        }
    }

    /// Expected implementation duration in months.
    pub fn implementation_months(&self) -> u32 {
        match self {
            ScenarioTemplate::BudgetConscious => 12,
            ScenarioTemplate::StrategicImplementation => 8,
            ScenarioTemplate::EnterpriseTransformation => 6,
        }
    }

    /// Qualitative risk level.
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            ScenarioTemplate::BudgetConscious => RiskLevel::Medium,
            ScenarioTemplate::StrategicImplementation => RiskLevel::Low,
            ScenarioTemplate::EnterpriseTransformation => RiskLevel::VeryLow,
        }
    }

    /// Risk score on a 1-10 scale; higher is riskier.
    pub fn risk_score(&self) -> u8 {
        match self {
            ScenarioTemplate::BudgetConscious => 5,
            ScenarioTemplate::StrategicImplementation => 3,
            ScenarioTemplate::EnterpriseTransformation => 2,
        }
    }
}

impl fmt::Display for ScenarioTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioTemplate {
    type Err = RiskError;

    /// Accepts the snake-case key or the CamelCase variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "budget_conscious" | "BudgetConscious" => Ok(ScenarioTemplate::BudgetConscious),
            "strategic_implementation" | "StrategicImplementation" => {
                Ok(ScenarioTemplate::StrategicImplementation)
            }
            "enterprise_transformation" | "EnterpriseTransformation" => {
                Ok(ScenarioTemplate::EnterpriseTransformation)
            }
            other => Err(RiskError::UnknownTemplate(other.to_string())),
        }
    }
}
