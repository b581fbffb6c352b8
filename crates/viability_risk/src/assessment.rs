//! Qualitative risk rating from a scenario and its simulated NPV.

use crate::monte_carlo::MonteCarloResult;
use crate::scenarios::Scenario;
use std::fmt;

/// Risk score assumed when no scenario template applies.
pub const DEFAULT_RISK_SCORE: u8 = 5;

const PHASED_ROLLOUT: &str = "Consider implementing project in phases to reduce risk";
const LOCK_ASSUMPTIONS: &str =
    "High variability in outcomes - focus on locking in key assumptions";
const PROJECT_MANAGEMENT: &str =
    "Scenario has inherent implementation risks - ensure strong project management";
const CONTINGENCY: &str =
    "Worst case scenario (5% probability) shows loss - consider contingency planning";

/// Four-tier rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskRating {
    /// Very likely positive, tightly spread, low-risk template.
    Low,
    /// Likely positive with moderate spread.
    Medium,
    /// More likely positive than not, wide spread.
    #[cfg_attr(feature = "serde", serde(rename = "Medium-High"))]
    MediumHigh,
    /// Everything else.
    High,
}

impl RiskRating {
    /// Short tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::MediumHigh => "Medium-High",
            RiskRating::High => "High",
        }
    }

    /// Display label, e.g. `"Medium-High Risk"`.
    pub fn label(&self) -> &'static str {
        match self {
            RiskRating::Low => "Low Risk",
            RiskRating::Medium => "Medium Risk",
            RiskRating::MediumHigh => "Medium-High Risk",
            RiskRating::High => "High Risk",
        }
    }

    /// Display colour.
    pub fn color(&self) -> &'static str {
        match self {
            RiskRating::Low => "green",
            RiskRating::Medium => "yellow",
            RiskRating::MediumHigh => "orange",
            RiskRating::High => "red",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rating, inputs and mitigation advice.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskAssessment {
    /// Rating.
    pub risk_rating: RiskRating,
    /// Display colour of the rating.
    pub risk_color: String,
    /// Qualitative risk score used.
    pub risk_score: u8,
    /// Probability of positive NPV, in percent.
    pub probability_positive: f64,
    /// `std / |mean|` of simulated NPV; infinite for a zero mean.
    pub coefficient_of_variation: f64,
    /// Mitigation recommendations, possibly empty.
    pub recommendations: Vec<String>,
}

/// Rate `scenario` using its simulated NPV distribution.
pub fn risk_assessment(scenario: &Scenario, simulation: &MonteCarloResult) -> RiskAssessment {
    assess_risk(scenario.risk_score, simulation)
}

/// Rate a simulated NPV distribution under an explicit risk score.
///
/// With `P` the probability of positive NPV (percent) and `CV` the
/// coefficient of variation, the first matching rule wins:
///
/// | Rating | Condition |
/// |---|---|
/// | Low | `P > 90`, `CV < 0.3` and score `< 4` |
/// | Medium | `P > 75`, `CV < 0.5` and score `< 6` |
/// | Medium-High | `P > 60` and `CV < 0.8` |
/// | High | otherwise |
///
/// Recommendations are added independently: `P < 80` suggests a phased
/// rollout, `CV > 0.5` locking in assumptions, score `> 5` strong project
/// management and a negative 5% VaR contingency planning.
pub fn assess_risk(risk_score: u8, simulation: &MonteCarloResult) -> RiskAssessment {
    let probability = simulation.probability_positive_npv;
    let cv = simulation.coefficient_of_variation();

    let rating = if probability > 90.0 && cv < 0.3 && risk_score < 4 {
        RiskRating::Low
    } else if probability > 75.0 && cv < 0.5 && risk_score < 6 {
        RiskRating::Medium
    } else if probability > 60.0 && cv < 0.8 {
        RiskRating::MediumHigh
    } else {
        RiskRating::High
    };

    let checks = [
        (probability < 80.0, PHASED_ROLLOUT),
        (cv > 0.5, LOCK_ASSUMPTIONS),
        (risk_score > 5, PROJECT_MANAGEMENT),
        (simulation.value_at_risk_5pct < 0.0, CONTINGENCY),
    ];
    let recommendations = checks
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, text)| text.to_string())
        .collect();

    RiskAssessment {
        risk_rating: rating,
        risk_color: rating.color().to_string(),
        risk_score,
        probability_positive: probability,
        coefficient_of_variation: cv,
        recommendations,
    }
}
