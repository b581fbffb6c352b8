//! Scenario templates, generation and comparison.
//!
//! Three fixed templates scale a project's base CapEx, OpEx and benefits:
//!
//! - [`ScenarioTemplate`]: the closed set of templates and their constants
//! - [`generate_scenario`]: apply a template, optionally with overrides
//! - [`compare_scenarios`]: evaluate and rank all three, then recommend one

mod comparison;
mod generator;
mod template;

pub use comparison::{
    compare_scenarios, RankedScenario, Recommendation, RecommendationBasis, ScenarioComparison,
    ScenarioComparisonReport, ScenarioResult, ACCEPTABLE_PAYBACK_YEARS,
};
pub use generator::{
    generate_named_scenario, generate_scenario, generate_scenario_with, Scenario,
    ScenarioOverrides,
};
pub use template::{Multipliers, RiskLevel, ScenarioTemplate};
