//! # Viability Risk (L3: Analysis)
//!
//! Scenario planning and uncertainty analysis layered on the metrics engine.
//!
//! This crate provides:
//! - Three fixed scenario templates and their side-by-side comparison
//! - One-at-a-time sensitivity analysis ranked for tornado charts
//! - Reproducible, parallel Monte Carlo simulation of NPV
//! - A four-tier risk rating with mitigation advice
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           viability_risk (L3)           │
//! ├─────────────────────────────────────────┤
//! │  scenarios/    - templates, comparison  │
//! │  sensitivity   - tornado ranking        │
//! │  monte_carlo/  - distributions, runs    │
//! │  assessment    - risk rating            │
//! │  model         - flat-flow NPV model    │
//! │  parallel      - Rayon chunking         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │         viability_finance (L2)          │
//! │  NPV, IRR, payback, ROIC                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use viability_risk::monte_carlo::{monte_carlo_simulation, DistributionSpec, MonteCarloConfig};
//! use viability_risk::{
//!     compare_scenarios, generate_scenario, risk_assessment, ProjectModel, ScenarioTemplate,
//! };
//!
//! let report = compare_scenarios(500_000.0, 50_000.0, 200_000.0, 5, 0.10);
//! let chosen = report.comparison.recommendation.recommended_scenario;
//!
//! let scenario = generate_scenario(chosen, 500_000.0, 50_000.0, 200_000.0);
//! let model = ProjectModel::from_scenario(&scenario, 5, 0.10);
//! let distributions = BTreeMap::from([
//!     ("benefit_realization".to_string(), DistributionSpec::Uniform { low: 0.8, high: 1.2 }),
//!     ("cost_overrun".to_string(), DistributionSpec::Triangular { low: 0.0, mode: 0.1, high: 0.3 }),
//! ]);
//! let config = MonteCarloConfig::builder().iterations(1_000).seed(7).build().unwrap();
//! let simulation = monte_carlo_simulation(&model, &distributions, &config).unwrap();
//!
//! let assessment = risk_assessment(&scenario, &simulation);
//! assert_eq!(chosen, ScenarioTemplate::BudgetConscious);
//! assert_eq!(assessment.risk_score, 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod assessment;
pub mod error;
pub mod model;
pub mod monte_carlo;
pub mod parallel;
pub mod scenarios;
pub mod sensitivity;

pub use assessment::{assess_risk, risk_assessment, RiskAssessment, RiskRating};
pub use error::{EvaluationError, RiskError};
pub use model::ProjectModel;
pub use monte_carlo::{monte_carlo_simulation, DistributionSpec, MonteCarloConfig, MonteCarloResult};
pub use parallel::ParallelConfig;
pub use scenarios::{
    compare_scenarios, generate_scenario, generate_scenario_with, Scenario, ScenarioComparison,
    ScenarioComparisonReport, ScenarioOverrides, ScenarioTemplate,
};
pub use sensitivity::{sensitivity_analysis, SensitivityParameter, SensitivityRecord};
