//! Arithmetic roll-ups feeding the metrics engine.
//!
//! - [`capital`]: fixed, working and invested capital
//! - [`cost_reduction`]: savings over the eight operating cost categories
//! - [`revenue`]: price and production revenue gains
//! - [`lifecycle`]: CapEx/OpEx breakdowns and inflated OpEx projections

pub mod capital;
pub mod cost_reduction;
pub mod lifecycle;
pub mod revenue;

pub use capital::{CapitalAnalysis, CapitalInputs};
pub use cost_reduction::{CategorySavings, CostCategory, CostReductionInputs, SavingsSummary};
pub use lifecycle::{CapExBreakdown, LifeCycleCost, OpExBreakdown, DEFAULT_INFLATION_RATE};
pub use revenue::{
    PriceImprovement, ProductionIncrease, ProductionInputs, RevenueEnhancement, RevenueInputs,
};
