//! # Viability Finance (L2: Business Logic)
//!
//! Turns project cost and benefit inputs into investment metrics.
//!
//! This crate provides:
//! - Capital, cost-reduction, revenue and life-cycle aggregators
//! - A flat annual [`CashFlowSeries`](cash_flow::CashFlowSeries)
//! - The metrics engine: NPV, IRR, simple and discounted payback, ROIC,
//!   ROI% and benefit-cost ratio
//! - [`assess_financial_impact`](impact::assess_financial_impact), which
//!   chains the aggregators into a single metrics report
//!
//! ## Conventions
//!
//! - Currency amounts are plain `f64` in one implicit currency.
//! - Percentages are expressed x100 (`25.0` means 25%); rates are fractions
//!   (`0.10` means 10%).
//! - Degenerate inputs (zero capital, zero cash flow, no IRR) produce
//!   sentinel values (`0.0`, `f64::INFINITY`, `None`) instead of errors.
//!
//! ## Example
//!
//! ```
//! use viability_finance::metrics::{comprehensive_metrics, MetricsInputs};
//!
//! let inputs = MetricsInputs::new(500_000.0, 200_000.0, 50_000.0, 5, 0.10, 500_000.0);
//! let metrics = comprehensive_metrics(&inputs);
//!
//! assert!(metrics.npv > 0.0);
//! assert!((metrics.payback_period_years - 3.333_333).abs() < 1e-5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregators;
pub mod cash_flow;
pub mod error;
pub mod impact;
pub mod metrics;

pub use cash_flow::CashFlowSeries;
pub use error::FinanceError;
pub use impact::{assess_financial_impact, FinancialImpactInputs, FinancialImpactReport};
pub use metrics::{comprehensive_metrics, FinancialMetrics, MetricsInputs, DEFAULT_TAX_RATE};
