//! # Viability Capacity (L2: Business Logic)
//!
//! Time-driven activity-based costing (TDABC) for labour and machine
//! resources.
//!
//! This crate provides:
//! - Practical capacity derating by [`ResourceType`]
//! - Capacity cost rates (cost per minute) and cost-driver rates
//! - Utilisation reports with a three-way [`UtilizationStatus`]
//! - [`full_tdabc_analysis`], which also prices idle capacity
//! - [`TimeEquation`] rule tables for processes with conditional steps
//!
//! ## Example
//!
//! ```
//! use viability_capacity::{full_tdabc_analysis, Activity, ResourceType, UtilizationStatus};
//!
//! let activities = vec![
//!     Activity::new("Process orders", 8.0, 1_500),
//!     Activity::new("Handle inquiries", 12.0, 800),
//! ];
//! let analysis =
//!     full_tdabc_analysis(250_000.0, 31_250.0, ResourceType::People, &activities).unwrap();
//!
//! assert_eq!(analysis.summary.practical_capacity_minutes, 25_000.0);
//! assert_eq!(analysis.utilization.status, UtilizationStatus::Healthy);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod activity;
pub mod analysis;
pub mod capacity;
pub mod error;
pub mod resource;
pub mod time_equation;
pub mod utilization;

pub use activity::{activity_cost, Activity, ActivityCost};
pub use analysis::{full_tdabc_analysis, CostAllocation, TdabcAnalysis, TdabcSummary};
pub use capacity::{capacity_cost_rate, cost_driver_rate, CapacityModel};
pub use error::CapacityError;
pub use resource::{practical_capacity, practical_capacity_for, ResourceType};
pub use time_equation::{
    analyze_process_complexity, build_time_equation, compare_process_variants, ComplexityAnalysis,
    ConditionScenario, ConditionalTime, ProcessComparison, ProcessVariant, TimeEquation,
    VariantComparison,
};
pub use utilization::{utilization_report, ActivityUtilization, UtilizationReport, UtilizationStatus};
