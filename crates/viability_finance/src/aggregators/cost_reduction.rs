//! Operating cost savings across the eight cost categories.

use crate::error::FinanceError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Operating cost category addressed by an automation project.
///
/// # Examples
///
/// ```
/// use viability_finance::aggregators::CostCategory;
///
/// let category: CostCategory = "off_spec_material".parse().unwrap();
/// assert_eq!(category, CostCategory::OffSpecMaterial);
/// assert_eq!(CostCategory::ALL.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CostCategory {
    /// Yield and energy efficiency.
    FeedstocksEnergy,
    /// Routine maintenance.
    MaintenanceScheduled,
    /// Emergency repairs.
    MaintenanceUnscheduled,
    /// Major shutdowns.
    MaintenanceShutdown,
    /// Quality losses.
    OffSpecMaterial,
    /// Logistics penalties.
    Demurrage,
    /// Labour.
    Staffing,
    /// Health, safety and environmental incidents.
    AbnormalEvents,
}

impl CostCategory {
    /// All categories in reporting order.
    pub const ALL: [CostCategory; 8] = [
        CostCategory::FeedstocksEnergy,
        CostCategory::MaintenanceScheduled,
        CostCategory::MaintenanceUnscheduled,
        CostCategory::MaintenanceShutdown,
        CostCategory::OffSpecMaterial,
        CostCategory::Demurrage,
        CostCategory::Staffing,
        CostCategory::AbnormalEvents,
    ];

    /// Snake-case identifier used in input records.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::FeedstocksEnergy => "feedstocks_energy",
            CostCategory::MaintenanceScheduled => "maintenance_scheduled",
            CostCategory::MaintenanceUnscheduled => "maintenance_unscheduled",
            CostCategory::MaintenanceShutdown => "maintenance_shutdown",
            CostCategory::OffSpecMaterial => "off_spec_material",
            CostCategory::Demurrage => "demurrage",
            CostCategory::Staffing => "staffing",
            CostCategory::AbnormalEvents => "abnormal_events",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostCategory {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CostCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| FinanceError::UnknownCostCategory(s.to_string()))
    }
}

/// Savings for one category: `baseline_cost * reduction_pct / 100`.
#[inline]
pub fn category_savings(baseline_cost: f64, reduction_pct: f64) -> f64 {
    baseline_cost * (reduction_pct / 100.0)
}

/// Baseline annual costs and expected reductions per category.
///
/// Categories absent from either map count as zero.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostReductionInputs {
    /// Current annual cost per category.
    pub baseline_costs: BTreeMap<CostCategory, f64>,
    /// Expected reduction per category, in percent.
    pub reduction_pct: BTreeMap<CostCategory, f64>,
}

impl CostReductionInputs {
    /// Build inputs from `(category name, baseline cost, reduction %)` rows.
    ///
    /// # Errors
    ///
    /// [`FinanceError::UnknownCostCategory`] for a name outside the fixed set.
    pub fn from_named<'a, I>(rows: I) -> Result<Self, FinanceError>
    where
        I: IntoIterator<Item = (&'a str, f64, f64)>,
    {
        let mut inputs = Self::default();
        for (name, baseline, pct) in rows {
            let category: CostCategory = name.parse()?;
            inputs.baseline_costs.insert(category, baseline);
            inputs.reduction_pct.insert(category, pct);
        }
        Ok(inputs)
    }

    /// Savings for every category plus the total.
    pub fn total_savings(&self) -> SavingsSummary {
        let breakdown: Vec<CategorySavings> = CostCategory::ALL
            .iter()
            .map(|&category| {
                let baseline_cost = self.baseline_costs.get(&category).copied().unwrap_or(0.0);
                let reduction_pct = self.reduction_pct.get(&category).copied().unwrap_or(0.0);
                CategorySavings {
                    category,
                    baseline_cost,
                    reduction_pct,
                    annual_savings: category_savings(baseline_cost, reduction_pct),
                }
            })
            .collect();

        SavingsSummary {
            total_annual_savings: breakdown.iter().map(|c| c.annual_savings).sum(),
            breakdown,
        }
    }
}

/// Savings line for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySavings {
    /// Category.
    pub category: CostCategory,
    /// Current annual cost.
    pub baseline_cost: f64,
    /// Expected reduction in percent.
    pub reduction_pct: f64,
    /// Resulting annual savings.
    pub annual_savings: f64,
}

/// Savings over all eight categories.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavingsSummary {
    /// Sum of category savings.
    pub total_annual_savings: f64,
    /// One entry per category in [`CostCategory::ALL`] order.
    pub breakdown: Vec<CategorySavings>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_category_savings() {
        assert_relative_eq!(category_savings(200_000.0, 15.0), 30_000.0, epsilon = 1e-6);
        assert_eq!(category_savings(200_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_total_savings_covers_all_categories() {
        let inputs = CostReductionInputs::from_named([
            ("staffing", 300_000.0, 20.0),
            ("feedstocks_energy", 1_000_000.0, 5.0),
        ])
        .unwrap();

        let summary = inputs.total_savings();
        assert_eq!(summary.breakdown.len(), 8);
        assert_relative_eq!(summary.total_annual_savings, 110_000.0, epsilon = 1e-6);

        let staffing = summary
            .breakdown
            .iter()
            .find(|c| c.category == CostCategory::Staffing)
            .unwrap();
        assert_relative_eq!(staffing.annual_savings, 60_000.0, epsilon = 1e-6);

        let demurrage = summary
            .breakdown
            .iter()
            .find(|c| c.category == CostCategory::Demurrage)
            .unwrap();
        assert_eq!(demurrage.annual_savings, 0.0);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = CostReductionInputs::from_named([("marketing", 1.0, 1.0)]);
        assert_eq!(
            result,
            Err(FinanceError::UnknownCostCategory("marketing".to_string()))
        );
    }

    #[test]
    fn test_round_trip_names() {
        for category in CostCategory::ALL {
            assert_eq!(category.as_str().parse::<CostCategory>().unwrap(), category);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise_snake_case_keys() {
        let json = r#"{
            "baseline_costs": {"maintenance_unscheduled": 80000.0},
            "reduction_pct": {"maintenance_unscheduled": 25.0}
        }"#;
        let inputs: CostReductionInputs = serde_json::from_str(json).unwrap();
        assert_relative_eq!(inputs.total_savings().total_annual_savings, 20_000.0, epsilon = 1e-6);
    }
}
