//! Life-cycle cost: CapEx, OpEx and inflated OpEx projections.
//!
//! Most of an automation system's cost is incurred after installation, so
//! OpEx is projected over the whole horizon rather than taken for one year.

/// Default annual OpEx inflation (3%).
pub const DEFAULT_INFLATION_RATE: f64 = 0.03;

/// Capital expenditure by category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CapExBreakdown {
    /// Hardware.
    pub hardware: f64,
    /// Installation.
    pub installation: f64,
    /// Network, power and other infrastructure.
    pub infrastructure: f64,
    /// Software licences.
    pub software_licenses: f64,
    /// Professional services.
    pub services: f64,
    /// Initial training.
    pub training: f64,
}

impl CapExBreakdown {
    /// Sum of all categories.
    pub fn total(&self) -> f64 {
        self.hardware
            + self.installation
            + self.infrastructure
            + self.software_licenses
            + self.services
            + self.training
    }
}

/// Annual operating expenditure by category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OpExBreakdown {
    /// Maintenance contracts.
    pub maintenance_contracts: f64,
    /// Spare parts.
    pub spare_parts: f64,
    /// Administration.
    pub administration: f64,
    /// Ongoing training.
    pub training: f64,
    /// Software and hardware upgrades.
    pub upgrades: f64,
    /// Cybersecurity.
    pub cybersecurity: f64,
}

impl OpExBreakdown {
    /// Sum of all categories.
    pub fn total(&self) -> f64 {
        self.maintenance_contracts
            + self.spare_parts
            + self.administration
            + self.training
            + self.upgrades
            + self.cybersecurity
    }
}

/// OpEx for years `1..=years` under compounding inflation.
///
/// Year `y` costs `year1_opex * (1 + inflation_rate)^(y - 1)`.
///
/// # Example
///
/// ```
/// use viability_finance::aggregators::lifecycle::project_opex;
///
/// let projection = project_opex(100.0, 3, 0.10);
/// assert_eq!(projection.len(), 3);
/// assert!((projection[2] - 121.0).abs() < 1e-9);
/// ```
pub fn project_opex(year1_opex: f64, years: u32, inflation_rate: f64) -> Vec<f64> {
    let growth = 1.0 + inflation_rate;
    std::iter::successors(Some(year1_opex), |previous| Some(previous * growth))
        .take(years as usize)
        .collect()
}

/// Five-year OpEx projection at [`DEFAULT_INFLATION_RATE`].
pub fn project_opex_five_years(year1_opex: f64) -> Vec<f64> {
    project_opex(year1_opex, 5, DEFAULT_INFLATION_RATE)
}

/// Total cost of ownership over the projected horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeCycleCost {
    /// Up-front CapEx.
    pub capex: f64,
    /// Sum of projected OpEx.
    pub total_opex: f64,
    /// CapEx plus total OpEx.
    pub total_life_cycle_cost: f64,
    /// OpEx share of the total in percent.
    pub opex_percentage: f64,
    /// CapEx share of the total in percent.
    pub capex_percentage: f64,
}

/// Combine CapEx with an OpEx projection. Shares are 0 when the total is 0.
pub fn life_cycle_cost(capex: f64, opex_projection: &[f64]) -> LifeCycleCost {
    let total_opex: f64 = opex_projection.iter().sum();
    let total = capex + total_opex;
    let share = |part: f64| if total == 0.0 { 0.0 } else { part / total * 100.0 };

    LifeCycleCost {
        capex,
        total_opex,
        total_life_cycle_cost: total,
        opex_percentage: share(total_opex),
        capex_percentage: share(capex),
    }
}
