//! Fixed, working and invested capital.

/// Fixed capital: project capital plus commissioning plus other fixed assets.
#[inline]
pub fn fixed_capital(project_capital: f64, commissioning_cost: f64, fixed_assets: f64) -> f64 {
    project_capital + commissioning_cost + fixed_assets
}

/// Working capital: inventory plus operating cash plus financial working capital.
#[inline]
pub fn working_capital(inventory: f64, operating_cash: f64, financial_working_capital: f64) -> f64 {
    inventory + operating_cash + financial_working_capital
}

/// Invested capital, the ROIC denominator.
#[inline]
pub fn invested_capital(fixed: f64, working: f64) -> f64 {
    fixed + working
}

/// Capital figures for a project. Missing fields default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CapitalInputs {
    /// Initial project capital.
    pub project_capital: f64,
    /// Cost to commission the system.
    pub commissioning_cost: f64,
    /// Additional fixed assets.
    pub fixed_assets: f64,
    /// Raw material, intermediate, product and spares inventory.
    pub inventory: f64,
    /// Operating cash requirement.
    pub operating_cash: f64,
    /// Financial working capital.
    pub financial_working_capital: f64,
}

impl CapitalInputs {
    /// Roll the inputs up into fixed, working and invested capital.
    pub fn analyse(&self) -> CapitalAnalysis {
        let fixed = fixed_capital(
            self.project_capital,
            self.commissioning_cost,
            self.fixed_assets,
        );
        let working = working_capital(
            self.inventory,
            self.operating_cash,
            self.financial_working_capital,
        );
        CapitalAnalysis {
            fixed_capital: fixed,
            working_capital: working,
            invested_capital: invested_capital(fixed, working),
        }
    }
}

/// Capital roll-up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapitalAnalysis {
    /// Fixed capital.
    pub fixed_capital: f64,
    /// Working capital.
    pub working_capital: f64,
    /// Fixed plus working capital.
    pub invested_capital: f64,
}
