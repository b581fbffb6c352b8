//! Investment metrics over an initial investment and an annual cash-flow series.
//!
//! All functions are pure. Division guards return `0.0`, a series that never
//! recovers its investment gives `f64::INFINITY` (simple payback) or `None`
//! (discounted payback), and an IRR with no real root gives `None`.

use crate::cash_flow::CashFlowSeries;
use tracing::debug;
use viability_core::math::solvers::{
    find_sign_change, linear_grid, BrentSolver, NewtonRaphsonSolver, SolverConfig,
};

/// Flat corporate tax rate applied to ROIC income unless overridden (21%).
pub const DEFAULT_TAX_RATE: f64 = 0.21;

/// Newton starting point for IRR.
const IRR_INITIAL_GUESS: f64 = 0.10;
/// Bracket scan range for the IRR fallback.
const IRR_SCAN_LOWER: f64 = -0.99;
const IRR_SCAN_UPPER: f64 = 10.0;
const IRR_SCAN_POINTS: usize = 1_000;

/// Return on invested capital in percent.
///
/// Returns `0.0` when `invested_capital` is zero.
///
/// # Example
///
/// ```
/// use viability_finance::metrics::roic;
///
/// assert_eq!(roic(100_000.0, 500_000.0), 20.0);
/// assert_eq!(roic(100_000.0, 0.0), 0.0);
/// ```
#[inline]
pub fn roic(after_tax_income: f64, invested_capital: f64) -> f64 {
    if invested_capital == 0.0 {
        return 0.0;
    }
    after_tax_income / invested_capital * 100.0
}

/// Net present value: `sum(cf_t / (1 + r)^t) - initial_investment`, `t` from 1.
///
/// The rate is not range-checked here.
///
/// # Arguments
///
/// * `initial_investment` - Outlay at year 0, as a positive number
/// * `cash_flows` - Net cash flow for years 1, 2, ...
/// * `discount_rate` - Annual rate as a fraction
pub fn npv(initial_investment: f64, cash_flows: &[f64], discount_rate: f64) -> f64 {
    let growth = 1.0 + discount_rate;
    let mut factor = 1.0;
    let mut present_value = 0.0;
    for &cf in cash_flows {
        factor *= growth;
        present_value += cf / factor;
    }
    present_value - initial_investment
}

/// `d npv / d r`, the derivative used by the Newton step.
fn npv_derivative(cash_flows: &[f64], discount_rate: f64) -> f64 {
    let growth = 1.0 + discount_rate;
    let mut factor = growth;
    let mut derivative = 0.0;
    for (t, &cf) in cash_flows.iter().enumerate() {
        factor *= growth;
        derivative -= (t + 1) as f64 * cf / factor;
    }
    derivative
}

/// Internal rate of return as a fraction (`0.15` is 15%).
///
/// Newton-Raphson from 10% first; if that fails or leaves the domain
/// `r > -1`, the range `[-0.99, 10]` is scanned for a sign change and the
/// bracket is refined with Brent's method. `None` when neither finds a root,
/// which includes every series whose flows never change sign.
///
/// # Example
///
/// ```
/// use viability_finance::metrics::irr;
///
/// let rate = irr(1_000.0, &[600.0, 600.0]).unwrap();
/// assert!((rate - 0.130_662).abs() < 1e-6);
///
/// assert!(irr(1_000.0, &[-10.0, -10.0]).is_none());
/// ```
pub fn irr(initial_investment: f64, cash_flows: &[f64]) -> Option<f64> {
    let has_inflow = cash_flows.iter().any(|&cf| cf > 0.0) || initial_investment < 0.0;
    let has_outflow = cash_flows.iter().any(|&cf| cf < 0.0) || initial_investment > 0.0;
    if !(has_inflow && has_outflow) {
        return None;
    }

    let f = |r: f64| npv(initial_investment, cash_flows, r);
    let df = |r: f64| npv_derivative(cash_flows, r);

    let newton = NewtonRaphsonSolver::new(SolverConfig::default());
    match newton.find_root(f, df, IRR_INITIAL_GUESS) {
        Ok(rate) if rate > -1.0 => return Some(rate),
        Ok(rate) => debug!(rate, "Newton IRR left the domain, scanning for a bracket"),
        Err(error) => debug!(%error, "Newton IRR failed, scanning for a bracket"),
    }

    let grid = linear_grid(IRR_SCAN_LOWER, IRR_SCAN_UPPER, IRR_SCAN_POINTS);
    let (lo, hi) = find_sign_change(f, &grid)?;
    if lo == hi {
        return Some(lo);
    }
    BrentSolver::new(SolverConfig::default())
        .find_root(f, lo, hi)
        .map_err(|error| debug!(%error, "Brent IRR failed"))
        .ok()
}

/// Simple payback in years: `initial_investment / annual_cash_flow`.
///
/// `f64::INFINITY` when `annual_cash_flow <= 0`.
///
/// # Example
///
/// ```
/// use viability_finance::metrics::simple_payback;
///
/// assert_eq!(simple_payback(100_000.0, 25_000.0), 4.0);
/// assert!(simple_payback(100_000.0, 0.0).is_infinite());
/// ```
#[inline]
pub fn simple_payback(initial_investment: f64, annual_cash_flow: f64) -> f64 {
    if annual_cash_flow <= 0.0 {
        return f64::INFINITY;
    }
    initial_investment / annual_cash_flow
}

/// Discounted payback in fractional years.
///
/// Walks the cumulative discounted cash flow and interpolates linearly inside
/// the first year where it reaches `initial_investment`. `None` when the
/// horizon ends first. Any `initial_investment <= 0` pays back at once and
/// yields `Some(0.0)`.
pub fn discounted_payback(
    initial_investment: f64,
    cash_flows: &[f64],
    discount_rate: f64,
) -> Option<f64> {
    if initial_investment <= 0.0 {
        return Some(0.0);
    }

    let growth = 1.0 + discount_rate;
    let mut factor = 1.0;
    let mut cumulative = 0.0;
    for (year, &cf) in cash_flows.iter().enumerate() {
        factor *= growth;
        let discounted = cf / factor;
        let previous = cumulative;
        cumulative += discounted;

        if cumulative >= initial_investment {
            let fraction = (initial_investment - previous) / discounted;
            return Some(year as f64 + fraction);
        }
    }
    None
}

/// Return on investment in percent. `0.0` when `total_investment` is zero.
#[inline]
pub fn roi_percentage(net_benefit: f64, total_investment: f64) -> f64 {
    if total_investment == 0.0 {
        return 0.0;
    }
    net_benefit / total_investment * 100.0
}

/// Benefit-cost ratio. `0.0` when `total_costs` is zero.
#[inline]
pub fn benefit_cost_ratio(total_benefits: f64, total_costs: f64) -> f64 {
    if total_costs == 0.0 {
        return 0.0;
    }
    total_benefits / total_costs
}

/// Inputs for [`comprehensive_metrics`].
///
/// # Example
///
/// ```
/// use viability_finance::metrics::{MetricsInputs, DEFAULT_TAX_RATE};
///
/// let inputs = MetricsInputs::new(500_000.0, 200_000.0, 50_000.0, 5, 0.10, 500_000.0);
/// assert_eq!(inputs.tax_rate, DEFAULT_TAX_RATE);
///
/// let untaxed = inputs.with_tax_rate(0.0);
/// assert_eq!(untaxed.tax_rate, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsInputs {
    /// Year-0 outlay (CapEx).
    pub initial_investment: f64,
    /// Benefits per year.
    pub annual_benefits: f64,
    /// Operating costs per year.
    pub annual_costs: f64,
    /// Evaluation horizon.
    pub project_years: u32,
    /// Discount rate as a fraction.
    pub discount_rate: f64,
    /// ROIC denominator.
    pub invested_capital: f64,
    /// Flat tax rate applied to ROIC income.
    pub tax_rate: f64,
}

impl MetricsInputs {
    /// Inputs with the default tax rate.
    pub fn new(
        initial_investment: f64,
        annual_benefits: f64,
        annual_costs: f64,
        project_years: u32,
        discount_rate: f64,
        invested_capital: f64,
    ) -> Self {
        Self {
            initial_investment,
            annual_benefits,
            annual_costs,
            project_years,
            discount_rate,
            invested_capital,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }

    /// Replace the tax rate.
    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Flat net cash-flow series `(benefits - costs)` over the horizon.
    pub fn cash_flows(&self) -> CashFlowSeries {
        CashFlowSeries::flat(self.annual_benefits - self.annual_costs, self.project_years)
    }
}

/// Full metrics bundle for one evaluation.
///
/// Percentages are x100. `payback_period_years` is infinite when the project
/// never recovers its investment; it serialises as `null` in JSON.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinancialMetrics {
    /// Return on invested capital, after tax.
    pub roic_pct: f64,
    /// Net present value.
    pub npv: f64,
    /// Internal rate of return, when one exists.
    pub irr_pct: Option<f64>,
    /// Simple payback.
    pub payback_period_years: f64,
    /// Discounted payback, when reached within the horizon.
    pub discounted_payback_years: Option<f64>,
    /// Net benefit over the initial investment.
    pub roi_pct: f64,
    /// Total benefits over total costs.
    pub benefit_cost_ratio: f64,
    /// `annual_benefits * years`.
    pub total_benefits: f64,
    /// `initial_investment + annual_costs * years`.
    pub total_costs: f64,
    /// Total benefits minus total costs.
    pub net_benefit: f64,
    /// `annual_benefits - annual_costs`.
    pub annual_net_cash_flow: f64,
}

/// Evaluate every metric for a flat annual cash flow.
///
/// ROIC uses `annual_net_cash_flow * (1 - tax_rate)` as income; ROI% is
/// measured against the initial investment.
pub fn comprehensive_metrics(inputs: &MetricsInputs) -> FinancialMetrics {
    let annual_net_cash_flow = inputs.annual_benefits - inputs.annual_costs;
    let series = inputs.cash_flows();
    let flows = series.as_slice();
    let years = f64::from(inputs.project_years);

    let after_tax_income = annual_net_cash_flow * (1.0 - inputs.tax_rate);
    let total_benefits = inputs.annual_benefits * years;
    let total_costs = inputs.initial_investment + inputs.annual_costs * years;
    let net_benefit = total_benefits - total_costs;

    let metrics = FinancialMetrics {
        roic_pct: roic(after_tax_income, inputs.invested_capital),
        npv: npv(inputs.initial_investment, flows, inputs.discount_rate),
        irr_pct: irr(inputs.initial_investment, flows).map(|rate| rate * 100.0),
        payback_period_years: simple_payback(inputs.initial_investment, annual_net_cash_flow),
        discounted_payback_years: discounted_payback(
            inputs.initial_investment,
            flows,
            inputs.discount_rate,
        ),
        roi_pct: roi_percentage(net_benefit, inputs.initial_investment),
        benefit_cost_ratio: benefit_cost_ratio(total_benefits, total_costs),
        total_benefits,
        total_costs,
        net_benefit,
        annual_net_cash_flow,
    };

    debug!(
        npv = metrics.npv,
        irr_pct = ?metrics.irr_pct,
        payback = metrics.payback_period_years,
        "Computed financial metrics"
    );
    metrics
}
