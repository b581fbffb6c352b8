//! Annual cash-flow series.

/// Ordered signed annual amounts for years `1..=len`.
///
/// Year 0 (the initial investment) is not part of the series; present-value
/// routines take it as a separate argument.
///
/// # Example
///
/// ```
/// use viability_finance::CashFlowSeries;
///
/// let series = CashFlowSeries::flat(150_000.0, 5);
/// assert_eq!(series.years(), 5);
/// assert_eq!(series.total(), 750_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CashFlowSeries {
    flows: Vec<f64>,
}

impl CashFlowSeries {
    /// Series from explicit yearly amounts.
    pub fn new(flows: Vec<f64>) -> Self {
        Self { flows }
    }

    /// The same `amount` repeated for `years` years.
    pub fn flat(amount: f64, years: u32) -> Self {
        Self {
            flows: vec![amount; years as usize],
        }
    }

    /// Evaluation horizon in years.
    #[inline]
    pub fn years(&self) -> usize {
        self.flows.len()
    }

    /// `true` when the horizon is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Undiscounted sum of all flows.
    pub fn total(&self) -> f64 {
        self.flows.iter().sum()
    }

    /// Yearly amounts as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.flows
    }

    /// Iterate `(year, amount)` pairs with 1-based years.
    pub fn iter_years(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.flows.iter().copied().enumerate().map(|(i, cf)| (i + 1, cf))
    }
}

impl From<Vec<f64>> for CashFlowSeries {
    fn from(flows: Vec<f64>) -> Self {
        Self::new(flows)
    }
}

impl AsRef<[f64]> for CashFlowSeries {
    fn as_ref(&self) -> &[f64] {
        &self.flows
    }
}
