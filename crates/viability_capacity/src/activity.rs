//! Activities and their costs.

use crate::capacity::cost_driver_rate;
use crate::error::CapacityError;

/// A recurring activity consuming resource time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    /// Activity name.
    #[cfg_attr(feature = "serde", serde(default = "default_activity_name"))]
    pub name: String,
    /// Minutes per transaction.
    pub unit_time: f64,
    /// Transactions per period.
    pub volume: u64,
}

#[cfg(feature = "serde")]
fn default_activity_name() -> String {
    "Unknown".to_string()
}

impl Activity {
    /// New activity.
    pub fn new(name: impl Into<String>, unit_time: f64, volume: u64) -> Self {
        Self {
            name: name.into(),
            unit_time,
            volume,
        }
    }

    /// Minutes consumed per period: `unit_time * volume`.
    #[inline]
    pub fn used_minutes(&self) -> f64 {
        self.unit_time * self.volume as f64
    }

    /// Reject negative or non-finite unit times.
    pub fn validate(&self) -> Result<(), CapacityError> {
        if !self.unit_time.is_finite() || self.unit_time < 0.0 {
            return Err(CapacityError::InvalidActivity {
                name: self.name.clone(),
                reason: format!("unit time must be a non-negative number, got {}", self.unit_time),
            });
        }
        Ok(())
    }
}

/// Cost breakdown of one activity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityCost {
    /// Activity name.
    pub activity_name: String,
    /// Minutes per transaction.
    pub unit_time_minutes: f64,
    /// Transactions per period.
    pub volume: u64,
    /// Minutes per period.
    pub total_time_minutes: f64,
    /// Capacity cost rate used.
    pub cost_per_minute: f64,
    /// Cost of one transaction.
    pub cost_per_unit: f64,
    /// Cost per period.
    pub total_cost: f64,
}

/// Price one activity at `capacity_cost_rate`.
///
/// # Example
///
/// ```
/// use viability_capacity::{activity_cost, Activity};
///
/// let cost = activity_cost(&Activity::new("Process orders", 8.0, 1_000), 0.5);
/// assert_eq!(cost.cost_per_unit, 4.0);
/// assert_eq!(cost.total_cost, 4_000.0);
/// assert_eq!(cost.total_time_minutes, 8_000.0);
/// ```
pub fn activity_cost(activity: &Activity, capacity_cost_rate: f64) -> ActivityCost {
    let cost_per_unit = cost_driver_rate(activity.unit_time, capacity_cost_rate);
    ActivityCost {
        activity_name: activity.name.clone(),
        unit_time_minutes: activity.unit_time,
        volume: activity.volume,
        total_time_minutes: activity.used_minutes(),
        cost_per_minute: capacity_cost_rate,
        cost_per_unit,
        total_cost: cost_per_unit * activity.volume as f64,
    }
}
