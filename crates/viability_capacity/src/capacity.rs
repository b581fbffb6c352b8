//! Capacity cost rates.

use crate::resource::{practical_capacity, ResourceType};

/// Cost per minute of practical capacity. `0.0` when capacity is zero.
///
/// # Example
///
/// ```
/// use viability_capacity::capacity_cost_rate;
///
/// assert_eq!(capacity_cost_rate(250_000.0, 25_000.0), 10.0);
/// assert_eq!(capacity_cost_rate(250_000.0, 0.0), 0.0);
/// ```
#[inline]
pub fn capacity_cost_rate(total_cost: f64, practical_capacity_minutes: f64) -> f64 {
    if practical_capacity_minutes == 0.0 {
        return 0.0;
    }
    total_cost / practical_capacity_minutes
}

/// Fully loaded cost of one unit of activity: `unit_time * rate`.
#[inline]
pub fn cost_driver_rate(unit_time_minutes: f64, capacity_cost_rate: f64) -> f64 {
    unit_time_minutes * capacity_cost_rate
}

/// A costed resource pool.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacityModel {
    /// Theoretical minutes per period.
    pub theoretical_minutes: f64,
    /// Resource class.
    pub resource_type: ResourceType,
}

impl CapacityModel {
    /// New pool.
    pub fn new(theoretical_minutes: f64, resource_type: ResourceType) -> Self {
        Self {
            theoretical_minutes,
            resource_type,
        }
    }

    /// Derated minutes per period.
    #[inline]
    pub fn practical_minutes(&self) -> f64 {
        practical_capacity(self.theoretical_minutes, self.resource_type)
    }

    /// Cost per practical minute for a pool costing `total_cost` per period.
    #[inline]
    pub fn cost_rate(&self, total_cost: f64) -> f64 {
        capacity_cost_rate(total_cost, self.practical_minutes())
    }
}
