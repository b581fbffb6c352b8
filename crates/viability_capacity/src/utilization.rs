//! Capacity utilisation classification.

use crate::activity::Activity;
use std::fmt;

/// Utilisation below this percentage means capacity is paid for but idle.
pub const OVERCAPACITY_THRESHOLD: f64 = 70.0;
/// Utilisation above this percentage means the resource is a bottleneck.
pub const BOTTLENECK_THRESHOLD: f64 = 90.0;

/// Three-way utilisation classification.
///
/// Both thresholds are inclusive on the healthy side: exactly 70% and
/// exactly 90% are [`UtilizationStatus::Healthy`].
///
/// # Example
///
/// ```
/// use viability_capacity::UtilizationStatus;
///
/// assert_eq!(UtilizationStatus::classify(69.999), UtilizationStatus::Overcapacity);
/// assert_eq!(UtilizationStatus::classify(70.0), UtilizationStatus::Healthy);
/// assert_eq!(UtilizationStatus::classify(90.0), UtilizationStatus::Healthy);
/// assert_eq!(UtilizationStatus::classify(90.001), UtilizationStatus::Bottleneck);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum UtilizationStatus {
    /// Under 70%: idle capacity.
    Overcapacity,
    /// 70% to 90% inclusive.
    Healthy,
    /// Over 90%: no headroom.
    Bottleneck,
}

impl UtilizationStatus {
    /// Classify a utilisation rate given in percent.
    pub fn classify(utilization_rate: f64) -> Self {
        if utilization_rate < OVERCAPACITY_THRESHOLD {
            UtilizationStatus::Overcapacity
        } else if utilization_rate > BOTTLENECK_THRESHOLD {
            UtilizationStatus::Bottleneck
        } else {
            UtilizationStatus::Healthy
        }
    }

    /// Upper-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            UtilizationStatus::Overcapacity => "OVERCAPACITY",
            UtilizationStatus::Healthy => "HEALTHY",
            UtilizationStatus::Bottleneck => "BOTTLENECK",
        }
    }

    /// Suggested action.
    pub fn recommendation(&self) -> &'static str {
        match self {
            UtilizationStatus::Overcapacity => "Consider cost reduction or workload increase",
            UtilizationStatus::Healthy => "Optimal capacity utilization",
            UtilizationStatus::Bottleneck => "Investment needed to increase capacity",
        }
    }

    /// Display colour for dashboards.
    pub fn color(&self) -> &'static str {
        match self {
            UtilizationStatus::Overcapacity => "red",
            UtilizationStatus::Healthy => "green",
            UtilizationStatus::Bottleneck => "orange",
        }
    }
}

impl fmt::Display for UtilizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Share of practical capacity consumed by one activity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityUtilization {
    /// Activity name.
    pub name: String,
    /// Minutes per transaction.
    pub unit_time: f64,
    /// Transactions per period.
    pub volume: u64,
    /// Minutes per period.
    pub total_time: f64,
    /// `total_time / practical_capacity * 100`, or 0 without capacity.
    pub percentage_of_capacity: f64,
}

/// Utilisation of a resource pool by a set of activities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtilizationReport {
    /// Practical capacity in minutes.
    pub practical_capacity: f64,
    /// Minutes consumed by activities.
    pub used_capacity: f64,
    /// `practical_capacity - used_capacity`; negative when overbooked.
    pub unused_capacity: f64,
    /// Used over practical, in percent.
    pub utilization_rate: f64,
    /// Classification of `utilization_rate`.
    pub status: UtilizationStatus,
    /// Suggested action for `status`.
    pub recommendation: String,
    /// Display colour for `status`.
    pub status_color: String,
    /// Per-activity share of capacity.
    pub activities_breakdown: Vec<ActivityUtilization>,
}

/// Measure how much of `practical_capacity` the activities consume.
///
/// Zero (or negative) capacity yields a utilisation rate of 0.
pub fn utilization_report(practical_capacity: f64, activities: &[Activity]) -> UtilizationReport {
    let share = |minutes: f64| {
        if practical_capacity > 0.0 {
            minutes / practical_capacity * 100.0
        } else {
            0.0
        }
    };

    let used_capacity: f64 = activities.iter().map(Activity::used_minutes).sum();
    let utilization_rate = share(used_capacity);
    let status = UtilizationStatus::classify(utilization_rate);

    let activities_breakdown = activities
        .iter()
        .map(|activity| {
            let total_time = activity.used_minutes();
            ActivityUtilization {
                name: activity.name.clone(),
                unit_time: activity.unit_time,
                volume: activity.volume,
                total_time,
                percentage_of_capacity: share(total_time),
            }
        })
        .collect();

    UtilizationReport {
        practical_capacity,
        used_capacity,
        unused_capacity: practical_capacity - used_capacity,
        utilization_rate,
        status,
        recommendation: status.recommendation().to_string(),
        status_color: status.color().to_string(),
        activities_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_healthy_report() {
        let activities = vec![
            Activity::new("Process orders", 8.0, 1_500),
            Activity::new("Handle inquiries", 10.0, 800),
        ];
        let report = utilization_report(25_000.0, &activities);

        assert_relative_eq!(report.used_capacity, 20_000.0);
        assert_relative_eq!(report.unused_capacity, 5_000.0);
        assert_relative_eq!(report.utilization_rate, 80.0);
        assert_eq!(report.status, UtilizationStatus::Healthy);
        assert_eq!(report.recommendation, "Optimal capacity utilization");
        assert_eq!(report.status_color, "green");
        assert_relative_eq!(report.activities_breakdown[0].percentage_of_capacity, 48.0);
        assert_relative_eq!(report.activities_breakdown[1].percentage_of_capacity, 32.0);
    }

    #[test]
    fn test_boundaries() {
        let at = |minutes: f64| utilization_report(1_000.0, &[Activity::new("a", minutes, 1)]);
        assert_eq!(at(699.99).status, UtilizationStatus::Overcapacity);
        assert_eq!(at(700.0).status, UtilizationStatus::Healthy);
        assert_eq!(at(900.0).status, UtilizationStatus::Healthy);
        assert_eq!(at(900.01).status, UtilizationStatus::Bottleneck);
    }

    #[test]
    fn test_zero_capacity() {
        let report = utilization_report(0.0, &[Activity::new("a", 5.0, 10)]);
        assert_eq!(report.utilization_rate, 0.0);
        assert_eq!(report.status, UtilizationStatus::Overcapacity);
        assert_eq!(report.activities_breakdown[0].percentage_of_capacity, 0.0);
    }

    #[test]
    fn test_overbooked_is_bottleneck() {
        let report = utilization_report(1_000.0, &[Activity::new("a", 2.0, 600)]);
        assert_relative_eq!(report.unused_capacity, -200.0);
        assert_eq!(report.status, UtilizationStatus::Bottleneck);
        assert_eq!(report.recommendation, "Investment needed to increase capacity");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_status_serialises_upper_case() {
        let json = serde_json::to_string(&UtilizationStatus::Overcapacity).unwrap();
        assert_eq!(json, "\"OVERCAPACITY\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_used_plus_unused_is_practical(
            capacity in 1.0_f64..1.0e7,
            rows in prop::collection::vec((0.0_f64..60.0, 0_u64..10_000), 0..20),
        ) {
            let activities: Vec<Activity> = rows
                .iter()
                .map(|&(t, v)| Activity::new("a", t, v))
                .collect();
            let report = utilization_report(capacity, &activities);

            let total = report.used_capacity + report.unused_capacity;
            prop_assert!((total - capacity).abs() <= 1e-9 * capacity.max(report.used_capacity));
            prop_assert_eq!(report.status, UtilizationStatus::classify(report.utilization_rate));

            let share_sum: f64 = report
                .activities_breakdown
                .iter()
                .map(|a| a.percentage_of_capacity)
                .sum();
            prop_assert!((share_sum - report.utilization_rate).abs() <= 1e-6 * report.utilization_rate.max(1.0));
        }
    }
}
