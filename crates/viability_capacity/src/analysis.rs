//! End-to-end TDABC analysis.

use crate::activity::{activity_cost, Activity, ActivityCost};
use crate::capacity::capacity_cost_rate;
use crate::error::CapacityError;
use crate::resource::{practical_capacity, ResourceType};
use crate::utilization::{utilization_report, UtilizationReport};
use tracing::debug;

/// Capacity and rate figures of an analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TdabcSummary {
    /// Cost of the resource pool per period.
    pub total_cost: f64,
    /// Theoretical minutes per period.
    pub theoretical_capacity_minutes: f64,
    /// Derated minutes per period.
    pub practical_capacity_minutes: f64,
    /// Resource class.
    pub resource_type: ResourceType,
    /// Cost per practical minute.
    pub capacity_cost_rate: f64,
}

/// Split of the pool's cost between work performed and idle capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostAllocation {
    /// Sum of activity costs.
    pub total_activity_cost: f64,
    /// `unused_capacity * capacity_cost_rate`.
    pub unused_capacity_cost: f64,
    /// The pool cost that was allocated.
    pub total_cost: f64,
}

/// Result of [`full_tdabc_analysis`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TdabcAnalysis {
    /// Capacity and rate.
    pub summary: TdabcSummary,
    /// Utilisation of practical capacity.
    pub utilization: UtilizationReport,
    /// Cost of each activity.
    pub activities: Vec<ActivityCost>,
    /// Activity cost versus idle-capacity cost.
    pub cost_allocation: CostAllocation,
}

/// Run the whole TDABC chain for one resource pool.
///
/// Derates capacity, derives the cost per minute, measures utilisation,
/// prices each activity and prices the unused minutes. While utilisation is
/// at most 100%, activity costs plus unused-capacity cost add back up to
/// `total_cost`.
///
/// # Errors
///
/// - [`CapacityError::InvalidInput`] for a negative or non-finite cost or
///   capacity
/// - [`CapacityError::InvalidActivity`] for a negative or non-finite unit time
pub fn full_tdabc_analysis(
    total_cost: f64,
    theoretical_capacity_minutes: f64,
    resource_type: ResourceType,
    activities: &[Activity],
) -> Result<TdabcAnalysis, CapacityError> {
    if !total_cost.is_finite() || total_cost < 0.0 {
        return Err(CapacityError::InvalidInput {
            field: "total_cost",
            reason: format!("must be a non-negative number, got {total_cost}"),
        });
    }
    if !theoretical_capacity_minutes.is_finite() || theoretical_capacity_minutes < 0.0 {
        return Err(CapacityError::InvalidInput {
            field: "theoretical_capacity_minutes",
            reason: format!("must be a non-negative number, got {theoretical_capacity_minutes}"),
        });
    }
    activities.iter().try_for_each(Activity::validate)?;

    let practical = practical_capacity(theoretical_capacity_minutes, resource_type);
    let rate = capacity_cost_rate(total_cost, practical);
    let utilization = utilization_report(practical, activities);

    let costs: Vec<ActivityCost> = activities.iter().map(|a| activity_cost(a, rate)).collect();
    let total_activity_cost = costs.iter().map(|c| c.total_cost).sum();
    let unused_capacity_cost = utilization.unused_capacity * rate;

    debug!(
        rate,
        utilization_rate = utilization.utilization_rate,
        status = %utilization.status,
        "Completed TDABC analysis"
    );

    Ok(TdabcAnalysis {
        summary: TdabcSummary {
            total_cost,
            theoretical_capacity_minutes,
            practical_capacity_minutes: practical,
            resource_type,
            capacity_cost_rate: rate,
        },
        utilization,
        activities: costs,
        cost_allocation: CostAllocation {
            total_activity_cost,
            unused_capacity_cost,
            total_cost,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilization::UtilizationStatus;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_customer_service_department() {
        // 10 staff, 1,875 theoretical minutes each per period
        let activities = vec![
            Activity::new("Process orders", 8.0, 1_000),
            Activity::new("Handle inquiries", 44.0, 100),
            Activity::new("Credit checks", 50.0, 50),
        ];
        let analysis =
            full_tdabc_analysis(150_000.0, 18_750.0, ResourceType::People, &activities).unwrap();

        assert_relative_eq!(analysis.summary.practical_capacity_minutes, 15_000.0);
        assert_relative_eq!(analysis.summary.capacity_cost_rate, 10.0);
        assert_relative_eq!(analysis.utilization.used_capacity, 14_900.0);
        assert_eq!(analysis.utilization.status, UtilizationStatus::Bottleneck);

        assert_relative_eq!(analysis.activities[0].cost_per_unit, 80.0);
        assert_relative_eq!(analysis.activities[0].total_cost, 80_000.0);
        assert_relative_eq!(analysis.cost_allocation.unused_capacity_cost, 1_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_idle_capacity_is_priced() {
        let activities = vec![Activity::new("Inspect", 5.0, 1_000)];
        let analysis =
            full_tdabc_analysis(85_000.0, 100_000.0, ResourceType::Machines, &activities).unwrap();

        assert_relative_eq!(analysis.summary.capacity_cost_rate, 1.0);
        assert_relative_eq!(analysis.cost_allocation.total_activity_cost, 5_000.0);
        assert_relative_eq!(analysis.cost_allocation.unused_capacity_cost, 80_000.0);
        assert_eq!(analysis.utilization.status, UtilizationStatus::Overcapacity);
    }

    #[test]
    fn test_zero_capacity_degenerates_gracefully() {
        let analysis = full_tdabc_analysis(
            10_000.0,
            0.0,
            ResourceType::People,
            &[Activity::new("a", 1.0, 1)],
        )
        .unwrap();
        assert_eq!(analysis.summary.capacity_cost_rate, 0.0);
        assert_eq!(analysis.cost_allocation.total_activity_cost, 0.0);
        assert_eq!(analysis.utilization.utilization_rate, 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let bad_activity = [Activity::new("a", -1.0, 1)];
        assert!(matches!(
            full_tdabc_analysis(1.0, 1.0, ResourceType::People, &bad_activity),
            Err(CapacityError::InvalidActivity { .. })
        ));
        assert!(matches!(
            full_tdabc_analysis(-1.0, 1.0, ResourceType::People, &[]),
            Err(CapacityError::InvalidInput { field: "total_cost", .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_costs_add_back_to_total_under_full_utilisation(
            total_cost in 1.0_f64..1.0e7,
            theoretical in 1_000.0_f64..1.0e6,
            machines in any::<bool>(),
            rows in prop::collection::vec((0.0_f64..30.0, 0_u64..1_000), 0..10),
        ) {
            let resource = if machines { ResourceType::Machines } else { ResourceType::People };
            let activities: Vec<Activity> = rows
                .iter()
                .map(|&(t, v)| Activity::new("a", t, v))
                .collect();

            let analysis = full_tdabc_analysis(total_cost, theoretical, resource, &activities).unwrap();
            prop_assume!(analysis.utilization.utilization_rate <= 100.0);

            let allocated = analysis.cost_allocation.total_activity_cost
                + analysis.cost_allocation.unused_capacity_cost;
            prop_assert!((allocated - total_cost).abs() <= 1e-6 * total_cost);
        }
    }
}
