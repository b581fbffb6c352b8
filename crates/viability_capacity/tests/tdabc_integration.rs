//! Integration tests for the TDABC chain.

use approx::assert_relative_eq;
use proptest::prelude::*;
use viability_capacity::{
    analyze_process_complexity, build_time_equation, capacity_cost_rate, full_tdabc_analysis,
    practical_capacity, practical_capacity_for, utilization_report, Activity, CapacityError,
    CapacityModel, ConditionScenario, ConditionalTime, ResourceType, UtilizationStatus,
};

/// Reference figures: 1,000 theoretical minutes derate to 800 and 850.
#[test]
fn test_reference_capacities() {
    assert_eq!(practical_capacity(1_000.0, ResourceType::People), 800.0);
    assert_eq!(practical_capacity(1_000.0, ResourceType::Machines), 850.0);
    assert_eq!(practical_capacity_for(1_000.0, "unknown"), 800.0);
}

/// 20,000 of 25,000 practical minutes is 80% and healthy.
#[test]
fn test_reference_utilisation() {
    let activities = vec![
        Activity::new("Assemble", 10.0, 1_200),
        Activity::new("Test", 4.0, 2_000),
    ];
    let report = utilization_report(25_000.0, &activities);
    assert_relative_eq!(report.utilization_rate, 80.0);
    assert_eq!(report.status, UtilizationStatus::Healthy);
}

/// Time-equation output feeds a TDABC analysis as activity unit times.
#[test]
fn test_time_equation_drives_activity_costing() {
    let pool = CapacityModel::new(62_500.0, ResourceType::People);
    let rate = pool.cost_rate(100_000.0);
    assert_relative_eq!(rate, 2.0);
    assert_relative_eq!(rate, capacity_cost_rate(100_000.0, 50_000.0));

    let shipping = build_time_equation(
        6.0,
        vec![
            ConditionalTime::new("hazmat", 10.0),
            ConditionalTime::new("export", 4.0),
        ],
    );
    let scenarios = vec![
        ConditionScenario::new("Domestic", Vec::<String>::new(), 3_000),
        ConditionScenario::new("Export hazmat", ["export", "hazmat"], 500),
    ];
    let complexity = analyze_process_complexity(&shipping, &scenarios, rate);
    assert_relative_eq!(complexity.total_time_minutes, 18_000.0 + 10_000.0);

    let activities: Vec<Activity> = complexity
        .scenarios
        .iter()
        .map(|s| Activity::new(s.scenario_name.clone(), s.unit_time_minutes, s.volume))
        .collect();
    let analysis =
        full_tdabc_analysis(100_000.0, 62_500.0, ResourceType::People, &activities).unwrap();

    assert_relative_eq!(
        analysis.cost_allocation.total_activity_cost,
        complexity.total_cost,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        analysis.cost_allocation.total_activity_cost + analysis.cost_allocation.unused_capacity_cost,
        100_000.0,
        epsilon = 1e-6
    );
    assert_eq!(analysis.utilization.status, UtilizationStatus::Overcapacity);
}

/// Strict parsing fails loudly on unknown resource types.
#[test]
fn test_unknown_resource_type_is_error() {
    let err = "contractors".parse::<ResourceType>().unwrap_err();
    assert!(matches!(err, CapacityError::UnsupportedResourceType(name) if name == "contractors"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Below full utilisation, activity and idle-capacity costs add back up
    /// to the pool cost.
    #[test]
    fn prop_allocation_recovers_total_cost(
        total_cost in 0.0_f64..1.0e6,
        theoretical in 10_000.0_f64..1.0e6,
        machines in any::<bool>(),
        loads in prop::collection::vec((0.0_f64..10.0, 0_u64..100), 0..5),
    ) {
        let resource = if machines { ResourceType::Machines } else { ResourceType::People };
        let activities: Vec<Activity> = loads
            .iter()
            .enumerate()
            .map(|(i, &(unit_time, volume))| Activity::new(format!("A{i}"), unit_time, volume))
            .collect();

        let analysis = full_tdabc_analysis(total_cost, theoretical, resource, &activities).unwrap();
        let allocation = &analysis.cost_allocation;

        prop_assert!(analysis.utilization.utilization_rate <= 100.0);
        prop_assert!(
            (allocation.total_activity_cost + allocation.unused_capacity_cost - total_cost).abs()
                <= 1e-6 * total_cost.max(1.0)
        );
        prop_assert_eq!(
            analysis.utilization.status,
            UtilizationStatus::classify(analysis.utilization.utilization_rate)
        );
    }
}
