//! Integration tests for the metrics engine and financial-impact pipeline.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use viability_finance::aggregators::lifecycle::{life_cycle_cost, project_opex_five_years};
use viability_finance::aggregators::{CapExBreakdown, CostCategory, CostReductionInputs, OpExBreakdown};
use viability_finance::metrics::{discounted_payback, irr, npv, simple_payback};
use viability_finance::{
    assess_financial_impact, comprehensive_metrics, CashFlowSeries, FinanceError,
    FinancialImpactInputs, MetricsInputs,
};

/// Uneven cash flows go through the free functions unchanged.
#[test]
fn test_uneven_series() {
    let series = CashFlowSeries::new(vec![50_000.0, 120_000.0, 200_000.0, 200_000.0]);
    let flows = series.as_slice();

    let value = npv(400_000.0, flows, 0.08);
    let rate = irr(400_000.0, flows).unwrap();
    assert_abs_diff_eq!(npv(400_000.0, flows, rate), 0.0, epsilon = 1e-4);
    assert!(rate > 0.08, "positive NPV at 8% implies IRR above 8%");
    assert!(value > 0.0);

    let payback = discounted_payback(400_000.0, flows, 0.08).unwrap();
    assert!(payback > 3.0 && payback < 4.0);
}

/// Metrics from the orchestrator agree with the engine called directly.
#[test]
fn test_pipeline_consistency() {
    let inputs = FinancialImpactInputs {
        cost_reduction: CostReductionInputs::from_named([
            ("feedstocks_energy", 2_000_000.0, 3.0),
            ("off_spec_material", 500_000.0, 30.0),
            ("abnormal_events", 100_000.0, 50.0),
        ])
        .unwrap(),
        capex: CapExBreakdown {
            hardware: 350_000.0,
            software_licenses: 100_000.0,
            services: 150_000.0,
            ..Default::default()
        },
        opex: OpExBreakdown {
            maintenance_contracts: 40_000.0,
            upgrades: 10_000.0,
            ..Default::default()
        },
        project_years: 7,
        discount_rate: 0.12,
        ..Default::default()
    };

    let report = assess_financial_impact(&inputs).unwrap();
    let savings = report.cost_savings.total_annual_savings;
    assert_relative_eq!(savings, 60_000.0 + 150_000.0 + 50_000.0, epsilon = 1e-6);

    let direct = comprehensive_metrics(
        &MetricsInputs::new(600_000.0, savings, 50_000.0, 7, 0.12, 0.0).with_tax_rate(0.21),
    );
    assert_relative_eq!(report.financial_metrics.npv, direct.npv, epsilon = 1e-6);
    assert_eq!(report.financial_metrics.roic_pct, 0.0, "no invested capital given");
    assert_eq!(report.opex_projection.len(), 7);
}

/// Five-year life-cycle helper keeps the 3% default.
#[test]
fn test_five_year_life_cycle() {
    let projection = project_opex_five_years(100_000.0);
    let lcc = life_cycle_cost(250_000.0, &projection);
    let expected_opex: f64 = (0..5).map(|y| 100_000.0 * 1.03_f64.powi(y)).sum();
    assert_relative_eq!(lcc.total_opex, expected_opex, epsilon = 1e-6);
    assert!(lcc.opex_percentage > 66.0);
}

/// Degenerate inputs yield sentinels instead of errors.
#[test]
fn test_degenerate_metrics() {
    let m = comprehensive_metrics(&MetricsInputs::new(0.0, 0.0, 0.0, 5, 0.1, 0.0));
    assert_eq!(m.npv, 0.0);
    assert_eq!(m.roic_pct, 0.0);
    assert_eq!(m.roi_pct, 0.0);
    assert_eq!(m.benefit_cost_ratio, 0.0);
    assert!(m.irr_pct.is_none());
    assert!(simple_payback(0.0, 0.0).is_infinite());
}

/// Unknown categories fail loudly.
#[test]
fn test_unknown_category_error() {
    let err = "cafeteria".parse::<CostCategory>().unwrap_err();
    assert_eq!(err, FinanceError::UnknownCostCategory("cafeteria".to_string()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Without discounting the discounted payback equals the simple one;
    /// with a positive rate it is never shorter.
    #[test]
    fn prop_discounting_never_shortens_payback(
        investment in 1_000.0_f64..1.0e6,
        annual in 100.0_f64..1.0e6,
        years in 1_u32..30,
        rate in 0.0_f64..0.5,
    ) {
        let flows = CashFlowSeries::flat(annual, years);
        let simple = simple_payback(investment, annual);

        if let Some(undiscounted) = discounted_payback(investment, flows.as_slice(), 0.0) {
            prop_assert!((undiscounted - simple).abs() <= 1e-9 * simple.max(1.0));
        }
        if let Some(discounted) = discounted_payback(investment, flows.as_slice(), rate) {
            prop_assert!(discounted >= simple - 1e-9 * simple.max(1.0));
        }
    }

    #[test]
    fn prop_non_positive_investment_pays_back_at_once(
        investment in -1.0e6_f64..=0.0,
        annual in -1.0e6_f64..1.0e6,
        rate in 0.0_f64..0.5,
    ) {
        prop_assert_eq!(discounted_payback(investment, &[annual; 3], rate), Some(0.0));
    }
}
