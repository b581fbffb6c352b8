//! Metrics command implementation
//!
//! Runs the financial-impact assessment for one automation project.

use tracing::info;

use super::{number, optional, print_json, OutputFormat, Table};
use crate::config::AnalysisDefaults;
use crate::input::read_metrics_input;
use crate::Result;
use viability_finance::{assess_financial_impact, FinancialImpactReport};

/// Run the metrics command
pub fn run(input: &str, defaults: &AnalysisDefaults, format: OutputFormat) -> Result<()> {
    info!("Assessing financial impact...");
    info!("  Input: {}", input);

    let inputs = read_metrics_input(input, defaults)?;
    let report = assess_financial_impact(&inputs)?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => render(&report).print(),
    }

    info!("Assessment complete");
    Ok(())
}

fn render(report: &FinancialImpactReport) -> Table {
    let m = &report.financial_metrics;
    let mut table = Table::key_value()
        .row(["CapEx total".to_string(), number(report.capex_total)])
        .row(["OpEx (year 1)".to_string(), number(report.opex_yearly_total)])
        .row([
            "Annual savings".to_string(),
            number(report.cost_savings.total_annual_savings),
        ]);
    if let Some(revenue) = &report.revenue_enhancement {
        table = table.row([
            "Revenue enhancement".to_string(),
            number(revenue.total_annual_enhancement),
        ]);
    }
    table
        .row(["Invested capital".to_string(), number(report.capital.invested_capital)])
        .row(["Annual net cash flow".to_string(), number(m.annual_net_cash_flow)])
        .row(["NPV".to_string(), number(m.npv)])
        .row(["IRR %".to_string(), optional(m.irr_pct)])
        .row(["Payback (years)".to_string(), number(m.payback_period_years)])
        .row(["Discounted payback (years)".to_string(), optional(m.discounted_payback_years)])
        .row(["ROI %".to_string(), number(m.roi_pct)])
        .row(["ROIC %".to_string(), number(m.roic_pct)])
        .row(["Benefit-cost ratio".to_string(), number(m.benefit_cost_ratio)])
        .row(["Life-cycle cost".to_string(), number(report.life_cycle.total_life_cycle_cost)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_metrics_input;

    #[test]
    fn test_render_reference_project() {
        let inputs = parse_metrics_input(
            r#"{
                "capex": {"hardware": 400000},
                "opex": {"maintenance_contracts": 25000},
                "cost_reduction": {
                    "baseline_costs": {"staffing": 500000},
                    "reduction_pct": {"staffing": 40}
                }
            }"#,
            &AnalysisDefaults::default(),
        )
        .unwrap();
        let report = assess_financial_impact(&inputs).unwrap();
        let rendered = render(&report).render();

        assert!(rendered.contains("│ Annual net cash flow       │ 175000.00"));
        assert!(rendered.contains("│ CapEx total                │ 400000.00"));
        assert!(!rendered.contains("Revenue enhancement"));
    }
}
