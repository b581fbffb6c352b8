//! Scenarios command implementation
//!
//! Evaluates the three scenario templates on one project and recommends one.

use tracing::info;

use super::{number, print_json, OutputFormat, Table};
use crate::config::AnalysisDefaults;
use crate::input::{check_horizon, read_json, ScenarioInput};
use crate::Result;
use viability_risk::{compare_scenarios, ScenarioComparisonReport};

/// Run the scenarios command
pub fn run(input: &str, defaults: &AnalysisDefaults, format: OutputFormat) -> Result<()> {
    info!("Comparing scenarios...");
    info!("  Input: {}", input);

    let project: ScenarioInput = read_json(input)?;
    let report = compare(&project, defaults)?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            render(&report).print();
            println!(
                "\nRecommended: {} ({})",
                report.comparison.recommendation.recommended_scenario,
                report.comparison.recommendation.reason
            );
        }
    }

    info!("Comparison complete");
    Ok(())
}

fn compare(
    project: &ScenarioInput,
    defaults: &AnalysisDefaults,
) -> Result<ScenarioComparisonReport> {
    let years = project.project_years.unwrap_or(defaults.project_years);
    let rate = project.discount_rate.unwrap_or(defaults.discount_rate);
    check_horizon(years, rate)?;
    Ok(compare_scenarios(
        project.capex,
        project.opex_yearly,
        project.annual_benefits,
        years,
        rate,
    ))
}

fn render(report: &ScenarioComparisonReport) -> Table {
    report.comparison.ranking_by_npv.iter().fold(
        Table::new(["Scenario", "NPV", "ROI %", "Payback (years)", "Risk", "CapEx"]),
        |table, ranked| {
            table.row([
                ranked.name.clone(),
                number(ranked.npv),
                number(ranked.roi_pct),
                number(ranked.payback_years),
                ranked.risk_score.to_string(),
                number(ranked.capex),
            ])
        },
    )
}
