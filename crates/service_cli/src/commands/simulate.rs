//! Simulate command implementation
//!
//! Runs Monte Carlo simulation, risk assessment and a sensitivity tornado
//! for one project model.

use serde::Serialize;
use tracing::{info, warn};

use super::{number, print_json, OutputFormat, Table};
use crate::config::AnalysisDefaults;
use crate::input::{check_horizon, read_json, SimulationInput};
use crate::Result;
use viability_risk::assessment::DEFAULT_RISK_SCORE;
use viability_risk::scenarios::generate_named_scenario;
use viability_risk::{
    assess_risk, monte_carlo_simulation, risk_assessment, sensitivity_analysis, MonteCarloConfig,
    MonteCarloResult, ProjectModel, RiskAssessment, Scenario, SensitivityRecord,
};

/// Everything the simulate command reports.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Scenario the model was adjusted by, if a template was given.
    pub scenario: Option<Scenario>,
    pub model: ProjectModel,
    pub base_npv: f64,
    pub simulation: MonteCarloResult,
    pub risk_assessment: RiskAssessment,
    /// Ranked by impact, largest first.
    pub sensitivity: Vec<SensitivityRecord>,
}

/// Run the simulate command
pub fn run(input: &str, defaults: &AnalysisDefaults, format: OutputFormat) -> Result<()> {
    info!("Running Monte Carlo simulation...");
    info!("  Input: {}", input);
    info!("  Iterations: {}", defaults.iterations);
    match defaults.seed {
        Some(seed) => info!("  Seed: {}", seed),
        None => info!("  Seed: from entropy"),
    }

    let project: SimulationInput = read_json(input)?;
    let report = simulate(&project, defaults)?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => print_tables(&report),
    }

    info!("Simulation complete (seed {})", report.simulation.seed);
    Ok(())
}

/// Build the model, simulate it, rate it and rank its inputs.
pub fn simulate(
    project: &SimulationInput,
    defaults: &AnalysisDefaults,
) -> Result<SimulationReport> {
    let years = project.project_years.unwrap_or(defaults.project_years);
    let rate = project.discount_rate.unwrap_or(defaults.discount_rate);
    check_horizon(years, rate)?;

    let scenario = project
        .template
        .as_deref()
        .map(|name| {
            generate_named_scenario(
                name,
                project.initial_investment,
                project.annual_costs,
                project.annual_benefits,
            )
        })
        .transpose()?;
    let model = match &scenario {
        Some(scenario) => ProjectModel::from_scenario(scenario, years, rate),
        None => ProjectModel::new(
            project.initial_investment,
            project.annual_benefits,
            project.annual_costs,
            years,
            rate,
        ),
    };

    let distributions = project.distribution_specs()?;
    if distributions.is_empty() {
        warn!("No distributions given; every sample equals the base-case NPV");
    }
    let config = MonteCarloConfig::builder()
        .iterations(defaults.iterations)
        .maybe_seed(defaults.seed)
        .build()?;
    let simulation = monte_carlo_simulation(&model, &distributions, &config)?;

    let risk = match &scenario {
        Some(scenario) => risk_assessment(scenario, &simulation),
        None => assess_risk(DEFAULT_RISK_SCORE, &simulation),
    };

    let base_npv = model.npv();
    let sensitivity =
        sensitivity_analysis(base_npv, &model.sensitivity_parameters(), defaults.variation_pct)?;

    Ok(SimulationReport {
        scenario,
        model,
        base_npv,
        simulation,
        risk_assessment: risk,
        sensitivity,
    })
}

fn print_tables(report: &SimulationReport) {
    let sim = &report.simulation;
    let risk = &report.risk_assessment;
    let scenario = report
        .scenario
        .as_ref()
        .map_or_else(|| "none".to_string(), |s| s.name.clone());

    Table::key_value()
        .row(["Scenario".to_string(), scenario])
        .row(["Base NPV".to_string(), number(report.base_npv)])
        .row([
            "Iterations".to_string(),
            format!("{} of {}", sim.iterations, sim.requested_iterations),
        ])
        .row(["Seed".to_string(), sim.seed.to_string()])
        .row(["Mean NPV".to_string(), number(sim.mean)])
        .row(["Median NPV".to_string(), number(sim.median)])
        .row(["Std deviation".to_string(), number(sim.std)])
        .row([
            "P5 / P95".to_string(),
            format!("{} / {}", number(sim.percentiles.p5), number(sim.percentiles.p95)),
        ])
        .row(["P(NPV > 0) %".to_string(), number(sim.probability_positive_npv)])
        .row(["Risk rating".to_string(), risk.risk_rating.to_string()])
        .print();

    report
        .sensitivity
        .iter()
        .fold(
            Table::new(["Parameter", "NPV low", "NPV high", "Impact", "Impact %"]),
            |table, record| {
                table.row([
                    record.parameter.clone(),
                    number(record.npv_low),
                    number(record.npv_high),
                    number(record.impact),
                    number(record.impact_pct),
                ])
            },
        )
        .print();

    for recommendation in &risk.recommendations {
        println!("- {}", recommendation);
    }
}
