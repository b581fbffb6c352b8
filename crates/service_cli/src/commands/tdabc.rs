//! TDABC command implementation
//!
//! Prices the activities drawing on one resource pool and reports idle capacity.

use tracing::{info, warn};

use super::{number, print_json, OutputFormat, Table};
use crate::input::{read_json, TdabcInput};
use crate::Result;
use viability_capacity::{full_tdabc_analysis, TdabcAnalysis, UtilizationStatus};

/// Run the tdabc command
pub fn run(input: &str, format: OutputFormat) -> Result<()> {
    info!("Running TDABC analysis...");
    info!("  Input: {}", input);

    let pool: TdabcInput = read_json(input)?;
    let analysis = analyse(&pool)?;

    if analysis.utilization.status == UtilizationStatus::Bottleneck {
        warn!(
            utilization_rate = analysis.utilization.utilization_rate,
            "Resource pool is a bottleneck"
        );
    }

    match format {
        OutputFormat::Json => print_json(&analysis)?,
        OutputFormat::Table => {
            render(&analysis).print();
            let u = &analysis.utilization;
            println!(
                "\nCapacity cost rate: {} per minute",
                number(analysis.summary.capacity_cost_rate)
            );
            println!(
                "Utilisation {}% ({}): {}",
                number(u.utilization_rate),
                u.status,
                u.recommendation
            );
        }
    }

    info!("Analysis complete");
    Ok(())
}

fn analyse(pool: &TdabcInput) -> Result<TdabcAnalysis> {
    Ok(full_tdabc_analysis(
        pool.total_cost,
        pool.theoretical_capacity_minutes,
        pool.resource()?,
        &pool.activities,
    )?)
}

fn render(analysis: &TdabcAnalysis) -> Table {
    let table = Table::new(["Activity", "Unit time", "Volume", "Cost per unit", "Total cost"]);
    let table = analysis.activities.iter().fold(table, |table, a| {
        table.row([
            a.activity_name.clone(),
            number(a.unit_time_minutes),
            a.volume.to_string(),
            number(a.cost_per_unit),
            number(a.total_cost),
        ])
    });
    let allocation = &analysis.cost_allocation;
    table
        .row([
            "Unused capacity".to_string(),
            String::new(),
            String::new(),
            String::new(),
            number(allocation.unused_capacity_cost),
        ])
        .row([
            "Total".to_string(),
            String::new(),
            String::new(),
            String::new(),
            number(allocation.total_cost),
        ])
}
