//! Check command implementation
//!
//! Prints the effective configuration after every layer has been applied.

use tracing::info;

use super::{number, print_json, OutputFormat, Table};
use crate::config::Config;
use crate::Result;

/// Run the check command
pub fn run(config: &Config, source: &str, format: OutputFormat) -> Result<()> {
    info!("Checking configuration...");
    info!("  Source: {}", source);

    match format {
        OutputFormat::Json => print_json(config)?,
        OutputFormat::Table => render(config).print(),
    }

    info!("Configuration is valid");
    Ok(())
}

fn render(config: &Config) -> Table {
    let d = &config.defaults;
    Table::key_value()
        .row(["log_level".to_string(), config.log_level.to_string()])
        .row(["discount_rate".to_string(), d.discount_rate.to_string()])
        .row(["tax_rate".to_string(), d.tax_rate.to_string()])
        .row(["project_years".to_string(), d.project_years.to_string()])
        .row(["inflation_rate".to_string(), d.inflation_rate.to_string()])
        .row(["iterations".to_string(), d.iterations.to_string()])
        .row([
            "seed".to_string(),
            d.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
        ])
        .row(["variation_pct".to_string(), number(d.variation_pct)])
}
