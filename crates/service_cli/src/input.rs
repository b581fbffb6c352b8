//! JSON input records for each command.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{AnalysisDefaults, MAX_PROJECT_YEARS};
use crate::{CliError, Result};
use viability_capacity::{Activity, CapacityError, ResourceType};
use viability_finance::FinancialImpactInputs;
use viability_risk::{DistributionSpec, RiskError};

/// Read and deserialise a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    Ok(serde_json::from_str(&read_file(path)?)?)
}

fn read_file(path: &str) -> Result<String> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Read financial-impact inputs, filling absent rates and horizon from the
/// configured defaults.
pub fn read_metrics_input(
    path: &str,
    defaults: &AnalysisDefaults,
) -> Result<FinancialImpactInputs> {
    parse_metrics_input(&read_file(path)?, defaults)
}

/// Parse financial-impact inputs from JSON text.
pub fn parse_metrics_input(
    content: &str,
    defaults: &AnalysisDefaults,
) -> Result<FinancialImpactInputs> {
    let mut record: Map<String, Value> = serde_json::from_str(content)?;
    let fallbacks = [
        ("discount_rate", Value::from(defaults.discount_rate)),
        ("tax_rate", Value::from(defaults.tax_rate)),
        ("project_years", Value::from(defaults.project_years)),
        ("inflation_rate", Value::from(defaults.inflation_rate)),
    ];
    for (key, value) in fallbacks {
        record.entry(key).or_insert(value);
    }
    let inputs: FinancialImpactInputs = serde_json::from_value(Value::Object(record))?;
    check_horizon(inputs.project_years, inputs.discount_rate)?;
    Ok(inputs)
}

/// Apply the configuration ranges to a horizon and rate read from an input
/// file: `project_years` within `[1, MAX_PROJECT_YEARS]`, `discount_rate`
/// within `[0, 1]`.
pub fn check_horizon(project_years: u32, discount_rate: f64) -> Result<()> {
    if !(1..=MAX_PROJECT_YEARS).contains(&project_years) {
        return Err(CliError::InvalidArgument(format!(
            "project_years must be within [1, {MAX_PROJECT_YEARS}], got {}",
            project_years
        )));
    }
    if !(0.0..=1.0).contains(&discount_rate) {
        return Err(CliError::InvalidArgument(format!(
            "discount_rate must be within [0, 1], got {}",
            discount_rate
        )));
    }
    Ok(())
}

/// Base project figures for the three-scenario comparison.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioInput {
    pub capex: f64,
    pub opex_yearly: f64,
    pub annual_benefits: f64,
    #[serde(default)]
    pub project_years: Option<u32>,
    #[serde(default)]
    pub discount_rate: Option<f64>,
}

/// One resource pool and the activities drawing on it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TdabcInput {
    pub total_cost: f64,
    pub theoretical_capacity_minutes: f64,
    #[serde(default = "default_resource_type")]
    pub resource_type: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

fn default_resource_type() -> String {
    ResourceType::People.as_str().to_string()
}

impl TdabcInput {
    /// Resource class, rejecting anything but `people` or `machines`.
    pub fn resource(&self) -> std::result::Result<ResourceType, CapacityError> {
        self.resource_type.parse()
    }
}

/// A distribution written as its kind plus named parameters, e.g.
/// `{"distribution": "triangular", "low": 0.0, "mode": 0.1, "high": 0.3}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistributionInput {
    pub distribution: String,
    #[serde(flatten)]
    pub params: BTreeMap<String, f64>,
}

impl DistributionInput {
    /// Checked distribution.
    pub fn to_spec(&self) -> std::result::Result<DistributionSpec, RiskError> {
        DistributionSpec::from_params(&self.distribution, &self.params)
    }
}

/// Project model to simulate, optionally adjusted by a scenario template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationInput {
    pub initial_investment: f64,
    pub annual_benefits: f64,
    pub annual_costs: f64,
    #[serde(default)]
    pub project_years: Option<u32>,
    #[serde(default)]
    pub discount_rate: Option<f64>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub distributions: BTreeMap<String, DistributionInput>,
}

impl SimulationInput {
    /// Checked distributions keyed by model parameter.
    pub fn distribution_specs(
        &self,
    ) -> std::result::Result<BTreeMap<String, DistributionSpec>, RiskError> {
        self.distributions
            .iter()
            .map(|(name, input)| Ok((name.clone(), input.to_spec()?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_input_takes_configured_defaults() {
        let defaults = AnalysisDefaults {
            discount_rate: 0.08,
            project_years: 7,
            ..Default::default()
        };
        let inputs = parse_metrics_input(
            r#"{
                "capex": {"hardware": 400000},
                "cost_reduction": {
                    "baseline_costs": {"staffing": 500000},
                    "reduction_pct": {"staffing": 40}
                },
                "tax_rate": 0.25
            }"#,
            &defaults,
        );
        let inputs = match inputs {
            Ok(inputs) => inputs,
            Err(e) => panic!("metrics input should parse: {e}"),
        };

        assert_eq!(inputs.discount_rate, 0.08);
        assert_eq!(inputs.project_years, 7);
        assert_eq!(inputs.tax_rate, 0.25);
        assert_eq!(inputs.inflation_rate, 0.03);
        assert_eq!(inputs.capex.hardware, 400_000.0);
    }

    #[test]
    fn test_metrics_input_horizon_range() {
        let err = parse_metrics_input(
            r#"{"capex": {"hardware": 1000}, "project_years": 4000000000}"#,
            &AnalysisDefaults::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(msg) if msg.contains("project_years")));

        assert!(check_horizon(MAX_PROJECT_YEARS, 0.0).is_ok());
        assert!(check_horizon(1, 1.0).is_ok());
        assert!(check_horizon(0, 0.1).is_err());
        assert!(check_horizon(5, -0.01).is_err());
        assert!(check_horizon(5, f64::NAN).is_err());
    }

    #[test]
    fn test_metrics_input_must_be_object() {
        let err = parse_metrics_input("[1, 2]", &AnalysisDefaults::default()).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn test_tdabc_input_strict_resource() {
        let input: TdabcInput = serde_json::from_str(
            r#"{
                "total_cost": 50000,
                "theoretical_capacity_minutes": 10000,
                "resource_type": "robots",
                "activities": [{"name": "Pick", "unit_time": 5, "volume": 100}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            input.resource().unwrap_err(),
            CapacityError::UnsupportedResourceType("robots".to_string())
        );
        assert_eq!(input.activities[0].used_minutes(), 500.0);
    }

    #[test]
    fn test_tdabc_resource_defaults_to_people() {
        let input: TdabcInput =
            serde_json::from_str(r#"{"total_cost": 1, "theoretical_capacity_minutes": 1}"#)
                .unwrap();
        assert_eq!(input.resource().unwrap(), ResourceType::People);
        assert!(input.activities.is_empty());
    }

    #[test]
    fn test_simulation_distributions() {
        let input: SimulationInput = serde_json::from_str(
            r#"{
                "initial_investment": 500000,
                "annual_benefits": 200000,
                "annual_costs": 50000,
                "template": "strategic_implementation",
                "distributions": {
                    "cost_overrun": {"distribution": "triangular", "low": 0.0, "mode": 0.1, "high": 0.3},
                    "benefit_realization": {"distribution": "Uniform", "low": 0.8, "high": 1.2}
                }
            }"#,
        )
        .unwrap();

        let specs = input.distribution_specs().unwrap();
        assert_eq!(
            specs["cost_overrun"],
            DistributionSpec::Triangular {
                low: 0.0,
                mode: 0.1,
                high: 0.3
            }
        );
        assert_eq!(specs["benefit_realization"].kind(), "uniform");
        assert_eq!(input.template.as_deref(), Some("strategic_implementation"));
    }

    #[test]
    fn test_simulation_missing_parameter() {
        let input: SimulationInput = serde_json::from_str(
            r#"{
                "initial_investment": 1, "annual_benefits": 1, "annual_costs": 0,
                "distributions": {"discount_rate": {"distribution": "normal", "mean": 0.1}}
            }"#,
        )
        .unwrap();
        assert!(matches!(
            input.distribution_specs(),
            Err(RiskError::MissingDistributionParameter { parameter: "std", .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_json::<ScenarioInput>("/nonexistent/input.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
