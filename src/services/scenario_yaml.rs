use std::io::{self, Write};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::scenario::{DevComplexity, Scenario};

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown development tier: {0}")]
    UnknownTier(String),
}

#[derive(Serialize, Deserialize)]
struct ScenarioRecord {
    dev_complexity: String,
    initial_users: u32,
    psychiatrist_count: u32,
    premium_price: Decimal,
    conversion_rate_percent: Decimal,
    deep_ai_enabled: bool,
}

pub fn load_scenario_from_yaml_file(path: &str) -> Result<Scenario, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<Scenario, ScenarioYamlError> {
    let record: ScenarioRecord = serde_yaml::from_str(input)?;
    Ok(Scenario {
        dev_complexity: parse_tier(&record.dev_complexity)?,
        initial_users: record.initial_users,
        psychiatrist_count: record.psychiatrist_count,
        premium_price: record.premium_price,
        conversion_rate_percent: record.conversion_rate_percent,
        deep_ai_enabled: record.deep_ai_enabled,
    })
}

pub fn serialize_scenario_to_yaml<W: Write>(writer: &mut W, scenario: &Scenario) -> io::Result<()> {
    let record = ScenarioRecord {
        dev_complexity: tier_name(scenario.dev_complexity).to_string(),
        initial_users: scenario.initial_users,
        psychiatrist_count: scenario.psychiatrist_count,
        premium_price: scenario.premium_price,
        conversion_rate_percent: scenario.conversion_rate_percent,
        deep_ai_enabled: scenario.deep_ai_enabled,
    };

    let yaml = serde_yaml::to_string(&record).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}

/// The starting parameter set a new scenario file is seeded with.
pub fn default_scenario() -> Scenario {
    Scenario {
        dev_complexity: DevComplexity::Standard,
        initial_users: 1000,
        psychiatrist_count: 5,
        premium_price: dec!(19.99),
        conversion_rate_percent: dec!(5),
        deep_ai_enabled: true,
    }
}

pub(crate) fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

fn parse_tier(value: &str) -> Result<DevComplexity, ScenarioYamlError> {
    match value.trim().to_lowercase().as_str() {
        "mvp" => Ok(DevComplexity::Mvp),
        "standard" => Ok(DevComplexity::Standard),
        "enterprise" => Ok(DevComplexity::Enterprise),
        _ => Err(ScenarioYamlError::UnknownTier(value.to_string())),
    }
}

fn tier_name(tier: DevComplexity) -> &'static str {
    match tier {
        DevComplexity::Mvp => "mvp",
        DevComplexity::Standard => "standard",
        DevComplexity::Enterprise => "enterprise",
    }
}
