use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::report_format::format_scenario_report;
use crate::services::costing::{capital_breakdown, monthly_burn};
use crate::services::projection::{break_even_month, project_year};
use crate::services::report_types::ScenarioReport;
use crate::services::scenario_yaml::{data_source_name, load_scenario_from_yaml_file};
use crate::services::unit_economics::profit_snapshot;

pub fn report_command(cmd: Commands) {
    if let Commands::Report {
        scenario: scenario_path,
        output,
        format,
    } = cmd
    {
        let scenario = match load_scenario_from_yaml_file(&scenario_path) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {e:?}");
                return;
            }
        };

        let capital = capital_breakdown(&scenario);
        let burn = monthly_burn(&scenario);
        let snapshot = profit_snapshot(&scenario, &burn);
        let projection = project_year(&scenario);
        let report = ScenarioReport {
            data_source: data_source_name(&scenario_path),
            capital,
            burn,
            snapshot,
            break_even_month: break_even_month(&projection),
            projection,
        };

        let contents = match serialize_report(&report, format) {
            Ok(contents) => contents,
            Err(message) => {
                eprintln!("{message}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write scenario report: {e:?}");
        } else {
            println!("{}", format_scenario_report(&scenario, &report));
            println!();
            println!("Scenario report written to {output}");
        }
    }
}

fn serialize_report(report: &ScenarioReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(report)
            .map_err(|e| format!("Failed to serialize scenario report: {e:?}")),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("Failed to serialize scenario report: {e:?}")),
    }
}
