use chrono::NaiveDate;

use crate::commands::base_commands::Commands;
use crate::services::projection::{PROJECTION_MONTHS, project_year};
use crate::services::projection_plot::write_projection_png;
use crate::services::projection_yaml::serialize_projection_to_yaml;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;

pub fn project_command(cmd: Commands) {
    if let Commands::Project {
        scenario,
        output,
        start_date,
    } = cmd
    {
        let scenario = match load_scenario_from_yaml_file(&scenario) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {e:?}");
                return;
            }
        };

        let start = match NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                eprintln!("Invalid start date: {start_date}");
                return;
            }
        };

        let points = project_year(&scenario);

        let chart_path = format!("{output}.png");
        if let Err(e) = write_projection_png(&chart_path, &points, start) {
            eprintln!("Failed to write projection chart: {e:?}");
        }

        let mut buffer = Vec::new();
        if let Err(e) = serialize_projection_to_yaml(&mut buffer, &points, start) {
            eprintln!("Failed to serialize projection: {e:?}");
            return;
        }

        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write projection: {e:?}");
        } else {
            let mrr = points[PROJECTION_MONTHS as usize].revenue;
            println!("Projected MRR at month {PROJECTION_MONTHS}: {mrr:.2}");
            println!("Projection written to {output}");
            println!("Projection chart written to {chart_path}");
        }
    }
}
