use crate::commands::base_commands::Commands;
use crate::services::breakdown_plot::write_breakdown_png;
use crate::services::costing::capital_breakdown;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;

pub fn capex_command(cmd: Commands) {
    if let Commands::Capex { scenario, output } = cmd {
        let scenario = match load_scenario_from_yaml_file(&scenario) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {e:?}");
                return;
            }
        };

        let breakdown = capital_breakdown(&scenario);

        let chart_path = format!("{output}.png");
        let components = [
            ("Development", breakdown.development),
            ("Legal & compliance", breakdown.legal_compliance),
            ("Marketing", breakdown.marketing),
            ("Contingency", breakdown.contingency),
        ];
        if let Err(e) = write_breakdown_png(&chart_path, "Startup Capital", &components) {
            eprintln!("Failed to write capital chart: {e:?}");
        }

        let yaml = match serde_yaml::to_string(&breakdown) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize capital breakdown: {e:?}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write capital breakdown: {e:?}");
        } else {
            println!("Total capital required: {:.2}", breakdown.total);
            println!("Capital breakdown written to {output}");
            println!("Capital chart written to {chart_path}");
        }
    }
}
