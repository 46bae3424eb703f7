use crate::commands::base_commands::Commands;
use crate::services::breakdown_plot::write_breakdown_png;
use crate::services::costing::monthly_burn;
use crate::services::report_types::OperatingReport;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::unit_economics::profit_snapshot;

pub fn opex_command(cmd: Commands) {
    if let Commands::Opex { scenario, output } = cmd {
        let scenario = match load_scenario_from_yaml_file(&scenario) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {e:?}");
                return;
            }
        };

        let burn = monthly_burn(&scenario);
        let snapshot = profit_snapshot(&scenario, &burn);

        let chart_path = format!("{output}.png");
        let components = [
            ("AI & server", burn.server_ai),
            ("Psych network admin", burn.psych_admin),
            ("Operations", burn.operations),
        ];
        if let Err(e) = write_breakdown_png(&chart_path, "Monthly Burn", &components) {
            eprintln!("Failed to write burn chart: {e:?}");
        }

        let report = OperatingReport { burn, snapshot };
        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize operating report: {e:?}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write operating report: {e:?}");
        } else {
            println!("Monthly burn: {:.2}", report.burn.total);
            println!("Monthly profit: {:.2}", report.snapshot.monthly_profit);
            println!("Operating report written to {output}");
            println!("Burn chart written to {chart_path}");
        }
    }
}
