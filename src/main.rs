mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::capex_cmd::capex_command;
use crate::commands::init_cmd::init_command;
use crate::commands::opex_cmd::opex_command;
use crate::commands::project_cmd::project_command;
use crate::commands::report_cmd::report_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Init { .. } => init_command(cmd),
        cmd @ Commands::Capex { .. } => capex_command(cmd),
        cmd @ Commands::Opex { .. } => opex_command(cmd),
        cmd @ Commands::Project { .. } => project_command(cmd),
        cmd @ Commands::Report { .. } => report_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
