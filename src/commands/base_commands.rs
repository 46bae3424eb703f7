use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter scenario file with the default parameter set
    Init {
        /// Output scenario YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Compute the startup capital breakdown for a scenario
    Capex {
        /// Scenario YAML file
        #[arg(short, long)]
        scenario: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Compute the monthly burn and profit snapshot for a scenario
    Opex {
        /// Scenario YAML file
        #[arg(short, long)]
        scenario: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Project users, revenue, cost and profit over the next year
    Project {
        /// Scenario YAML file
        #[arg(short, long)]
        scenario: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Projection start date (YYYY-MM-DD)
        #[arg(short = 'd', long, default_value_t = default_start_date())]
        start_date: String,
    },
    /// Produce the full scenario report
    Report {
        /// Scenario YAML file
        #[arg(short, long)]
        scenario: String,
        /// Output file
        #[arg(short, long)]
        output: String,
        /// Output file format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
