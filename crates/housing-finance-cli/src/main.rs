mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::eligibility::EligibilityArgs;
use commands::emi::EmiArgs;

/// Housing-finance calculations
#[derive(Parser)]
#[command(
    name = "hfc",
    version,
    about = "Housing-finance EMI and eligibility calculations",
    long_about = "A CLI for housing-finance calculations with decimal precision. \
                  Computes reducing-balance EMIs with month-by-month amortization \
                  schedules, and rule-based loan-eligibility assessments with \
                  banding and recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate an equated monthly installment
    Emi(EmiArgs),
    /// Assess loan eligibility from questionnaire answers
    Eligibility(EligibilityArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Eligibility(args) => commands::eligibility::run_eligibility(args),
        Commands::Version => {
            println!("hfc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
