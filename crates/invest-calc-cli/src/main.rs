mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::advisor::{CatalogArgs, RecommendArgs};
use commands::growth::GrowthArgs;
use commands::loan::AmortizeArgs;

/// Retail-investment calculators with decimal precision
#[derive(Parser)]
#[command(
    name = "ivc",
    version,
    about = "Financial projections and portfolio recommendations",
    long_about = "The deterministic engine behind the investment planning tools: \
                  loan amortization schedules, compound-growth projections, and \
                  rule-based model-portfolio recommendations, all computed with \
                  decimal precision."
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
    /// Build a monthly loan amortization schedule
    Amortize(AmortizeArgs),
    /// Project compound growth of a lump sum plus monthly contributions
    Growth(GrowthArgs),
    /// Recommend a model portfolio for an investor profile
    Recommend(RecommendArgs),
    /// Print the model-portfolio catalog
    Catalog(CatalogArgs),
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
        Commands::Amortize(args) => commands::loan::run_amortize(args),
        Commands::Growth(args) => commands::growth::run_growth(args),
        Commands::Recommend(args) => commands::advisor::run_recommend(args),
        Commands::Catalog(args) => commands::advisor::run_catalog(args),
        Commands::Version => {
            println!("ivc {}", env!("CARGO_PKG_VERSION"));
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
