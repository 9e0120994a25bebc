//! grouping-forest CLI - plan and validate grouping-set forests
//!
//! Usage:
//!   grouping-forest plan <file.toml|file.json> [--config <settings.toml>] [--format tree|json]
//!   grouping-forest check <file.toml|file.json> [--format tree|json]
//!
//! Examples:
//!   grouping-forest plan cube.toml
//!   grouping-forest check rollup.json --format json

use clap::{Parser, Subcommand, ValueEnum};
use grouping_forest::config::Settings;
use grouping_forest::input::{ForestInput, ForestReport};
use grouping_forest::{GroupingSetForest, SimplePlanner};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grouping-forest")]
#[command(about = "Plan and validate superset forests over SQL grouping sets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a forest over the grouping sets in a file
    Plan {
        /// Path to the .toml or .json input
        file: PathBuf,

        /// Settings file (defaults to the standard lookup locations)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "tree")]
        format: OutputFormat,
    },

    /// Validate the parents or children given in a file
    Check {
        /// Path to the .toml or .json input
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "tree")]
        format: OutputFormat,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Indented tree
    Tree,
    /// JSON report
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            file,
            config,
            format,
        } => cmd_plan(config, file, format),
        Commands::Check { file, format } => cmd_check(file, format),
    }
}

fn cmd_plan(config: Option<PathBuf>, file: PathBuf, format: OutputFormat) -> ExitCode {
    let settings = match config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let input = match ForestInput::from_file(&file) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error reading '{}': {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let planner = SimplePlanner::from_settings(&settings.planner);
    print_forest(&input.plan(&planner), format)
}

fn cmd_check(file: PathBuf, format: OutputFormat) -> ExitCode {
    let input = match ForestInput::from_file(&file) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error reading '{}': {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match input.check() {
        Ok(forest) => print_forest(&forest, format),
        Err(e) => {
            eprintln!("Invalid forest: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_forest(forest: &GroupingSetForest<String>, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Tree => {
            print!("{}", forest);
            ExitCode::SUCCESS
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&ForestReport::from_forest(forest)) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing forest: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
