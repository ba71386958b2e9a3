//! # regfinder CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regfinder_cli::classify::{run_classify, ClassifyArgs};
use regfinder_cli::config::CliConfig;
use regfinder_cli::estimate::{run_estimate, EstimateArgs};
use regfinder_cli::output::OutputFormat;
use regfinder_cli::questions::{run_questions, QuestionsArgs};

/// Regulation Finder: which EU regulations may apply to an organization.
///
/// Answers the questionnaire from a file, ranks candidate regulations by
/// relevance and estimates implementation cost or fine exposure.
#[derive(Parser, Debug)]
#[command(name = "regfinder", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the configuration file.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the questionnaire.
    Questions(QuestionsArgs),

    /// Rank the regulations that may apply to an answer file.
    Classify(ClassifyArgs),

    /// Estimate implementation cost or fine exposure for an answer file.
    Estimate(EstimateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "regfinder starting");

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    let format = cli.format.unwrap_or(config.format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::Questions(args) => run_questions(&args, format, &mut out),
        Commands::Classify(args) => run_classify(&args, format, &mut out),
        Commands::Estimate(args) => run_estimate(&args, &config, format, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
