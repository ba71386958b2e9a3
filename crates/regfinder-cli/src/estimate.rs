//! # Estimate Subcommand
//!
//! Loads an answer file and prices the matched regulations. The maturity
//! discount is taken from, in order: `--maturity`, the answer file's
//! maturity question, the configuration file, and finally the undiscounted
//! default.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use regfinder_core::Maturity;
use regfinder_engine::{declared_maturity, RegulationFinder};
use regfinder_estimate::{CostCatalogue, EstimateKind, Estimator};

use crate::answers::load_answers;
use crate::config::CliConfig;
use crate::output::{emit, OutputFormat};

/// Arguments for `regfinder estimate`.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Answer file (JSON or YAML).
    #[arg(value_name = "ANSWERS")]
    pub answers: PathBuf,

    /// Existing compliance maturity (none, basic, advanced, certified).
    #[arg(long)]
    pub maturity: Option<Maturity>,

    /// What to estimate (cost, fines).
    #[arg(long)]
    pub kind: Option<EstimateKind>,
}

/// Execute the estimate subcommand.
pub fn run_estimate(
    args: &EstimateArgs,
    config: &CliConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8> {
    let sheet = load_answers(&args.answers)?;
    let finder = RegulationFinder::standard();
    let facts = finder.facts(sheet.answers());
    let maturity = args
        .maturity
        .or_else(|| declared_maturity(finder.questionnaire(), sheet.answers()))
        .or(config.maturity)
        .unwrap_or_default();
    let kind = args.kind.unwrap_or(config.kind);

    let catalogue = CostCatalogue::standard(kind).context("built-in catalogue is invalid")?;
    let estimate = Estimator::new(finder, catalogue)
        .estimate(&facts, maturity)
        .context("estimate failed")?;
    emit(out, format, &estimate)?;
    Ok(0)
}
