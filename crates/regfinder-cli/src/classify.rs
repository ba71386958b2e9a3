//! # Classify Subcommand
//!
//! Loads an answer file, runs the finder and prints the ranked candidates.
//! An empty result is a successful run.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use regfinder_engine::RegulationFinder;

use crate::answers::load_answers;
use crate::output::{emit, OutputFormat};

/// Arguments for `regfinder classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Answer file (JSON or YAML).
    #[arg(value_name = "ANSWERS")]
    pub answers: PathBuf,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let sheet = load_answers(&args.answers)?;
    let classification = RegulationFinder::standard().classify(sheet.answers());
    if let Ok(fingerprint) = classification.fingerprint() {
        tracing::info!(
            candidates = classification.len(),
            %fingerprint,
            "classified"
        );
    }
    emit(out, format, &classification)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str, format: OutputFormat) -> (u8, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(&path, content).unwrap();
        let mut buf = Vec::new();
        let args = ClassifyArgs { answers: path };
        let code = run_classify(&args, format, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn coverage_case_prints_dora_and_gdpr() {
        let (code, text) = run(
            "company_size: large\nsector: [finance]\n\
             data_categories: [personal, financial]\nlocations: [at]\n",
            OutputFormat::Json,
        );
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let regs: Vec<_> = value["candidates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["regulation"].as_str().unwrap().to_string())
            .collect();
        assert!(regs.contains(&"dora".to_string()));
        assert!(regs.contains(&"gdpr".to_string()));
    }

    #[test]
    fn empty_result_still_succeeds() {
        let (code, text) = run("company_size: micro\nsector: [other]\n", OutputFormat::Text);
        assert_eq!(code, 0);
        assert_eq!(text, "no applicable regulations\n");
    }

    #[test]
    fn malformed_answers_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(&path, "- [unbalanced\n").unwrap();
        let mut buf = Vec::new();
        let args = ClassifyArgs { answers: path };
        let result = run_classify(&args, OutputFormat::Text, &mut buf);
        assert!(result.is_err());
    }
}
