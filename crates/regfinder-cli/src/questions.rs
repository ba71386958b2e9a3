//! # Questions Subcommand
//!
//! Prints the standard questionnaire: ids, selection modes, bindings and
//! option keys.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use regfinder_core::Questionnaire;

use crate::output::{emit, OutputFormat};

/// Arguments for `regfinder questions`.
#[derive(Args, Debug, Default)]
pub struct QuestionsArgs {}

/// Execute the questions subcommand.
pub fn run_questions(
    _args: &QuestionsArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8> {
    emit(out, format, &Questionnaire::standard())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_lists_every_question() {
        let mut buf = Vec::new();
        let code = run_questions(&QuestionsArgs::default(), OutputFormat::Json, &mut buf);
        assert_eq!(code.unwrap(), 0);
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value["questions"].as_array().map(Vec::len),
            Some(Questionnaire::standard().len())
        );
    }
}
