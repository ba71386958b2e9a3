//! # Answer File Loading
//!
//! `.json` files are parsed as JSON; `.yaml`, `.yml` and anything else as
//! YAML. Both the list form and the `question_id: values` map form are
//! accepted (see [`AnswerSheet`]).

use std::path::Path;

use anyhow::{Context, Result};

use regfinder_core::AnswerSheet;

/// Read and parse the answer file at `path`.
pub fn load_answers(path: &Path) -> Result<AnswerSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let sheet = if is_json {
        AnswerSheet::from_json_str(&content)
    } else {
        AnswerSheet::from_yaml_str(&content)
    }
    .with_context(|| format!("failed to parse answers {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        answers = sheet.answers().len(),
        "loaded answers"
    );
    Ok(sheet)
}
