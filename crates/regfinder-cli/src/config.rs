//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, so
//! an empty file (or no file) is valid. Command-line flags win over the file.
//!
//! ```yaml
//! format: json
//! maturity: basic
//! kind: fines
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use regfinder_core::Maturity;
use regfinder_estimate::EstimateKind;

use crate::output::OutputFormat;

/// Defaults for the `regfinder` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format when `--format` is not given.
    pub format: OutputFormat,
    /// Maturity for estimates when neither `--maturity` nor the answer file
    /// declares one.
    pub maturity: Option<Maturity>,
    /// Estimate kind when `--kind` is not given.
    pub kind: EstimateKind,
}

impl CliConfig {
    /// Parse a configuration document.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        // serde_yaml rejects a fully empty document for a struct.
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(input).context("invalid configuration")
    }

    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.kind, EstimateKind::ImplementationCost);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = CliConfig::from_yaml_str("maturity: advanced\n").unwrap();
        assert_eq!(config.maturity, Some(Maturity::Advanced));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn full_file_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regfinder.yaml");
        let content = "format: yaml\nmaturity: basic\nkind: fines\n";
        std::fs::write(&path, content).unwrap();
        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.maturity, Some(Maturity::Basic));
        assert_eq!(config.kind, EstimateKind::FineExposure);
    }

    #[test]
    fn empty_file_is_valid() {
        assert_eq!(CliConfig::from_yaml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(CliConfig::from_yaml_str("colour: blue\n").is_err());
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
