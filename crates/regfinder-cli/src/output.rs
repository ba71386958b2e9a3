//! # Output Rendering
//!
//! JSON and YAML are the serde representations of the library types. Text
//! is a compact, aligned listing meant for terminals. All three carry keys
//! and numbers only.

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use regfinder_core::{Binding, Classification, Questionnaire, SelectionMode};
use regfinder_estimate::Estimate;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned plain text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Plain-text rendering for the values the CLI prints.
pub trait RenderText {
    /// Write the text form of `self`.
    fn render_text(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Write `value` to `out` in `format`.
pub fn emit<T>(out: &mut dyn Write, format: OutputFormat, value: &T) -> Result<()>
where
    T: Serialize + RenderText,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value).context("failed to serialize YAML")?;
            out.write_all(yaml.as_bytes())?;
        }
        OutputFormat::Text => value.render_text(out)?,
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Text renderers
// ---------------------------------------------------------------------------

impl RenderText for Classification {
    fn render_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "no applicable regulations");
        }
        for c in self {
            writeln!(
                out,
                "{:<6}  {:<14}  {:<10}  {}",
                c.relevance.as_str(),
                c.regulation.as_str(),
                c.reference,
                c.justification_key
            )?;
        }
        Ok(())
    }
}

impl RenderText for Estimate {
    fn render_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{} estimate  size={}  maturity={}  multiplier={}bps  discount={}bps",
            self.kind,
            self.size,
            self.maturity,
            self.multiplier.bps(),
            self.discount.bps()
        )?;
        for r in &self.regulations {
            writeln!(
                out,
                "{:<6}  {:<14}  {:>10}  {:>10}",
                r.relevance.as_str(),
                r.regulation.as_str(),
                r.subtotal.min(),
                r.subtotal.max()
            )?;
            for item in &r.line_items {
                writeln!(
                    out,
                    "        {:<58}  {:>10}  {:>10}",
                    item.key,
                    item.scaled.min(),
                    item.scaled.max()
                )?;
            }
        }
        if !self.unpriced.is_empty() {
            let keys: Vec<_> = self.unpriced.iter().map(|r| r.as_str()).collect();
            writeln!(out, "unpriced: {}", keys.join(", "))?;
        }
        writeln!(
            out,
            "{:<6}  {:<14}  {:>10}  {:>10}",
            "total",
            "",
            self.total.min(),
            self.total.max()
        )
    }
}

impl RenderText for Questionnaire {
    fn render_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for (i, q) in self.questions().iter().enumerate() {
            let mode = match q.mode {
                SelectionMode::Single => "single",
                SelectionMode::Multi => "multi",
            };
            let binding = match q.binding {
                Binding::Fact(category) => category.as_str(),
                Binding::Maturity => "maturity",
            };
            let required = if q.required { ", required" } else { "" };
            writeln!(out, "{}. {} ({mode}{required}) -> {binding}", i + 1, q.id)?;
            for option in &q.options {
                writeln!(out, "     {:<24}  {}", option.value, option.label_key)?;
            }
        }
        Ok(())
    }
}
