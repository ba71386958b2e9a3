//! # regfinder-cli — Regulation Finder Command Line
//!
//! Provides the `regfinder` binary.
//!
//! ## Subcommands
//!
//! - `regfinder questions`: print the standard questionnaire (keys only).
//! - `regfinder classify <ANSWERS>`: rank the regulations that may apply.
//! - `regfinder estimate <ANSWERS>`: price the matched regulations.
//!
//! ```bash
//! regfinder classify answers.yaml
//! regfinder --format json estimate answers.json --kind fines --maturity basic
//! ```
//!
//! Answer files are JSON or YAML, chosen by extension. Output is keys and
//! numbers only; display text is resolved by whatever consumes it.

pub mod answers;
pub mod classify;
pub mod config;
pub mod estimate;
pub mod output;
pub mod questions;
