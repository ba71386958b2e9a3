//! # regfinder-engine — Regulation Applicability Engine
//!
//! Maps a questionnaire answer list to a ranked list of applicable
//! regulations:
//!
//! ```text
//! Answer[] ──aggregate()──▶ FactSet ──evaluate()──▶ Candidate[] ──rank()──▶ Classification
//! ```
//!
//! - [`aggregate`] normalizes answers into a total [`FactSet`](regfinder_core::FactSet).
//! - [`evaluate`] runs every rule of the [`RuleSet`] in registration order.
//!   Each rule is a pure decision table over the fact set that concludes
//!   about exactly one [`Regulation`](regfinder_core::Regulation).
//! - [`rank`] stable-sorts by relevance tier.
//! - [`RegulationFinder`] wires the three together.
//!
//! ## Determinism
//!
//! Nothing in this crate performs I/O, reads the clock, or draws random
//! numbers. Identical answers produce identical classifications, including
//! order.

pub mod aggregate;
pub mod error;
pub mod evaluate;
pub mod finder;
pub mod rank;
pub mod rules;

#[cfg(test)]
pub(crate) mod strategies;

pub use aggregate::{aggregate, aggregate_with, declared_maturity, maturity_with};
pub use error::RegistryError;
pub use evaluate::{evaluate, RuleSet};
pub use finder::{classify, RegulationFinder};
pub use rank::rank;
pub use rules::{Finding, Rule, STANDARD_RULES};
