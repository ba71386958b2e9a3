//! # Rule Evaluator
//!
//! Applies every rule of a [`RuleSet`] to one [`FactSet`] and collects the
//! emitted candidates in registration order.
//!
//! ## Uniqueness
//!
//! [`RuleSet::new`] rejects registries in which two rules conclude about the
//! same regulation, and each rule emits at most one candidate for its own
//! regulation. Together these guarantee a regulation key appears at most
//! once per evaluation without any runtime deduplication.

use regfinder_core::{Candidate, FactSet};

use crate::error::RegistryError;
use crate::rules::{Rule, STANDARD_RULES};

/// An ordered registry of rules, one per regulation.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a registry from rules in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRule`] if two rules conclude about
    /// the same regulation.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RegistryError> {
        for (i, rule) in rules.iter().enumerate() {
            if let Some(first) = rules[..i]
                .iter()
                .find(|earlier| earlier.regulation == rule.regulation)
            {
                return Err(RegistryError::DuplicateRule {
                    regulation: rule.regulation,
                    first: first.name,
                    second: rule.name,
                });
            }
        }
        Ok(Self { rules })
    }

    /// The standard rule catalogue.
    pub fn standard() -> Self {
        // STANDARD_RULES holds one rule per regulation; covered by
        // `standard_rule_set_passes_registry_validation`.
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against `facts`.
    ///
    /// Candidates are returned in registration order, unranked.
    pub fn evaluate(&self, facts: &FactSet) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for rule in &self.rules {
            match rule.apply(facts) {
                Some(candidate) => {
                    tracing::debug!(
                        rule = rule.name,
                        regulation = %candidate.regulation,
                        relevance = %candidate.relevance,
                        justification = %candidate.justification_key,
                        "rule fired"
                    );
                    candidates.push(candidate);
                }
                None => tracing::trace!(rule = rule.name, "rule did not fire"),
            }
        }
        candidates
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Evaluate the standard rule catalogue against `facts`.
pub fn evaluate(facts: &FactSet) -> Vec<Candidate> {
    RuleSet::standard().evaluate(facts)
}
