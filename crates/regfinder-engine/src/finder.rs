//! # Regulation Finder Pipeline
//!
//! [`RegulationFinder`] bundles a questionnaire and a rule registry and runs
//! the full pipeline: aggregate → evaluate → rank. It holds no mutable state;
//! one instance can serve any number of evaluations, from any thread.

use regfinder_core::{Answer, Classification, FactSet, Questionnaire};

use crate::aggregate::aggregate_with;
use crate::evaluate::RuleSet;
use crate::rank::rank;

/// The classification pipeline.
#[derive(Debug, Clone, Default)]
pub struct RegulationFinder {
    questionnaire: Questionnaire,
    rules: RuleSet,
}

impl RegulationFinder {
    /// Create a finder from an explicit questionnaire and rule registry.
    pub fn new(questionnaire: Questionnaire, rules: RuleSet) -> Self {
        Self {
            questionnaire,
            rules,
        }
    }

    /// The standard questionnaire and rule catalogue.
    pub fn standard() -> Self {
        Self::new(Questionnaire::standard(), RuleSet::standard())
    }

    /// The questionnaire answers are interpreted against.
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// The rule registry.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Aggregate `answers` into a fact set.
    pub fn facts(&self, answers: &[Answer]) -> FactSet {
        aggregate_with(&self.questionnaire, answers)
    }

    /// Evaluate and rank an already aggregated fact set.
    pub fn classify_facts(&self, facts: &FactSet) -> Classification {
        let ranked = rank(self.rules.evaluate(facts));
        tracing::debug!(candidates = ranked.len(), "classification complete");
        Classification::new(ranked)
    }

    /// Run the full pipeline on a complete answer list.
    pub fn classify(&self, answers: &[Answer]) -> Classification {
        self.classify_facts(&self.facts(answers))
    }
}

/// Classify `answers` with the standard questionnaire and rules.
pub fn classify(answers: &[Answer]) -> Classification {
    RegulationFinder::standard().classify(answers)
}
