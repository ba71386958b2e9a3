//! # Candidates & Classification Results
//!
//! A [`Candidate`] is one regulation judged potentially applicable, with a
//! [`Relevance`] tier and a justification key. A [`Classification`] is the
//! ranked, display-ready list the engine hands to the renderer.
//!
//! Both carry keys only. The renderer resolves `display_name_key` and
//! `justification_key` to localized text and `reference` to a link.

use serde::{Deserialize, Serialize};

use crate::digest::{fingerprint_of, Fingerprint};
use crate::error::FinderError;
use crate::vocab::{Regulation, Relevance};

/// A regulation judged potentially applicable to a fact set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique regulation key.
    pub regulation: Regulation,
    /// Translation key of the regulation's display name.
    pub display_name_key: String,
    /// External reference (CELEX number).
    pub reference: String,
    /// How strongly the regulation applies.
    pub relevance: Relevance,
    /// Translation key of the justification text.
    pub justification_key: String,
}

impl Candidate {
    /// Build a candidate for `regulation`, deriving its display-name key and
    /// reference from the regulation itself.
    ///
    /// `reason` is the branch identifier; the justification key becomes
    /// `finder.reason.<regulation>.<reason>`.
    pub fn new(regulation: Regulation, relevance: Relevance, reason: &str) -> Self {
        Self {
            regulation,
            display_name_key: regulation.display_name_key(),
            reference: regulation.reference().to_string(),
            relevance,
            justification_key: format!("finder.reason.{}.{}", regulation.as_str(), reason),
        }
    }
}

/// Ranked output of one evaluation.
///
/// An empty classification is the valid "no regulation matched" outcome. It
/// is an `Ok` value and never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Candidates, most relevant first.
    pub candidates: Vec<Candidate>,
}

impl Classification {
    /// Wrap an already-ranked candidate list.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Whether no regulation matched.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Iterate candidates in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// The candidate for `regulation`, if it was emitted.
    pub fn get(&self, regulation: Regulation) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.regulation == regulation)
    }

    /// Regulation keys in rank order.
    pub fn regulations(&self) -> Vec<Regulation> {
        self.candidates.iter().map(|c| c.regulation).collect()
    }

    /// Candidates at exactly `relevance`, in rank order.
    pub fn at(&self, relevance: Relevance) -> impl Iterator<Item = &Candidate> {
        self.candidates
            .iter()
            .filter(move |c| c.relevance == relevance)
    }

    /// SHA-256 fingerprint of the serialized result.
    ///
    /// # Errors
    ///
    /// Propagates [`FinderError::Fingerprint`].
    pub fn fingerprint(&self) -> Result<Fingerprint, FinderError> {
        fingerprint_of(self)
    }
}

impl IntoIterator for Classification {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Classification {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_derives_keys_from_regulation() {
        let c = Candidate::new(Regulation::Dora, Relevance::High, "financial_entity");
        assert_eq!(c.display_name_key, "regulation.dora.name");
        assert_eq!(c.reference, "32022R2554");
        assert_eq!(c.justification_key, "finder.reason.dora.financial_entity");
    }

    #[test]
    fn empty_classification_is_distinguishable() {
        let empty = Classification::default();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.get(Regulation::Gdpr).is_none());
    }

    #[test]
    fn lookup_and_tier_filter() {
        let cls = Classification::new(vec![
            Candidate::new(Regulation::Gdpr, Relevance::High, "large_scale"),
            Candidate::new(Regulation::Csrd, Relevance::Medium, "large_undertaking"),
        ]);
        assert_eq!(
            cls.get(Regulation::Csrd).map(|c| c.relevance),
            Some(Relevance::Medium)
        );
        assert_eq!(cls.at(Relevance::High).count(), 1);
        assert_eq!(cls.regulations(), vec![Regulation::Gdpr, Regulation::Csrd]);
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let c = Candidate::new(Regulation::AiAct, Relevance::High, "ai_usage");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["regulation"], "ai_act");
        assert_eq!(json["relevance"], "high");
    }
}
