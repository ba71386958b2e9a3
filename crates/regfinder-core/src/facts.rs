//! # FactSet — Normalized Questionnaire Facts
//!
//! A [`FactSet`] maps each of the five [`FactCategory`] variants to a set of
//! value keys. It is the only input the rule evaluator sees.
//!
//! ## Invariants
//!
//! - Every category is present after construction, possibly as an empty set.
//! - `size` is never empty: an unanswered size defaults to [`DEFAULT_SIZE`].
//! - Values are trimmed and lowercased; empty strings are discarded.
//! - The set is immutable once built. All construction goes through
//!   [`FactSetBuilder`] (including deserialization), so no path can produce
//!   a fact set that violates the above.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::digest::{fingerprint_of, Fingerprint};
use crate::error::FinderError;
use crate::vocab::{FactCategory, FactKey, OrgSize};

/// Size assumed when the questionnaire did not record one.
///
/// Downstream rules require a total size value; `small` is the most common
/// class among respondents and sits below every size threshold the rules use.
pub const DEFAULT_SIZE: OrgSize = OrgSize::Small;

static EMPTY: BTreeSet<String> = BTreeSet::new();

type CategoryMap = BTreeMap<FactCategory, BTreeSet<String>>;

/// Normalized facts about one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CategoryMap", into = "CategoryMap")]
pub struct FactSet {
    categories: CategoryMap,
}

impl FactSet {
    /// Start building a fact set.
    pub fn builder() -> FactSetBuilder {
        FactSetBuilder::new()
    }

    /// All value keys recorded under `category`.
    pub fn values(&self, category: FactCategory) -> &BTreeSet<String> {
        self.categories.get(&category).unwrap_or(&EMPTY)
    }

    /// Whether `key` is recorded in its category.
    pub fn has<K: FactKey>(&self, key: K) -> bool {
        self.values(K::CATEGORY).contains(key.as_str())
    }

    /// Whether any of `keys` is recorded.
    pub fn has_any<K: FactKey>(&self, keys: &[K]) -> bool {
        keys.iter().any(|k| self.has(*k))
    }

    /// Whether `category` holds no values.
    pub fn is_empty(&self, category: FactCategory) -> bool {
        self.values(category).is_empty()
    }

    /// The recognized size class.
    ///
    /// If several size values are recorded the largest recognized one wins.
    /// Returns `None` when no recorded value is a known size class.
    pub fn size_class(&self) -> Option<OrgSize> {
        self.values(FactCategory::Size)
            .iter()
            .filter_map(|v| v.parse::<OrgSize>().ok())
            .max()
    }

    /// Whether the recognized size class is at least `threshold`.
    ///
    /// An unrecognized size never meets a threshold.
    pub fn size_at_least(&self, threshold: OrgSize) -> bool {
        self.size_class().is_some_and(|s| s >= threshold)
    }

    /// Whether the recognized size class is exactly `size`.
    pub fn size_is(&self, size: OrgSize) -> bool {
        self.size_class() == Some(size)
    }

    /// SHA-256 fingerprint of the canonical serialized form.
    ///
    /// # Errors
    ///
    /// Propagates [`FinderError::Fingerprint`]; cannot occur for a fact set
    /// in practice since every key is a string.
    pub fn fingerprint(&self) -> Result<Fingerprint, FinderError> {
        fingerprint_of(&self.categories)
    }
}

impl Default for FactSet {
    fn default() -> Self {
        FactSetBuilder::new().build()
    }
}

impl From<CategoryMap> for FactSet {
    fn from(raw: CategoryMap) -> Self {
        let mut builder = FactSetBuilder::new();
        for (category, values) in raw {
            for value in values {
                builder.insert_raw(category, &value);
            }
        }
        builder.build()
    }
}

impl From<FactSet> for CategoryMap {
    fn from(facts: FactSet) -> Self {
        facts.categories
    }
}

// ---------------------------------------------------------------------------
// FactSetBuilder
// ---------------------------------------------------------------------------

/// Accumulates values and finalizes them into a [`FactSet`].
#[derive(Debug, Clone, Default)]
pub struct FactSetBuilder {
    categories: CategoryMap,
}

impl FactSetBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw answer value under `category`.
    ///
    /// The value is trimmed and lowercased. Empty values are dropped. Unknown
    /// values are kept as opaque facts.
    pub fn insert_raw(&mut self, category: FactCategory, value: &str) -> &mut Self {
        let normalized = value.trim().to_lowercase();
        if !normalized.is_empty() {
            self.categories
                .entry(category)
                .or_default()
                .insert(normalized);
        }
        self
    }

    /// Record a typed vocabulary value.
    pub fn with<K: FactKey>(mut self, key: K) -> Self {
        self.insert_raw(K::CATEGORY, key.as_str());
        self
    }

    /// Record several typed vocabulary values.
    pub fn with_all<K: FactKey>(mut self, keys: &[K]) -> Self {
        for key in keys {
            self.insert_raw(K::CATEGORY, key.as_str());
        }
        self
    }

    /// Record a raw value (fluent form of [`insert_raw`](Self::insert_raw)).
    pub fn with_raw(mut self, category: FactCategory, value: &str) -> Self {
        self.insert_raw(category, value);
        self
    }

    /// Finalize: materialize every category and default `size`.
    pub fn build(mut self) -> FactSet {
        for category in FactCategory::all() {
            self.categories.entry(*category).or_default();
        }
        let size = self.categories.entry(FactCategory::Size).or_default();
        if size.is_empty() {
            size.insert(DEFAULT_SIZE.as_str().to_string());
        }
        FactSet {
            categories: self.categories,
        }
    }
}
