//! # Estimator
//!
//! Classifies a fact set with the standard engine, then prices each matched
//! regulation from a [`CostCatalogue`]. Regulations stay in rank order, so
//! the most relevant obligations come first in the estimate as well.

use serde::{Deserialize, Serialize};

use regfinder_core::{Answer, FactSet, Maturity, OrgSize, Regulation, Relevance, DEFAULT_SIZE};
use regfinder_engine::{maturity_with, RegulationFinder};

use crate::catalogue::{CostCatalogue, EstimateKind};
use crate::error::EstimateError;
use crate::scale::{CostRange, DiscountFactor, SizeMultiplier};

/// A scaled line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemEstimate {
    /// Catalogue line item key.
    pub key: String,
    /// Unscaled base range.
    pub base: CostRange,
    /// Range after size multiplier and maturity discount.
    pub scaled: CostRange,
}

/// The priced part of one matched regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationEstimate {
    /// Matched regulation.
    pub regulation: Regulation,
    /// Relevance tier the finder assigned.
    pub relevance: Relevance,
    /// Scaled line items, catalogue order.
    pub line_items: Vec<LineItemEstimate>,
    /// Sum of the scaled line items.
    pub subtotal: CostRange,
}

/// A complete estimate for one fact set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Which figure was computed.
    pub kind: EstimateKind,
    /// Size class the multiplier was taken from.
    pub size: OrgSize,
    /// Maturity the discount was taken from.
    pub maturity: Maturity,
    /// Applied size multiplier.
    pub multiplier: SizeMultiplier,
    /// Applied maturity discount.
    pub discount: DiscountFactor,
    /// Priced regulations in rank order.
    pub regulations: Vec<RegulationEstimate>,
    /// Matched regulations the catalogue has no entries for.
    pub unpriced: Vec<Regulation>,
    /// Sum of all subtotals.
    pub total: CostRange,
}

impl Estimate {
    /// Whether nothing matched at all.
    pub fn is_empty(&self) -> bool {
        self.regulations.is_empty() && self.unpriced.is_empty()
    }
}

/// Estimator bound to a finder and one catalogue.
#[derive(Debug, Clone)]
pub struct Estimator {
    finder: RegulationFinder,
    catalogue: CostCatalogue,
}

impl Estimator {
    /// Create an estimator from an explicit finder and catalogue.
    pub fn new(finder: RegulationFinder, catalogue: CostCatalogue) -> Self {
        Self { finder, catalogue }
    }

    /// The standard finder with the built-in catalogue for `kind`.
    pub fn standard(kind: EstimateKind) -> Result<Self, EstimateError> {
        let catalogue = CostCatalogue::standard(kind)?;
        Ok(Self::new(RegulationFinder::standard(), catalogue))
    }

    /// The catalogue in use.
    pub fn catalogue(&self) -> &CostCatalogue {
        &self.catalogue
    }

    /// Estimate for an aggregated fact set and a declared maturity.
    ///
    /// # Errors
    ///
    /// [`EstimateError::Overflow`] if a scaled amount or a sum exceeds the
    /// currency representation.
    pub fn estimate(&self, facts: &FactSet, maturity: Maturity) -> Result<Estimate, EstimateError> {
        let size = facts.size_class().unwrap_or_else(|| {
            tracing::warn!(
                values = ?facts.values(regfinder_core::FactCategory::Size),
                fallback = %DEFAULT_SIZE,
                "no recognized organization size, using default multiplier"
            );
            DEFAULT_SIZE
        });
        let multiplier = SizeMultiplier::for_size(size);
        let discount = DiscountFactor::for_maturity(maturity);

        let classification = self.finder.classify_facts(facts);
        let mut regulations = Vec::new();
        let mut unpriced = Vec::new();
        let mut total = CostRange::ZERO;

        for candidate in &classification {
            let mut line_items = Vec::new();
            let mut subtotal = CostRange::ZERO;
            for item in self.catalogue.items_for(candidate.regulation) {
                let scaled = item.base.scaled(multiplier, discount)?;
                subtotal = subtotal.checked_add(&scaled)?;
                line_items.push(LineItemEstimate {
                    key: item.key.clone(),
                    base: item.base,
                    scaled,
                });
            }
            if line_items.is_empty() {
                tracing::debug!(
                    regulation = %candidate.regulation,
                    kind = %self.catalogue.kind(),
                    "regulation unpriced"
                );
                unpriced.push(candidate.regulation);
                continue;
            }
            total = total.checked_add(&subtotal)?;
            regulations.push(RegulationEstimate {
                regulation: candidate.regulation,
                relevance: candidate.relevance,
                line_items,
                subtotal,
            });
        }

        tracing::debug!(
            kind = %self.catalogue.kind(),
            size = %size,
            maturity = %maturity,
            priced = regulations.len(),
            unpriced = unpriced.len(),
            total = %total,
            "estimate complete"
        );

        Ok(Estimate {
            kind: self.catalogue.kind(),
            size,
            maturity,
            multiplier,
            discount,
            regulations,
            unpriced,
            total,
        })
    }

    /// Aggregate `answers`, read the declared maturity from them, and
    /// estimate.
    pub fn estimate_answers(&self, answers: &[Answer]) -> Result<Estimate, EstimateError> {
        let facts = self.finder.facts(answers);
        let maturity = maturity_with(self.finder.questionnaire(), answers);
        self.estimate(&facts, maturity)
    }
}
