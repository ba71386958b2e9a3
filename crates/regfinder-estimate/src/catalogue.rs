//! # Line-Item Catalogues
//!
//! Base `[min, max]` amounts per regulation for a small organization with no
//! existing compliance program. Two catalogues ship with the crate:
//!
//! - [`CostCatalogue::implementation`]: one-off implementation effort.
//! - [`CostCatalogue::fines`]: administrative fine exposure for a first
//!   infringement. Regulations whose penalties are left entirely to member
//!   states carry no entries and surface as unpriced.
//!
//! Line item keys have the form `estimate.<kind>.<regulation>.<item>` and are
//! resolved to display text outside the engine.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use regfinder_core::Regulation;

use crate::error::EstimateError;
use crate::scale::CostRange;

// ---------------------------------------------------------------------------
// EstimateKind
// ---------------------------------------------------------------------------

/// Which figure an estimate computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EstimateKind {
    /// One-off implementation cost.
    #[default]
    #[serde(rename = "cost")]
    ImplementationCost,
    /// Fine exposure.
    #[serde(rename = "fines")]
    FineExposure,
}

impl EstimateKind {
    /// Return the string representation of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImplementationCost => "cost",
            Self::FineExposure => "fines",
        }
    }

    /// Return all kinds.
    pub fn all() -> &'static [EstimateKind] {
        &[Self::ImplementationCost, Self::FineExposure]
    }
}

impl fmt::Display for EstimateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimateKind {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| EstimateError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// LineItem
// ---------------------------------------------------------------------------

/// One priced component of complying with (or infringing) a regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Regulation the item belongs to.
    pub regulation: Regulation,
    /// Stable line item key.
    pub key: String,
    /// Base range for a small organization with no maturity discount.
    pub base: CostRange,
}

impl LineItem {
    /// Create an item, deriving its key from kind, regulation and item name.
    pub fn new(
        kind: EstimateKind,
        regulation: Regulation,
        item: &str,
        min: u64,
        max: u64,
    ) -> Result<Self, EstimateError> {
        Ok(Self {
            regulation,
            key: format!("estimate.{kind}.{regulation}.{item}"),
            base: CostRange::new(min, max)?,
        })
    }
}

type Row = (Regulation, &'static str, u64, u64);

const IMPLEMENTATION_ROWS: &[Row] = &[
    (Regulation::Gdpr, "records_of_processing", 2_000, 6_000),
    (Regulation::Gdpr, "impact_assessment", 2_000, 8_000),
    (Regulation::Gdpr, "policies_and_training", 1_500, 5_000),
    (Regulation::Nis2, "risk_management", 10_000, 35_000),
    (Regulation::Nis2, "incident_reporting", 3_000, 10_000),
    (Regulation::Nis2, "supply_chain_security", 4_000, 15_000),
    (Regulation::Dora, "ict_risk_framework", 20_000, 60_000),
    (Regulation::Dora, "resilience_testing", 10_000, 40_000),
    (Regulation::Dora, "third_party_register", 5_000, 15_000),
    (Regulation::AiAct, "risk_classification", 3_000, 10_000),
    (Regulation::AiAct, "transparency_measures", 2_000, 6_000),
    (Regulation::AiAct, "technical_documentation", 8_000, 25_000),
    (Regulation::Cra, "secure_development", 10_000, 30_000),
    (Regulation::Cra, "vulnerability_handling", 5_000, 15_000),
    (Regulation::Dsa, "notice_and_action", 5_000, 15_000),
    (Regulation::Dsa, "transparency_reporting", 3_000, 10_000),
    (Regulation::Eaa, "accessibility_audit", 3_000, 10_000),
    (Regulation::Eaa, "remediation", 5_000, 20_000),
    (Regulation::Mica, "authorisation", 30_000, 100_000),
    (Regulation::Mica, "white_paper", 10_000, 30_000),
    (Regulation::Psd2, "strong_customer_auth", 10_000, 40_000),
    (Regulation::Psd2, "access_interfaces", 8_000, 25_000),
    (Regulation::Whistleblowing, "internal_channel", 1_000, 4_000),
    (Regulation::Whistleblowing, "case_handling", 1_000, 3_000),
    (Regulation::Csrd, "double_materiality", 15_000, 40_000),
    (Regulation::Csrd, "sustainability_reporting", 20_000, 80_000),
    (Regulation::Csrd, "limited_assurance", 10_000, 30_000),
    (Regulation::DataAct, "data_access_by_design", 5_000, 20_000),
    (Regulation::DataAct, "sharing_contracts", 2_000, 8_000),
];

const FINE_ROWS: &[Row] = &[
    (Regulation::Gdpr, "administrative_fine", 20_000, 500_000),
    (Regulation::Nis2, "administrative_fine", 10_000, 250_000),
    (Regulation::Dora, "administrative_fine", 10_000, 200_000),
    (Regulation::AiAct, "administrative_fine", 15_000, 350_000),
    (Regulation::Cra, "administrative_fine", 10_000, 150_000),
    (Regulation::Dsa, "administrative_fine", 10_000, 300_000),
    (Regulation::Mica, "administrative_fine", 10_000, 200_000),
];

// ---------------------------------------------------------------------------
// CostCatalogue
// ---------------------------------------------------------------------------

/// An ordered set of line items for one [`EstimateKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostCatalogue {
    kind: EstimateKind,
    items: Vec<LineItem>,
}

impl CostCatalogue {
    /// Build a catalogue, rejecting duplicate line item keys.
    pub fn new(kind: EstimateKind, items: Vec<LineItem>) -> Result<Self, EstimateError> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.key.as_str()) {
                return Err(EstimateError::DuplicateLineItem(item.key.clone()));
            }
        }
        Ok(Self { kind, items })
    }

    fn from_rows(kind: EstimateKind, rows: &[Row]) -> Result<Self, EstimateError> {
        let items = rows
            .iter()
            .map(|(regulation, item, min, max)| LineItem::new(kind, *regulation, item, *min, *max))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kind, items)
    }

    /// The built-in catalogue for `kind`.
    ///
    /// # Errors
    ///
    /// Only if the built-in tables are malformed, which the unit tests rule
    /// out.
    pub fn standard(kind: EstimateKind) -> Result<Self, EstimateError> {
        match kind {
            EstimateKind::ImplementationCost => Self::from_rows(kind, IMPLEMENTATION_ROWS),
            EstimateKind::FineExposure => Self::from_rows(kind, FINE_ROWS),
        }
    }

    /// The implementation-cost catalogue.
    pub fn implementation() -> Result<Self, EstimateError> {
        Self::standard(EstimateKind::ImplementationCost)
    }

    /// The fine-exposure catalogue.
    pub fn fines() -> Result<Self, EstimateError> {
        Self::standard(EstimateKind::FineExposure)
    }

    /// Which figure this catalogue prices.
    pub fn kind(&self) -> EstimateKind {
        self.kind
    }

    /// All line items in catalogue order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Line items for one regulation, in catalogue order.
    pub fn items_for(&self, regulation: Regulation) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(move |i| i.regulation == regulation)
    }

    /// Whether the catalogue prices `regulation` at all.
    pub fn prices(&self, regulation: Regulation) -> bool {
        self.items_for(regulation).next().is_some()
    }
}
