//! # Fact Vocabulary — Single Source of Truth
//!
//! Every value a rule can reason about is a variant of one of the enums in
//! this module. Each enum exposes a stable `as_str()` key (the value that
//! travels through answers, fact sets, and serialized results), an `all()`
//! slice in declaration order, `Display`, and `FromStr`.
//!
//! The keys are internal identifiers, not labels. Renaming display copy never
//! touches these strings; the renderer maps keys to localized text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Implements `Display` and `FromStr` in terms of `as_str()` and `all()`.
macro_rules! keyed_vocabulary {
    ($ty:ty, $name:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ValidationError::UnknownValue {
                        vocabulary: $name,
                        value: s.to_string(),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// FactCategory
// ---------------------------------------------------------------------------

/// The fixed semantic categories of a [`FactSet`](crate::FactSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactCategory {
    /// Organization size class.
    Size,
    /// Industry sectors the organization operates in.
    Sectors,
    /// Categories of data the organization processes.
    DataCategories,
    /// Regulated activities the organization performs.
    Activities,
    /// Where the organization is established.
    Locations,
}

impl FactCategory {
    /// Return the string representation of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Sectors => "sectors",
            Self::DataCategories => "dataCategories",
            Self::Activities => "activities",
            Self::Locations => "locations",
        }
    }

    /// Return all categories.
    pub fn all() -> &'static [FactCategory] {
        &[
            Self::Size,
            Self::Sectors,
            Self::DataCategories,
            Self::Activities,
            Self::Locations,
        ]
    }
}

keyed_vocabulary!(FactCategory, "fact category");

/// A vocabulary whose values live in one [`FactCategory`].
///
/// [`FactSet`](crate::FactSet) queries are only possible through this trait,
/// which is what makes unrecognized answer values inert.
pub trait FactKey: Copy {
    /// The category values of this type are stored under.
    const CATEGORY: FactCategory;

    /// The stable key stored in the fact set.
    fn as_str(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// OrgSize
// ---------------------------------------------------------------------------

/// Organization size class, ordered from smallest to largest.
///
/// Bands follow Recommendation 2003/361/EC: micro < 10 staff, small < 50,
/// medium < 250, large otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgSize {
    /// Fewer than 10 employees.
    Micro,
    /// 10–49 employees.
    Small,
    /// 50–249 employees.
    Medium,
    /// 250 employees or more.
    Large,
}

impl OrgSize {
    /// Return the string representation of this size class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Return all size classes, smallest first.
    pub fn all() -> &'static [OrgSize] {
        &[Self::Micro, Self::Small, Self::Medium, Self::Large]
    }
}

impl FactKey for OrgSize {
    const CATEGORY: FactCategory = FactCategory::Size;

    fn as_str(&self) -> &'static str {
        OrgSize::as_str(self)
    }
}

keyed_vocabulary!(OrgSize, "size");

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

/// Industry sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    /// Banking, credit institutions, investment firms.
    Finance,
    /// Insurance and reinsurance undertakings.
    Insurance,
    /// Software, IT services, managed service providers.
    It,
    /// Electricity, gas, oil, district heating, hydrogen.
    Energy,
    /// Air, rail, water, and road transport.
    Transport,
    /// Healthcare providers, laboratories, pharmaceuticals.
    Health,
    /// Drinking water and waste water.
    Water,
    /// IXPs, DNS, TLD registries, cloud, data centres.
    DigitalInfrastructure,
    /// Central and regional public administration.
    PublicAdministration,
    /// Electronic communications networks and services.
    Telecom,
    /// Ground-based space infrastructure operators.
    Space,
    /// Postal and courier services.
    Postal,
    /// Waste management.
    Waste,
    /// Manufacture and distribution of chemicals.
    Chemicals,
    /// Food production, processing, and distribution.
    Food,
    /// Manufacturing (medical devices, machinery, vehicles, electronics).
    Manufacturing,
    /// Research organisations.
    Research,
    /// Online retail and e-commerce.
    Ecommerce,
    /// Brick-and-mortar retail.
    Retail,
    /// Any other sector.
    Other,
}

impl Sector {
    /// Return the string representation of this sector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Insurance => "insurance",
            Self::It => "it",
            Self::Energy => "energy",
            Self::Transport => "transport",
            Self::Health => "health",
            Self::Water => "water",
            Self::DigitalInfrastructure => "digital_infrastructure",
            Self::PublicAdministration => "public_administration",
            Self::Telecom => "telecom",
            Self::Space => "space",
            Self::Postal => "postal",
            Self::Waste => "waste",
            Self::Chemicals => "chemicals",
            Self::Food => "food",
            Self::Manufacturing => "manufacturing",
            Self::Research => "research",
            Self::Ecommerce => "ecommerce",
            Self::Retail => "retail",
            Self::Other => "other",
        }
    }

    /// Return all sectors.
    pub fn all() -> &'static [Sector] {
        &[
            Self::Finance,
            Self::Insurance,
            Self::It,
            Self::Energy,
            Self::Transport,
            Self::Health,
            Self::Water,
            Self::DigitalInfrastructure,
            Self::PublicAdministration,
            Self::Telecom,
            Self::Space,
            Self::Postal,
            Self::Waste,
            Self::Chemicals,
            Self::Food,
            Self::Manufacturing,
            Self::Research,
            Self::Ecommerce,
            Self::Retail,
            Self::Other,
        ]
    }
}

impl FactKey for Sector {
    const CATEGORY: FactCategory = FactCategory::Sectors;

    fn as_str(&self) -> &'static str {
        Sector::as_str(self)
    }
}

keyed_vocabulary!(Sector, "sector");

// ---------------------------------------------------------------------------
// DataCategory
// ---------------------------------------------------------------------------

/// Category of data processed by the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataCategory {
    /// Ordinary personal data (customers, employees).
    Personal,
    /// Special categories under Art. 9 GDPR (health, biometrics, ...).
    Sensitive,
    /// Data about children.
    Children,
    /// Payment, account, or credit data.
    Financial,
}

impl DataCategory {
    /// Return the string representation of this data category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Sensitive => "sensitive",
            Self::Children => "children",
            Self::Financial => "financial",
        }
    }

    /// Return all data categories.
    pub fn all() -> &'static [DataCategory] {
        &[
            Self::Personal,
            Self::Sensitive,
            Self::Children,
            Self::Financial,
        ]
    }
}

impl FactKey for DataCategory {
    const CATEGORY: FactCategory = FactCategory::DataCategories;

    fn as_str(&self) -> &'static str {
        DataCategory::as_str(self)
    }
}

keyed_vocabulary!(DataCategory, "data category");

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// A regulated activity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// Deploys AI systems in its operations.
    AiUsage,
    /// Develops or places AI systems on the market.
    AiDevelopment,
    /// Designated operator of critical infrastructure.
    CriticalInfrastructure,
    /// Places products with digital elements on the market.
    DigitalProducts,
    /// Operates an online platform (hosting, social network, app store).
    OnlinePlatform,
    /// Operates an online marketplace.
    OnlineMarketplace,
    /// Provides services to consumers (B2C).
    ConsumerServices,
    /// Provides payment services.
    PaymentServices,
    /// Issues or provides services for crypto-assets.
    CryptoAssets,
    /// Manufactures connected products or related services.
    ConnectedDevices,
}

impl Activity {
    /// Return the string representation of this activity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiUsage => "ai_usage",
            Self::AiDevelopment => "ai_development",
            Self::CriticalInfrastructure => "critical_infrastructure",
            Self::DigitalProducts => "digital_products",
            Self::OnlinePlatform => "online_platform",
            Self::OnlineMarketplace => "online_marketplace",
            Self::ConsumerServices => "consumer_services",
            Self::PaymentServices => "payment_services",
            Self::CryptoAssets => "crypto_assets",
            Self::ConnectedDevices => "connected_devices",
        }
    }

    /// Return all activities.
    pub fn all() -> &'static [Activity] {
        &[
            Self::AiUsage,
            Self::AiDevelopment,
            Self::CriticalInfrastructure,
            Self::DigitalProducts,
            Self::OnlinePlatform,
            Self::OnlineMarketplace,
            Self::ConsumerServices,
            Self::PaymentServices,
            Self::CryptoAssets,
            Self::ConnectedDevices,
        ]
    }
}

impl FactKey for Activity {
    const CATEGORY: FactCategory = FactCategory::Activities;

    fn as_str(&self) -> &'static str {
        Activity::as_str(self)
    }
}

keyed_vocabulary!(Activity, "activity");

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Where the organization is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Austria.
    At,
    /// Germany.
    De,
    /// Any other EU member state.
    Eu,
    /// Switzerland.
    Ch,
    /// Any other country outside the EU.
    NonEu,
}

impl Location {
    /// Return the string representation of this location.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::At => "at",
            Self::De => "de",
            Self::Eu => "eu",
            Self::Ch => "ch",
            Self::NonEu => "non_eu",
        }
    }

    /// Return all locations.
    pub fn all() -> &'static [Location] {
        &[Self::At, Self::De, Self::Eu, Self::Ch, Self::NonEu]
    }

    /// Whether this location is inside the European Union.
    pub fn is_eu(&self) -> bool {
        match self {
            Self::At | Self::De | Self::Eu => true,
            Self::Ch | Self::NonEu => false,
        }
    }
}

impl FactKey for Location {
    const CATEGORY: FactCategory = FactCategory::Locations;

    fn as_str(&self) -> &'static str {
        Location::as_str(self)
    }
}

keyed_vocabulary!(Location, "location");

// ---------------------------------------------------------------------------
// Regulation
// ---------------------------------------------------------------------------

/// A compliance regime the finder can recommend.
///
/// The `as_str()` key is the unique identifier used for matching,
/// deduplication, and tests. [`display_name_key`](Self::display_name_key)
/// and [`reference`](Self::reference) are handed to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regulation {
    /// General Data Protection Regulation.
    Gdpr,
    /// Network and Information Security Directive 2.
    Nis2,
    /// Digital Operational Resilience Act.
    Dora,
    /// Artificial Intelligence Act.
    AiAct,
    /// Cyber Resilience Act.
    Cra,
    /// Digital Services Act.
    Dsa,
    /// European Accessibility Act.
    Eaa,
    /// Markets in Crypto-Assets Regulation.
    Mica,
    /// Payment Services Directive 2.
    Psd2,
    /// Whistleblower Protection Directive.
    Whistleblowing,
    /// Corporate Sustainability Reporting Directive.
    Csrd,
    /// Data Act.
    DataAct,
}

impl Regulation {
    /// Return the stable regulation key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gdpr => "gdpr",
            Self::Nis2 => "nis2",
            Self::Dora => "dora",
            Self::AiAct => "ai_act",
            Self::Cra => "cra",
            Self::Dsa => "dsa",
            Self::Eaa => "eaa",
            Self::Mica => "mica",
            Self::Psd2 => "psd2",
            Self::Whistleblowing => "whistleblowing",
            Self::Csrd => "csrd",
            Self::DataAct => "data_act",
        }
    }

    /// Return all regulations.
    pub fn all() -> &'static [Regulation] {
        &[
            Self::Gdpr,
            Self::Nis2,
            Self::Dora,
            Self::AiAct,
            Self::Cra,
            Self::Dsa,
            Self::Eaa,
            Self::Mica,
            Self::Psd2,
            Self::Whistleblowing,
            Self::Csrd,
            Self::DataAct,
        ]
    }

    /// Translation key for the regulation's display name.
    pub fn display_name_key(&self) -> String {
        format!("regulation.{}.name", self.as_str())
    }

    /// CELEX number of the legal act in EUR-Lex.
    pub fn reference(&self) -> &'static str {
        match self {
            Self::Gdpr => "32016R0679",
            Self::Nis2 => "32022L2555",
            Self::Dora => "32022R2554",
            Self::AiAct => "32024R1689",
            Self::Cra => "32024R2847",
            Self::Dsa => "32022R2065",
            Self::Eaa => "32019L0882",
            Self::Mica => "32023R1114",
            Self::Psd2 => "32015L2366",
            Self::Whistleblowing => "32019L1937",
            Self::Csrd => "32022L2464",
            Self::DataAct => "32023R2854",
        }
    }
}

keyed_vocabulary!(Regulation, "regulation");

// ---------------------------------------------------------------------------
// Relevance
// ---------------------------------------------------------------------------

/// How strongly a regulation applies.
///
/// The derived ordering is display order: `High < Medium < Low`, so an
/// ascending sort puts the most relevant candidates first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    /// The regulation almost certainly applies.
    High,
    /// The regulation likely applies in part or under conditions.
    Medium,
    /// The regulation may apply; worth a closer look.
    Low,
}

impl Relevance {
    /// Return the string representation of this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Return all tiers, most relevant first.
    pub fn all() -> &'static [Relevance] {
        &[Self::High, Self::Medium, Self::Low]
    }
}

keyed_vocabulary!(Relevance, "relevance");

// ---------------------------------------------------------------------------
// Maturity
// ---------------------------------------------------------------------------

/// Self-declared existing-compliance maturity, consumed by the estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Maturity {
    /// Nothing in place.
    #[default]
    None,
    /// Basic policies and an inventory exist.
    Basic,
    /// Documented management system in operation.
    Advanced,
    /// Externally certified (e.g. ISO 27001).
    Certified,
}

impl Maturity {
    /// Return the string representation of this maturity level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Certified => "certified",
        }
    }

    /// Return all maturity levels, least mature first.
    pub fn all() -> &'static [Maturity] {
        &[Self::None, Self::Basic, Self::Advanced, Self::Certified]
    }
}

keyed_vocabulary!(Maturity, "maturity");
