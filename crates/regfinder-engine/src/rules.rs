//! # Rule Catalogue
//!
//! Every rule is a pure function `&FactSet -> Option<Finding>` registered
//! together with the one [`Regulation`] it concludes about. The evaluator
//! turns a [`Finding`] into a [`Candidate`] using the registered regulation,
//! so a rule cannot emit any key but its own.
//!
//! ## Decision Tables
//!
//! Rules with several mutually exclusive outcomes are written as a single
//! `match` over a tuple of boolean predicates. The compiler checks the match
//! is exhaustive, and a `match` commits to exactly one arm, so a rule can
//! neither miss a combination nor fire twice. Arm order encodes precedence.
//!
//! ## Closed World
//!
//! Predicates only ask "is this known key present?" through
//! [`FactSet::has`]. An unrecognized value can therefore never make a
//! predicate true. Negative predicates are phrased as "known key X present
//! and no known key Y present", never as "anything other than Y".
//!
//! ## Registration Order
//!
//! [`STANDARD_RULES`] is the tie-break order for candidates of equal
//! relevance.

use regfinder_core::{
    Activity, Candidate, DataCategory, FactSet, Location, OrgSize, Regulation, Relevance, Sector,
};

/// The outcome of a rule that fired: a relevance tier and the branch that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    /// How strongly the regulation applies.
    pub relevance: Relevance,
    /// Branch identifier; becomes the last segment of the justification key.
    pub reason: &'static str,
}

impl Finding {
    const fn new(relevance: Relevance, reason: &'static str) -> Self {
        Self { relevance, reason }
    }

    const fn high(reason: &'static str) -> Self {
        Self::new(Relevance::High, reason)
    }

    const fn medium(reason: &'static str) -> Self {
        Self::new(Relevance::Medium, reason)
    }

    const fn low(reason: &'static str) -> Self {
        Self::new(Relevance::Low, reason)
    }
}

/// Signature of a rule predicate.
pub type RuleFn = fn(&FactSet) -> Option<Finding>;

/// A named rule concluding about one regulation.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Rule name, used in logs and registry errors.
    pub name: &'static str,
    /// The regulation this rule concludes about.
    pub regulation: Regulation,
    decide: RuleFn,
}

impl Rule {
    /// Create a rule.
    pub const fn new(name: &'static str, regulation: Regulation, decide: RuleFn) -> Self {
        Self {
            name,
            regulation,
            decide,
        }
    }

    /// Run the decision table without building a candidate.
    pub fn decide(&self, facts: &FactSet) -> Option<Finding> {
        (self.decide)(facts)
    }

    /// Apply the rule: zero or one candidate for [`Rule::regulation`].
    pub fn apply(&self, facts: &FactSet) -> Option<Candidate> {
        self.decide(facts)
            .map(|f| Candidate::new(self.regulation, f.relevance, f.reason))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("regulation", &self.regulation)
            .finish_non_exhaustive()
    }
}

/// The standard rules in evaluation order.
pub const STANDARD_RULES: &[Rule] = &[
    Rule::new("gdpr", Regulation::Gdpr, gdpr),
    Rule::new("nis2", Regulation::Nis2, nis2),
    Rule::new("dora", Regulation::Dora, dora),
    Rule::new("ai_act", Regulation::AiAct, ai_act),
    Rule::new("cra", Regulation::Cra, cra),
    Rule::new("dsa", Regulation::Dsa, dsa),
    Rule::new("eaa", Regulation::Eaa, eaa),
    Rule::new("mica", Regulation::Mica, mica),
    Rule::new("psd2", Regulation::Psd2, psd2),
    Rule::new("whistleblowing", Regulation::Whistleblowing, whistleblowing),
    Rule::new("csrd", Regulation::Csrd, csrd),
    Rule::new("data_act", Regulation::DataAct, data_act),
];

// ---------------------------------------------------------------------------
// Vocabulary groups
// ---------------------------------------------------------------------------

/// Any data category that involves personal data.
const PERSONAL_DATA: &[DataCategory] = &[
    DataCategory::Personal,
    DataCategory::Sensitive,
    DataCategory::Children,
    DataCategory::Financial,
];

/// Art. 9 special categories and children's data.
const SPECIAL_DATA: &[DataCategory] = &[DataCategory::Sensitive, DataCategory::Children];

/// Sectors listed in Annex I and II of NIS2.
const NIS2_SECTORS: &[Sector] = &[
    Sector::Energy,
    Sector::Transport,
    Sector::Finance,
    Sector::Health,
    Sector::Water,
    Sector::DigitalInfrastructure,
    Sector::PublicAdministration,
    Sector::Telecom,
    Sector::Space,
    Sector::Postal,
    Sector::Waste,
    Sector::Chemicals,
    Sector::Food,
    Sector::Manufacturing,
    Sector::Research,
    Sector::It,
];

/// Financial entities in scope of DORA Art. 2.
const FINANCIAL_ENTITIES: &[Sector] = &[Sector::Finance, Sector::Insurance];

/// Sectors whose consumer services are listed in EAA Art. 2(2).
const EAA_SECTORS: &[Sector] = &[
    Sector::Ecommerce,
    Sector::Finance,
    Sector::Telecom,
    Sector::Transport,
    Sector::Retail,
];

const PLATFORM_ACTIVITIES: &[Activity] = &[Activity::OnlinePlatform, Activity::OnlineMarketplace];

/// Whether a recognized location inside (`eu`) or outside the EU is present.
fn located(facts: &FactSet, eu: bool) -> bool {
    Location::all()
        .iter()
        .any(|l| l.is_eu() == eu && facts.has(*l))
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// GDPR: any personal data.
///
/// Special categories dominate; a controller established only outside the EU
/// is flagged for territorial scope review; otherwise size decides.
fn gdpr(facts: &FactSet) -> Option<Finding> {
    let personal = facts.has_any(PERSONAL_DATA);
    let special = facts.has_any(SPECIAL_DATA);
    let outside_eu_only = located(facts, false) && !located(facts, true);
    let large = facts.size_at_least(OrgSize::Medium);

    match (personal, special, outside_eu_only, large) {
        (false, _, _, _) => None,
        (true, true, _, _) => Some(Finding::high("special_categories")),
        (true, false, true, _) => Some(Finding::medium("extraterritorial")),
        (true, false, false, true) => Some(Finding::high("large_scale")),
        (true, false, false, false) => Some(Finding::medium("personal_data")),
    }
}

/// NIS2: sector × size threshold × critical-entity designation.
///
/// | in sector | ≥ medium | critical | outcome |
/// |---|---|---|---|
/// | no  | –   | –   | none |
/// | yes | yes | –   | High `size_threshold` |
/// | yes | no  | yes | High `critical_entity` |
/// | yes | no  | no  | Low `below_threshold` |
fn nis2(facts: &FactSet) -> Option<Finding> {
    let in_sector = facts.has_any(NIS2_SECTORS);
    let size_qualifies = facts.size_at_least(OrgSize::Medium);
    let critical = facts.has(Activity::CriticalInfrastructure);

    match (in_sector, size_qualifies, critical) {
        (false, _, _) => None,
        (true, true, _) => Some(Finding::high("size_threshold")),
        (true, false, true) => Some(Finding::high("critical_entity")),
        (true, false, false) => Some(Finding::low("below_threshold")),
    }
}

/// DORA: `sector ∈ {finance, insurance} OR (sector = it AND data ∋ financial)`.
fn dora(facts: &FactSet) -> Option<Finding> {
    let financial_entity = facts.has_any(FINANCIAL_ENTITIES);
    let ict_provider = facts.has(Sector::It) && facts.has(DataCategory::Financial);

    match (financial_entity, ict_provider) {
        (true, _) => Some(Finding::high("financial_entity")),
        (false, true) => Some(Finding::medium("ict_provider")),
        (false, false) => None,
    }
}

/// AI Act: any AI activity, independent of every other fact.
fn ai_act(facts: &FactSet) -> Option<Finding> {
    match (
        facts.has(Activity::AiDevelopment),
        facts.has(Activity::AiUsage),
    ) {
        (true, _) => Some(Finding::high("ai_provider")),
        (false, true) => Some(Finding::high("ai_usage")),
        (false, false) => None,
    }
}

/// CRA: products with digital elements.
fn cra(facts: &FactSet) -> Option<Finding> {
    facts
        .has(Activity::DigitalProducts)
        .then_some(Finding::high("digital_products"))
}

/// DSA: intermediary services; small and micro platforms are exempt from
/// the platform-specific obligations.
fn dsa(facts: &FactSet) -> Option<Finding> {
    let platform = facts.has_any(PLATFORM_ACTIVITIES);
    let large = facts.size_at_least(OrgSize::Medium);
    let ecommerce = facts.has(Sector::Ecommerce);

    match (platform, large, ecommerce) {
        (true, true, _) => Some(Finding::high("platform")),
        (true, false, _) => Some(Finding::medium("small_platform")),
        (false, _, true) => Some(Finding::low("intermediary")),
        (false, _, false) => None,
    }
}

/// EAA: consumer services in listed sectors; microenterprises providing
/// services are exempt.
fn eaa(facts: &FactSet) -> Option<Finding> {
    let consumer_services = facts.has(Activity::ConsumerServices) && facts.has_any(EAA_SECTORS);
    let micro = facts.size_is(OrgSize::Micro);

    match (consumer_services, micro) {
        (false, _) => None,
        (true, true) => Some(Finding::low("micro_exemption")),
        (true, false) => Some(Finding::medium("consumer_services")),
    }
}

/// MiCA: crypto-asset issuance or services.
fn mica(facts: &FactSet) -> Option<Finding> {
    facts
        .has(Activity::CryptoAssets)
        .then_some(Finding::high("crypto_assets"))
}

/// PSD2: payment services; banks without the flag get a pointer.
fn psd2(facts: &FactSet) -> Option<Finding> {
    match (
        facts.has(Activity::PaymentServices),
        facts.has(Sector::Finance),
    ) {
        (true, _) => Some(Finding::high("payment_services")),
        (false, true) => Some(Finding::low("finance_sector")),
        (false, false) => None,
    }
}

/// Whistleblower directive: 50+ staff, or financial services of any size.
fn whistleblowing(facts: &FactSet) -> Option<Finding> {
    match (
        facts.size_at_least(OrgSize::Medium),
        facts.has_any(FINANCIAL_ENTITIES),
    ) {
        (true, _) => Some(Finding::medium("headcount")),
        (false, true) => Some(Finding::medium("financial_services")),
        (false, false) => None,
    }
}

/// CSRD: large undertakings.
fn csrd(facts: &FactSet) -> Option<Finding> {
    facts
        .size_is(OrgSize::Large)
        .then_some(Finding::medium("large_undertaking"))
}

/// Data Act: connected products and related services.
fn data_act(facts: &FactSet) -> Option<Finding> {
    facts
        .has(Activity::ConnectedDevices)
        .then_some(Finding::medium("connected_products"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regfinder_core::FactCategory;

    fn facts() -> regfinder_core::FactSetBuilder {
        FactSet::builder()
    }

    fn outcome(rule: RuleFn, facts: &FactSet) -> Option<(Relevance, &'static str)> {
        rule(facts).map(|f| (f.relevance, f.reason))
    }

    #[test]
    fn gdpr_decision_table() {
        let none = facts().with(OrgSize::Large).build();
        assert_eq!(outcome(gdpr, &none), None);

        let special = facts()
            .with(DataCategory::Children)
            .with(Location::NonEu)
            .build();
        assert_eq!(
            outcome(gdpr, &special),
            Some((Relevance::High, "special_categories"))
        );

        let offshore = facts()
            .with(OrgSize::Large)
            .with(DataCategory::Personal)
            .with(Location::Ch)
            .build();
        assert_eq!(
            outcome(gdpr, &offshore),
            Some((Relevance::Medium, "extraterritorial"))
        );

        let mixed = facts()
            .with(OrgSize::Large)
            .with(DataCategory::Personal)
            .with_all(&[Location::Ch, Location::De])
            .build();
        assert_eq!(
            outcome(gdpr, &mixed),
            Some((Relevance::High, "large_scale"))
        );

        let small = facts().with(DataCategory::Financial).build();
        assert_eq!(
            outcome(gdpr, &small),
            Some((Relevance::Medium, "personal_data"))
        );
    }

    #[test]
    fn gdpr_territorial_scope_follows_eu_membership() {
        for &location in Location::all() {
            let f = facts()
                .with(OrgSize::Large)
                .with(DataCategory::Personal)
                .with(location)
                .build();
            let expected = if location.is_eu() {
                "large_scale"
            } else {
                "extraterritorial"
            };
            assert_eq!(outcome(gdpr, &f).map(|(_, reason)| reason), Some(expected));
        }
    }

    #[test]
    fn gdpr_unknown_location_is_not_treated_as_outside_eu() {
        let f = facts()
            .with(OrgSize::Large)
            .with(DataCategory::Personal)
            .with_raw(FactCategory::Locations, "atlantis")
            .build();
        assert_eq!(outcome(gdpr, &f), Some((Relevance::High, "large_scale")));
    }

    #[test]
    fn nis2_decision_table_is_exhaustive() {
        for size in OrgSize::all() {
            for critical in [false, true] {
                for in_sector in [false, true] {
                    let mut b = facts().with(*size);
                    if critical {
                        b = b.with(Activity::CriticalInfrastructure);
                    }
                    let sector = if in_sector {
                        Sector::Energy
                    } else {
                        Sector::Retail
                    };
                    b = b.with(sector);
                    let got = outcome(nis2, &b.build());

                    let expected = match (in_sector, *size >= OrgSize::Medium, critical) {
                        (false, _, _) => None,
                        (true, true, _) => Some((Relevance::High, "size_threshold")),
                        (true, false, true) => Some((Relevance::High, "critical_entity")),
                        (true, false, false) => Some((Relevance::Low, "below_threshold")),
                    };
                    assert_eq!(
                        got, expected,
                        "size={size} critical={critical} sector={in_sector}"
                    );
                }
            }
        }
    }

    #[test]
    fn nis2_critical_flag_without_sector_does_not_fire() {
        let f = facts()
            .with(OrgSize::Large)
            .with(Activity::CriticalInfrastructure)
            .build();
        assert_eq!(outcome(nis2, &f), None);
    }

    #[test]
    fn dora_composition() {
        let bank = facts().with(Sector::Finance).build();
        assert_eq!(
            outcome(dora, &bank),
            Some((Relevance::High, "financial_entity"))
        );

        let insurer = facts().with(Sector::Insurance).build();
        assert_eq!(
            outcome(dora, &insurer),
            Some((Relevance::High, "financial_entity"))
        );

        let ict = facts()
            .with(Sector::It)
            .with(DataCategory::Financial)
            .build();
        assert_eq!(
            outcome(dora, &ict),
            Some((Relevance::Medium, "ict_provider"))
        );

        let plain_it = facts()
            .with(Sector::It)
            .with(DataCategory::Personal)
            .build();
        assert_eq!(outcome(dora, &plain_it), None);
    }

    #[test]
    fn ai_act_fires_on_either_ai_flag() {
        let user = facts().with(Activity::AiUsage).build();
        assert_eq!(outcome(ai_act, &user), Some((Relevance::High, "ai_usage")));

        let provider = facts()
            .with_all(&[Activity::AiUsage, Activity::AiDevelopment])
            .build();
        assert_eq!(
            outcome(ai_act, &provider),
            Some((Relevance::High, "ai_provider"))
        );

        assert_eq!(outcome(ai_act, &FactSet::default()), None);
    }

    #[test]
    fn dsa_decision_table() {
        let big = facts()
            .with(OrgSize::Medium)
            .with(Activity::OnlineMarketplace)
            .build();
        assert_eq!(outcome(dsa, &big), Some((Relevance::High, "platform")));

        let small = facts()
            .with(OrgSize::Micro)
            .with(Activity::OnlinePlatform)
            .build();
        assert_eq!(
            outcome(dsa, &small),
            Some((Relevance::Medium, "small_platform"))
        );

        let shop = facts().with(Sector::Ecommerce).build();
        assert_eq!(outcome(dsa, &shop), Some((Relevance::Low, "intermediary")));

        assert_eq!(outcome(dsa, &facts().with(Sector::Retail).build()), None);
    }

    #[test]
    fn eaa_micro_exemption() {
        let micro = facts()
            .with(OrgSize::Micro)
            .with(Sector::Ecommerce)
            .with(Activity::ConsumerServices)
            .build();
        assert_eq!(
            outcome(eaa, &micro),
            Some((Relevance::Low, "micro_exemption"))
        );

        let small = facts()
            .with(OrgSize::Small)
            .with(Sector::Telecom)
            .with(Activity::ConsumerServices)
            .build();
        assert_eq!(
            outcome(eaa, &small),
            Some((Relevance::Medium, "consumer_services"))
        );

        let wrong_sector = facts()
            .with(Sector::Chemicals)
            .with(Activity::ConsumerServices)
            .build();
        assert_eq!(outcome(eaa, &wrong_sector), None);
    }

    #[test]
    fn single_flag_rules() {
        let f = facts()
            .with_all(&[
                Activity::DigitalProducts,
                Activity::CryptoAssets,
                Activity::ConnectedDevices,
            ])
            .build();
        assert_eq!(
            outcome(cra, &f),
            Some((Relevance::High, "digital_products"))
        );
        assert_eq!(outcome(mica, &f), Some((Relevance::High, "crypto_assets")));
        assert_eq!(
            outcome(data_act, &f),
            Some((Relevance::Medium, "connected_products"))
        );

        let empty = FactSet::default();
        assert_eq!(outcome(cra, &empty), None);
        assert_eq!(outcome(mica, &empty), None);
        assert_eq!(outcome(data_act, &empty), None);
    }

    #[test]
    fn psd2_and_whistleblowing() {
        let psp = facts().with(Activity::PaymentServices).build();
        assert_eq!(
            outcome(psd2, &psp),
            Some((Relevance::High, "payment_services"))
        );

        let bank = facts().with(OrgSize::Micro).with(Sector::Finance).build();
        assert_eq!(
            outcome(psd2, &bank),
            Some((Relevance::Low, "finance_sector"))
        );
        assert_eq!(
            outcome(whistleblowing, &bank),
            Some((Relevance::Medium, "financial_services"))
        );

        let mid = facts().with(OrgSize::Medium).build();
        assert_eq!(
            outcome(whistleblowing, &mid),
            Some((Relevance::Medium, "headcount"))
        );
        assert_eq!(outcome(whistleblowing, &FactSet::default()), None);
    }

    #[test]
    fn csrd_only_for_large() {
        assert_eq!(
            outcome(csrd, &facts().with(OrgSize::Large).build()),
            Some((Relevance::Medium, "large_undertaking"))
        );
        assert_eq!(outcome(csrd, &facts().with(OrgSize::Medium).build()), None);
    }

    #[test]
    fn apply_builds_candidate_for_registered_regulation() {
        let rule = Rule::new("cra", Regulation::Cra, cra);
        let candidate = rule
            .apply(&facts().with(Activity::DigitalProducts).build())
            .unwrap();
        assert_eq!(candidate.regulation, Regulation::Cra);
        assert_eq!(
            candidate.justification_key,
            "finder.reason.cra.digital_products"
        );
    }

    #[test]
    fn standard_rules_cover_every_regulation_once() {
        let mut regs: Vec<_> = STANDARD_RULES.iter().map(|r| r.regulation).collect();
        regs.sort();
        regs.dedup();
        assert_eq!(regs.len(), STANDARD_RULES.len());
        assert_eq!(regs.len(), Regulation::all().len());
    }
}
