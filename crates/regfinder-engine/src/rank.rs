//! # Relevance Ranker
//!
//! Produces the display order: High before Medium before Low. The sort is
//! stable, so candidates of equal relevance keep their emission (rule
//! registration) order. No secondary key is applied.

use regfinder_core::Candidate;

/// Rank candidates, most relevant first.
///
/// Preserves length and the exact multiset of candidates; only the order
/// changes.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // `sort_by_key` is stable.
    candidates.sort_by_key(|c| c.relevance);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use regfinder_core::{Regulation, Relevance};

    fn c(regulation: Regulation, relevance: Relevance) -> Candidate {
        Candidate::new(regulation, relevance, "test")
    }

    #[test]
    fn orders_by_tier() {
        let ranked = rank(vec![
            c(Regulation::Csrd, Relevance::Low),
            c(Regulation::Gdpr, Relevance::Medium),
            c(Regulation::Dora, Relevance::High),
        ]);
        let tiers: Vec<_> = ranked.iter().map(|x| x.relevance).collect();
        assert_eq!(
            tiers,
            vec![Relevance::High, Relevance::Medium, Relevance::Low]
        );
    }

    #[test]
    fn equal_tiers_keep_emission_order_not_alphabetical() {
        let ranked = rank(vec![
            c(Regulation::Whistleblowing, Relevance::Medium),
            c(Regulation::Nis2, Relevance::High),
            c(Regulation::Csrd, Relevance::Medium),
            c(Regulation::AiAct, Relevance::High),
        ]);
        let order: Vec<_> = ranked.iter().map(|x| x.regulation).collect();
        assert_eq!(
            order,
            vec![
                Regulation::Nis2,
                Regulation::AiAct,
                Regulation::Whistleblowing,
                Regulation::Csrd,
            ]
        );
    }

    #[test]
    fn empty_stays_empty() {
        assert!(rank(Vec::new()).is_empty());
    }

    fn arb_candidates() -> impl Strategy<Value = Vec<Candidate>> {
        proptest::collection::vec(
            (
                proptest::sample::select(Regulation::all()),
                proptest::sample::select(Relevance::all()),
            ),
            0..12,
        )
        .prop_map(|pairs| pairs.into_iter().map(|(r, t)| c(r, t)).collect())
    }

    proptest! {
        #[test]
        fn tiers_are_non_decreasing(input in arb_candidates()) {
            let ranked = rank(input);
            prop_assert!(ranked.windows(2).all(|w| w[0].relevance <= w[1].relevance));
        }

        #[test]
        fn ranking_is_a_permutation(input in arb_candidates()) {
            let ranked = rank(input.clone());
            prop_assert_eq!(ranked.len(), input.len());
            let mut a = input.clone();
            let mut b = ranked.clone();
            let key = |x: &Candidate| (x.regulation, x.relevance);
            a.sort_by_key(key);
            b.sort_by_key(key);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn ranking_is_stable_within_tier(input in arb_candidates()) {
            let ranked = rank(input.clone());
            for tier in Relevance::all() {
                let before: Vec<_> = input.iter().filter(|x| x.relevance == *tier).collect();
                let after: Vec<_> = ranked.iter().filter(|x| x.relevance == *tier).collect();
                prop_assert_eq!(before, after);
            }
        }
    }
}
