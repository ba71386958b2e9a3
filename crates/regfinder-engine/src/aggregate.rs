//! # Fact Aggregator
//!
//! Turns a complete answer list into a [`FactSet`]. Aggregation is pure and
//! total: it never fails on missing, extra, or unknown data.
//!
//! - Answers for question ids the questionnaire does not know are ignored.
//! - Values are collected per [`FactCategory`] across all answers bound to
//!   it. Unknown option values are kept as opaque facts.
//! - Categories nobody answered are empty; `size` falls back to
//!   [`DEFAULT_SIZE`](regfinder_core::DEFAULT_SIZE).

use regfinder_core::{
    Answer, Binding, FactSet, FactSetBuilder, Maturity, Questionnaire, SelectionMode,
};

/// Aggregate answers collected with the standard questionnaire.
pub fn aggregate(answers: &[Answer]) -> FactSet {
    aggregate_with(&Questionnaire::standard(), answers)
}

/// Aggregate answers against an explicit questionnaire.
pub fn aggregate_with(questionnaire: &Questionnaire, answers: &[Answer]) -> FactSet {
    let mut builder = FactSetBuilder::new();

    for answer in answers {
        let Some(question) = questionnaire.get(answer.question_id.as_str()) else {
            tracing::debug!(
                question_id = %answer.question_id,
                "answer for unknown question ignored"
            );
            continue;
        };

        let category = match question.binding {
            Binding::Fact(category) => category,
            Binding::Maturity => continue,
        };

        if question.mode == SelectionMode::Single && answer.values.len() > 1 {
            tracing::warn!(
                question_id = %answer.question_id,
                count = answer.values.len(),
                "single-select question answered with several values; keeping all"
            );
        }

        for value in &answer.values {
            builder.insert_raw(category, value);
        }
    }

    builder.build()
}

/// The maturity level declared in `answers`, if any.
///
/// Every answer bound to [`Binding::Maturity`] is scanned in order; the
/// first recognized value wins.
pub fn declared_maturity(questionnaire: &Questionnaire, answers: &[Answer]) -> Option<Maturity> {
    answers
        .iter()
        .filter(|answer| {
            questionnaire
                .get(answer.question_id.as_str())
                .is_some_and(|q| q.binding == Binding::Maturity)
        })
        .flat_map(|answer| answer.values.iter())
        .find_map(|v| v.trim().to_lowercase().parse::<Maturity>().ok())
}

/// The maturity level declared in `answers`, or [`Maturity::default`].
///
/// An undeclared or unrecognized level falls back to the least mature one,
/// which yields the undiscounted estimate.
pub fn maturity_with(questionnaire: &Questionnaire, answers: &[Answer]) -> Maturity {
    declared_maturity(questionnaire, answers).unwrap_or_default()
}
