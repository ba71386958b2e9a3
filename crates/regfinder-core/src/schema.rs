//! # Question/Answer Schema
//!
//! Defines the shape of collectible input: [`Question`]s grouped in a
//! [`Questionnaire`], and the [`Answer`]s a questionnaire surface produces.
//!
//! Each question is bound to the input it feeds via [`Binding`]: one of the
//! five [`FactCategory`] variants, or the estimators' maturity level. All
//! text is referenced by translation key; nothing here is display copy.
//!
//! ## Input Boundary
//!
//! [`AnswerSheet`] parses the answer documents handed over by external
//! surfaces. Two shapes are accepted:
//!
//! ```yaml
//! # list form
//! - question_id: company_size
//!   values: [large]
//!
//! # map form
//! company_size: large
//! sector: [finance, it]
//! ```
//!
//! A document that fits neither shape fails fast with
//! [`FinderError::MalformedJson`] / [`FinderError::MalformedYaml`]; the
//! engine never evaluates a partially understood answer list.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, ValidationError};
use crate::vocab::{Activity, DataCategory, FactCategory, Location, Maturity, OrgSize, Sector};

/// Question identifiers of the standard questionnaire.
pub mod ids {
    /// Organization size (single select).
    pub const COMPANY_SIZE: &str = "company_size";
    /// Sectors (multi select).
    pub const SECTOR: &str = "sector";
    /// Data categories processed (multi select).
    pub const DATA_CATEGORIES: &str = "data_categories";
    /// Regulated activities (multi select).
    pub const ACTIVITIES: &str = "activities";
    /// Establishment locations (multi select).
    pub const LOCATIONS: &str = "locations";
    /// Existing compliance maturity (single select, estimators only).
    pub const MATURITY: &str = "maturity";
}

// ---------------------------------------------------------------------------
// QuestionId
// ---------------------------------------------------------------------------

/// Identifier of a question. Validated non-empty at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a question identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQuestionId`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyQuestionId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// Whether a question accepts one or several options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Exactly one option.
    Single,
    /// Any number of options.
    Multi,
}

/// What a question's answers feed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum Binding {
    /// Values become facts in this category.
    Fact(FactCategory),
    /// The value is the estimators' maturity level.
    Maturity,
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Stable option value; becomes the fact key.
    pub value: String,
    /// Translation key of the option label.
    pub label_key: String,
    /// Translation key of an optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_key: Option<String>,
}

/// A question in a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier.
    pub id: QuestionId,
    /// Translation key of the prompt.
    pub prompt_key: String,
    /// Single or multi select.
    pub mode: SelectionMode,
    /// Options in display order.
    pub options: Vec<QuestionOption>,
    /// Input this question feeds.
    pub binding: Binding,
    /// Whether a questionnaire surface must collect an answer before moving on.
    #[serde(default)]
    pub required: bool,
}

impl Question {
    /// Build a question whose options are the keys of a vocabulary.
    ///
    /// Keys follow `finder.question.<id>.prompt` and
    /// `finder.question.<id>.option.<value>`; with `described` set every option
    /// also gets `finder.question.<id>.option.<value>.description`.
    pub fn from_keys(
        id: &'static str,
        mode: SelectionMode,
        binding: Binding,
        required: bool,
        values: &[&'static str],
        described: bool,
    ) -> Self {
        let options = values
            .iter()
            .map(|value| {
                let label_key = format!("finder.question.{id}.option.{value}");
                QuestionOption {
                    description_key: described.then(|| format!("{label_key}.description")),
                    value: (*value).to_string(),
                    label_key,
                }
            })
            .collect();
        Self {
            id: QuestionId(id.to_string()),
            prompt_key: format!("finder.question.{id}.prompt"),
            mode,
            options,
            binding,
            required,
        }
    }

    /// The option with `value`, if offered.
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Whether `value` is one of the offered options.
    pub fn has_option(&self, value: &str) -> bool {
        self.option(value).is_some()
    }
}

// ---------------------------------------------------------------------------
// Questionnaire
// ---------------------------------------------------------------------------

/// An ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Create a questionnaire from questions in display order.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The Regulation Finder questionnaire.
    pub fn standard() -> Self {
        fn keys<T: Copy>(all: &[T], key: fn(&T) -> &'static str) -> Vec<&'static str> {
            all.iter().map(key).collect()
        }

        Self::new(vec![
            Question::from_keys(
                ids::COMPANY_SIZE,
                SelectionMode::Single,
                Binding::Fact(FactCategory::Size),
                true,
                &keys(OrgSize::all(), OrgSize::as_str),
                true,
            ),
            Question::from_keys(
                ids::SECTOR,
                SelectionMode::Multi,
                Binding::Fact(FactCategory::Sectors),
                true,
                &keys(Sector::all(), Sector::as_str),
                false,
            ),
            Question::from_keys(
                ids::DATA_CATEGORIES,
                SelectionMode::Multi,
                Binding::Fact(FactCategory::DataCategories),
                false,
                &keys(DataCategory::all(), DataCategory::as_str),
                true,
            ),
            Question::from_keys(
                ids::ACTIVITIES,
                SelectionMode::Multi,
                Binding::Fact(FactCategory::Activities),
                false,
                &keys(Activity::all(), Activity::as_str),
                true,
            ),
            Question::from_keys(
                ids::LOCATIONS,
                SelectionMode::Multi,
                Binding::Fact(FactCategory::Locations),
                true,
                &keys(Location::all(), Location::as_str),
                false,
            ),
            Question::from_keys(
                ids::MATURITY,
                SelectionMode::Single,
                Binding::Maturity,
                false,
                &keys(Maturity::all(), Maturity::as_str),
                true,
            ),
        ])
    }

    /// Questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the questionnaire has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at `index`.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The question with identifier `id`.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id.as_str() == id)
    }

    /// Display position of the question with identifier `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id.as_str() == id)
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

// ---------------------------------------------------------------------------
// Answer & AnswerSheet
// ---------------------------------------------------------------------------

/// The options chosen for one question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    /// The question answered.
    pub question_id: QuestionId,
    /// Chosen option values. Exactly one for single-select questions.
    pub values: BTreeSet<String>,
}

impl Answer {
    /// Create an answer.
    pub fn new<I, S>(question_id: QuestionId, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question_id,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an answer from a raw question identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQuestionId`] for an empty identifier.
    pub fn for_question<I, S>(question_id: &str, values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(QuestionId::new(question_id)?, values))
    }
}

/// A complete answer list as handed over by a questionnaire surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    /// Answers in collection order.
    pub answers: Vec<Answer>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(BTreeSet<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSheet {
    List(Vec<Answer>),
    Map(BTreeMap<QuestionId, OneOrMany>),
}

impl From<RawSheet> for AnswerSheet {
    fn from(raw: RawSheet) -> Self {
        let answers = match raw {
            RawSheet::List(answers) => answers,
            RawSheet::Map(map) => map
                .into_iter()
                .map(|(question_id, values)| match values {
                    OneOrMany::One(v) => Answer::new(question_id, [v]),
                    OneOrMany::Many(vs) => Answer::new(question_id, vs),
                })
                .collect(),
        };
        Self { answers }
    }
}

impl<'de> Deserialize<'de> for AnswerSheet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawSheet::deserialize(deserializer).map(Into::into)
    }
}

impl AnswerSheet {
    /// Wrap an answer list.
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    /// Parse a JSON answer document.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::MalformedJson`] if the document is not a list of
    /// answers or a question-to-values map.
    pub fn from_json_str(input: &str) -> Result<Self, FinderError> {
        serde_json::from_str(input).map_err(FinderError::MalformedJson)
    }

    /// Parse a YAML answer document.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::MalformedYaml`] if the document is not a list of
    /// answers or a question-to-values map.
    pub fn from_yaml_str(input: &str) -> Result<Self, FinderError> {
        serde_yaml::from_str(input).map_err(FinderError::MalformedYaml)
    }

    /// Answers in collection order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }
}

impl From<Vec<Answer>> for AnswerSheet {
    fn from(answers: Vec<Answer>) -> Self {
        Self::new(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_rejects_empty() {
        assert!(QuestionId::new("").is_err());
        assert!(QuestionId::new("  ").is_err());
        assert_eq!(QuestionId::new("sector").unwrap().as_str(), "sector");
    }

    #[test]
    fn standard_questionnaire_covers_every_category_once() {
        let q = Questionnaire::standard();
        for category in FactCategory::all() {
            let bound = q
                .questions()
                .iter()
                .filter(|question| question.binding == Binding::Fact(*category))
                .count();
            assert_eq!(bound, 1, "{category} bound {bound} times");
        }
        assert_eq!(
            q.get(ids::MATURITY).map(|m| m.binding),
            Some(Binding::Maturity)
        );
    }

    #[test]
    fn standard_options_use_vocabulary_keys() {
        let q = Questionnaire::standard();
        let sector = q.get(ids::SECTOR).unwrap();
        assert_eq!(sector.options.len(), Sector::all().len());
        assert!(sector.has_option("digital_infrastructure"));
        assert!(!sector.has_option("astrology"));

        let size = q.get(ids::COMPANY_SIZE).unwrap();
        assert_eq!(size.mode, SelectionMode::Single);
        let micro = size.option("micro").unwrap();
        assert_eq!(micro.label_key, "finder.question.company_size.option.micro");
        assert_eq!(
            micro.description_key.as_deref(),
            Some("finder.question.company_size.option.micro.description")
        );
        assert!(sector.options[0].description_key.is_none());
    }

    #[test]
    fn position_follows_display_order() {
        let q = Questionnaire::standard();
        assert_eq!(q.position(ids::COMPANY_SIZE), Some(0));
        assert_eq!(q.position("nope"), None);
        assert_eq!(
            q.question(0).map(|x| x.id.as_str()),
            Some(ids::COMPANY_SIZE)
        );
    }

    #[test]
    fn parses_list_form_json() {
        let sheet = AnswerSheet::from_json_str(
            r#"[{"question_id": "sector", "values": ["finance", "it"]}]"#,
        )
        .unwrap();
        assert_eq!(sheet.answers().len(), 1);
        assert_eq!(sheet.answers()[0].values.len(), 2);
    }

    #[test]
    fn parses_map_form_yaml() {
        let sheet = AnswerSheet::from_yaml_str("company_size: large\nsector: [finance]\n").unwrap();
        assert_eq!(sheet.answers().len(), 2);
        let size = sheet
            .answers()
            .iter()
            .find(|a| a.question_id.as_str() == ids::COMPANY_SIZE)
            .unwrap();
        assert!(size.values.contains("large"));
    }

    #[test]
    fn malformed_documents_fail_fast() {
        assert!(matches!(
            AnswerSheet::from_json_str(r#"{"sector": 42}"#),
            Err(FinderError::MalformedJson(_))
        ));
        assert!(matches!(
            AnswerSheet::from_json_str(r#"[{"question_id": "", "values": []}]"#),
            Err(FinderError::MalformedJson(_))
        ));
        assert!(matches!(
            AnswerSheet::from_yaml_str("- 1\n- 2\n"),
            Err(FinderError::MalformedYaml(_))
        ));
    }

    #[test]
    fn answer_for_question_validates_id() {
        assert!(Answer::for_question("", ["x"]).is_err());
        let a = Answer::for_question("sector", ["finance"]).unwrap();
        assert_eq!(a.question_id.as_str(), "sector");
    }
}
