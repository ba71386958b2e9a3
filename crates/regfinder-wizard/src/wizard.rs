//! # Wizard
//!
//! Immutable questionnaire walker. Selections are stored per question
//! position; [`Wizard::answers`] turns them into the engine's answer list in
//! questionnaire order, skipping questions with no selection.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use regfinder_core::{Answer, Classification, Question, SelectionMode};
use regfinder_engine::RegulationFinder;

use crate::error::TransitionError;

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum WizardState {
    /// Showing the question at this questionnaire position.
    AnsweringQuestion(usize),
    /// All questions completed; the classification is shown.
    ShowingResults,
}

impl WizardState {
    /// Return the state name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnsweringQuestion(_) => "answering_question",
            Self::ShowingResults => "showing_results",
        }
    }
}

impl std::fmt::Display for WizardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnsweringQuestion(index) => write!(f, "answering_question({index})"),
            Self::ShowingResults => f.write_str(self.as_str()),
        }
    }
}

/// One immutable wizard snapshot.
#[derive(Debug, Clone)]
pub struct Wizard {
    finder: Arc<RegulationFinder>,
    state: WizardState,
    selections: Vec<BTreeSet<String>>,
}

impl Wizard {
    /// Start a wizard over the finder's questionnaire at the first question.
    ///
    /// # Errors
    ///
    /// [`TransitionError::EmptyQuestionnaire`] if there is nothing to ask.
    pub fn new(finder: RegulationFinder) -> Result<Self, TransitionError> {
        let len = finder.questionnaire().len();
        if len == 0 {
            return Err(TransitionError::EmptyQuestionnaire);
        }
        Ok(Self {
            finder: Arc::new(finder),
            state: WizardState::AnsweringQuestion(0),
            selections: vec![BTreeSet::new(); len],
        })
    }

    /// A wizard over the standard questionnaire and rules.
    pub fn standard() -> Self {
        let finder = RegulationFinder::standard();
        let len = finder.questionnaire().len();
        Self {
            finder: Arc::new(finder),
            state: WizardState::AnsweringQuestion(0),
            selections: vec![BTreeSet::new(); len],
        }
    }

    /// Current state.
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The question being shown, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            WizardState::AnsweringQuestion(index) => self.finder.questionnaire().question(index),
            WizardState::ShowingResults => None,
        }
    }

    /// Values currently selected for the question with `id`.
    pub fn selected(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.finder
            .questionnaire()
            .position(id)
            .and_then(|i| self.selections.get(i))
    }

    /// Select an option of the current question. Single-select questions
    /// replace their value; multi-select questions toggle it.
    pub fn select(&self, value: &str) -> Result<Self, TransitionError> {
        let index = self.answering("select")?;
        let question = self.question_at(index);
        if !question.has_option(value) {
            return Err(TransitionError::UnknownOption {
                question: question.id.to_string(),
                value: value.to_string(),
            });
        }

        let mut next = self.clone();
        let slot = &mut next.selections[index];
        match question.mode {
            SelectionMode::Single => {
                slot.clear();
                slot.insert(value.to_string());
            }
            SelectionMode::Multi => {
                if !slot.remove(value) {
                    slot.insert(value.to_string());
                }
            }
        }
        tracing::trace!(question = %question.id, value, "selection changed");
        Ok(next)
    }

    /// Advance to the next question, or to the results after the last one.
    pub fn next(&self) -> Result<Self, TransitionError> {
        let index = self.answering("advance")?;
        let question = self.question_at(index);
        if question.required && self.selections[index].is_empty() {
            return Err(TransitionError::Unanswered {
                question: question.id.to_string(),
            });
        }
        let state = if index + 1 < self.selections.len() {
            WizardState::AnsweringQuestion(index + 1)
        } else {
            WizardState::ShowingResults
        };
        Ok(self.moved_to(state))
    }

    /// Return to the previous question. From the results, returns to the
    /// last question.
    pub fn back(&self) -> Result<Self, TransitionError> {
        let state = match self.state {
            WizardState::AnsweringQuestion(0) => return Err(TransitionError::AtFirstQuestion),
            WizardState::AnsweringQuestion(index) => WizardState::AnsweringQuestion(index - 1),
            WizardState::ShowingResults => {
                WizardState::AnsweringQuestion(self.selections.len() - 1)
            }
        };
        Ok(self.moved_to(state))
    }

    /// Back to the first question with every selection cleared.
    pub fn restart(&self) -> Self {
        tracing::debug!(from = %self.state, "wizard restarted");
        Self {
            finder: Arc::clone(&self.finder),
            state: WizardState::AnsweringQuestion(0),
            selections: vec![BTreeSet::new(); self.selections.len()],
        }
    }

    /// Answers accumulated so far, in questionnaire order.
    pub fn answers(&self) -> Vec<Answer> {
        self.finder
            .questionnaire()
            .questions()
            .iter()
            .zip(&self.selections)
            .filter(|(_, values)| !values.is_empty())
            .map(|(question, values)| Answer::new(question.id.clone(), values.iter().cloned()))
            .collect()
    }

    /// The classification of the accumulated answers.
    ///
    /// # Errors
    ///
    /// [`TransitionError::ResultsNotReady`] unless the wizard is showing
    /// results.
    pub fn results(&self) -> Result<Classification, TransitionError> {
        match self.state {
            WizardState::ShowingResults => Ok(self.finder.classify(&self.answers())),
            WizardState::AnsweringQuestion(index) => Err(TransitionError::ResultsNotReady {
                remaining_from: index,
            }),
        }
    }

    // -- internals ---------------------------------------------------------

    fn answering(&self, operation: &'static str) -> Result<usize, TransitionError> {
        match self.state {
            WizardState::AnsweringQuestion(index) => Ok(index),
            WizardState::ShowingResults => Err(TransitionError::ShowingResults { operation }),
        }
    }

    // Indices held in `state` are always within the questionnaire.
    fn question_at(&self, index: usize) -> &Question {
        &self.finder.questionnaire().questions()[index]
    }

    fn moved_to(&self, state: WizardState) -> Self {
        tracing::debug!(from = %self.state, to = %state, "wizard transition");
        Self {
            finder: Arc::clone(&self.finder),
            state,
            selections: self.selections.clone(),
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::standard()
    }
}
