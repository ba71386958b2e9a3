//! Wizard transition errors.

use thiserror::Error;

/// A transition the current wizard state does not permit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The questionnaire has no questions to walk through.
    #[error("questionnaire has no questions")]
    EmptyQuestionnaire,

    /// The value is not an option of the current question.
    #[error("{value:?} is not an option of question {question}")]
    UnknownOption {
        /// Current question id.
        question: String,
        /// Rejected value.
        value: String,
    },

    /// A required question cannot be left without a selection.
    #[error("question {question} requires an answer")]
    Unanswered {
        /// Current question id.
        question: String,
    },

    /// Already at the first question.
    #[error("cannot go back from the first question")]
    AtFirstQuestion,

    /// The operation needs a current question, but results are showing.
    #[error("cannot {operation} while showing results")]
    ShowingResults {
        /// Rejected operation.
        operation: &'static str,
    },

    /// Results were requested before the last question was completed.
    #[error("results are not available until question {remaining_from} onward is answered")]
    ResultsNotReady {
        /// Index of the current question.
        remaining_from: usize,
    },
}
