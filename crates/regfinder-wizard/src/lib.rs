//! # regfinder-wizard — Questionnaire State Machine
//!
//! Walks a user through the questionnaire one question at a time and shows
//! the classification at the end.
//!
//! ## States
//!
//! ```text
//!   AnsweringQuestion(0) ──next──▶ AnsweringQuestion(1) ──next──▶ … ──next──▶ ShowingResults
//!          ▲              ◀──back──                                ◀──back──        │
//!          └──────────────────────────────── restart ───────────────────────────────┘
//! ```
//!
//! Every transition takes `&self` and returns a new [`Wizard`] value; a
//! rejected transition returns a [`TransitionError`] and leaves the original
//! untouched. The wizard never evaluates rules itself; it hands its
//! accumulated answers to the engine.

pub mod error;
pub mod wizard;

pub use error::TransitionError;
pub use wizard::{Wizard, WizardState};
