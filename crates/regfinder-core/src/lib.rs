#![deny(missing_docs)]

//! # regfinder-core — Foundational Types for the Regulation Finder
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies: only `serde`, `serde_json`,
//! `serde_yaml`, `thiserror`, and `sha2` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Stable keys, never prose.** Every value a rule can match on is a
//!    variant of a vocabulary enum ([`Sector`], [`Activity`], ...) with a
//!    stable `as_str()` key. Display text is resolved by the rendering layer
//!    from the `*_key` fields; nothing in the engine branches on locale.
//!
//! 2. **Total [`FactSet`].** Every [`FactCategory`] is present after
//!    construction, `size` always holds at least one value. Rules query
//!    without null checks.
//!
//! 3. **Closed world.** Unknown answer values are retained as opaque strings
//!    but can only be queried through the typed vocabulary, so they never
//!    match a rule predicate.
//!
//! 4. **[`FinderError`] hierarchy.** Structured errors with `thiserror`; no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod candidate;
pub mod digest;
pub mod error;
pub mod facts;
pub mod schema;
pub mod vocab;

// Re-export primary types at crate root for ergonomic imports.
pub use candidate::{Candidate, Classification};
pub use digest::{fingerprint_of, Fingerprint};
pub use error::{FinderError, ValidationError};
pub use facts::{FactSet, FactSetBuilder, DEFAULT_SIZE};
pub use schema::{
    Answer, AnswerSheet, Binding, Question, QuestionId, QuestionOption, Questionnaire,
    SelectionMode,
};
pub use vocab::{
    Activity, DataCategory, FactCategory, FactKey, Location, Maturity, OrgSize, Regulation,
    Relevance, Sector,
};
