//! # Error Hierarchy
//!
//! Structured error types for the Regulation Finder, built with `thiserror`.
//!
//! Business-logic outcomes are never errors: an unknown question id is
//! ignored, a missing category is defaulted, and "no regulation matched" is an
//! empty [`Classification`](crate::Classification). The variants here cover
//! input that cannot be represented at all.

use thiserror::Error;

/// Top-level error type for the Regulation Finder core.
#[derive(Error, Debug)]
pub enum FinderError {
    /// The answer document is not valid JSON for the answer schema.
    #[error("malformed answer document (json): {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The answer document is not valid YAML for the answer schema.
    #[error("malformed answer document (yaml): {0}")]
    MalformedYaml(#[source] serde_yaml::Error),

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A value could not be serialized for fingerprinting.
    #[error("fingerprint serialization failed: {0}")]
    Fingerprint(#[source] serde_json::Error),
}

/// Validation errors for domain primitives and vocabulary parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Question identifiers must be non-empty.
    #[error("invalid question ID: must be non-empty")]
    EmptyQuestionId,

    /// A string does not name any variant of a vocabulary.
    #[error("unknown {vocabulary} value: \"{value}\"")]
    UnknownValue {
        /// The vocabulary that was searched (e.g. "sector").
        vocabulary: &'static str,
        /// The rejected input.
        value: String,
    },
}
