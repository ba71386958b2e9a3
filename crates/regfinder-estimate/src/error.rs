//! Estimator errors.

use thiserror::Error;

/// Estimation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// A range whose minimum exceeds its maximum.
    #[error("invalid cost range: min {min} exceeds max {max}")]
    InvertedRange {
        /// Lower bound supplied.
        min: u64,
        /// Upper bound supplied.
        max: u64,
    },

    /// A discount factor outside (0, 1], expressed in basis points.
    #[error("discount factor must be in 1..=10000 basis points, got {0}")]
    DiscountOutOfRange(u32),

    /// An estimate kind other than `cost` or `fines`.
    #[error("unknown estimate kind: {0:?}")]
    UnknownKind(String),

    /// A catalogue listing the same line item key twice.
    #[error("duplicate catalogue line item: {0}")]
    DuplicateLineItem(String),

    /// An amount no longer fits the currency representation.
    #[error("arithmetic overflow while {operation}")]
    Overflow {
        /// What was being computed.
        operation: &'static str,
    },
}
