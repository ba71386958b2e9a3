//! # regfinder-estimate — Cost & Fine Estimators
//!
//! The estimation variant of the Regulation Finder. It consumes the same
//! [`FactSet`](regfinder_core::FactSet) as the classifier but, instead of a
//! relevance tier, produces a `[min, max]` currency range per matched
//! regulation.
//!
//! ## Pipeline
//!
//! 1. Classify the fact set with the standard engine to find the matched
//!    regulations (rank order is kept in the output).
//! 2. For each matched regulation, look up its line items in a
//!    [`CostCatalogue`] (implementation cost or fine exposure).
//! 3. Scale every line item's base range by the [`SizeMultiplier`] for the
//!    organization's size and the [`DiscountFactor`] for its declared
//!    maturity, rounding to the nearest 100 units.
//! 4. Sum line items into per-regulation subtotals and an overall total.
//!
//! ## Arithmetic
//!
//! Amounts are whole currency units in `u64`; multiplier and discount are
//! basis points. Intermediate products use `u128` and every narrowing or
//! addition is checked, so an estimate either is exact or fails with
//! [`EstimateError::Overflow`]. Scaling is monotone in both the multiplier and
//! the discount factor.

pub mod catalogue;
pub mod error;
pub mod estimate;
pub mod scale;

pub use catalogue::{CostCatalogue, EstimateKind, LineItem};
pub use error::EstimateError;
pub use estimate::{Estimate, Estimator, LineItemEstimate, RegulationEstimate};
pub use scale::{scale, CostRange, DiscountFactor, SizeMultiplier, BASIS_POINTS};
