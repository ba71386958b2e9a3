//! # Fixed-Point Scaling
//!
//! Size multipliers and maturity discounts are basis points (1/100 of a
//! percent). A base amount is scaled as
//!
//! ```text
//! scaled = round_100(base * multiplier_bps * discount_bps / 10_000^2)
//! ```
//!
//! where `round_100` rounds to the nearest 100 currency units, half up. The
//! product is computed in `u128` and narrowed back with a checked
//! conversion.

use serde::{Deserialize, Serialize};

use regfinder_core::{Maturity, OrgSize};

use crate::error::EstimateError;

/// Basis points in one whole (100 %).
pub const BASIS_POINTS: u32 = 10_000;

/// Rounding granularity in currency units.
const ROUNDING_UNIT: u128 = 100;

// ---------------------------------------------------------------------------
// CostRange
// ---------------------------------------------------------------------------

/// An inclusive `[min, max]` amount in whole currency units (EUR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct CostRange {
    min: u64,
    max: u64,
}

#[derive(Deserialize)]
struct RawRange {
    min: u64,
    max: u64,
}

impl TryFrom<RawRange> for CostRange {
    type Error = EstimateError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl CostRange {
    /// The empty range `[0, 0]`.
    pub const ZERO: CostRange = CostRange { min: 0, max: 0 };

    /// Create a range, rejecting `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, EstimateError> {
        if min > max {
            return Err(EstimateError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Scale both bounds. Order is preserved because [`scale`] is monotone.
    pub fn scaled(
        &self,
        multiplier: SizeMultiplier,
        discount: DiscountFactor,
    ) -> Result<Self, EstimateError> {
        Ok(Self {
            min: scale(self.min, multiplier, discount)?,
            max: scale(self.max, multiplier, discount)?,
        })
    }

    /// Component-wise sum.
    pub fn checked_add(&self, other: &CostRange) -> Result<Self, EstimateError> {
        let overflow = || EstimateError::Overflow {
            operation: "summing cost ranges",
        };
        Ok(Self {
            min: self.min.checked_add(other.min).ok_or_else(overflow)?,
            max: self.max.checked_add(other.max).ok_or_else(overflow)?,
        })
    }
}

impl std::fmt::Display for CostRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Factors
// ---------------------------------------------------------------------------

/// Size multiplier in basis points. Any non-negative value is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeMultiplier(u32);

impl SizeMultiplier {
    /// Create a multiplier from basis points (`10_000` = ×1).
    pub const fn from_bps(bps: u32) -> Self {
        Self(bps)
    }

    /// The standard multiplier for an organization size.
    pub fn for_size(size: OrgSize) -> Self {
        match size {
            OrgSize::Micro => Self(5_000),
            OrgSize::Small => Self(10_000),
            OrgSize::Medium => Self(20_000),
            OrgSize::Large => Self(40_000),
        }
    }

    /// Basis points.
    pub fn bps(&self) -> u32 {
        self.0
    }
}

/// Maturity discount factor in basis points, within `(0, 10_000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DiscountFactor(u32);

impl DiscountFactor {
    /// No discount.
    pub const NONE: DiscountFactor = DiscountFactor(BASIS_POINTS);

    /// Create a factor, rejecting zero and anything above 100 %.
    pub fn from_bps(bps: u32) -> Result<Self, EstimateError> {
        if bps == 0 || bps > BASIS_POINTS {
            return Err(EstimateError::DiscountOutOfRange(bps));
        }
        Ok(Self(bps))
    }

    /// The standard factor for a maturity level. More mature organizations
    /// have less to build, so the factor decreases with maturity.
    pub fn for_maturity(maturity: Maturity) -> Self {
        match maturity {
            Maturity::None => Self(10_000),
            Maturity::Basic => Self(8_500),
            Maturity::Advanced => Self(6_500),
            Maturity::Certified => Self(5_000),
        }
    }

    /// Basis points.
    pub fn bps(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for DiscountFactor {
    type Error = EstimateError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        Self::from_bps(bps)
    }
}

impl From<DiscountFactor> for u32 {
    fn from(d: DiscountFactor) -> u32 {
        d.0
    }
}

// ---------------------------------------------------------------------------
// scale
// ---------------------------------------------------------------------------

/// Scale `base` by `multiplier` and `discount`, rounded to the nearest 100
/// (half up).
///
/// # Errors
///
/// [`EstimateError::Overflow`] if the rounded result does not fit a `u64`.
pub fn scale(
    base: u64,
    multiplier: SizeMultiplier,
    discount: DiscountFactor,
) -> Result<u64, EstimateError> {
    // u64 * u32 * u32 < 2^128, so the product itself cannot overflow.
    let product = u128::from(base) * u128::from(multiplier.0) * u128::from(discount.0);
    let denominator = u128::from(BASIS_POINTS) * u128::from(BASIS_POINTS) * ROUNDING_UNIT;
    let hundreds = (product + denominator / 2) / denominator;
    u64::try_from(hundreds * ROUNDING_UNIT).map_err(|_| EstimateError::Overflow {
        operation: "scaling a line item",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identity_factors_round_to_hundreds() {
        let one = SizeMultiplier::from_bps(BASIS_POINTS);
        assert_eq!(scale(1_000, one, DiscountFactor::NONE).unwrap(), 1_000);
        assert_eq!(scale(1_049, one, DiscountFactor::NONE).unwrap(), 1_000);
        assert_eq!(scale(1_050, one, DiscountFactor::NONE).unwrap(), 1_100);
        assert_eq!(scale(49, one, DiscountFactor::NONE).unwrap(), 0);
    }

    #[test]
    fn standard_factors_apply() {
        let large = SizeMultiplier::for_size(OrgSize::Large);
        let basic = DiscountFactor::for_maturity(Maturity::Basic);
        // 10_000 * 4 * 0.85 = 34_000
        assert_eq!(scale(10_000, large, basic).unwrap(), 34_000);
        let micro = SizeMultiplier::for_size(OrgSize::Micro);
        let certified = DiscountFactor::for_maturity(Maturity::Certified);
        // 3_000 * 0.5 * 0.5 = 750 → 800
        assert_eq!(scale(3_000, micro, certified).unwrap(), 800);
    }

    #[test]
    fn zero_multiplier_zeroes_everything() {
        let zero = SizeMultiplier::from_bps(0);
        assert_eq!(scale(u64::MAX, zero, DiscountFactor::NONE).unwrap(), 0);
    }

    #[test]
    fn overflow_is_an_error_not_a_wrap() {
        let large = SizeMultiplier::for_size(OrgSize::Large);
        let err = scale(u64::MAX, large, DiscountFactor::NONE).unwrap_err();
        assert!(matches!(err, EstimateError::Overflow { .. }));
    }

    #[test]
    fn discount_bounds_are_enforced() {
        assert!(DiscountFactor::from_bps(0).is_err());
        assert!(DiscountFactor::from_bps(BASIS_POINTS + 1).is_err());
        assert!(DiscountFactor::from_bps(1).is_ok());
        assert_eq!(
            DiscountFactor::from_bps(BASIS_POINTS).unwrap(),
            DiscountFactor::NONE
        );
    }

    #[test]
    fn standard_tables_are_ordered() {
        let m: Vec<_> = OrgSize::all()
            .iter()
            .map(|s| SizeMultiplier::for_size(*s))
            .collect();
        assert!(m.windows(2).all(|w| w[0] < w[1]));
        let d: Vec<_> = Maturity::all()
            .iter()
            .map(|x| DiscountFactor::for_maturity(*x))
            .collect();
        assert!(d.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            CostRange::new(10, 5),
            Err(EstimateError::InvertedRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn range_deserialization_validates() {
        let ok: CostRange = serde_json::from_str(r#"{"min":1,"max":2}"#).unwrap();
        assert_eq!((ok.min(), ok.max()), (1, 2));
        assert!(serde_json::from_str::<CostRange>(r#"{"min":3,"max":2}"#).is_err());
        assert!(serde_json::from_str::<DiscountFactor>("0").is_err());
    }

    #[test]
    fn range_sum_checks_overflow() {
        let big = CostRange::new(1, u64::MAX).unwrap();
        assert!(big.checked_add(&big).is_err());
        let a = CostRange::new(100, 200).unwrap();
        assert_eq!(
            a.checked_add(&a).unwrap(),
            CostRange::new(200, 400).unwrap()
        );
    }

    proptest! {
        #[test]
        fn monotone_in_multiplier(
            base in 0u64..10_000_000,
            a in 0u32..100_000,
            b in 0u32..100_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let d = DiscountFactor::NONE;
            prop_assert!(
                scale(base, SizeMultiplier::from_bps(lo), d).unwrap()
                    <= scale(base, SizeMultiplier::from_bps(hi), d).unwrap()
            );
        }

        #[test]
        fn monotone_in_discount(
            base in 0u64..10_000_000,
            a in 1u32..=10_000,
            b in 1u32..=10_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let m = SizeMultiplier::for_size(OrgSize::Medium);
            prop_assert!(
                scale(base, m, DiscountFactor::from_bps(lo).unwrap()).unwrap()
                    <= scale(base, m, DiscountFactor::from_bps(hi).unwrap()).unwrap()
            );
        }

        #[test]
        fn scaled_range_keeps_order(
            x in 0u64..10_000_000,
            y in 0u64..10_000_000,
            m in 0u32..100_000,
        ) {
            let range = CostRange::new(x.min(y), x.max(y)).unwrap();
            let out = range.scaled(SizeMultiplier::from_bps(m), DiscountFactor::NONE).unwrap();
            prop_assert!(out.min() <= out.max());
            prop_assert_eq!(out.min() % 100, 0);
        }
    }
}
