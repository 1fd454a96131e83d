//! An immutable rational sub-interval of `[0, 1]`.

use crate::bigint::BigInt;
use crate::error::{self, Result};

/// A rational sub-interval `[L/D, U/D)` of `[0, 1]`, represented exactly
/// as a triple `(denominator, lower_numerator, upper_numerator)`.
///
/// `Interval` is a passive record: it validates its invariants at
/// construction and exposes read-only accessors, but has no arithmetic
/// operations of its own. Every operation that produces an `Interval` in
/// this crate (`permutation_to_interval`) or consumes one
/// (`covering_binary_interval`, `interval_to_binary`, `interval_to_entropy`)
/// lives in its own module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    denominator: BigInt,
    lower_numerator: BigInt,
    upper_numerator: BigInt,
}

impl Interval {
    /// Builds an `Interval` from `(D, L, U)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::error::Error::InvalidArgument)
    /// unless `D > 0` and `0 <= L <= U <= D`.
    pub fn new(denominator: BigInt, lower_numerator: BigInt, upper_numerator: BigInt) -> Result<Self> {
        if denominator <= 0u64 {
            return error::invalid_argument(format!(
                "denominator {} is not positive",
                denominator
            ));
        }
        if lower_numerator < 0u64 {
            return error::invalid_argument(format!(
                "lower numerator {} is negative",
                lower_numerator
            ));
        }
        if upper_numerator < 0u64 {
            return error::invalid_argument(format!(
                "upper numerator {} is negative",
                upper_numerator
            ));
        }
        if lower_numerator > denominator {
            return error::invalid_argument(format!(
                "lower numerator {} exceeds denominator {}",
                lower_numerator, denominator
            ));
        }
        if upper_numerator > denominator {
            return error::invalid_argument(format!(
                "upper numerator {} exceeds denominator {}",
                upper_numerator, denominator
            ));
        }
        if upper_numerator < lower_numerator {
            return error::invalid_argument(format!(
                "upper numerator {} is less than lower numerator {}",
                upper_numerator, lower_numerator
            ));
        }

        Ok(Interval {
            denominator,
            lower_numerator,
            upper_numerator,
        })
    }

    /// `D`, the denominator shared by both numerators.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// `L`, the lower (inclusive) numerator.
    pub fn lower_numerator(&self) -> &BigInt {
        &self.lower_numerator
    }

    /// `U`, the upper (exclusive) numerator.
    pub fn upper_numerator(&self) -> &BigInt {
        &self.upper_numerator
    }
}
