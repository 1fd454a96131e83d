//! An arbitrary-precision signed integer, backed by GMP.
//!
//! `Integer::from(136).pow(...)`-scale factorials appear throughout this
//! crate, so every intermediate value here is an exact `rug::Integer`
//! rather than a fixed-width type. `BigInt` is a thin newtype over
//! `rug::Integer`: it exists to pin down the specific, closed set of
//! operations the rest of this crate relies on (construction, the four
//! basic operations truncating toward zero, in-place exponentiation,
//! uniform sampling, and an overflow-safe `f64` conversion) behind a
//! narrower surface than `rug::Integer`'s full API, and to report failures
//! through this crate's [`Error`](crate::error::Error) instead of panics.

use crate::error::{self, Error, Result};
use crate::random::RandomState;
use rug::ops::Pow;
use rug::Integer;
use std::cmp::Ordering;
use std::convert::TryInto;
use std::ops::{Add, Mul, Sub};

/// An arbitrary-precision signed integer with value semantics.
///
/// Cloning a `BigInt` always produces an independent value (a deep copy of
/// the underlying `rug::Integer`); there is no copy-on-write sharing to
/// reason about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigInt(Integer);

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        BigInt(Integer::new())
    }

    /// Constructs a `BigInt` from an unsigned 64-bit value.
    pub fn from_u64(value: u64) -> Self {
        BigInt(Integer::from(value))
    }

    /// Constructs a `BigInt` from a signed 64-bit value.
    pub fn from_i64(value: i64) -> Self {
        BigInt(Integer::from(value))
    }

    /// Narrows this value to `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if the value is negative, or
    /// [`Error::Overflow`] if it exceeds `u64::MAX`.
    pub fn to_u64(&self) -> Result<u64> {
        if self.0 < 0 {
            return Err(Error::Underflow);
        }
        self.0.to_u64().ok_or(Error::Overflow)
    }

    /// Truncated division by another `BigInt` (truncation toward zero).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt> {
        if rhs.0 == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(BigInt(self.0.clone() / &rhs.0))
    }

    /// Truncated division by a `u64` (truncation toward zero).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div_u64(&self, rhs: u64) -> Result<BigInt> {
        if rhs == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(BigInt(self.0.clone() / rhs))
    }

    /// Truncated remainder against another `BigInt` (truncation toward
    /// zero, so the result takes the sign of `self`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        if rhs.0 == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(BigInt(self.0.clone() % &rhs.0))
    }

    /// Truncated remainder against a `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem_u64(&self, rhs: u64) -> Result<BigInt> {
        if rhs == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(BigInt(self.0.clone() % rhs))
    }

    /// Raises this value to `exponent` in place. `0⁰ = 1`.
    pub fn pow_assign(&mut self, exponent: u64) {
        // `rug::Integer::pow` takes a `u32`; the exponents this crate
        // actually needs (bit-widths, not factorial arguments) never
        // approach `u32::MAX`, so the narrowing is checked defensively
        // rather than silently wrapped.
        let exponent: u32 = exponent
            .try_into()
            .expect("exponent exceeds u32::MAX, which no caller in this crate should request");
        self.0 = std::mem::replace(&mut self.0, Integer::new()).pow(exponent);
    }

    /// Returns `self` raised to `exponent`. `0⁰ = 1`.
    pub fn pow(&self, exponent: u64) -> BigInt {
        let mut result = self.clone();
        result.pow_assign(exponent);
        result
    }

    /// Draws a value uniformly from `[0, upper)`, advancing `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `upper` is not strictly
    /// positive.
    pub fn sample_below(state: &mut RandomState, upper: &BigInt) -> Result<BigInt> {
        if upper.0 <= 0 {
            return error::invalid_argument(format!(
                "sample_below: upper bound {} is not positive",
                upper.0
            ));
        }
        let sample = upper.0.clone().random_below(state.as_raw_mut());
        Ok(BigInt(sample))
    }

    /// Draws a value uniformly from `[lower, upper)`, advancing `state`.
    ///
    /// Defined as `sample_below(state, upper - lower) + lower`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `lower >= upper`.
    pub fn sample_in(state: &mut RandomState, lower: &BigInt, upper: &BigInt) -> Result<BigInt> {
        if lower.0 >= upper.0 {
            return error::invalid_argument(format!(
                "sample_in: lower bound {} is not less than upper bound {}",
                lower.0, upper.0
            ));
        }
        let span = BigInt(upper.0.clone() - &lower.0);
        let sample = BigInt::sample_below(state, &span)?;
        Ok(BigInt(sample.0 + &lower.0))
    }

    /// Returns the closest `f64` to the exact ratio `num / den`, without
    /// ever materializing `num` or `den` as an (overflowing) `f64` on
    /// their own.
    ///
    /// Both operands may be thousands of bits long (as arise from
    /// products with `D` up to `136!`); a direct `num.to_f64() /
    /// den.to_f64()` would see both sides saturate to infinity and
    /// produce `NaN`. Instead each operand is decomposed as `mantissa *
    /// 2^exponent` by right-shifting away all but its top 64 significant
    /// bits, the (now `f64`-representable) mantissas are divided, and the
    /// discarded shift amounts are folded back in as a power-of-two
    /// correction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `den` is zero.
    pub fn divide_as_double(num: &BigInt, den: &BigInt) -> Result<f64> {
        if den.0 == 0 {
            return Err(Error::DivisionByZero);
        }
        if num.0 == 0 {
            return Ok(0.0);
        }

        const MANTISSA_BITS: u32 = 64;

        let (num_mantissa, num_shift) = mantissa_and_shift(&num.0, MANTISSA_BITS);
        let (den_mantissa, den_shift) = mantissa_and_shift(&den.0, MANTISSA_BITS);

        let ratio = num_mantissa / den_mantissa;
        let exponent = num_shift as i64 - den_shift as i64;
        Ok(ratio * 2f64.powi(exponent as i32))
    }

    fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Shifts `value` right until at most `target_bits` significant bits
/// remain, returning `(shifted value as f64, bits shifted away)`. The
/// shift is always non-negative, so it never loses bits that mattered for
/// a value already within `target_bits`.
fn mantissa_and_shift(value: &Integer, target_bits: u32) -> (f64, u32) {
    let bits = value.significant_bits();
    let shift = bits.saturating_sub(target_bits);
    let shifted = if shift == 0 {
        value.clone()
    } else {
        value.clone() >> shift
    };
    (shifted.to_f64(), shift)
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_primitive_cmp {
    ($prim:ty) => {
        impl PartialEq<$prim> for BigInt {
            fn eq(&self, rhs: &$prim) -> bool {
                self.0 == *rhs
            }
        }

        impl PartialOrd<$prim> for BigInt {
            fn partial_cmp(&self, rhs: &$prim) -> Option<Ordering> {
                self.0.partial_cmp(rhs)
            }
        }
    };
}

impl_primitive_cmp!(u64);
impl_primitive_cmp!(i64);

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt(self.0 $op &rhs.0)
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt(self.0 $op rhs.0)
            }
        }

        impl $trait<u64> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: u64) -> BigInt {
                BigInt(self.0 $op rhs)
            }
        }
    };
}

impl_binop!(Add, add, +);
impl_binop!(Sub, sub, -);
impl_binop!(Mul, mul, *);

impl Mul<i64> for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: i64) -> BigInt {
        BigInt(self.0 * rhs)
    }
}

// `Div`/`Rem` are intentionally not implemented as operator overloads:
// this crate's own contract requires a zero divisor to surface as
// `Error::DivisionByZero` rather than panic, so callers go through
// `checked_div`/`checked_rem` (or the `_u64` variants) instead.

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::from_u64(value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt::from_i64(value)
    }
}

impl std::fmt::Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
