//! Finds the tightest dyadic interval at a given bit-width that covers a
//! rational [`Interval`].

use crate::bigint::BigInt;
use crate::error::{self, Result};
use crate::interval::Interval;

/// Given `interval = (D, L, U)` and a bit-width `num_bits`, returns `(lb,
/// ub)` with `0 <= lb < ub <= 2^num_bits` such that `[lb/2^n, ub/2^n)`
/// covers `[L/D, U/D)` and each endpoint is the tightest possible: `lb`
/// is the largest integer with `lb/2^n <= L/D`, and `ub` is the smallest
/// integer with `U/D <= ub/2^n`.
///
/// Both endpoints are found by binary search, snapping inward one bit at
/// a time: `lb` is accumulated from below (starting at 0, greedily adding
/// halved steps while staying `<= L * 2^n`), and `ub` is accumulated from
/// above (starting at `D * 2^n`, greedily subtracting halved steps while
/// staying `>= U * 2^n`). Dividing `step` *before* testing it, rather
/// than after, is what produces this tight inward-snapping behavior; the
/// probability-mass formulas in [`interval_to_binary`](crate::binary::interval_to_binary)
/// and [`interval_to_entropy`](crate::entropy::interval_to_entropy) both
/// depend on exactly this rounding discipline.
///
/// # Errors
///
/// Returns [`Error::Logic`](crate::error::Error::Logic) if either
/// endpoint's post-condition fails to hold, which indicates a bug in this
/// function rather than a bad `interval`.
pub fn covering_binary_interval(interval: &Interval, num_bits: u32) -> Result<(BigInt, BigInt)> {
    let denominator = interval.denominator();
    let binary_denominator = BigInt::from_u64(2).pow(u64::from(num_bits));

    let lower_numerator_scaled = interval.lower_numerator().clone() * binary_denominator.clone();
    let mut lower_accumulator = BigInt::zero();
    let mut lower_step = denominator.clone() * binary_denominator.clone();
    for _ in 0..num_bits {
        lower_step = lower_step.checked_div_u64(2)?;
        let candidate = lower_accumulator.clone() + lower_step.clone();
        if candidate <= lower_numerator_scaled {
            lower_accumulator = candidate;
        }
    }
    if !(lower_accumulator <= lower_numerator_scaled
        && lower_numerator_scaled < lower_accumulator.clone() + denominator.clone())
    {
        return error::logic_error(format!(
            "covering_binary_interval: lower endpoint post-condition failed (acc={}, L*2^n={}, D={})",
            lower_accumulator, lower_numerator_scaled, denominator
        ));
    }
    let lower_binary = lower_accumulator.checked_div(denominator)?;

    let upper_numerator_scaled = interval.upper_numerator().clone() * binary_denominator.clone();
    let mut upper_accumulator = denominator.clone() * binary_denominator;
    let mut upper_step = upper_accumulator.clone();
    for _ in 0..num_bits {
        upper_step = upper_step.checked_div_u64(2)?;
        let candidate = upper_accumulator.clone() - upper_step.clone();
        if candidate >= upper_numerator_scaled {
            upper_accumulator = candidate;
        }
    }
    if !(upper_accumulator.clone() - denominator.clone() < upper_numerator_scaled
        && upper_numerator_scaled <= upper_accumulator)
    {
        return error::logic_error(format!(
            "covering_binary_interval: upper endpoint post-condition failed (acc={}, U*2^n={}, D={})",
            upper_accumulator, upper_numerator_scaled, denominator
        ));
    }
    let upper_binary = upper_accumulator.checked_div(denominator)?;

    if lower_binary >= upper_binary {
        return error::logic_error(format!(
            "covering_binary_interval: lb ({}) is not less than ub ({})",
            lower_binary, upper_binary
        ));
    }

    Ok((lower_binary, upper_binary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(v: u64) -> BigInt {
        BigInt::from_u64(v)
    }

    #[test]
    fn unit_interval_at_eight_bits_covers_the_whole_range() {
        let interval = Interval::new(bi(1), bi(0), bi(1)).unwrap();
        let (lb, ub) = covering_binary_interval(&interval, 8).unwrap();
        assert_eq!(lb, bi(0));
        assert_eq!(ub, bi(256));
    }

    #[test]
    fn single_tile_interval_at_two_bits() {
        // I = (4, 1, 3), n = 2: L*2^n = 4, U*2^n = 12, D = 4.
        // lb/4 <= 1/4 < (lb+1)/4 => lb = 1. (ub-1)/4 < 3/4 <= ub/4 => ub = 3.
        let interval = Interval::new(bi(4), bi(1), bi(3)).unwrap();
        let (lb, ub) = covering_binary_interval(&interval, 2).unwrap();
        assert_eq!(lb, bi(1));
        assert_eq!(ub, bi(3));
    }

    #[test]
    fn tight_lower_and_upper_bounds_hold() {
        let interval = Interval::new(bi(136), bi(17), bi(20)).unwrap();
        let (lb, ub) = covering_binary_interval(&interval, 16).unwrap();
        let d = bi(136);
        let n = bi(1u64 << 16);
        let l_scaled = bi(17) * n.clone();
        let u_scaled = bi(20) * n;
        assert!(lb.clone() * d.clone() <= l_scaled.clone());
        assert!(u_scaled.clone() <= ub.clone() * d.clone());
        assert!((lb + bi(1)) * d.clone() > l_scaled);
        assert!((ub - bi(1)) * d < u_scaled);
    }

    #[test]
    fn exact_boundary_collapses_to_a_single_dyadic_slice() {
        // D = 4, L = 2, U = 3 at n = 2: L/D = 1/2 exactly representable,
        // U/D = 3/4 exactly representable, so ub - lb should be 1.
        let interval = Interval::new(bi(4), bi(2), bi(3)).unwrap();
        let (lb, ub) = covering_binary_interval(&interval, 2).unwrap();
        assert_eq!(ub.clone() - lb.clone(), bi(1));
        assert_eq!(lb, bi(2));
    }
}
