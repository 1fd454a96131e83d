//! Computes the Shannon entropy (base 2) of the distribution
//! [`interval_to_binary`](crate::binary::interval_to_binary) samples from.

use crate::bigint::BigInt;
use crate::binary::probability_masses;
use crate::covering::covering_binary_interval;
use crate::error::{self, Result};
use crate::interval::Interval;

/// Returns the Shannon entropy, in bits, of the discrete distribution
/// over `{lb, ..., ub - 1}` that [`interval_to_binary`](crate::binary::interval_to_binary)
/// samples from for the same `(interval, num_bits)`.
///
/// When the covering interval collapses to a single dyadic slice
/// (`ub - lb == 1`), the distribution is a point mass and the entropy is
/// exactly `0.0`. Otherwise this sums `-q * log2(q)` over the normalized
/// probability masses from §4.5, computed via
/// [`BigInt::divide_as_double`] to stay exact until the final float
/// conversion (masses and the normalizer can each be thousands of bits
/// long).
///
/// # Errors
///
/// Returns [`Error::Logic`](crate::error::Error::Logic) if the collapsed
/// case's containment post-condition fails, or if any normalized mass is
/// not strictly positive.
pub fn interval_to_entropy(interval: &Interval, num_bits: u32) -> Result<f64> {
    let (lower_binary, upper_binary) = covering_binary_interval(interval, num_bits)?;
    let denominator = interval.denominator();
    let binary_denominator = BigInt::from_u64(2).pow(u64::from(num_bits));

    let width = upper_binary.clone() - lower_binary.clone();
    if width == 1u64 {
        let lower_numerator_scaled = interval.lower_numerator().clone() * binary_denominator.clone();
        let upper_numerator_scaled = interval.upper_numerator().clone() * binary_denominator;
        if lower_binary.clone() * denominator.clone() > lower_numerator_scaled {
            return error::logic_error(
                "interval_to_entropy: collapsed lower containment post-condition failed",
            );
        }
        if upper_binary.clone() * denominator.clone() < upper_numerator_scaled {
            return error::logic_error(
                "interval_to_entropy: collapsed upper containment post-condition failed",
            );
        }
        return Ok(0.0);
    }

    let masses = probability_masses(interval, &lower_binary, &upper_binary, &binary_denominator)?;
    let normalizer = width * denominator.clone();

    let mut entropy = 0.0f64;
    for mass in &masses {
        let probability = BigInt::divide_as_double(mass, &normalizer)?;
        if probability <= 0.0 {
            return error::logic_error(format!(
                "interval_to_entropy: normalized mass {} is not strictly positive",
                probability
            ));
        }
        entropy -= probability * probability.log2();
    }

    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(v: u64) -> BigInt {
        BigInt::from_u64(v)
    }

    #[test]
    fn empty_prefix_has_maximal_entropy_at_eight_bits() {
        let interval = Interval::new(bi(1), bi(0), bi(1)).unwrap();
        let entropy = interval_to_entropy(&interval, 8).unwrap();
        assert!((entropy - 8.0).abs() < 1e-9);
    }

    #[test]
    fn equal_mass_two_way_split_has_entropy_one() {
        // I = (4, 1, 3), n = 2: masses [4, 4], each probability 1/2.
        let interval = Interval::new(bi(4), bi(1), bi(3)).unwrap();
        let entropy = interval_to_entropy(&interval, 2).unwrap();
        assert!((entropy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn collapsed_cover_has_zero_entropy() {
        let interval = Interval::new(bi(4), bi(2), bi(3)).unwrap();
        let entropy = interval_to_entropy(&interval, 2).unwrap();
        assert_eq!(entropy, 0.0);
    }

    #[test]
    fn entropy_is_non_decreasing_in_num_bits() {
        let interval = Interval::new(bi(136), bi(17), bi(20)).unwrap();
        let mut previous = interval_to_entropy(&interval, 4).unwrap();
        for n in 5..24 {
            let current = interval_to_entropy(&interval, n).unwrap();
            assert!(current + 1e-9 >= previous, "entropy decreased at n={}", n);
            previous = current;
        }
    }

    #[test]
    fn probability_masses_normalize_to_one() {
        // Sanity check on the shared mass construction: regardless of how
        // interval_to_entropy normalizes internally, the raw masses divided
        // by their own sum must integrate to 1.
        let interval = Interval::new(bi(136), bi(17), bi(20)).unwrap();
        let num_bits = 10u32;
        let binary_denominator = BigInt::from_u64(2).pow(u64::from(num_bits));
        let (lb, ub) = covering_binary_interval(&interval, num_bits).unwrap();
        let masses = probability_masses(&interval, &lb, &ub, &binary_denominator).unwrap();
        let sum_masses: BigInt = masses.iter().cloned().fold(BigInt::zero(), |acc, m| acc + m);
        let normalized_total: f64 = masses
            .iter()
            .map(|m| BigInt::divide_as_double(m, &sum_masses).unwrap())
            .sum();
        assert!((normalized_total - 1.0).abs() < 1e-9);
    }
}
