//! Samples an `n`-bit string from the conditional distribution induced by
//! an [`Interval`]'s dyadic cover.

use crate::bigint::BigInt;
use crate::covering::covering_binary_interval;
use crate::error::{self, Result};
use crate::interval::Interval;
use crate::random::RandomState;
use bit_vec::BitVec;

/// Samples an `n`-bit string representing a dyadic value drawn from the
/// conditional distribution `interval` induces over its covering dyadic
/// slices, and returns it as a `BitVec` of length `num_bits` with index 0
/// the most significant bit.
///
/// This is inverse-transform sampling over the covering interval
/// `[lb, ub)` from [`covering_binary_interval`]: the first and last
/// dyadic slices of the cover only partially overlap `interval`, so they
/// receive a probability mass proportional to that overlap, while every
/// slice strictly between them is covered entirely and receives mass `D`
/// (see the module-level rationale in this crate's specification, §4.5).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::error::Error::InvalidArgument)
/// if the covering interval's width does not fit in a `u64` (so the
/// probability-mass vector would be un-indexable), and
/// [`Error::Logic`](crate::error::Error::Logic) if the probability masses
/// fail to be non-negative or the inverse-transform walk runs past the
/// end of the mass vector.
pub fn interval_to_binary(
    interval: &Interval,
    num_bits: u32,
    state: &mut RandomState,
) -> Result<BitVec> {
    let (lower_binary, upper_binary) = covering_binary_interval(interval, num_bits)?;
    let width = upper_binary.clone() - lower_binary.clone();
    // `to_u64` already reports `Overflow` for a width exceeding 2^64 - 1;
    // re-surface it as `InvalidArgument` per this crate's contract, since
    // here it is the caller's `num_bits` that is to blame, not a narrowing
    // bug.
    width.to_u64().map_err(|_| {
        error::invalid_argument_value(format!(
            "num_bits {} is too large: covering interval width does not fit in u64",
            num_bits
        ))
    })?;

    if width == 1u64 {
        return integer_to_bits(&lower_binary, num_bits);
    }

    let binary_denominator = BigInt::from_u64(2).pow(u64::from(num_bits));
    let masses = probability_masses(interval, &lower_binary, &upper_binary, &binary_denominator)?;

    let total_mass = (interval.upper_numerator().clone() - interval.lower_numerator().clone())
        * binary_denominator;
    let mut remainder = BigInt::sample_below(state, &total_mass)?;

    for (i, mass) in masses.iter().enumerate() {
        if remainder < *mass {
            let sampled = lower_binary + BigInt::from_u64(i as u64);
            return integer_to_bits(&sampled, num_bits);
        }
        remainder = remainder - mass.clone();
    }

    error::logic_error("interval_to_binary: inverse-transform walk exhausted the mass vector")
}

/// Constructs the probability-mass vector `p` from §4.5: `p[0]` and
/// `p[K-1]` are the partial-overlap masses of the first and last dyadic
/// slices, and every slice in between carries mass `D`.
pub(crate) fn probability_masses(
    interval: &Interval,
    lower_binary: &BigInt,
    upper_binary: &BigInt,
    binary_denominator: &BigInt,
) -> Result<Vec<BigInt>> {
    let denominator = interval.denominator();
    let lower_numerator_scaled = interval.lower_numerator().clone() * binary_denominator.clone();
    let upper_numerator_scaled = interval.upper_numerator().clone() * binary_denominator.clone();

    let width = upper_binary.clone() - lower_binary.clone();
    let width = width
        .to_u64()
        .map_err(|_| error::invalid_argument_value("covering interval width does not fit in u64"))?;

    let mut masses = Vec::with_capacity(width as usize);

    let first_mass = (lower_binary.clone() + BigInt::from_u64(1)) * denominator.clone()
        - lower_numerator_scaled;
    if first_mass < 0i64 {
        return error::logic_error(format!(
            "interval_to_binary: first probability mass {} is negative",
            first_mass
        ));
    }
    masses.push(first_mass);

    for _ in 1..width.saturating_sub(1) {
        masses.push(denominator.clone());
    }

    if width > 1 {
        let last_mass = upper_numerator_scaled
            - (upper_binary.clone() - BigInt::from_u64(1)) * denominator.clone();
        if last_mass < 0i64 {
            return error::logic_error(format!(
                "interval_to_binary: last probability mass {} is negative",
                last_mass
            ));
        }
        masses.push(last_mass);
    }

    Ok(masses)
}

/// Encodes `value` as `num_bits` bits, most significant bit first.
fn integer_to_bits(value: &BigInt, num_bits: u32) -> Result<BitVec> {
    let mut bits = BitVec::from_elem(num_bits as usize, false);
    let mut remaining = value.clone();
    for i in (0..num_bits).rev() {
        let bit = remaining.checked_rem_u64(2)?;
        bits.set(i as usize, bit == 1u64);
        remaining = remaining.checked_div_u64(2)?;
    }
    Ok(bits)
}

/// Packs a most-significant-bit-first [`BitVec`] into bytes, MSB first
/// within each byte. This is ambient boundary-format glue (see §4.7 of
/// this crate's specification), not part of the normative algorithm:
/// nothing in `interval_to_binary` depends on it.
///
/// # Panics
///
/// Panics if `bits.len()` is not a multiple of 8.
pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    assert_eq!(bits.len() % 8, 0, "bit vector length must be a multiple of 8");
    bits.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(v: u64) -> BigInt {
        BigInt::from_u64(v)
    }

    #[test]
    fn equal_mass_two_way_split_samples_both_outcomes() {
        // I = (4, 1, 3), n = 2: lb = 1, ub = 3, masses = [4, 4].
        let interval = Interval::new(bi(4), bi(1), bi(3)).unwrap();
        let mut state = RandomState::seeded(0);
        let mut saw_01 = false;
        let mut saw_10 = false;
        for _ in 0..200 {
            let bits = interval_to_binary(&interval, 2, &mut state).unwrap();
            let as_str: String = bits.iter().map(|b| if b { '1' } else { '0' }).collect();
            match as_str.as_str() {
                "01" => saw_01 = true,
                "10" => saw_10 = true,
                other => panic!("unexpected bit string {}", other),
            }
        }
        assert!(saw_01 && saw_10);
    }

    #[test]
    fn single_slice_cover_is_deterministic() {
        // D = 4, L = 2, U = 3 at n = 2 collapses to a single dyadic slice.
        let interval = Interval::new(bi(4), bi(2), bi(3)).unwrap();
        let mut state = RandomState::seeded(0);
        for _ in 0..10 {
            let bits = interval_to_binary(&interval, 2, &mut state).unwrap();
            let as_str: String = bits.iter().map(|b| if b { '1' } else { '0' }).collect();
            assert_eq!(as_str, "10");
        }
    }

    #[test]
    fn identically_seeded_encoders_agree() {
        let interval = permutation_interval_for_test();
        let mut state_a = RandomState::seeded(999);
        let mut state_b = RandomState::seeded(999);
        for _ in 0..25 {
            let bits_a = interval_to_binary(&interval, 32, &mut state_a).unwrap();
            let bits_b = interval_to_binary(&interval, 32, &mut state_b).unwrap();
            assert_eq!(bits_a, bits_b);
        }
    }

    #[test]
    fn bits_to_bytes_packs_msb_first() {
        let mut bits = BitVec::from_elem(8, false);
        bits.set(0, true); // MSB
        bits.set(7, true); // LSB
        let bytes = bits_to_bytes(&bits);
        assert_eq!(bytes, vec![0b1000_0001]);
    }

    fn permutation_interval_for_test() -> Interval {
        crate::permutation::permutation_to_interval(&[5, 12, 30]).unwrap()
    }
}
