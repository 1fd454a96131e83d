//! Folds an observed tile permutation prefix into its arithmetic-coding
//! [`Interval`].

use crate::bigint::BigInt;
use crate::error::{self, Result};
use crate::interval::Interval;
use crate::tiles::{NUM_SLOTS, TILE_MULTIPLICITIES, TOTAL_TILES};

/// Computes the `Interval` corresponding to the arithmetic-coding
/// encoding of `permutation` under the uniform distribution over
/// permutations of the 136-tile multiset.
///
/// `permutation` is a prefix `t_1, ..., t_m` with `m <= 136`; each `t_i`
/// must be a tile code in `[0, 37)` that still has remaining
/// multiplicity at the point it is drawn.
///
/// After processing `i` tiles, `U - L` equals the number of 136-tile
/// permutations that begin with `t_1, ..., t_i`, and `D` equals the
/// falling factorial `136 * 135 * ... * (136 - i + 1)`; so `[L/D, U/D)`
/// is exactly the probability measure of those permutations.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::error::Error::InvalidArgument)
/// if a tile code is `>= 37`, or if a tile's remaining multiplicity is
/// already exhausted (a tile appearing more times in `permutation` than
/// its multiplicity allows, e.g. two red-5 tiles of the same suit).
pub fn permutation_to_interval(permutation: &[u8]) -> Result<Interval> {
    let mut remaining = TILE_MULTIPLICITIES;

    let mut denominator = BigInt::from_u64(1);
    let mut lower_numerator = BigInt::zero();
    let mut upper_numerator = BigInt::from_u64(1);

    let mut factor = u64::from(TOTAL_TILES);
    for &tile in permutation {
        let tile = tile as usize;
        if tile >= NUM_SLOTS {
            return error::invalid_argument(format!("tile code {} is not in [0, 37)", tile));
        }
        if remaining[tile] == 0 {
            return error::invalid_argument(format!(
                "tile code {} has no remaining multiplicity",
                tile
            ));
        }

        let offset: u64 = remaining[..tile].iter().map(|&m| m as u64).sum();
        let count = u64::from(remaining[tile]);

        let width = upper_numerator.clone() - lower_numerator.clone();
        lower_numerator = lower_numerator * factor + BigInt::from_u64(offset) * width.clone();
        upper_numerator = lower_numerator.clone() + width * count;
        denominator = denominator * factor;

        remaining[tile] -= 1;
        factor -= 1;
    }

    Interval::new(denominator, lower_numerator, upper_numerator)
}
