//! The tile-code layout shared by every `paishan` in this crate.
//!
//! ```text
//! slot:  0  1  2  3  4  5  6  7  8  9
//! mult:  1  4  4  4  4  3  4  4  4  4     (manzu; slot 0 is the red 5m; slot 5 the three non-red 5m)
//! slot: 10 11 12 13 14 15 16 17 18 19
//! mult:  1  4  4  4  4  3  4  4  4  4     (pinzu; slot 10 red 5p, slot 15 the three non-red 5p)
//! slot: 20 21 22 23 24 25 26 27 28 29
//! mult:  1  4  4  4  4  3  4  4  4  4     (souzu; slot 20 red 5s, slot 25 the three non-red 5s)
//! slot: 30 31 32 33 34 35 36
//! mult:  4  4  4  4  4  4  4              (honors)
//! ```

/// The number of distinct tile codes, `[0, 37)`.
pub const NUM_SLOTS: usize = 37;

/// The total number of tiles in a complete wall.
pub const TOTAL_TILES: u32 = 136;

/// The multiplicity of each tile code: how many copies of that face exist
/// in a complete 136-tile wall.
pub const TILE_MULTIPLICITIES: [u8; NUM_SLOTS] = [
    1, 4, 4, 4, 4, 3, 4, 4, 4, 4, // manzu
    1, 4, 4, 4, 4, 3, 4, 4, 4, 4, // pinzu
    1, 4, 4, 4, 4, 3, 4, 4, 4, 4, // souzu
    4, 4, 4, 4, 4, 4, 4, // honors
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicities_sum_to_total_tiles() {
        let sum: u32 = TILE_MULTIPLICITIES.iter().map(|&m| m as u32).sum();
        assert_eq!(sum, TOTAL_TILES);
    }

    #[test]
    fn red_five_slots_have_multiplicity_one() {
        assert_eq!(TILE_MULTIPLICITIES[0], 1);
        assert_eq!(TILE_MULTIPLICITIES[10], 1);
        assert_eq!(TILE_MULTIPLICITIES[20], 1);
    }

    #[test]
    fn non_red_five_slots_have_multiplicity_three() {
        assert_eq!(TILE_MULTIPLICITIES[5], 3);
        assert_eq!(TILE_MULTIPLICITIES[15], 3);
        assert_eq!(TILE_MULTIPLICITIES[25], 3);
    }
}
