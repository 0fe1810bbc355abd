//! Magic-bitboard lookup tables for sliding pieces.
//!
//! For every square the relevant blocker mask (the rays without their last,
//! edge square) is hashed with a multiply-and-shift into a dense attack
//! table. Magic multipliers are found on first use with a seeded sparse
//! random search and every candidate is verified against the slow ray walk,
//! so the tables are exact and identical from run to run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::game_state::chess_types::Square;

/// Ray directions as `(file_step, row_step)`.
pub type Directions = [(i32, i32); 4];

/// Largest blocker subset count for one square (rook in a corner).
const MAX_SUBSETS: usize = 1 << 12;

#[derive(Debug, Default, Clone, Copy)]
struct Magic {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl Magic {
    /// `((occ & mask) * magic) >> shift + offset`
    #[inline]
    fn index(&self, occupancy: u64) -> usize {
        ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize + self.offset
    }
}

/// Attack table for one slider type.
#[derive(Debug)]
pub struct SliderAttackTable {
    magics: [Magic; 64],
    attacks: Vec<u64>,
}

impl SliderAttackTable {
    /// Build the table for `directions`, searching magics with `seed`.
    pub fn build(directions: &Directions, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut magics = [Magic::default(); 64];
        let mut attacks = Vec::new();

        let mut occupancies = Vec::with_capacity(MAX_SUBSETS);
        let mut references = Vec::with_capacity(MAX_SUBSETS);
        let mut used = vec![0u64; MAX_SUBSETS];
        let mut epoch = vec![0u32; MAX_SUBSETS];
        let mut attempt = 0u32;

        for sq in 0..64u8 {
            let mask = relevant_occupancy_mask(directions, sq);
            let bits = mask.count_ones();
            let size = 1usize << bits;
            let shift = 64 - bits;

            occupancies.clear();
            references.clear();
            // Carry-Rippler walk over every subset of the mask.
            let mut subset = 0u64;
            loop {
                occupancies.push(subset);
                references.push(sliding_attacks(directions, sq, subset));
                subset = subset.wrapping_sub(mask) & mask;
                if subset == 0 {
                    break;
                }
            }

            loop {
                let magic = rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>();
                if (mask.wrapping_mul(magic) >> 56).count_ones() < 6 {
                    continue;
                }

                attempt += 1;
                let mut collided = false;
                for (occupancy, reference) in occupancies.iter().zip(&references) {
                    let idx = (occupancy.wrapping_mul(magic) >> shift) as usize;
                    if epoch[idx] != attempt {
                        epoch[idx] = attempt;
                        used[idx] = *reference;
                    } else if used[idx] != *reference {
                        collided = true;
                        break;
                    }
                }

                if !collided {
                    magics[sq as usize] = Magic {
                        mask,
                        magic,
                        shift,
                        offset: attacks.len(),
                    };
                    attacks.extend_from_slice(&used[..size]);
                    break;
                }
            }
        }

        debug!(entries = attacks.len(), attempts = attempt, "built slider attack table");

        Self { magics, attacks }
    }

    #[inline]
    pub fn attacks(&self, square: Square, occupancy: u64) -> u64 {
        self.attacks[self.magics[square as usize].index(occupancy)]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

/// Slow reference: walk every ray until it leaves the board or hits a blocker
/// (the blocker square is included).
pub fn sliding_attacks(directions: &Directions, square: Square, occupancy: u64) -> u64 {
    let mut attacks = 0u64;

    for &(file_step, row_step) in directions {
        let mut file = (square % 8) as i32 + file_step;
        let mut row = (square / 8) as i32 + row_step;

        while (0..8).contains(&file) && (0..8).contains(&row) {
            let bit = 1u64 << (row * 8 + file);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            file += file_step;
            row += row_step;
        }
    }

    attacks
}

/// Squares whose occupancy can change the attack set: each ray minus its
/// final edge square.
pub fn relevant_occupancy_mask(directions: &Directions, square: Square) -> u64 {
    let mut mask = 0u64;

    for &(file_step, row_step) in directions {
        let mut file = (square % 8) as i32 + file_step;
        let mut row = (square / 8) as i32 + row_step;

        while (0..8).contains(&(file + file_step)) && (0..8).contains(&(row + row_step)) {
            if !(0..8).contains(&file) || !(0..8).contains(&row) {
                break;
            }
            mask |= 1u64 << (row * 8 + file);
            file += file_step;
            row += row_step;
        }
    }

    mask
}

/// Force construction of both slider tables (first use otherwise pays for it).
pub fn init_slider_tables() {
    let _ = crate::moves::bishop_moves::bishop_attacks(0, 0);
    let _ = crate::moves::rook_moves::rook_attacks(0, 0);
}
