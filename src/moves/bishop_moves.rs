//! Bishop attacks via the shared magic-bitboard table.

use std::sync::OnceLock;

use crate::moves::magic::{Directions, SliderAttackTable};

pub const BISHOP_DIRECTIONS: Directions = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const BISHOP_MAGIC_SEED: u64 = 0xB15B_0F00_D5EE_D001;

static BISHOP_TABLE: OnceLock<SliderAttackTable> = OnceLock::new();

#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    BISHOP_TABLE
        .get_or_init(|| SliderAttackTable::build(&BISHOP_DIRECTIONS, BISHOP_MAGIC_SEED))
        .attacks(square, occupancy)
}
