//! Rook attacks via the shared magic-bitboard table.

use std::sync::OnceLock;

use crate::moves::magic::{Directions, SliderAttackTable};

pub const ROOK_DIRECTIONS: Directions = [(0, 1), (0, -1), (1, 0), (-1, 0)];

const ROOK_MAGIC_SEED: u64 = 0x0005_EED0_F0A1_2345;

static ROOK_TABLE: OnceLock<SliderAttackTable> = OnceLock::new();

#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    ROOK_TABLE
        .get_or_init(|| SliderAttackTable::build(&ROOK_DIRECTIONS, ROOK_MAGIC_SEED))
        .attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        assert_eq!(rook_attacks(35, 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 56u8;
        let blocker_on_a4 = 1u64 << 32;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & blocker_on_a4, 0);
        assert_eq!(attacks & (1u64 << 24), 0);
        assert_ne!(attacks & (1u64 << 63), 0);
    }
}
