//! Static pawn capture tables.
//!
//! Light pawns advance towards row 0 (rank 8), so their captures land on
//! `sq - 9` and `sq - 7`. Dark pawns capture on `sq + 7` and `sq + 9`.

use crate::game_state::chess_types::Color;

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = generate_light_pawn_attacks();
pub const DARK_PAWN_ATTACKS: [u64; 64] = generate_dark_pawn_attacks();

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_light_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_dark_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
