//! Static knight attack table.

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [u64; 64] {
    const JUMPS: [(i32, i32); 8] = [
        (1, 2),
        (2, 1),
        (2, -1),
        (1, -2),
        (-1, -2),
        (-2, -1),
        (-2, 1),
        (-1, 2),
    ];

    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0;
        while i < JUMPS.len() {
            attacks |= bit_if_on_board(file + JUMPS[i].0, row + JUMPS[i].1);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

/// One-hot bitboard for `(file, row)`, or 0 when off the board.
pub(crate) const fn bit_if_on_board(file: i32, row: i32) -> u64 {
    if file < 0 || file > 7 || row < 0 || row > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (file as usize))
}
