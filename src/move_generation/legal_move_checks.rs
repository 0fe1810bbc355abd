//! Attack and check detection.
//!
//! Attack sets are computed against an explicit occupancy so castling can
//! ask "is this square attacked once the king has left it".

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Union of every square attacked by `attacker_color`, with sliders seeing
/// through anything not in `occupancy`.
pub fn attacks_by(game_state: &GameState, attacker_color: Color, occupancy: u64) -> u64 {
    let side = attacker_color.index();
    let mut attacks = 0u64;

    let mut pawns = game_state.pieces[side][PieceKind::Pawn.index()];
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        attacks |= pawn_attacks(attacker_color, from);
        pawns &= pawns - 1;
    }

    let mut knights = game_state.pieces[side][PieceKind::Knight.index()];
    while knights != 0 {
        let from = knights.trailing_zeros() as Square;
        attacks |= knight_attacks(from);
        knights &= knights - 1;
    }

    let mut diagonal = game_state.pieces[side][PieceKind::Bishop.index()]
        | game_state.pieces[side][PieceKind::Queen.index()];
    while diagonal != 0 {
        let from = diagonal.trailing_zeros() as Square;
        attacks |= bishop_attacks(from, occupancy);
        diagonal &= diagonal - 1;
    }

    let mut straight = game_state.pieces[side][PieceKind::Rook.index()]
        | game_state.pieces[side][PieceKind::Queen.index()];
    while straight != 0 {
        let from = straight.trailing_zeros() as Square;
        attacks |= rook_attacks(from, occupancy);
        straight &= straight - 1;
    }

    let mut kings = game_state.pieces[side][PieceKind::King.index()];
    while kings != 0 {
        let from = kings.trailing_zeros() as Square;
        attacks |= king_attacks(from);
        kings &= kings - 1;
    }

    attacks
}

/// Reverse lookup: does any `attacker_color` piece hit `square`?
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let side = attacker_color.index();
    let occupancy = game_state.occupancy();

    // A pawn of the attacker hits `square` if a defender pawn on `square`
    // would hit the attacker's pawn.
    let pawns = game_state.pieces[side][PieceKind::Pawn.index()];
    if pawn_attacks(attacker_color.opposite(), square) & pawns != 0 {
        return true;
    }
    if knight_attacks(square) & game_state.pieces[side][PieceKind::Knight.index()] != 0 {
        return true;
    }
    if king_attacks(square) & game_state.pieces[side][PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = game_state.pieces[side][PieceKind::Queen.index()];
    let bishops_queens = game_state.pieces[side][PieceKind::Bishop.index()] | queens;
    if bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = game_state.pieces[side][PieceKind::Rook.index()] | queens;
    rook_attacks(square, occupancy) & rooks_queens != 0
}

/// Is the king of `color` attacked?
#[inline]
pub fn is_color_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Is the side to move in check?
#[inline]
pub fn is_king_in_check(game_state: &GameState) -> bool {
    is_color_in_check(game_state, game_state.side_to_move)
}

#[cfg(test)]
mod tests {
    use super::{attacks_by, is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_is_not_check() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game));
        // e3 and f6 are covered by pawns.
        assert!(is_square_attacked(&game, 44, Color::Light));
        assert!(is_square_attacked(&game, 21, Color::Dark));
        assert!(!is_square_attacked(&game, 36, Color::Dark));
    }

    #[test]
    fn rook_check_is_detected() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game));
    }

    #[test]
    fn union_matches_per_square_queries() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        for color in Color::ALL {
            let union = attacks_by(&game, color, game.occupancy());
            for sq in 0..64u8 {
                assert_eq!(
                    union & square_bit(sq) != 0,
                    is_square_attacked(&game, sq, color),
                    "square {sq} for {color:?}"
                );
            }
        }
    }
}
