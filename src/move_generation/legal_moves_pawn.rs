use crate::game_state::chess_rules::{pawn_start_row, promotion_origin_row};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::pawn_moves::pawn_attacks;

/// Pseudo-legal pawn moves from `from` for the side to move.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let occupancy = game_state.occupancy();
    let enemy_occ = game_state.occupancy_of(side.opposite());
    let row = from / 8;
    let promotes = row == promotion_origin_row(side);
    let attacks = pawn_attacks(side, from);

    let mut captures = attacks & enemy_occ;
    while captures != 0 {
        let to = captures.trailing_zeros() as Square;
        push_pawn_move(out, from, to, promotes);
        captures &= captures - 1;
    }

    if let Some(ep) = game_state.en_passant_square {
        if attacks & square_bit(ep) != 0 {
            out.push(Move::with_special(from, ep, SpecialMove::EnPassant));
        }
    }

    let Some(one_step) = step_forward(side, from) else {
        return;
    };
    if occupancy & square_bit(one_step) != 0 {
        return;
    }
    push_pawn_move(out, from, one_step, promotes);

    if row == pawn_start_row(side) {
        if let Some(two_step) = step_forward(side, one_step) {
            if occupancy & square_bit(two_step) == 0 {
                out.push(Move::new(from, two_step));
            }
        }
    }
}

#[inline]
fn step_forward(side: Color, from: Square) -> Option<Square> {
    match side {
        Color::Light => from.checked_sub(8),
        Color::Dark => Some(from + 8).filter(|sq| *sq < 64),
    }
}

#[inline]
fn push_pawn_move(out: &mut Vec<Move>, from: Square, to: Square, promotes: bool) {
    if promotes {
        for piece in PromotionPiece::ALL {
            out.push(Move::promoting(from, to, piece));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&game, 52, &mut out);
        assert_eq!(out, vec![Move::new(52, 44), Move::new(52, 36)]);
    }

    #[test]
    fn blocked_pawn_cannot_double_push() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, 52, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn promotion_emits_four_moves_per_target() {
        let game =
            GameState::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, 8, &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|mv| mv.special == SpecialMove::Promotion));
    }

    #[test]
    fn en_passant_only_onto_recorded_square() {
        let game =
            GameState::from_fen("4k3/8/8/2pPp3/8/8/8/4K3 w - e6 0 2").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, 27, &mut out);
        assert!(out.contains(&Move::with_special(27, 20, SpecialMove::EnPassant)));
        assert!(!out.iter().any(|mv| mv.destination == 18));
    }
}
