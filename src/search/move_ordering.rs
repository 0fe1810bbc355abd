//! Move ordering heuristics for alpha-beta search.
//!
//! The transposition-table move is tried first, then captures by MVV-LVA
//! (most valuable victim, least valuable attacker) with the promoted figure's
//! value added for promotions. Quiet moves keep generation order.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::search::board_scoring::MaterialScorer;

pub const TT_MOVE_SCORE: i32 = 1_000_000;

/// Ordering key for one move; higher is searched earlier.
pub fn move_order_score(game_state: &GameState, mv: Move, tt_move: Option<Move>) -> i32 {
    if tt_move.is_some_and(|tt| tt.matches(&mv)) {
        return TT_MOVE_SCORE;
    }

    let side = game_state.side_to_move;
    let mut score = 0i32;

    let victim = if mv.special == SpecialMove::EnPassant {
        Some(PieceKind::Pawn)
    } else {
        game_state.piece_of_color_at(side.opposite(), mv.destination)
    };

    if let Some(victim) = victim {
        let attacker = game_state
            .piece_of_color_at(side, mv.origin)
            .unwrap_or(PieceKind::Pawn);
        score += MaterialScorer::piece_value(victim) - MaterialScorer::piece_value(attacker);
    }

    if let Some(promoted) = mv.promotion_piece() {
        score += MaterialScorer::piece_value(promoted);
    }

    score
}

/// Sort `moves` best-first. Ties keep their generation order.
pub fn order_moves(game_state: &GameState, moves: &mut [Move], tt_move: Option<Move>) {
    moves.sort_by_cached_key(|mv| -move_order_score(game_state, *mv, tt_move));
}

#[cfg(test)]
mod tests {
    use super::{move_order_score, order_moves, TT_MOVE_SCORE};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::generate_all_legal_moves;

    #[test]
    fn cheap_attacker_on_expensive_victim_comes_first() {
        // Pawn and queen can both take the rook on d5; the queen can also take a pawn.
        let game = GameState::from_fen("4k3/8/8/3r4/2P5/8/1p6/1Q2K3 w - - 0 1")
            .expect("FEN should parse");
        let mut moves = generate_all_legal_moves(&game);
        order_moves(&game, &mut moves, None);

        // c4xd5
        assert_eq!((moves[0].origin, moves[0].destination), (34, 27));
        assert_eq!(move_order_score(&game, moves[0], None), 400);
    }

    #[test]
    fn tt_move_is_searched_first() {
        let game = GameState::new_game();
        let mut moves = generate_all_legal_moves(&game);
        let tt_move = *moves.last().expect("start position has moves");
        order_moves(&game, &mut moves, Some(tt_move));
        assert_eq!(moves[0], tt_move);
        assert_eq!(move_order_score(&game, tt_move, Some(tt_move)), TT_MOVE_SCORE);
    }

    #[test]
    fn quiet_moves_keep_generation_order() {
        let game = GameState::new_game();
        let generated = generate_all_legal_moves(&game);
        let mut ordered = generated.clone();
        order_moves(&game, &mut ordered, None);
        assert_eq!(ordered, generated);
    }

    #[test]
    fn promotions_rank_by_promoted_figure() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = generate_all_legal_moves(&game);
        order_moves(&game, &mut moves, None);
        assert_eq!(moves[0].promotion_piece(), Some(PieceKind::Queen));
        assert_eq!(moves[1].promotion_piece(), Some(PieceKind::Rook));
    }
}
