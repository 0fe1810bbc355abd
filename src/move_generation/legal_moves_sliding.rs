//! Bishop, rook and queen moves from the magic lookup tables.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_knight::push_targets;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let own_occ = game_state.occupancy_of(game_state.side_to_move);
    push_targets(from, bishop_attacks(from, game_state.occupancy()) & !own_occ, out);
}

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let own_occ = game_state.occupancy_of(game_state.side_to_move);
    push_targets(from, rook_attacks(from, game_state.occupancy()) & !own_occ, out);
}

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let own_occ = game_state.occupancy_of(game_state.side_to_move);
    push_targets(from, queen_attacks(from, game_state.occupancy()) & !own_occ, out);
}

#[cfg(test)]
mod tests {
    use super::{generate_queen_moves, generate_rook_moves};
    use crate::game_state::game_state::GameState;

    #[test]
    fn boxed_in_sliders_have_no_moves_at_start() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_rook_moves(&game, 56, &mut out);
        generate_queen_moves(&game, 59, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn rook_captures_but_stops_at_enemy() {
        let game =
            GameState::from_fen("4k3/8/8/8/r2R4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, 35, &mut out);
        // 3 to the left (incl. capture on a4), 4 right, 4 up, 3 down.
        assert_eq!(out.len(), 14);
        assert!(out.iter().any(|mv| mv.destination == 32));
    }
}
