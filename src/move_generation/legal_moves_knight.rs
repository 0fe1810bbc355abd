use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let own_occ = game_state.occupancy_of(game_state.side_to_move);
    push_targets(from, knight_attacks(from) & !own_occ, out);
}

/// Emit one plain move per set bit of `targets`.
#[inline]
pub fn push_targets(from: Square, mut targets: u64, out: &mut Vec<Move>) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        out.push(Move::new(from, to));
        targets &= targets - 1;
    }
}
