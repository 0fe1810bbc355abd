use crate::game_state::chess_rules::{castling_rights_of, CASTLING_LANES};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{attacks_by, is_square_attacked};
use crate::move_generation::legal_moves_knight::push_targets;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let own_occ = game_state.occupancy_of(game_state.side_to_move);
    push_targets(from, king_attacks(from) & !own_occ, out);
    generate_castling_moves(game_state, from, out);
}

/// Castling moves. These are fully checked here and skip the make-and-test
/// legality filter.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    if game_state.castling_rights & castling_rights_of(side) == 0 {
        return;
    }
    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    let occupancy = game_state.occupancy();
    let attacked = attacks_by(game_state, enemy, occupancy & !square_bit(king_from));
    let rooks = game_state.bitboard(side, PieceKind::Rook);

    for lane in CASTLING_LANES.iter().filter(|lane| lane.color == side) {
        if game_state.castling_rights & lane.right == 0
            || lane.king_from != king_from
            || rooks & square_bit(lane.rook_from) == 0
        {
            continue;
        }
        if occupancy & lane.empty_mask == 0 && attacked & lane.safe_mask == 0 {
            out.push(Move::with_special(king_from, lane.king_to, SpecialMove::Castle));
        }
    }
}
