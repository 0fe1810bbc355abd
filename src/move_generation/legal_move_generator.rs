//! Full legal move generation pipeline.
//!
//! Per-figure pseudo-legal generators are dispatched through a table indexed
//! by `PieceKind`. Every non-castling candidate is then applied to a scratch
//! copy and dropped if it leaves the mover's own king in check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_color_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

/// Pseudo-legal generator for one figure standing on one square.
pub type PieceMoveGenerator = fn(&GameState, Square, &mut Vec<Move>);

const GENERATORS: [PieceMoveGenerator; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_rook_moves,
    generate_queen_moves,
    generate_king_moves,
];

#[inline]
pub fn generator_for(piece: PieceKind) -> PieceMoveGenerator {
    GENERATORS[piece.index()]
}

/// Legal moves of the `piece` on `origin` for the side to move.
///
/// Empty when `origin` does not hold such a piece.
pub fn generate_legal_moves(game_state: &GameState, piece: PieceKind, origin: Square) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    if origin > 63
        || game_state.bitboard(game_state.side_to_move, piece) & square_bit(origin) == 0
    {
        return moves;
    }

    generator_for(piece)(game_state, origin, &mut moves);
    moves.retain(|mv| is_self_check_free(game_state, *mv));
    moves
}

/// Every legal move for the side to move, grouped by figure in `PieceKind`
/// order.
pub fn generate_all_legal_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move;
    let mut moves = Vec::with_capacity(64);

    for piece in PieceKind::ALL {
        let generate = generator_for(piece);
        let mut origins = game_state.bitboard(side, piece);
        while origins != 0 {
            let origin = origins.trailing_zeros() as Square;
            generate(game_state, origin, &mut moves);
            origins &= origins - 1;
        }
    }

    moves.retain(|mv| is_self_check_free(game_state, *mv));
    moves
}

/// Resolve a caller-built move against the generated legal moves.
///
/// Returns the generated move (with special flags populated) when the
/// candidate matches one, otherwise `None`.
pub fn is_legal_move(game_state: &GameState, candidate: Move) -> Option<Move> {
    let (color, piece) = game_state.piece_at(candidate.origin)?;
    if color != game_state.side_to_move {
        return None;
    }

    generate_legal_moves(game_state, piece, candidate.origin)
        .into_iter()
        .find(|mv| mv.matches(&candidate))
}

#[inline]
fn is_self_check_free(game_state: &GameState, mv: Move) -> bool {
    if mv.special == SpecialMove::Castle {
        return true;
    }

    let mut scratch = *game_state;
    if scratch.apply_move(mv).is_err() {
        return false;
    }
    !is_color_in_check(&scratch, game_state.side_to_move)
}
