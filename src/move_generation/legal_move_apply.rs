//! In-place move application with incremental Zobrist maintenance.
//!
//! Every hash term touched by a move is toggled exactly once: the stale
//! en-passant file, the new en-passant file, captured and moved pieces, each
//! revoked castling right, the castling rook, the promotion swap and the side
//! to move.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{castling_lane_for, castling_rights_of, CASTLING_LANES};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::search::zobrist::{castling_key, en_passant_key, piece_square_key, side_to_move_key};

/// Apply `mv` to `game_state`.
///
/// Expects a move resolved by the move generator. The move is checked for
/// shape first and nothing is mutated when an error is returned.
pub fn apply_move(game_state: &mut GameState, mv: Move) -> Result<(), ChessErrors> {
    let moved_piece = validate_move(game_state, mv)?;
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let from = mv.origin;
    let to = mv.destination;

    if let Some(ep) = game_state.en_passant_square.take() {
        game_state.zobrist_key ^= en_passant_key(ep);
    }

    if moved_piece == PieceKind::Pawn && from.abs_diff(to) == 16 {
        let ep = (from + to) / 2;
        game_state.en_passant_square = Some(ep);
        game_state.zobrist_key ^= en_passant_key(ep);
    }

    let mut captured = false;
    if mv.special == SpecialMove::EnPassant {
        let victim_square = match side {
            Color::Light => to + 8,
            Color::Dark => to - 8,
        };
        toggle_piece(game_state, enemy, PieceKind::Pawn, victim_square);
        captured = true;
    } else if let Some(victim) = game_state.piece_of_color_at(enemy, to) {
        toggle_piece(game_state, enemy, victim, to);
        captured = true;
    }

    toggle_piece(game_state, side, moved_piece, from);
    toggle_piece(game_state, side, moved_piece, to);

    revoke_castling_rights(game_state, side, moved_piece);

    if mv.special == SpecialMove::Castle {
        if let Some(lane) = castling_lane_for(side, to) {
            toggle_piece(game_state, side, PieceKind::Rook, lane.rook_from);
            toggle_piece(game_state, side, PieceKind::Rook, lane.rook_to);
        }
    }

    if mv.special == SpecialMove::Promotion {
        toggle_piece(game_state, side, PieceKind::Pawn, to);
        toggle_piece(game_state, side, mv.promotion.piece_kind(), to);
    }

    game_state.side_to_move = enemy;
    game_state.zobrist_key ^= side_to_move_key();

    game_state.half_move_count += 1;
    if captured || moved_piece == PieceKind::Pawn {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }

    Ok(())
}

/// Check the move against the board and return the kind of the moving piece.
fn validate_move(game_state: &GameState, mv: Move) -> Result<PieceKind, ChessErrors> {
    if mv.origin > 63 {
        return Err(ChessErrors::SquareOutOfBounds(mv.origin));
    }
    if mv.destination > 63 {
        return Err(ChessErrors::SquareOutOfBounds(mv.destination));
    }
    if mv.origin == mv.destination {
        return Err(ChessErrors::SameOriginAndDestination(mv.origin));
    }

    let side = game_state.side_to_move;
    let Some(moved_piece) = game_state.piece_of_color_at(side, mv.origin) else {
        return Err(ChessErrors::NoPieceOnSquare(mv.origin));
    };

    if game_state.occupancy_of(side) & square_bit(mv.destination) != 0 {
        return Err(ChessErrors::IllegalMove(format!(
            "square {} is occupied by the moving side",
            mv.destination
        )));
    }
    if game_state.piece_of_color_at(side.opposite(), mv.destination) == Some(PieceKind::King) {
        return Err(ChessErrors::IllegalMove("kings cannot be captured".to_owned()));
    }

    match mv.special {
        SpecialMove::Normal => {}
        SpecialMove::Promotion => {
            if moved_piece != PieceKind::Pawn {
                return Err(ChessErrors::IllegalMove("only pawns promote".to_owned()));
            }
        }
        SpecialMove::EnPassant => {
            if moved_piece != PieceKind::Pawn
                || game_state.en_passant_square != Some(mv.destination)
            {
                return Err(ChessErrors::IllegalMove(
                    "en passant does not target the recorded square".to_owned(),
                ));
            }
            let victim_square = match side {
                Color::Light => mv.destination + 8,
                Color::Dark => mv.destination.wrapping_sub(8),
            };
            let victim = (victim_square < 64)
                .then(|| game_state.piece_of_color_at(side.opposite(), victim_square))
                .flatten();
            if victim != Some(PieceKind::Pawn) {
                return Err(ChessErrors::IllegalMove(
                    "no pawn to capture en passant".to_owned(),
                ));
            }
        }
        SpecialMove::Castle => {
            let lane = castling_lane_for(side, mv.destination);
            let valid = moved_piece == PieceKind::King
                && lane.is_some_and(|lane| {
                    lane.king_from == mv.origin
                        && game_state.bitboard(side, PieceKind::Rook) & square_bit(lane.rook_from)
                            != 0
                });
            if !valid {
                return Err(ChessErrors::IllegalMove("malformed castling move".to_owned()));
            }
        }
    }

    Ok(moved_piece)
}

#[inline]
fn toggle_piece(game_state: &mut GameState, color: Color, piece: PieceKind, square: Square) {
    game_state.pieces[color.index()][piece.index()] ^= square_bit(square);
    game_state.zobrist_key ^= piece_square_key(color, piece, square);
}

/// Drop rights for a king move and for every rook home square that no longer
/// holds its rook.
fn revoke_castling_rights(game_state: &mut GameState, side: Color, moved_piece: PieceKind) {
    let mut revoked: CastlingRights = 0;

    if moved_piece == PieceKind::King {
        revoked |= castling_rights_of(side);
    }

    for lane in &CASTLING_LANES {
        let rooks = game_state.bitboard(lane.color, PieceKind::Rook);
        if rooks & square_bit(lane.rook_from) == 0 {
            revoked |= lane.right;
        }
    }

    let revoked = revoked & game_state.castling_rights;
    if revoked != 0 {
        game_state.castling_rights &= !revoked;
        game_state.zobrist_key ^= castling_key(revoked);
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::search::zobrist::compute_zobrist_key;

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut game = GameState::new_game();
        // e2e4
        game.apply_move(Move::new(52, 36)).expect("move should apply");
        assert_eq!(game.en_passant_square, Some(44));
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.half_move_count, 1);
        assert_eq!(game.zobrist_key, compute_zobrist_key(&game));

        // g8f6 clears it again.
        game.apply_move(Move::new(6, 21)).expect("move should apply");
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.zobrist_key, compute_zobrist_key(&game));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2")
            .expect("FEN should parse");
        // e5xd6
        game.apply_move(Move::with_special(28, 19, SpecialMove::EnPassant))
            .expect("en passant should apply");
        assert_eq!(game.piece_at(19), Some((Color::Light, PieceKind::Pawn)));
        assert_eq!(game.piece_at(27), None);
        assert_eq!(game.bitboard(Color::Dark, PieceKind::Pawn), 0);
        assert_eq!(game.zobrist_key, compute_zobrist_key(&game));
    }

    #[test]
    fn castling_relocates_the_rook() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        game.apply_move(Move::with_special(60, 62, SpecialMove::Castle))
            .expect("castle should apply");
        assert_eq!(game.piece_at(62), Some((Color::Light, PieceKind::King)));
        assert_eq!(game.piece_at(61), Some((Color::Light, PieceKind::Rook)));
        assert_eq!(game.piece_at(63), None);
        assert_eq!(game.castling_rights, CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);

        game.apply_move(Move::with_special(4, 2, SpecialMove::Castle))
            .expect("castle should apply");
        assert_eq!(game.piece_at(2), Some((Color::Dark, PieceKind::King)));
        assert_eq!(game.piece_at(3), Some((Color::Dark, PieceKind::Rook)));
        assert_eq!(game.piece_at(0), None);
        assert_eq!(game.castling_rights, 0);
        assert_eq!(game.zobrist_key, compute_zobrist_key(&game));
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut game = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        // a7xb8=N
        game.apply_move(Move::promoting(8, 1, PromotionPiece::Knight))
            .expect("promotion should apply");
        assert_eq!(game.piece_at(1), Some((Color::Light, PieceKind::Knight)));
        assert_eq!(game.bitboard(Color::Light, PieceKind::Pawn), 0);
        assert_eq!(game.bitboard(Color::Dark, PieceKind::Rook), 0);
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.zobrist_key, compute_zobrist_key(&game));
    }

    #[test]
    fn capturing_a_rook_revokes_the_matching_right() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        // a1xa8
        game.apply_move(Move::new(56, 0)).expect("capture should apply");
        assert_eq!(game.castling_rights, CASTLE_LIGHT_KINGSIDE | CASTLE_DARK_KINGSIDE);
        assert_eq!(game.zobrist_key, compute_zobrist_key(&game));
    }

    #[test]
    fn rejected_moves_leave_the_position_untouched() {
        let game = GameState::new_game();

        let mut copy = game;
        assert_eq!(copy.apply_move(Move::new(35, 27)), Err(ChessErrors::NoPieceOnSquare(35)));
        assert_eq!(copy, game);

        // Black pawn while light is on move.
        assert_eq!(copy.apply_move(Move::new(12, 28)), Err(ChessErrors::NoPieceOnSquare(12)));
        assert_eq!(copy, game);

        assert!(copy.apply_move(Move::new(56, 48)).is_err());
        assert_eq!(copy, game);

        // Kingside castle through its own knight and bishop.
        assert!(copy
            .apply_move(Move::with_special(60, 62, SpecialMove::Castle))
            .is_err());
        assert_eq!(copy, game);
    }
}
