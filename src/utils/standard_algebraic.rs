//! Standard algebraic notation (`Nf3`, `exd5`, `O-O`, `e8=Q+`) for the move
//! history display.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_all_legal_moves, generate_legal_moves};
use crate::utils::algebraic::{file_char, rank_char, square_to_algebraic};

/// Render `mv`, a resolved move, as played from `before`.
pub fn move_to_san(before: &GameState, mv: Move) -> Result<String, ChessErrors> {
    let Some(piece) = before.piece_of_color_at(before.side_to_move, mv.origin) else {
        return Err(ChessErrors::NoPieceOnSquare(mv.origin));
    };

    let mut out = String::new();

    if mv.special == SpecialMove::Castle {
        out.push_str(if mv.destination % 8 == 6 { "O-O" } else { "O-O-O" });
    } else {
        let captures =
            mv.special == SpecialMove::EnPassant || before.piece_at(mv.destination).is_some();

        if piece == PieceKind::Pawn {
            if captures {
                out.push(file_char(mv.origin));
            }
        } else {
            out.push(piece_letter(piece));
            out.push_str(&disambiguation(before, piece, mv));
        }

        if captures {
            out.push('x');
        }
        out.push_str(&square_to_algebraic(mv.destination)?);

        if let Some(promoted) = mv.promotion_piece() {
            out.push('=');
            out.push(piece_letter(promoted));
        }
    }

    let mut after = *before;
    after.apply_move(mv)?;
    if is_king_in_check(&after) {
        out.push(if generate_all_legal_moves(&after).is_empty() { '#' } else { '+' });
    }

    Ok(out)
}

/// Origin file and/or rank needed to tell `mv` apart from other moves of the
/// same figure onto the same square.
fn disambiguation(before: &GameState, piece: PieceKind, mv: Move) -> String {
    let mut rivals = before.bitboard(before.side_to_move, piece) & !square_bit(mv.origin);
    let mut clashes = Vec::new();
    while rivals != 0 {
        let origin = rivals.trailing_zeros() as Square;
        rivals &= rivals - 1;
        if generate_legal_moves(before, piece, origin)
            .iter()
            .any(|other| other.destination == mv.destination)
        {
            clashes.push(origin);
        }
    }

    if clashes.is_empty() {
        return String::new();
    }
    if clashes.iter().all(|sq| sq % 8 != mv.origin % 8) {
        return file_char(mv.origin).to_string();
    }
    if clashes.iter().all(|sq| sq / 8 != mv.origin / 8) {
        return rank_char(mv.origin).to_string();
    }
    format!("{}{}", file_char(mv.origin), rank_char(mv.origin))
}

fn piece_letter(piece: PieceKind) -> char {
    match piece {
        PieceKind::Pawn => 'P',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    }
}

#[cfg(test)]
mod tests {
    use super::move_to_san;
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn san(fen: &str, lan: &str) -> String {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mv = long_algebraic_to_move(lan, &game).expect("move should resolve");
        move_to_san(&game, mv).expect("SAN should render")
    }

    #[test]
    fn simple_moves() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(san(start, "e2e4"), "e4");
        assert_eq!(san(start, "g1f3"), "Nf3");
    }

    #[test]
    fn captures_and_en_passant() {
        assert_eq!(san("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", "e4d5"), "exd5");
        assert_eq!(san("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2", "e5d6"), "exd6");
    }

    #[test]
    fn file_and_rank_disambiguation() {
        assert_eq!(san("4k3/8/8/8/8/8/8/R4RK1 w - - 0 1", "a1d1"), "Rad1");
        assert_eq!(san("R7/8/8/7k/8/8/8/R3K3 w - - 0 1", "a1a4"), "R1a4");
    }

    #[test]
    fn promotion_and_check_suffixes() {
        assert_eq!(san("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1", "b7b8q"), "b8=Q+");
        assert_eq!(san("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a1a8"), "Ra8#");
        assert_eq!(san("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8c8"), "O-O-O");
    }
}
