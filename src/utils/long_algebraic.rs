//! Long algebraic move notation (`e2e4`, `e7e8q`).

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::is_legal_move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> Result<String, ChessErrors> {
    let mut out = square_to_algebraic(mv.origin)?;
    out.push_str(&square_to_algebraic(mv.destination)?);
    if let Some(piece) = mv.promotion_piece() {
        out.push(promotion_to_char(piece));
    }
    Ok(out)
}

/// Parse into a caller-built move (origin, destination, optional promotion).
/// The result still has to be resolved against a position.
pub fn parse_long_algebraic(text: &str) -> Result<Move, ChessErrors> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    match text[4..].chars().next() {
        None => Ok(Move::new(from, to)),
        Some(ch) => {
            let promotion = promotion_from_char(ch)
                .ok_or_else(|| ChessErrors::InvalidAlgebraicString(text.to_owned()))?;
            Ok(Move::promoting(from, to, promotion))
        }
    }
}

/// Parse and resolve against `game_state`, returning the generated move.
pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> Result<Move, ChessErrors> {
    let candidate = parse_long_algebraic(text)?;
    is_legal_move(game_state, candidate)
        .ok_or_else(|| ChessErrors::IllegalMove(text.trim().to_owned()))
}

fn promotion_to_char(piece: PieceKind) -> char {
    match piece {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

fn promotion_from_char(ch: char) -> Option<PromotionPiece> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PromotionPiece::Knight),
        'b' => Some(PromotionPiece::Bishop),
        'r' => Some(PromotionPiece::Rook),
        'q' => Some(PromotionPiece::Queen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic, parse_long_algebraic};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn parses_plain_and_promotion_moves() {
        assert_eq!(parse_long_algebraic("e2e4"), Ok(Move::new(52, 36)));
        assert_eq!(
            parse_long_algebraic("a7a8q"),
            Ok(Move::promoting(8, 0, PromotionPiece::Queen))
        );
        assert!(parse_long_algebraic("a7a8k").is_err());
        assert!(parse_long_algebraic("e2").is_err());
    }

    #[test]
    fn renders_resolved_moves() {
        let game =
            GameState::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("b7b8n", &game).expect("promotion should resolve");
        assert_eq!(move_to_long_algebraic(mv).expect("should render"), "b7b8n");
        assert!(long_algebraic_to_move("b7b8", &game).is_err());
    }
}
