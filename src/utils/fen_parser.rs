//! FEN-to-GameState parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! piece bitboards, side to move, castling rights, en-passant target, move
//! counters and the Zobrist key. The two numeric fields are optional.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(ChessErrors::InvalidFenStructure(format!(
            "expected 4 to 6 fields, found {}",
            fields.len()
        )));
    }

    let mut game_state = GameState::new_empty();

    parse_board(fields[0], &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = parse_castling_rights(fields[2])?;
    game_state.en_passant_square = parse_en_passant_square(fields[3], game_state.side_to_move)?;

    if let Some(halfmove) = fields.get(4) {
        game_state.halfmove_clock = halfmove.parse::<u16>().map_err(|_| {
            ChessErrors::InvalidFenStructure(format!("invalid halfmove clock '{halfmove}'"))
        })?;
    }

    let fullmove_number = match fields.get(5) {
        Some(fullmove) => fullmove.parse::<u32>().map_err(|_| {
            ChessErrors::InvalidFenStructure(format!("invalid fullmove number '{fullmove}'"))
        })?,
        None => 1,
    };
    let dark_offset = u32::from(game_state.side_to_move == Color::Dark);
    game_state.half_move_count = fullmove_number.max(1).saturating_sub(1) * 2 + dark_offset;

    game_state.zobrist_key = compute_zobrist_key(&game_state);

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidFenStructure(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    for (row, row_str) in rows.iter().enumerate() {
        let mut file = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += empty_count as usize;
            } else {
                let (color, piece) =
                    piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
                if file < 8 {
                    let sq = row * 8 + file;
                    game_state.pieces[color.index()][piece.index()] |= 1u64 << sq;
                }
                file += 1;
            }

            if file > 8 {
                break;
            }
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenStructure(format!(
                "rank '{row_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        let right = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessErrors::InvalidCastlingRights(castling_part.to_owned())),
        };
        if rights & right != 0 {
            return Err(ChessErrors::InvalidCastlingRights(castling_part.to_owned()));
        }
        rights |= right;
    }

    Ok(rights)
}

fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| ChessErrors::InvalidEnPassantSquare(en_passant_part.to_owned()))?;
    // The target sits behind a pawn the opponent just double-pushed: on the
    // sixth rank (row 2) with light to move, on the third (row 5) with dark.
    let expected_row = match side_to_move {
        Color::Light => 2,
        Color::Dark => 5,
    };
    if square / 8 != expected_row {
        return Err(ChessErrors::InvalidEnPassantSquare(en_passant_part.to_owned()));
    }

    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.halfmove_clock, 0);
    }

    #[test]
    fn numeric_fields_are_optional() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("short FEN should parse");
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.half_move_count, 1);

        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 3 20").expect("FEN should parse");
        assert_eq!(game.half_move_count, 39);
        assert_eq!(game.fullmove_number(), 20);
        assert_eq!(game.halfmove_clock, 3);
    }

    #[test]
    fn en_passant_target_must_face_the_side_to_move() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        assert_eq!(game.en_passant_square, Some(19));
        let game = parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").expect("FEN should parse");
        assert_eq!(game.en_passant_square, Some(43));

        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/3Pp3/4K3 w - e3 0 1").map(|_| ()),
            Err(ChessErrors::InvalidEnPassantSquare("e3".to_owned()))
        );
    }

    #[test]
    fn malformed_fields_are_rejected() {
        let bad = [
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1", "7 ranks"),
            ("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "9 files"),
            ("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "7 files"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1", "bad piece"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1", "bad side"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1", "bad castling"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1", "bad en passant"),
            ("4k3/8/8/8/8/8/3Pp3/4K3 w - e3 0 1", "en passant target on the mover's side"),
            ("4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1", "en passant target on the mover's side"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1", "bad clock"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w", "too few fields"),
        ];
        for (fen, why) in bad {
            assert!(parse_fen(fen).is_err(), "{why} should be rejected");
        }
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K2Z w - - 0 1").map(|_| ()),
            Err(ChessErrors::InvalidFenToken('Z'))
        );
    }
}
