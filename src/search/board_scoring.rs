//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//!
//! Piece-square tables are written from white's point of view with the eighth
//! rank first, matching the `0 == a8` square layout. White reads `table[sq]`
//! and black reads `table[63 - sq]`. Every table is symmetric across the
//! d/e file boundary, so `63 - sq` is the same as a vertical flip.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Score of delivering mate right now. Mates further away score less.
pub const MATE_SCORE: i32 = 100_000;

/// Lead (in centipawns) beyond which the mop-up term kicks in.
const MOP_UP_MATERIAL_LEAD: i32 = 2 * MaterialScorer::piece_value(PieceKind::Pawn);

/// Non-pawn material at which a side is considered fully "middlegame".
const ENDGAME_START_MATERIAL: i32 = MaterialScorer::piece_value(PieceKind::Rook)
    + MaterialScorer::piece_value(PieceKind::Bishop)
    + 2 * MaterialScorer::piece_value(PieceKind::Knight);

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 320,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    /// Summed piece values of one side.
    #[inline]
    pub fn material_of(game_state: &GameState, color: Color) -> i32 {
        PieceKind::ALL
            .into_iter()
            .map(|piece| {
                game_state.bitboard(color, piece).count_ones() as i32 * Self::piece_value(piece)
            })
            .sum()
    }

    #[inline]
    fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
        Self::material_of(game_state, Color::Light) - Self::material_of(game_state, Color::Dark)
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let white_minus_black = Self::material_balance_white_minus_black(game_state);
        match game_state.side_to_move {
            Color::Light => white_minus_black,
            Color::Dark => -white_minus_black,
        }
    }
}

/// Material, piece-square tables, tapered king tables and an endgame mop-up
/// term.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    #[inline]
    fn score(&self, game_state: &GameState) -> i32 {
        evaluate(game_state)
    }
}

/// Static evaluation from the side to move's perspective.
pub fn evaluate(game_state: &GameState) -> i32 {
    let eg_weight = endgame_weight(game_state);

    let white_material = MaterialScorer::material_of(game_state, Color::Light);
    let black_material = MaterialScorer::material_of(game_state, Color::Dark);
    let mut white_minus_black = white_material - black_material;

    if white_material > black_material + MOP_UP_MATERIAL_LEAD {
        white_minus_black += mop_up(game_state, Color::Light, eg_weight);
    } else if black_material > white_material + MOP_UP_MATERIAL_LEAD {
        white_minus_black -= mop_up(game_state, Color::Dark, eg_weight);
    }

    white_minus_black += piece_square_term(game_state, Color::Light, eg_weight)
        - piece_square_term(game_state, Color::Dark, eg_weight);

    match game_state.side_to_move {
        Color::Light => white_minus_black,
        Color::Dark => -white_minus_black,
    }
}

/// 0.0 while both sides keep at least a rook, bishop and two knights worth of
/// non-pawn material, rising linearly to 1.0 as the poorer side runs out.
pub fn endgame_weight(game_state: &GameState) -> f32 {
    let non_pawn = |color: Color| {
        MaterialScorer::material_of(game_state, color)
            - game_state.bitboard(color, PieceKind::Pawn).count_ones() as i32
                * MaterialScorer::piece_value(PieceKind::Pawn)
    };
    let least = non_pawn(Color::Light).min(non_pawn(Color::Dark));
    1.0 - (least as f32 / ENDGAME_START_MATERIAL as f32).min(1.0)
}

/// Bonus for the winning side for driving the losing king to the rim and
/// bringing its own king close. Returned as a positive magnitude.
fn mop_up(game_state: &GameState, winner: Color, eg_weight: f32) -> i32 {
    let (Some(winner_king), Some(loser_king)) = (
        game_state.king_square(winner),
        game_state.king_square(winner.opposite()),
    ) else {
        return 0;
    };

    let closeness = (1.6 * (14 - manhattan(winner_king, loser_king)) as f32) as i32;
    let cornered = (4.7 * center_manhattan(loser_king) as f32) as i32;
    (eg_weight * (closeness + cornered) as f32) as i32
}

fn piece_square_term(game_state: &GameState, color: Color, eg_weight: f32) -> i32 {
    let mut score = 0i32;

    for piece in PieceKind::ALL {
        let mut bb = game_state.bitboard(color, piece);
        while bb != 0 {
            let sq = bb.trailing_zeros() as usize;
            let idx = match color {
                Color::Light => sq,
                Color::Dark => 63 - sq,
            };
            score += match piece {
                PieceKind::Pawn => PAWN_TABLE[idx],
                PieceKind::Knight => KNIGHT_TABLE[idx],
                PieceKind::Bishop => BISHOP_TABLE[idx],
                PieceKind::Rook => ROOK_TABLE[idx],
                PieceKind::Queen => QUEEN_TABLE[idx],
                PieceKind::King => {
                    ((1.0 - eg_weight) * KING_MIDDLEGAME_TABLE[idx] as f32) as i32
                        + (eg_weight * KING_ENDGAME_TABLE[idx] as f32) as i32
                }
            };
            bb &= bb - 1;
        }
    }

    score
}

#[inline]
fn manhattan(a: Square, b: Square) -> i32 {
    let af = i32::from(a % 8);
    let ar = i32::from(a / 8);
    let bf = i32::from(b % 8);
    let br = i32::from(b / 8);
    (af - bf).abs() + (ar - br).abs()
}

/// Manhattan distance to the nearest of the four centre squares.
#[inline]
fn center_manhattan(sq: Square) -> i32 {
    let file = i32::from(sq % 8);
    let row = i32::from(sq / 8);
    (3 - file).max(file - 4) + (3 - row).max(row - 4)
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MIDDLEGAME_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_ENDGAME_TABLE: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

#[cfg(test)]
mod tests {
    use super::{
        center_manhattan, endgame_weight, evaluate, BoardScorer, MaterialScorer, StandardScorer,
        BISHOP_TABLE, KING_ENDGAME_TABLE, KING_MIDDLEGAME_TABLE, KNIGHT_TABLE, PAWN_TABLE,
        QUEEN_TABLE, ROOK_TABLE,
    };
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    /// Flip the board vertically and swap colours, keeping the side to move.
    fn colour_mirror(game: &GameState) -> GameState {
        let mut mirrored = GameState::new_empty();
        for color in Color::ALL {
            for piece in PieceKind::ALL {
                mirrored.pieces[color.opposite().index()][piece.index()] =
                    game.bitboard(color, piece).swap_bytes();
            }
        }
        mirrored.side_to_move = game.side_to_move;
        mirrored
    }

    #[test]
    fn material_scorer_reflects_side_to_move_perspective() {
        let white_to_move =
            GameState::from_fen("4k3/8/8/8/8/8/8/4KQ2 w - - 0 1").expect("FEN should parse");
        let black_to_move =
            GameState::from_fen("4k3/8/8/8/8/8/8/4KQ2 b - - 0 1").expect("FEN should parse");

        let scorer = MaterialScorer;
        assert_eq!(scorer.score(&white_to_move), 900);
        assert_eq!(scorer.score(&black_to_move), -900);
    }

    #[test]
    fn piece_square_tables_are_file_symmetric() {
        for table in [
            &PAWN_TABLE,
            &KNIGHT_TABLE,
            &BISHOP_TABLE,
            &ROOK_TABLE,
            &QUEEN_TABLE,
            &KING_MIDDLEGAME_TABLE,
            &KING_ENDGAME_TABLE,
        ] {
            for sq in 0..64 {
                let file = sq % 8;
                assert_eq!(table[sq], table[sq - file + (7 - file)]);
            }
        }
    }

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate(&GameState::new_game()), 0);
        assert_eq!(endgame_weight(&GameState::new_game()), 0.0);
    }

    #[test]
    fn endgame_weight_follows_poorer_side() {
        let kings = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(endgame_weight(&kings), 1.0);

        // Both sides keep a rook; the poorer side decides the phase.
        let rooks =
            GameState::from_fen("r3k3/8/8/8/8/8/8/R2QK3 w - - 0 1").expect("FEN should parse");
        let expected = 1.0 - 500.0 / 1420.0;
        assert!((endgame_weight(&rooks) - expected).abs() < 1e-6);
    }

    #[test]
    fn standard_scorer_rewards_central_knight() {
        let center =
            GameState::from_fen("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let rim = GameState::from_fen("4k3/8/8/8/8/8/N7/4K3 w - - 0 1").expect("FEN should parse");
        let scorer = StandardScorer;
        assert!(
            scorer.score(&center) > scorer.score(&rim),
            "central knight should score better"
        );
    }

    #[test]
    fn mop_up_prefers_cornered_losing_king() {
        let cornered =
            GameState::from_fen("k7/8/8/8/8/8/8/Q3K3 w - - 0 1").expect("FEN should parse");
        let central =
            GameState::from_fen("8/8/8/3k4/8/8/8/Q3K3 w - - 0 1").expect("FEN should parse");
        assert!(evaluate(&cornered) > evaluate(&central));
        assert_eq!(center_manhattan(0), 6);
        assert_eq!(center_manhattan(27), 0);
        assert_eq!(center_manhattan(63), 6);
    }

    #[test]
    fn colour_mirror_negates_the_score() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
            "8/8/8/3k4/8/8/8/Q3K3 w - - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "6k1/5ppp/8/8/8/8/1r3PPP/3R2K1 b - - 0 1",
        ] {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            let mirrored = colour_mirror(&game);
            assert_eq!(evaluate(&mirrored), -evaluate(&game), "{fen}");

            let mut flipped_side = mirrored;
            flipped_side.side_to_move = game.side_to_move.opposite();
            assert_eq!(evaluate(&flipped_side), evaluate(&game), "{fen}");
        }
    }
}
