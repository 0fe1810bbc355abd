//! Core bitboard position representation.
//!
//! `GameState` is the central model for the engine. It stores the twelve
//! piece bitboards, turn and castling flags, the en-passant target, move
//! counters and the incrementally maintained Zobrist key. It is `Copy`, so
//! search and legality checks work on cheap private copies.

use tracing::warn;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    // --- Bitboard representation ---
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    /// Plies played since the start of the game.
    pub half_move_count: u32,
    /// Plies since the last capture or pawn move (FEN output only).
    pub halfmove_clock: u16,

    // --- Incremental hashing ---
    pub zobrist_key: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Board with no pieces, light to move and no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            half_move_count: 0,
            halfmove_clock: 0,
            zobrist_key: 0,
        }
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(game_state) => game_state,
            Err(err) => unreachable!("starting FEN failed to parse: {err}"),
        }
    }

    /// Strict FEN parse. Any malformed field rejects the whole string.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Permissive FEN parse that substitutes the starting position on error.
    pub fn from_fen_or_default(fen: &str) -> Self {
        match parse_fen(fen) {
            Ok(game_state) => game_state,
            Err(err) => {
                warn!(%err, fen, "rejected FEN, using the starting position");
                Self::new_game()
            }
        }
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Apply a generator-resolved move in place.
    ///
    /// The move is validated before anything is touched, so on `Err` the
    /// position is unchanged.
    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), ChessErrors> {
        apply_move(self, mv)
    }

    /// Full move number as written in FEN.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.half_move_count / 2 + 1
    }

    #[inline]
    pub fn occupancy_of(&self, color: Color) -> u64 {
        self.pieces[color.index()]
            .iter()
            .copied()
            .fold(0u64, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn occupancy(&self) -> u64 {
        self.occupancy_of(Color::Light) | self.occupancy_of(Color::Dark)
    }

    #[inline]
    pub fn bitboard(&self, color: Color, piece: PieceKind) -> u64 {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.bitboard(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    /// Piece standing on `square`, scanning all twelve bitboards.
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        if square > 63 {
            return None;
        }
        let mask = square_bit(square);
        for color in Color::ALL {
            for piece in PieceKind::ALL {
                if self.pieces[color.index()][piece.index()] & mask != 0 {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Kind of the piece of `color` on `square`, if any.
    #[inline]
    pub fn piece_of_color_at(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = square_bit(square);
        PieceKind::ALL
            .into_iter()
            .find(|piece| self.pieces[color.index()][piece.index()] & mask != 0)
    }
}
