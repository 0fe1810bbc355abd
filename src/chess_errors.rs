//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by parsing, move
//! application, the board mutator and configuration loading. Search
//! cancellation is not an error and never surfaces here.
//!
//! Usage guidelines:
//! - Input-related variants (FEN, algebraic notation, configuration) are
//!   recoverable and suitable for presenting to end users.
//! - Move-related variants describe why a candidate move was rejected. The
//!   position is never mutated when one of these is returned.

use crate::game_state::chess_types::Square;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// FEN string did not have the expected field layout.
    ///
    /// Payload: a description of the structural problem.
    #[error("malformed FEN: {0}")]
    InvalidFenStructure(String),

    /// Unexpected character in the FEN piece placement field.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// Active colour field was neither `w` nor `b`.
    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),

    /// Castling field contained something other than a subset of `KQkq` or `-`.
    #[error("invalid castling rights '{0}'")]
    InvalidCastlingRights(String),

    /// En-passant field was not `-` or a third/sixth rank square.
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassantSquare(String),

    /// A square or move string failed to parse.
    #[error("invalid algebraic notation '{0}'")]
    InvalidAlgebraicString(String),

    /// Square index outside `0..64`.
    #[error("square index {0} is out of bounds")]
    SquareOutOfBounds(u8),

    /// Candidate move is not in the legal move list of the position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Tried to move from an empty square (or a square without a piece of
    /// the side to move).
    #[error("no piece of the side to move on square {0}")]
    NoPieceOnSquare(Square),

    /// Tried to move a piece belonging to the side that is not on move.
    #[error("piece on square {0} belongs to the side not on move")]
    WrongSideToMove(Square),

    /// Origin and destination of a candidate move are identical.
    #[error("origin and destination are both square {0}")]
    SameOriginAndDestination(Square),

    /// A configuration value could not be used.
    #[error("invalid configuration for {key}: {message}")]
    InvalidConfig { key: String, message: String },
}
