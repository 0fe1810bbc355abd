//! Canonical chess-rule constants.
//!
//! Starting position, castling geometry and promotion rows expressed in the
//! crate's `0 == a8` square layout.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const LIGHT_KING_START: Square = 60;
pub const DARK_KING_START: Square = 4;

/// Row (0 == rank 8) a pawn of this colour moves from when it promotes.
#[inline]
pub const fn promotion_origin_row(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Row from which a pawn of this colour may double push.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Geometry of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRights,
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares that must be empty.
    pub empty_mask: u64,
    /// Squares the king crosses or lands on; none may be attacked.
    pub safe_mask: u64,
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        right: CASTLE_LIGHT_KINGSIDE,
        color: Color::Light,
        king_from: LIGHT_KING_START,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        empty_mask: (1 << 61) | (1 << 62),
        safe_mask: (1 << 61) | (1 << 62),
    },
    CastlingLane {
        right: CASTLE_LIGHT_QUEENSIDE,
        color: Color::Light,
        king_from: LIGHT_KING_START,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        empty_mask: (1 << 57) | (1 << 58) | (1 << 59),
        safe_mask: (1 << 58) | (1 << 59),
    },
    CastlingLane {
        right: CASTLE_DARK_KINGSIDE,
        color: Color::Dark,
        king_from: DARK_KING_START,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        empty_mask: (1 << 5) | (1 << 6),
        safe_mask: (1 << 5) | (1 << 6),
    },
    CastlingLane {
        right: CASTLE_DARK_QUEENSIDE,
        color: Color::Dark,
        king_from: DARK_KING_START,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        empty_mask: (1 << 1) | (1 << 2) | (1 << 3),
        safe_mask: (1 << 2) | (1 << 3),
    },
];

/// Both rights owned by `color`.
#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    }
}

/// Castling lane whose king destination is `king_to`.
#[inline]
pub fn castling_lane_for(color: Color, king_to: Square) -> Option<&'static CastlingLane> {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.color == color && lane.king_to == king_to)
}
