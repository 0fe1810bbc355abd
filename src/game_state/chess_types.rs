//! Core value types shared by the board, the move generator and the search.
//!
//! Squares are indexed `0..64` with `0 == a8`, `7 == h8`, `56 == a1` and
//! `63 == h1` (`index = row * 8 + file`, row 0 is the eighth rank). Every
//! bitboard, lookup table and piece-square table in the crate uses this layout.

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Board square index (`0..=63`, `0 == a8`).
pub type Square = u8;

/// Castling rights bitmask, one independent bit per right.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;

/// Figure a pawn turns into on promotion. Stored as a 2-bit selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    #[inline]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    #[inline]
    pub const fn from_piece_kind(piece: PieceKind) -> Option<Self> {
        match piece {
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

/// Distinguishes moves that need extra board work when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    Normal,
    Promotion,
    EnPassant,
    Castle,
}

/// A move as a small value type.
///
/// Moves built by callers (for example from user input) only carry origin,
/// destination and an optional promotion choice. They must be resolved with
/// `is_legal_move` before being applied, which returns the generated move
/// with `special` populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub origin: Square,
    pub destination: Square,
    pub promotion: PromotionPiece,
    pub special: SpecialMove,
}

impl Move {
    /// Plain origin/destination move with no special flags.
    #[inline]
    pub const fn new(origin: Square, destination: Square) -> Self {
        Self {
            origin,
            destination,
            promotion: PromotionPiece::Knight,
            special: SpecialMove::Normal,
        }
    }

    #[inline]
    pub const fn with_special(origin: Square, destination: Square, special: SpecialMove) -> Self {
        Self {
            origin,
            destination,
            promotion: PromotionPiece::Knight,
            special,
        }
    }

    #[inline]
    pub const fn promoting(origin: Square, destination: Square, promotion: PromotionPiece) -> Self {
        Self {
            origin,
            destination,
            promotion,
            special: SpecialMove::Promotion,
        }
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.special, SpecialMove::Promotion)
    }

    /// Promotion figure, if this move promotes.
    #[inline]
    pub const fn promotion_piece(&self) -> Option<PieceKind> {
        if self.is_promotion() {
            Some(self.promotion.piece_kind())
        } else {
            None
        }
    }

    /// Equality used when matching a caller-built move against generated ones.
    ///
    /// Special flags and the promotion selector only take part in the
    /// comparison when either move is a promotion.
    #[inline]
    pub fn matches(&self, other: &Move) -> bool {
        if self.origin != other.origin || self.destination != other.destination {
            return false;
        }
        if self.is_promotion() || other.is_promotion() {
            return self.special == other.special && self.promotion == other.promotion;
        }
        true
    }
}

#[inline]
pub const fn square_bit(square: Square) -> u64 {
    1u64 << square
}
