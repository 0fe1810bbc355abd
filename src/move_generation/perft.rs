//! Perft node counting, the move generator's correctness oracle.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

/// Leaf statistics gathered at the final ply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf positions `depth` plies below `game_state`.
pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_all_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .filter_map(|mv| {
            let mut next = *game_state;
            next.apply_move(mv).ok().map(|_| perft(&next, depth - 1))
        })
        .sum()
}

/// Per-root-move leaf counts, useful when hunting generator bugs.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }

    for mv in generate_all_legal_moves(game_state) {
        let mut next = *game_state;
        if next.apply_move(mv).is_ok() {
            out.push((mv, perft(&next, depth - 1)));
        }
    }
    out
}

/// Perft with leaf classification.
pub fn perft_counts(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_all_legal_moves(game_state) {
        let mut next = *game_state;
        if next.apply_move(mv).is_err() {
            continue;
        }

        if depth > 1 {
            total.merge(perft_counts(&next, depth - 1));
            continue;
        }

        total.nodes += 1;
        let captured = mv.special == SpecialMove::EnPassant
            || game_state.piece_at(mv.destination).is_some();
        if captured {
            total.captures += 1;
        }
        match mv.special {
            SpecialMove::EnPassant => total.en_passant += 1,
            SpecialMove::Castle => total.castles += 1,
            SpecialMove::Promotion => total.promotions += 1,
            SpecialMove::Normal => {}
        }
        if is_king_in_check(&next) {
            total.checks += 1;
            if generate_all_legal_moves(&next).is_empty() {
                total.checkmates += 1;
            }
        }
    }

    total
}
