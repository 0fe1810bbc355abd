//! Board mutator used by front ends: validates candidate moves, keeps the
//! position/move history and supports single-step undo.
//!
//! Invariant: `positions.len() == moves.len() + 1`. The first position is the
//! one the game started from and is never popped.

use tracing::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::end_of_game::{check_board_state, EndOfGame};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::is_legal_move;
use crate::utils::long_algebraic::move_to_long_algebraic;
use crate::utils::standard_algebraic::move_to_san;

#[derive(Debug, Clone)]
pub struct GameHistory {
    positions: Vec<GameState>,
    moves: Vec<Move>,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new(GameState::new_game())
    }
}

impl GameHistory {
    pub fn new(initial: GameState) -> Self {
        Self {
            positions: vec![initial],
            moves: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Ok(Self::new(GameState::from_fen(fen)?))
    }

    /// Position the side to move is looking at.
    #[inline]
    pub fn current(&self) -> &GameState {
        &self.positions[self.positions.len() - 1]
    }

    #[inline]
    pub fn positions(&self) -> &[GameState] {
        &self.positions
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// End-of-game state of the current position.
    pub fn status(&self) -> EndOfGame {
        check_board_state(self.current())
    }

    /// Validate, resolve and apply `candidate`.
    ///
    /// The candidate only needs origin, destination and (for promotions) the
    /// promotion choice. On success returns the end-of-game state for the side
    /// that is now to move.
    pub fn try_move(&mut self, candidate: Move) -> Result<EndOfGame, ChessErrors> {
        if candidate.origin == candidate.destination {
            return Err(ChessErrors::SameOriginAndDestination(candidate.origin));
        }

        let current = *self.current();
        let Some((color, _)) = current.piece_at(candidate.origin) else {
            return Err(ChessErrors::NoPieceOnSquare(candidate.origin));
        };
        if color != current.side_to_move {
            return Err(ChessErrors::WrongSideToMove(candidate.origin));
        }

        let Some(resolved) = is_legal_move(&current, candidate) else {
            let text = move_to_long_algebraic(candidate)?;
            return Err(ChessErrors::IllegalMove(text));
        };

        let lan = move_to_long_algebraic(resolved)?;
        let mut next = current;
        next.apply_move(resolved)?;
        let state = check_board_state(&next);

        self.positions.push(next);
        self.moves.push(resolved);

        debug!(
            ply = self.moves.len(),
            mv = %lan,
            ?state,
            "applied move"
        );
        if state.is_over() {
            info!(?state, "game over");
        }

        Ok(state)
    }

    /// Front-end entry point: rejected moves are a logged no-op reporting
    /// `EndOfGame::Ongoing`.
    pub fn update_board_state(&mut self, candidate: Move) -> EndOfGame {
        match self.try_move(candidate) {
            Ok(state) => state,
            Err(err) => {
                debug!(%err, "move rejected");
                EndOfGame::Ongoing
            }
        }
    }

    /// Pop the most recent move. Returns `false` at the initial position.
    pub fn undo(&mut self) -> bool {
        if self.moves.is_empty() {
            return false;
        }
        self.moves.pop();
        self.positions.pop();
        true
    }

    pub fn move_history_long_algebraic(&self) -> Result<Vec<String>, ChessErrors> {
        self.moves.iter().map(|mv| move_to_long_algebraic(*mv)).collect()
    }

    /// Standard algebraic notation for every move played, replayed against
    /// the stored positions.
    pub fn move_history_san(&self) -> Result<Vec<String>, ChessErrors> {
        self.moves
            .iter()
            .zip(&self.positions)
            .map(|(mv, before)| move_to_san(before, *mv))
            .collect()
    }
}
