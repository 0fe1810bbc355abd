//! Checkmate / stalemate classification for the side about to move.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndOfGame {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl EndOfGame {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, EndOfGame::Ongoing)
    }
}

/// Classify the position after a move has been applied.
pub fn check_board_state(game_state: &GameState) -> EndOfGame {
    if !generate_all_legal_moves(game_state).is_empty() {
        return EndOfGame::Ongoing;
    }

    if is_king_in_check(game_state) {
        EndOfGame::Checkmate
    } else {
        EndOfGame::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::{check_board_state, EndOfGame};
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        for lan in ["f2f3", "e7e5", "g2g4"] {
            let mv = long_algebraic_to_move(lan, &game).expect("move should resolve");
            game.apply_move(mv).expect("move should apply");
            assert_eq!(check_board_state(&game), EndOfGame::Ongoing);
        }

        let mv = long_algebraic_to_move("d8h4", &game).expect("move should resolve");
        game.apply_move(mv).expect("move should apply");
        assert_eq!(check_board_state(&game), EndOfGame::Checkmate);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(check_board_state(&game), EndOfGame::Stalemate);
        assert!(check_board_state(&game).is_over());
    }

    #[test]
    fn starting_position_is_ongoing() {
        assert_eq!(check_board_state(&GameState::new_game()), EndOfGame::Ongoing);
    }
}
