//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::evaluate;
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && evaluate(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full with no line
        let mut board = Board::new();
        for (pos, player) in [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ] {
            board.set(pos, Square::Occupied(player));
        }

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for (pos, player) in [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ] {
            board.set(pos, Square::Occupied(player));
        }

        assert!(!is_draw(&board));
    }
}
