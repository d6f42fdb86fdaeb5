//! Win detection across all lines, including the fixed tie-break order.

use rewind_tictactoe::{Board, LINES, Player, Position, Square, evaluate};

fn board_with(player: Player, positions: &[Position]) -> Board {
    let mut board = Board::new();
    for pos in positions {
        board.set(*pos, Square::Occupied(player));
    }
    board
}

#[test]
fn every_line_is_detected() {
    for line in LINES {
        let board = board_with(Player::O, &line);
        let win = evaluate(&board).expect("completed line should be detected");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line, line);
    }
}

#[test]
fn lines_are_rows_then_columns_then_diagonals() {
    let as_indices: Vec<[usize; 3]> = LINES
        .iter()
        .map(|line| [line[0].index(), line[1].index(), line[2].index()])
        .collect();
    assert_eq!(
        as_indices,
        [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn double_line_reports_first_in_priority_order() {
    // X holds the top row and the left column; the row wins the tie.
    let board = board_with(
        Player::X,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
    );
    let win = evaluate(&board).expect("two lines, one report");
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn double_line_column_beats_diagonal() {
    // X holds the left column and the main diagonal; the column comes
    // first in priority order.
    let board = board_with(
        Player::X,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::Center,
            Position::BottomRight,
        ],
    );
    let win = evaluate(&board).expect("two lines, one report");
    assert_eq!(
        win.line,
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft
        ]
    );
}

#[test]
fn unreachable_boards_are_still_total() {
    // All nine squares X: every line complete. Unreachable in legal
    // play, but evaluate answers anyway with the first row.
    let board = board_with(Player::X, &Position::ALL);
    let win = evaluate(&board).expect("saturated board");
    assert_eq!(win.player, Player::X);
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn opposing_marks_block_lines() {
    let mut board = board_with(
        Player::X,
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    board.set(Position::TopCenter, Square::Occupied(Player::O));
    assert_eq!(evaluate(&board), None);
}
