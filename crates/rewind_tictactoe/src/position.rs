//! Named board positions and their grid coordinates.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// Positions map to board indices 0-8 in row-major order
/// (index = row * 3 + column).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 1-based row of this position (1-3).
    pub fn row(self) -> usize {
        self.index() / 3 + 1
    }

    /// 1-based column of this position (1-3).
    pub fn column(self) -> usize {
        self.index() % 3 + 1
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_index(pos.index()), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_major_coordinates() {
        assert_eq!(Position::TopLeft.row(), 1);
        assert_eq!(Position::TopLeft.column(), 1);
        assert_eq!(Position::MiddleRight.row(), 2);
        assert_eq!(Position::MiddleRight.column(), 3);
        assert_eq!(Position::BottomCenter.row(), 3);
        assert_eq!(Position::BottomCenter.column(), 2);
    }

    #[test]
    fn test_display_uses_labels() {
        assert_eq!(Position::TopLeft.to_string(), "Top-left");
        assert_eq!(Position::Center.to_string(), "Center");
        assert_eq!(Position::BottomRight.to_string(), "Bottom-right");
        for pos in Position::iter() {
            assert_eq!(pos.to_string(), pos.label());
        }
    }

    #[test]
    fn test_all_matches_iter_order() {
        let from_iter: Vec<Position> = Position::iter().collect();
        assert_eq!(from_iter, Position::ALL);
    }
}
