//! Rewindable game session: snapshot history, turn cursor, derived status.
//!
//! The session owns an ordered history of board snapshots, one per
//! accepted move plus the empty-board start entry. A cursor selects
//! which snapshot is current for display and further play. Playing
//! from a rewound cursor collapses the abandoned future before the
//! new move is appended.

use crate::action::Move;
use crate::invariants;
use crate::position::Position;
use crate::rules::{self, Win};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// One point in the game timeline: the board after a move, plus the
/// move that produced it.
///
/// The initial history entry carries no move; it marks game start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) played: Option<Move>,
}

impl HistoryEntry {
    /// The board snapshot at this point in the timeline.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, if any.
    pub fn played(&self) -> Option<&Move> {
        self.played.as_ref()
    }
}

/// Display order for the move list. Does not affect game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOrder {
    /// Oldest entry first (default).
    Ascending,
    /// Newest entry first.
    Descending,
}

impl MoveOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// Game status derived from the snapshot at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

/// A human-readable move list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescription {
    /// History index this entry jumps to.
    pub step: usize,
    /// Jump label: "Go to game start" or "Go to move #n".
    pub label: String,
    /// Move detail, e.g. "X (1,3)". Absent for the start entry.
    pub detail: Option<String>,
    /// Whether this entry is the cursor's current snapshot.
    pub current: bool,
}

/// The authoritative game state: history, cursor, and display order.
///
/// Status is never stored; it is recomputed from the snapshot at the
/// cursor, so jumping through history always reports the status that
/// snapshot had when it was live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) cursor: usize,
    pub(crate) order: MoveOrder,
}

impl GameSession {
    /// Creates a new session: empty board, cursor at game start.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::Ascending)
    }

    /// Creates a new session with the given move list order.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                played: None,
            }],
            cursor: 0,
            order,
        }
    }

    /// The board snapshot at the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor].board
    }

    /// The full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The cursor: index of the current snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The move list display order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Status derived from the snapshot at the cursor.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = rules::evaluate(self.board()) {
            GameStatus::Won(win)
        } else if rules::is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// The winning triple at the cursor, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.status() {
            GameStatus::Won(win) => Some(win.line),
            _ => None,
        }
    }

    /// The player who moves next from the cursor's snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.cursor)
    }

    /// Empty positions at the cursor, or nothing once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.status() != GameStatus::InProgress {
            return Vec::new();
        }
        Position::iter()
            .filter(|pos| self.board().is_empty(*pos))
            .collect()
    }

    /// Plays the next player's mark at the given position.
    ///
    /// Rejected requests are silent no-ops: a finished game, an
    /// occupied square, or a full board leave the session untouched.
    /// Playing from a rewound cursor discards every entry after it
    /// before the new snapshot is appended.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) {
        if self.status() != GameStatus::InProgress {
            debug!(?position, "rejecting play: game is over at the cursor");
            return;
        }
        if !self.board().is_empty(position) {
            debug!(?position, "rejecting play: square is occupied");
            return;
        }
        // Turn cap. Implied by the draw status, but kept as its own guard.
        if self.cursor == 9 {
            debug!(?position, "rejecting play: board is full");
            return;
        }

        // Collapse the abandoned future.
        self.history.truncate(self.cursor + 1);

        let player = Player::for_turn(self.cursor);
        let mut board = self.board().clone();
        board.set(position, Square::Occupied(player));
        self.history.push(HistoryEntry {
            board,
            played: Some(Move::new(player, position)),
        });
        self.cursor = self.history.len() - 1;
        debug!(%player, %position, board = %self.board().render(), "accepted play");

        debug_assert!(
            invariants::check_all(self).is_ok(),
            "session invariants violated after play"
        );
    }

    /// Moves the cursor to the given history index without truncating.
    ///
    /// Valid indices are the caller's contract; an out-of-range step
    /// asserts in debug builds and is ignored in release builds.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(step < self.history.len(), "jump target out of range");
        if step >= self.history.len() {
            debug!(step, "rejecting jump: out of range");
            return;
        }
        self.cursor = step;
    }

    /// Flips the move list display order. Game state is unaffected.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// One-line status text for display.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::Won(win) => format!("Winner: {}!", win.player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Move list entries, one per history entry, in display order.
    pub fn move_descriptions(&self) -> Vec<MoveDescription> {
        let mut entries: Vec<MoveDescription> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                let (label, detail) = match entry.played() {
                    Some(mov) => (format!("Go to move #{step}"), Some(mov.to_string())),
                    None => ("Go to game start".to_string(), None),
                };
                MoveDescription {
                    step,
                    label,
                    detail,
                    current: step == self.cursor,
                }
            })
            .collect();

        if self.order == MoveOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
