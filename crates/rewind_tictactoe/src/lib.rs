//! Rewindable tic-tac-toe game logic.
//!
//! The crate has two parts:
//!
//! - **Rules**: pure win and draw detection over a board snapshot
//!   ([`evaluate`], [`is_full`]).
//! - **Session**: the authoritative game state — an ordered history of
//!   board snapshots, a cursor selecting the current one, and derived
//!   status ([`GameSession`]). The cursor can jump anywhere in history;
//!   playing from a rewound cursor collapses the abandoned future.
//!
//! There is no I/O here. A presentation layer reads the board, the
//! winning line, the move descriptions, and the status text, and feeds
//! positions and history indices back in.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, GameStatus, Position};
//!
//! let mut session = GameSession::new();
//! session.play(Position::Center);
//! session.play(Position::TopLeft);
//! assert_eq!(session.status(), GameStatus::InProgress);
//!
//! // Rewind to game start; nothing is lost until the next play.
//! session.jump_to(0);
//! assert_eq!(session.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod position;
mod rules;
mod session;
mod types;

pub use action::Move;
pub use invariants::{
    AlternatingTurn, CursorInBounds, Invariant, InvariantViolation, SingleMarkDelta, check_all,
};
pub use position::Position;
pub use rules::{LINES, Win, evaluate, is_full};
pub use session::{GameSession, GameStatus, HistoryEntry, MoveDescription, MoveOrder};
pub use types::{Board, Player, ROTATION, Square};
