//! Cursor bounds invariant: the cursor always selects a real entry.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: the cursor indexes into history.
///
/// History always holds the start sentinel plus at most nine move
/// entries, and the cursor stays within it.
pub struct CursorInBounds;

impl Invariant for CursorInBounds {
    fn holds(session: &GameSession) -> bool {
        let len = session.history().len();
        (1..=10).contains(&len) && session.cursor() < len
    }

    fn description() -> &'static str {
        "Cursor indexes a history entry (1 to 10 entries)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_new_session_holds() {
        assert!(CursorInBounds::holds(&GameSession::new()));
    }

    #[test]
    fn test_holds_after_jumps() {
        let mut session = GameSession::new();
        session.play(Position::Center);
        session.play(Position::TopLeft);
        session.jump_to(0);
        assert!(CursorInBounds::holds(&session));
        session.jump_to(2);
        assert!(CursorInBounds::holds(&session));
    }

    #[test]
    fn test_runaway_cursor_violates() {
        let mut session = GameSession::new();
        session.cursor = 3;
        assert!(!CursorInBounds::holds(&session));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        session.cursor = 0;
        assert!(!CursorInBounds::holds(&session));
    }
}
