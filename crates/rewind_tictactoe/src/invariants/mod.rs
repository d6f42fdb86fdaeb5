//! First-class session invariants.
//!
//! Invariants are logical properties that must hold for every
//! reachable session state. They are checked after each accepted play
//! in debug builds and are testable independently.

mod alternating_turn;
mod cursor_in_bounds;
mod single_mark_delta;

pub use alternating_turn::AlternatingTurn;
pub use cursor_in_bounds::CursorInBounds;
pub use single_mark_delta::SingleMarkDelta;

use crate::session::GameSession;

/// A logical property that must hold for a session state.
pub trait Invariant {
    /// Checks if the invariant holds for the given session.
    fn holds(session: &GameSession) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// Checks every session invariant, collecting violations.
pub fn check_all(session: &GameSession) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();
    record::<SingleMarkDelta>(session, &mut violations);
    record::<AlternatingTurn>(session, &mut violations);
    record::<CursorInBounds>(session, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn record<I: Invariant>(session: &GameSession, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(session) {
        violations.push(InvariantViolation {
            description: I::description(),
        });
    }
}
