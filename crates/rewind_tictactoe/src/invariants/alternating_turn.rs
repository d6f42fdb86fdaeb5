//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::session::GameSession;
use crate::types::Player;

/// Invariant: recorded moves follow the fixed rotation.
///
/// The entry at history index `n` was produced by turn `n - 1`, so its
/// move belongs to `Player::for_turn(n - 1)`: X, O, X, O, ... with X
/// always first.
pub struct AlternatingTurn;

impl Invariant for AlternatingTurn {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| {
                entry
                    .played()
                    .is_some_and(|mov| mov.player() == Player::for_turn(step - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
