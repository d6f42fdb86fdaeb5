//! Single-mark delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::session::GameSession;
use crate::types::{Board, Square};
use strum::IntoEnumIterator;

use crate::position::Position;

/// Invariant: history is a chain of single-mark additions.
///
/// The first entry is the empty-board start sentinel with no move.
/// Every later snapshot differs from its predecessor in exactly one
/// cell: the recorded move's position, going from empty to the
/// recorded move's player. Marks are never moved or overwritten.
pub struct SingleMarkDelta;

impl Invariant for SingleMarkDelta {
    fn holds(session: &GameSession) -> bool {
        let Some(first) = session.history().first() else {
            return false;
        };
        if first.board() != &Board::new() || first.played().is_some() {
            return false;
        }

        for pair in session.history().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(mov) = next.played() else {
                return false;
            };

            let mut changed = 0;
            for pos in Position::iter() {
                let before = prev.board().get(pos);
                let after = next.board().get(pos);
                if before == after {
                    continue;
                }
                changed += 1;
                let expected = pos == mov.position()
                    && before == Square::Empty
                    && after == Square::Occupied(mov.player());
                if !expected {
                    return false;
                }
            }
            if changed != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at the recorded position"
    }
}
