//! Application state: the session plus a board cursor.

use crate::input;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameSession, MoveOrder, Position};
use tracing::debug;

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
}

impl App {
    /// Creates a new application.
    pub fn new(descending: bool) -> Self {
        let order = if descending {
            MoveOrder::Descending
        } else {
            MoveOrder::Ascending
        };
        Self {
            session: GameSession::with_order(order),
            cursor: Position::Center,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('o') => self.session.toggle_move_order(),
            KeyCode::Enter | KeyCode::Char(' ') => self.session.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.session.play(pos);
                }
            }
            KeyCode::Char('[') => self.step_history(-1),
            KeyCode::Char(']') => self.step_history(1),
            KeyCode::Char('g') => self.session.jump_to(0),
            KeyCode::Char('G') => {
                let last = self.session.history().len() - 1;
                self.session.jump_to(last);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
        true
    }

    /// Moves the history cursor one step back or forward.
    fn step_history(&mut self, delta: isize) {
        let target = self.session.cursor() as isize + delta;
        if (0..self.session.history().len() as isize).contains(&target) {
            self.session.jump_to(target as usize);
        }
    }

    /// Starts over. A session only resets by recreation.
    fn restart(&mut self) {
        debug!("restarting session");
        self.session = GameSession::with_order(self.session.order());
        self.cursor = Position::Center;
    }
}
