//! Presentation state of the terminal board.

use crate::GameDisplay;
use crate::display::{Notification, initial_status};
use tictactoe_board::{BoardState, Outcome, PlayError};
use tracing::debug;

/// What the terminal shows besides the board itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    status: String,
    notification: Option<Notification>,
    closed: bool,
}

impl BoardView {
    /// Creates an unbound view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status label text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The end-of-game message, while it is still showing.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Hides the end-of-game message.
    pub fn dismiss(&mut self) {
        self.notification = None;
    }

    /// True once every cell is unplayable.
    pub fn closed(&self) -> bool {
        self.closed
    }
}

impl GameDisplay for BoardView {
    fn bind(&mut self, board: &BoardState) {
        *self = Self {
            status: initial_status(board),
            notification: None,
            closed: false,
        };
    }

    fn on_outcome(&mut self, _board: &BoardState, result: &Result<Outcome, PlayError>) {
        match result {
            Ok(outcome) => {
                self.status = outcome.to_string();
                self.notification = Notification::for_outcome(*outcome);
                self.closed = outcome.is_terminal();
            }
            Err(e) => debug!(error = %e, "Ignoring rejected move"),
        }
    }
}
