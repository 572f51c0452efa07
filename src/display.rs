//! The seam between a board and whatever shows it.

use tictactoe_board::{BoardState, Outcome, PlayError};

/// Presentation side of a game.
///
/// A display owns all presentation state. It is bound to exactly one
/// [`BoardState`] by a [`Session`](crate::Session) and hears about every
/// `play` call through [`on_outcome`](GameDisplay::on_outcome).
pub trait GameDisplay {
    /// Called once when the display is paired with a fresh board.
    fn bind(&mut self, board: &BoardState);

    /// Called after every `play`, accepted or rejected.
    ///
    /// Rejections are expected to leave the display unchanged.
    fn on_outcome(&mut self, board: &BoardState, result: &Result<Outcome, PlayError>);
}

/// A modal message shown when a game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Heading of the message.
    pub title: &'static str,
    /// Body of the message.
    pub message: String,
}

impl Notification {
    /// Builds the notification for a terminal outcome.
    ///
    /// Returns `None` while the game continues.
    pub fn for_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Continue(_) => None,
            Outcome::Win(_) => Some(Self {
                title: "Victory",
                message: outcome.to_string(),
            }),
            Outcome::Draw => Some(Self {
                title: "Draw",
                message: outcome.to_string(),
            }),
        }
    }
}

/// Status label text for a board that has just been bound.
pub fn initial_status(board: &BoardState) -> String {
    Outcome::Continue(board.current_player()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_board::Player;

    #[test]
    fn test_no_notification_while_playing() {
        assert_eq!(Notification::for_outcome(Outcome::Continue(Player::O)), None);
    }

    #[test]
    fn test_victory_notification() {
        let note = Notification::for_outcome(Outcome::Win(Player::O)).unwrap();
        assert_eq!(note.title, "Victory");
        assert_eq!(note.message, "O has won");
    }

    #[test]
    fn test_initial_status() {
        assert_eq!(initial_status(&BoardState::new()), "Current player: X");
    }
}
