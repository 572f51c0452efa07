//! Core domain types for tic-tac-toe.

use derive_more::Display;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Occupancy of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Holds an X mark.
    PlayerX,
    /// Holds an O mark.
    PlayerO,
}

impl Cell {
    /// Returns the player whose mark occupies this cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerX => Some(Player::X),
            Cell::PlayerO => Some(Player::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::PlayerX,
            Player::O => Cell::PlayerO,
        }
    }
}

/// The 3x3 grid, indexed `[row][col]`.
pub type Grid = [[Cell; 3]; 3];

/// Terminal flag of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled up with no winner.
    Draw,
}

impl Status {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(player),
            Status::InProgress | Status::Draw => None,
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Game goes on; the payload is the player who moves next.
    #[display("Current player: {_0}")]
    Continue(Player),
    /// The move completed a line for this player.
    #[display("{_0} has won")]
    Win(Player),
    /// The move filled the board without completing a line.
    #[display("Nobody has won")]
    Draw,
}

impl Outcome {
    /// Returns true if this outcome ends the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue(_))
    }
}
