//! Pure tic-tac-toe board logic.
//!
//! [`BoardState`] owns the 3x3 grid, the player to move and the terminal
//! flag. It is mutated only through [`BoardState::play`], which either
//! accepts the move and reports an [`Outcome`] or rejects it with a
//! [`PlayError`] without touching anything.
//!
//! ```
//! use tictactoe_board::{BoardState, Coord, Outcome, Player};
//!
//! let mut board = BoardState::new();
//! let at = Coord::new(1, 1).expect("center is on the board");
//! assert_eq!(board.play(at), Ok(Outcome::Continue(Player::O)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coord;
mod error;
pub mod invariants;
pub mod rules;
mod types;

pub use board::BoardState;
pub use coord::Coord;
pub use error::PlayError;
pub use rules::Line;
pub use types::{Cell, Grid, Outcome, Player, Status};
