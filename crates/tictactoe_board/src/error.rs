//! Move rejections.

use crate::Coord;
use derive_more::{Display, Error};

/// Why [`BoardState::play`](crate::BoardState::play) refused a move.
///
/// Both kinds are recoverable; a rejected move leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Coord),
}
