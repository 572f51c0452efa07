//! Win detection logic for tic-tac-toe.

use super::Line;
use crate::{Coord, Grid, Player};
use tracing::instrument;

/// Finds a completed line passing through `at`.
///
/// Only the lines through the last move can have been completed by it, so
/// this is what [`BoardState::play`](crate::BoardState::play) runs after
/// each placement.
#[instrument(level = "trace", skip(grid))]
pub fn winning_line_through(grid: &Grid, at: Coord) -> Option<(Line, Player)> {
    Line::through(at).find_map(|line| line.owner(grid).map(|player| (line, player)))
}

/// Scans all 8 lines for a completed one.
pub fn winning_line(grid: &Grid) -> Option<(Line, Player)> {
    Line::all().find_map(|line| line.owner(grid).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row.
pub fn winner(grid: &Grid) -> Option<Player> {
    winning_line(grid).map(|(_, player)| player)
}
