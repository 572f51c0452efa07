//! Draw detection logic for tic-tac-toe.

use crate::Grid;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a draw.
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(|cell| !cell.is_empty())
}
