//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{BoardState, Cell, Player};

/// Invariant: the grid is exactly the replay of the move history.
///
/// Every history entry hit an empty cell, marks alternate starting with X,
/// and no cell outside the history holds a mark. Together this means no
/// mark was ever overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<BoardState> for MonotonicBoardInvariant {
    fn holds(board: &BoardState) -> bool {
        let mut replayed = [[Cell::Empty; 3]; 3];
        let mut player = Player::X;

        for at in board.history() {
            let cell = &mut replayed[at.row()][at.col()];
            if !cell.is_empty() {
                return false;
            }
            *cell = player.into();
            player = player.opponent();
        }

        replayed == *board.grid()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&BoardState::new()));
    }

    #[test]
    fn test_holds_after_rejected_move() {
        let mut board = BoardState::new();
        let center = Coord::new(1, 1).unwrap();
        board.play(center).unwrap();
        assert!(board.play(center).is_err());
        assert!(MonotonicBoardInvariant::holds(&board));
    }
}
