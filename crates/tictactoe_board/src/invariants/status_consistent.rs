//! Status consistency: the terminal flag agrees with a full board scan.

use super::Invariant;
use crate::rules::{is_full, winner};
use crate::{BoardState, Status};

/// Invariant: `Won(p)` iff a full 8-line scan finds `p`, `Draw` iff the
/// board is full with no winner, and the recorded winning line is owned
/// by the winner.
pub struct StatusConsistentInvariant;

impl Invariant<BoardState> for StatusConsistentInvariant {
    fn holds(board: &BoardState) -> bool {
        let grid = board.grid();
        let scanned = winner(grid);
        match board.status() {
            Status::InProgress => scanned.is_none() && !is_full(grid),
            Status::Won(player) => {
                scanned == Some(player)
                    && board
                        .winning_line()
                        .is_some_and(|line| line.owner(grid) == Some(player))
            }
            Status::Draw => scanned.is_none() && is_full(grid),
        }
    }

    fn description() -> &'static str {
        "Status matches a full scan of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn test_holds_through_a_drawn_game() {
        let mut board = BoardState::new();
        for i in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
            board.play(Coord::from_index(i).unwrap()).unwrap();
            assert!(StatusConsistentInvariant::holds(&board));
        }
        assert_eq!(board.status(), Status::Draw);
    }
}
