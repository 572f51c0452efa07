//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{BoardState, Player, Status};

/// Invariant: the player to move follows from the number of moves.
///
/// While the game is in progress X moves after an even number of moves
/// and O after an odd number. Once won, the player to move is the winner,
/// who placed the last mark.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardState> for AlternatingTurnInvariant {
    fn holds(board: &BoardState) -> bool {
        let by_parity = if board.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        match board.status() {
            Status::InProgress => board.current_player() == by_parity,
            Status::Won(winner) => {
                board.current_player() == winner && winner == by_parity.opponent()
            }
            // Nine moves, so X placed the last mark and was never flipped.
            Status::Draw => board.current_player() == Player::X && board.move_count() == 9,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
