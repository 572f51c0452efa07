//! The board state machine.

use crate::invariants::{BoardInvariants, check_board};
use crate::rules::{self, Line};
use crate::{Cell, Coord, Grid, Outcome, PlayError, Player, Status};
use tracing::{debug, instrument};

/// A single game of tic-tac-toe.
///
/// Created fresh for every game and mutated only by [`BoardState::play`].
/// Once a cell holds a mark it never changes, and once the game is won or
/// drawn every further move is rejected with [`PlayError::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    grid: Grid,
    current: Player,
    status: Status,
    history: Vec<Coord>,
    winning_line: Option<Line>,
}

impl BoardState {
    /// Creates an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; 3]; 3],
            current: Player::X,
            status: Status::InProgress,
            history: Vec::with_capacity(9),
            winning_line: None,
        }
    }

    /// Places the current player's mark at `at`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`PlayError::GameOver`] once the game has been won or drawn.
    /// - [`PlayError::CellOccupied`] if `at` already holds a mark.
    ///
    /// A rejected move leaves the board, the player to move and the
    /// terminal flag exactly as they were.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn play(&mut self, at: Coord) -> Result<Outcome, PlayError> {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Move rejected, game is over");
            return Err(PlayError::GameOver);
        }
        if !self.cell(at).is_empty() {
            debug!("Move rejected, cell is occupied");
            return Err(PlayError::CellOccupied(at));
        }

        let player = self.current;
        self.grid[at.row()][at.col()] = player.into();
        self.history.push(at);

        let outcome = if let Some((line, winner)) = rules::winning_line_through(&self.grid, at) {
            self.winning_line = Some(line);
            self.status = Status::Won(winner);
            Outcome::Win(winner)
        } else if rules::is_full(&self.grid) {
            self.status = Status::Draw;
            Outcome::Draw
        } else {
            self.current = player.opponent();
            Outcome::Continue(self.current)
        };

        debug_assert!(
            check_board::<BoardInvariants>(self).is_ok(),
            "board invariants violated after {player} played {at}"
        );
        debug!(?outcome, "Move accepted");
        Ok(outcome)
    }

    /// Like [`play`](Self::play), for callers holding raw indices.
    ///
    /// Returns `None` without touching the board when either index is
    /// outside `0..3`.
    pub fn play_at(&mut self, row: usize, col: usize) -> Option<Result<Outcome, PlayError>> {
        Coord::new(row, col).map(|at| self.play(at))
    }

    /// Returns the cell at `at`.
    pub fn cell(&self, at: Coord) -> Cell {
        self.grid[at.row()][at.col()]
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..3`.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Returns the whole grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player whose mark the next accepted move places.
    ///
    /// After a win this stays on the winner; it only advances on
    /// [`Outcome::Continue`].
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the terminal flag.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Accepted moves in play order.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The line that won the game, once there is one.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
