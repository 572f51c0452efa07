//! Pairing of one board with one display.

use crate::GameDisplay;
use derive_getters::Getters;
use tictactoe_board::{BoardState, Coord, Outcome, PlayError};
use tracing::{debug, info, instrument};

/// One game: a [`BoardState`] and the display bound to it.
///
/// Starting a new game replaces both halves; nothing carries over.
#[derive(Debug, Getters)]
pub struct Session<D> {
    board: BoardState,
    display: D,
}

impl<D: GameDisplay> Session<D> {
    /// Binds `display` to a fresh board.
    #[instrument(skip(display))]
    pub fn new(mut display: D) -> Self {
        let board = BoardState::new();
        display.bind(&board);
        info!(first = %board.current_player(), "New game started");
        Self { board, display }
    }

    /// Plays the current player's mark at `at` and reports the result to
    /// the display.
    #[instrument(skip(self))]
    pub fn click(&mut self, at: Coord) -> Result<Outcome, PlayError> {
        let result = self.board.play(at);
        self.display.on_outcome(&self.board, &result);
        if let Ok(outcome) = result
            && outcome.is_terminal()
        {
            info!(%outcome, moves = self.board.move_count(), "Game finished");
        }
        result
    }

    /// Forwards a click on `(row, col)`.
    ///
    /// Returns `None`, without touching the board or the display, when the
    /// indices are off the board.
    pub fn on_cell_clicked(&mut self, row: usize, col: usize) -> Option<Result<Outcome, PlayError>> {
        match Coord::new(row, col) {
            Some(at) => Some(self.click(at)),
            None => {
                debug!(row, col, "Ignoring click outside the board");
                None
            }
        }
    }

    /// Discards the current pairing and binds `display` to a fresh board.
    pub fn new_game(&mut self, display: D) {
        *self = Self::new(display);
    }

    /// Mutable access to the display, for presentation-only state.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
