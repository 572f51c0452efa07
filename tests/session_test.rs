//! Tests for pairing boards with displays.

use tictactoe::{GameDisplay, Session};
use tictactoe_board::{BoardState, Outcome, PlayError, Player};

/// Display that records every call it receives.
#[derive(Debug, Default)]
struct RecordingDisplay {
    id: u32,
    binds: usize,
    outcomes: Vec<Result<Outcome, PlayError>>,
}

impl RecordingDisplay {
    fn with_id(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl GameDisplay for RecordingDisplay {
    fn bind(&mut self, board: &BoardState) {
        assert_eq!(board.move_count(), 0, "displays are bound to fresh boards");
        self.binds += 1;
    }

    fn on_outcome(&mut self, _board: &BoardState, result: &Result<Outcome, PlayError>) {
        self.outcomes.push(*result);
    }
}

#[test]
fn test_new_session_binds_display() {
    let session = Session::new(RecordingDisplay::default());
    assert_eq!(session.display().binds, 1);
    assert_eq!(session.board().current_player(), Player::X);
}

#[test]
fn test_every_click_reaches_display() {
    let mut session = Session::new(RecordingDisplay::default());
    session.on_cell_clicked(0, 0);
    session.on_cell_clicked(0, 0);
    session.on_cell_clicked(1, 1);

    let at = tictactoe_board::Coord::new(0, 0).unwrap();
    assert_eq!(
        session.display().outcomes,
        vec![
            Ok(Outcome::Continue(Player::O)),
            Err(PlayError::CellOccupied(at)),
            Ok(Outcome::Continue(Player::X)),
        ]
    );
}

#[test]
fn test_off_board_click_is_dropped() {
    let mut session = Session::new(RecordingDisplay::default());
    assert_eq!(session.on_cell_clicked(5, 1), None);
    assert!(session.display().outcomes.is_empty());
    assert_eq!(session.board(), &BoardState::new());
}

#[test]
fn test_stale_clicks_after_win_report_game_over() {
    let mut session = Session::new(RecordingDisplay::default());
    for (r, c) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        session.on_cell_clicked(r, c);
    }
    assert_eq!(
        session.display().outcomes.last(),
        Some(&Ok(Outcome::Win(Player::X)))
    );

    let snapshot = session.board().clone();
    assert_eq!(session.on_cell_clicked(2, 0), Some(Err(PlayError::GameOver)));
    assert_eq!(session.board(), &snapshot);
}

#[test]
fn test_new_game_discards_board_and_display() {
    let mut session = Session::new(RecordingDisplay::with_id(1));
    session.on_cell_clicked(1, 1);
    session.on_cell_clicked(0, 0);

    session.new_game(RecordingDisplay::with_id(2));

    assert_eq!(session.display().id, 2);
    assert_eq!(session.display().binds, 1);
    assert!(session.display().outcomes.is_empty());
    assert_eq!(session.board().move_count(), 0);
    assert_eq!(session.board().current_player(), Player::X);
}
