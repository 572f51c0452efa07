//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_board::Coord;
use tracing::{debug, info, instrument};

use super::input::{cell_at, move_cursor};
use super::ui::ScreenLayout;
use super::view::BoardView;
use crate::{Session, Settings};

const CENTER: Coord = Coord::ALL[4];

/// Main application state.
#[derive(Debug)]
pub struct App {
    settings: Settings,
    session: Session<BoardView>,
    cursor: Coord,
    area: Rect,
    quit: bool,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            session: Session::new(BoardView::new()),
            cursor: CENTER,
            area: Rect::default(),
            quit: false,
        }
    }

    /// Display settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The current game.
    pub fn session(&self) -> &Session<BoardView> {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Records the terminal area so mouse clicks can be mapped to cells.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.session.new_game(BoardView::new());
        self.cursor = CENTER;
    }

    /// Plays the cell with keypad number `c` ('1'..='9').
    pub fn play_keypad(&mut self, c: char) {
        if let Some(at) = Coord::from_keypad(c) {
            self.cursor = at;
            self.play(at);
        }
    }

    fn play(&mut self, at: Coord) {
        // Rejections are already reported to the view, which ignores them.
        let _ = self.session.click(at);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.dismiss_notification() {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                self.quit = true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => self.play_keypad(c),
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event; only left-button presses matter.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.dismiss_notification() {
            return;
        }

        let layout = ScreenLayout::new(self.area, &self.settings);
        if let Some(at) = cell_at(&layout.cells, mouse.column, mouse.row) {
            debug!(%at, "Cell clicked");
            self.cursor = at;
            self.play(at);
        } else if layout.hits_new_game(mouse.column, mouse.row) {
            debug!("New Game clicked");
            self.new_game();
        }
    }

    fn dismiss_notification(&mut self) -> bool {
        let view = self.session.display_mut();
        if view.notification().is_some() {
            view.dismiss();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictactoe_board::{Cell, Player, Status};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new(Settings::default());
        app.set_area(Rect::new(0, 0, 70, 30));
        app
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session().board().cell_at(0, 1), Cell::PlayerX);
        assert_eq!(app.session().display().status(), "Current player: O");
    }

    #[test]
    fn test_mouse_click_plays_cell() {
        let mut app = app();
        let layout = ScreenLayout::new(Rect::new(0, 0, 70, 30), app.settings());
        let target = layout.cells[2][0];
        app.handle_mouse(click(target.x + 1, target.y + 1));
        assert_eq!(app.session().board().cell_at(2, 0), Cell::PlayerX);
        assert_eq!(app.cursor(), Coord::new(2, 0).unwrap());
    }

    #[test]
    fn test_click_outside_board_does_nothing() {
        let mut app = app();
        app.handle_mouse(click(0, 0));
        assert_eq!(app.session().board().move_count(), 0);
    }

    #[test]
    fn test_keys_dismiss_notification_before_anything_else() {
        let mut app = app();
        for c in ['1', '4', '2', '5', '3'] {
            app.play_keypad(c);
        }
        assert_eq!(app.session().board().status(), Status::Won(Player::X));
        assert!(app.session().display().notification().is_some());

        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert!(app.session().display().notification().is_none());

        // Closed board ignores further moves.
        app.play_keypad('9');
        assert_eq!(app.session().board().cell_at(2, 2), Cell::Empty);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_new_game_button_replaces_board() {
        let mut app = app();
        app.play_keypad('5');
        let layout = ScreenLayout::new(Rect::new(0, 0, 70, 30), app.settings());
        app.handle_mouse(click(layout.new_game.x + 2, layout.new_game.y + 1));
        assert_eq!(app.session().board().move_count(), 0);
        assert_eq!(app.session().display().status(), "Current player: X");
    }

    #[test]
    fn test_new_game_key() {
        let mut app = app();
        app.play_keypad('1');
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.session().board().move_count(), 0);
        assert_eq!(app.cursor(), CENTER);
    }
}
