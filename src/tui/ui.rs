//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_board::{BoardState, Coord, Player};

use super::app::App;
use super::view::BoardView;
use crate::Settings;

/// Screen regions, recomputed from the terminal size on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title row.
    pub title: Rect,
    /// Board cells, indexed `[row][col]`.
    pub cells: [[Rect; 3]; 3],
    /// Status label.
    pub status: Rect,
    /// The New Game button.
    pub new_game: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect, settings: &Settings) -> Self {
        let [title, board, status, new_game, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let (width, height) = (*settings.cell_width(), *settings.cell_height());
        let (gap_cols, gap_rows) = (*settings.pad_y(), *settings.pad_x());
        let grid = center_rect(
            board,
            width * 3 + gap_cols * 2,
            height * 3 + gap_rows * 2,
        );
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                Rect::new(
                    grid.x + col as u16 * (width + gap_cols),
                    grid.y + row as u16 * (height + gap_rows),
                    width,
                    height,
                )
                .intersection(board)
            })
        });

        Self {
            title,
            cells,
            status,
            new_game: center_rect(new_game, 16, 3),
            help,
        }
    }

    /// Returns true if `(column, row)` is on the New Game button.
    pub fn hits_new_game(&self, column: u16, row: u16) -> bool {
        self.new_game.contains(Position::new(column, row))
    }
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area(), app.settings());
    let view = app.session().display();
    let board = app.session().board();

    let title = Paragraph::new(app.settings().title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    for at in Coord::ALL {
        draw_cell(frame, layout.cells[at.row()][at.col()], board, view, at, app.cursor());
    }

    let status = Paragraph::new(view.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let new_game = Paragraph::new("New Game")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(new_game, layout.new_game);

    let help = Paragraph::new("Click or arrows + Enter | 1-9: play | N: New Game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    if let Some(note) = view.notification() {
        let area = center_rect(frame.area(), 30, 5);
        let popup = Paragraph::new(vec![
            Line::from(note.message.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(note.title)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &BoardState,
    view: &BoardView,
    at: Coord,
    cursor: Coord,
) {
    let (symbol, base_style) = match board.cell(at).player() {
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None if view.closed() => ("#".to_string(), Style::default().fg(Color::DarkGray)),
        None => (at.keypad().to_string(), Style::default().fg(Color::DarkGray)),
    };

    let style = if at == cursor && !view.closed() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let border_style = if board.winning_line().is_some_and(|line| line.contains(at)) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
