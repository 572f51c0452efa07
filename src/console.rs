//! Line-oriented display on stdin/stdout.

use crate::display::{Notification, initial_status};
use crate::{GameDisplay, Session, Settings};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_board::{BoardState, Coord, Outcome, PlayError, Player};
use tracing::{debug, info, instrument};

const HELP: &str = "Enter `row col` (0-2), a cell number 1-9, `new` or `quit`";

/// Display that queues text for the console loop to print.
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    pending: Vec<String>,
    closed: bool,
}

impl ConsoleDisplay {
    /// Creates a display with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the queued lines.
    pub fn take_pending(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    /// True once the game ended and every cell is unplayable.
    pub fn closed(&self) -> bool {
        self.closed
    }
}

impl GameDisplay for ConsoleDisplay {
    fn bind(&mut self, board: &BoardState) {
        self.closed = false;
        self.pending.push(render_board(board, false));
        self.pending.push(initial_status(board));
    }

    fn on_outcome(&mut self, board: &BoardState, result: &Result<Outcome, PlayError>) {
        let outcome = match result {
            Ok(outcome) => *outcome,
            Err(e) => {
                debug!(error = %e, "Ignoring rejected move");
                return;
            }
        };

        self.closed = outcome.is_terminal();
        self.pending.push(render_board(board, self.closed));
        match Notification::for_outcome(outcome) {
            Some(note) => self.pending.push(format!("*** {}: {} ***", note.title, note.message)),
            None => self.pending.push(outcome.to_string()),
        }
    }
}

/// Formats the board as text.
///
/// Empty cells show their number (1-9), or `#` once the game is closed.
pub fn render_board(board: &BoardState, closed: bool) -> String {
    let mut result = String::new();
    for (i, at) in Coord::ALL.into_iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push_str("\n---+---+---\n");
        }
        let symbol = match board.cell(at).player() {
            Some(Player::X) => "X".to_string(),
            Some(Player::O) => "O".to_string(),
            None if closed => "#".to_string(),
            None => at.keypad().to_string(),
        };
        result.push_str(&format!(" {} ", symbol));
        if i % 3 < 2 {
            result.push('|');
        }
    }
    result
}

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play at a cell.
    Play(Coord),
    /// Start over with a fresh board.
    NewGame,
    /// Leave the game.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything else.
    Unknown,
}

impl ConsoleCommand {
    /// Parses one input line.
    pub fn parse(line: &str) -> Self {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Self::Nothing,
            [word] if matches!(word.to_lowercase().as_str(), "q" | "quit" | "exit") => Self::Quit,
            [word] if matches!(word.to_lowercase().as_str(), "n" | "new") => Self::NewGame,
            [digit] => single_char(digit)
                .and_then(Coord::from_keypad)
                .map_or(Self::Unknown, Self::Play),
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Coord::new(row, col).map_or(Self::Unknown, Self::Play),
                _ => Self::Unknown,
            },
            _ => Self::Unknown,
        }
    }
}

fn single_char(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Runs the console game until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_console<R: BufRead, W: Write>(settings: &Settings, input: R, mut output: W) -> Result<()> {
    info!("Starting console display");
    writeln!(output, "{}\n{}\n", settings.title(), HELP)?;

    let mut session = Session::new(ConsoleDisplay::new());
    flush(&mut session, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read console input")?;
        match ConsoleCommand::parse(&line) {
            ConsoleCommand::Quit => break,
            ConsoleCommand::NewGame => session.new_game(ConsoleDisplay::new()),
            ConsoleCommand::Play(at) => {
                let _ = session.click(at);
            }
            ConsoleCommand::Nothing => {}
            ConsoleCommand::Unknown => writeln!(output, "{}", HELP)?,
        }
        flush(&mut session, &mut output)?;
    }

    info!("Console display finished");
    Ok(())
}

fn flush<W: Write>(session: &mut Session<ConsoleDisplay>, output: &mut W) -> Result<()> {
    for text in session.display_mut().take_pending() {
        writeln!(output, "{}", text)?;
    }
    write!(output, "> ")?;
    output.flush().context("Failed to flush console output")?;
    Ok(())
}
