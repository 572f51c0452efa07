//! Two-player tic-tac-toe.
//!
//! The game rules live in [`tictactoe_board`]. This crate supplies the
//! displays that show a board and forward clicks into it:
//!
//! - **TUI**: ratatui board with mouse and keyboard input
//! - **Console**: line-oriented stdin/stdout play
//!
//! A [`Session`] pairs one board with one [`GameDisplay`]; starting a new
//! game replaces both.
//!
//! # Example
//!
//! ```
//! use tictactoe::{ConsoleDisplay, Session};
//! use tictactoe_board::{Outcome, Player};
//!
//! let mut session = Session::new(ConsoleDisplay::new());
//! let result = session.on_cell_clicked(1, 1);
//! assert_eq!(result, Some(Ok(Outcome::Continue(Player::O))));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod display;
mod session;
pub mod tui;

pub use config::{ConfigError, Settings};
pub use console::{ConsoleCommand, ConsoleDisplay, render_board, run_console};
pub use display::{GameDisplay, Notification, initial_status};
pub use session::Session;

pub use tictactoe_board;
