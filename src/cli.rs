//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file, overriding the one in the settings file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Display to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available displays
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the terminal UI (mouse and keyboard)
    Tui,

    /// Play by typing moves on stdin
    Console,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_console_with_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--config",
            "alt.toml",
            "--log-file",
            "game.log",
            "console",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Console));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }
}
