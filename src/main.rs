//! Tic-tac-toe - terminal front end

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe::{Settings, run_console, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    init_tracing(settings.log_file())?;
    info!(config = %cli.config.display(), "Starting tictactoe");

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run_tui(settings),
        Command::Console => {
            let stdin = std::io::stdin();
            run_console(&settings, stdin.lock(), std::io::stdout())
        }
    }
}

/// Logs to a file so the display owns the terminal.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
