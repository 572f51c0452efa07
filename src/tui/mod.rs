//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;
mod view;

pub use app::App;
pub use ui::{ScreenLayout, draw};
pub use view::BoardView;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

use crate::Settings;

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before returning, also when setup or the loop
/// fails.
#[instrument(skip_all)]
pub fn run_tui(settings: Settings) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let _guard = TerminalGuard::enter(*settings.mouse())?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, App::new(settings));

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("TUI finished");
    res
}

/// Holds the terminal in raw mode on the alternate screen until dropped.
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, an early return drops the guard and undoes the setup.
        let guard = Self { mouse };
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if mouse {
            execute!(io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let mouse = self.mouse;
        restore([
            step("disable raw mode", disable_raw_mode),
            step("disable mouse capture", move || {
                if mouse {
                    execute!(io::stdout(), DisableMouseCapture)
                } else {
                    Ok(())
                }
            }),
            step("leave alternate screen", || execute!(io::stdout(), LeaveAlternateScreen)),
            step("show cursor", || execute!(io::stdout(), Show)),
        ]);
    }
}

type RestoreStep<'a> = (&'static str, Box<dyn FnOnce() -> io::Result<()> + 'a>);

fn step<'a>(name: &'static str, f: impl FnOnce() -> io::Result<()> + 'a) -> RestoreStep<'a> {
    (name, Box::new(f))
}

/// Runs every step even after one fails. Returns the names of the failed steps.
fn restore<const N: usize>(steps: [RestoreStep<'_>; N]) -> Vec<&'static str> {
    let mut failed = Vec::new();
    for (name, step) in steps {
        if let Err(err) = step() {
            warn!(step = name, error = %err, "Failed to restore terminal");
            failed.push(name);
        }
    }
    failed
}

/// Blocks on terminal events; each one is handled to completion before the
/// next frame is drawn.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.set_area(f.area());
            draw(f, &app);
        })?;

        match event::read().context("Failed to read terminal event")? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
