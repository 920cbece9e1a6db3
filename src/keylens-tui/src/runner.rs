//! Terminal lifecycle and the blocking event loop.
//!
//! The pipeline is synchronous call-and-return, so the loop simply blocks on
//! the next input event; there is no background work to multiplex.

use std::io::{Stdout, stdout};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use keylens_core::{ActionCatalog, KeymapStore};

use crate::app::App;
use crate::views;

/// Restores the terminal when dropped, so an error path or panic unwinds
/// back to a usable shell.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

fn setup_terminal() -> Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let guard = TerminalGuard;
    execute!(stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
    let terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("failed to create terminal")?;
    Ok((terminal, guard))
}

/// Runs the interactive view until the user quits.
pub fn run<S: KeymapStore + ActionCatalog>(mut app: App<S>) -> Result<()> {
    let (mut terminal, _guard) = setup_terminal()?;
    debug!("entering event loop");

    while !app.should_quit {
        terminal
            .draw(|frame| views::draw(frame, &app))
            .context("failed to draw frame")?;

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(..) => {}
            _ => {}
        }
    }

    Ok(())
}
