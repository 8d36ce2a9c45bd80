//! FlowDeck TUI — expandable user-flow documentation in the terminal.
//!
//! Renders a catalog of user roles, their flows, and each flow's ordered
//! steps as a disclosure tree: one role and one flow expanded at a time,
//! with a fixed summary panel underneath. Ships with the Zornicare flow
//! set built in; pass a TOML catalog path to view your own.

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use flowdeck_core::{catalog, Catalog};

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Content model: built once at startup, never mutated.
    let catalog = match std::env::args().nth(1) {
        Some(path) => Catalog::from_file(Path::new(&path))
            .with_context(|| format!("load catalog from {path}"))?,
        None => catalog::builtin(),
    };
    let mut app = AppState::new(catalog);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for input (50ms timeout for ~20 FPS tick). Every operation
        // completes synchronously within the interaction that triggered it.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
