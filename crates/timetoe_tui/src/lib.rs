//! Terminal front end for timetoe.
//!
//! # Architecture
//!
//! - **App**: owns the [`timetoe::GameState`] and turns input into actions
//! - **UI**: stateless ratatui rendering of a [`timetoe::GameView`]
//! - **Config**: optional TOML settings for logging and colours
//! - **CLI**: `play` for the interactive game, `replay` for headless runs

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use timetoe::{Action, GameState, GameView, reduce};
use tracing::{error, info, instrument};

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Palette, PaletteConfig, TuiConfig};
pub use terminal::TerminalGuard;
pub use ui::HitMap;

/// Runs the interactive game until the user quits.
///
/// A [`TerminalGuard`] restores the terminal on every exit path, including
/// a failed setup. Restore failures are logged and never mask the game's
/// own result.
#[instrument(skip(config))]
pub fn run_play(config: &TuiConfig) -> Result<()> {
    let palette = config.palette().resolve()?;
    info!("Starting timetoe TUI");

    let guard = TerminalGuard::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, App::new(), &palette));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting timetoe TUI");
    res
}

/// Event, reducer and render loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, palette: &Palette) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, &app, palette))?;

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => {
                app.handle_key(key);
            }
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse, &hits);
            }
            _ => {}
        }
    }
}

/// Applies `actions` to a fresh game and renders the resulting view.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn run_replay(actions: &[Action], json: bool) -> Result<String> {
    let state = actions
        .iter()
        .fold(GameState::new(), |state, &action| reduce(&state, action));
    let view = GameView::of(&state);
    info!(status = %view.status, step = state.step(), "Replay finished");
    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize view")
    } else {
        Ok(view.to_text())
    }
}
