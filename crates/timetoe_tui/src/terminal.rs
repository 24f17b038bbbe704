//! Raw-mode terminal session that restores itself on drop.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, info, warn};

/// Holds the terminal in raw mode on the alternate screen with mouse capture.
///
/// Dropping the guard undoes all three, so the terminal comes back whether
/// the game loop returns, errors or panics. Restore failures are logged.
pub struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Switches the real terminal into game mode.
    ///
    /// # Errors
    ///
    /// Fails if raw mode or the alternate screen cannot be entered. Whatever
    /// was already switched on is restored before the error is returned.
    pub fn enter() -> Result<Self> {
        Self::enter_with(enter_terminal, restore_terminal).context("Failed to prepare terminal")
    }

    /// Arms the guard, then runs `enter`. A failing `enter` drops the guard.
    fn enter_with(
        enter: impl FnOnce() -> io::Result<()>,
        restore: fn() -> io::Result<()>,
    ) -> io::Result<Self> {
        let guard = Self { restore };
        enter()?;
        debug!("Terminal entered game mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");
        if let Err(err) = (self.restore)() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

fn enter_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
}

/// Attempts every step even if an earlier one fails.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}
