//! Ownership of the real terminal for the lifetime of the UI.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{info, warn};

/// Raw-mode terminal on the alternate screen with mouse capture.
///
/// The previous terminal state is restored when this is dropped, including
/// on early return or panic unwinding.
pub struct TerminalContext {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalContext {
    /// Switches the terminal into UI mode.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e).context("entering alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;
        info!("Terminal initialized");
        Ok(Self { terminal })
    }

    /// The drawable terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalContext {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
        info!("Terminal restored");
    }
}
