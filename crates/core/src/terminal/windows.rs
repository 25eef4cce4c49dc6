use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::warn;

use crate::error::{Error, Result};

use super::TerminalMode;

/// The console, driven through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinTerminal;

/// crossterm keeps the original console mode itself; this only marks that
/// raw mode was entered.
pub struct ConsoleState(());

impl TerminalMode for StdinTerminal {
    type SavedState = ConsoleState;

    fn enter_raw_mode(&self) -> Result<ConsoleState> {
        enable_raw_mode().map_err(|e| Error::RawModeUnavailable(e.to_string()))?;
        Ok(ConsoleState(()))
    }

    fn restore(&self, saved: Option<&ConsoleState>) {
        if saved.is_none() {
            return;
        }

        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore console mode: {e}");
        }
    }
}
