//! Raw terminal mode control.
//!
//! Everything above this module talks to the terminal only through
//! [`TerminalMode`]. One implementation per platform is selected at build
//! time and exported as [`StdinTerminal`].

use std::sync::Arc;

use log::debug;

use crate::error::Result;

pub mod signals;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::StdinTerminal;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::StdinTerminal;

#[cfg(not(any(unix, windows)))]
mod unsupported;
#[cfg(not(any(unix, windows)))]
pub use unsupported::StdinTerminal;

/// Switches standard input between its prior mode and raw mode.
///
/// Raw mode disables echo, line buffering and signal-generating control
/// characters, and makes every read return as soon as one byte is available.
pub trait TerminalMode {
    /// Snapshot of the mode that was active before entering raw mode.
    type SavedState: Send + Sync + 'static;

    /// Fails with [`crate::error::Error::RawModeUnavailable`] when there is
    /// no controllable terminal.
    fn enter_raw_mode(&self) -> Result<Self::SavedState>;

    /// Reapplies a saved mode. `None` is a no-op. Must be safe to call from a
    /// thread other than the one that entered raw mode.
    fn restore(&self, saved: Option<&Self::SavedState>);
}

/// Holds raw mode for its lifetime and restores the prior mode on drop.
pub struct RawModeGuard<'a, T: TerminalMode> {
    terminal: &'a T,
    saved: Arc<T::SavedState>,
}

impl<'a, T: TerminalMode> RawModeGuard<'a, T> {
    pub fn enter(terminal: &'a T) -> Result<Self> {
        let saved = terminal.enter_raw_mode()?;
        debug!("Entered raw terminal mode");

        Ok(Self {
            terminal,
            saved: Arc::new(saved),
        })
    }

    /// Shared handle on the saved mode, for restoring from another thread.
    pub fn saved_state(&self) -> Arc<T::SavedState> {
        Arc::clone(&self.saved)
    }
}

impl<T: TerminalMode> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        self.terminal.restore(Some(&self.saved));
        debug!("Restored terminal mode");
    }
}
