use std::io::{self, IsTerminal};
use std::sync::{Mutex, PoisonError};

use log::warn;
use nix::sys::termios::{
    tcgetattr, tcsetattr, InputFlags, LocalFlags, SetArg, SpecialCharacterIndices, Termios,
};

use crate::error::{Error, Result};

use super::TerminalMode;

/// Standard input driven through termios.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinTerminal;

pub struct TermiosState {
    // Termios is not Sync on its own; the watcher thread may restore it
    original: Mutex<Termios>,
}

fn unavailable(context: &str, errno: nix::Error) -> Error {
    Error::RawModeUnavailable(format!("{context}: {errno}"))
}

impl TerminalMode for StdinTerminal {
    type SavedState = TermiosState;

    fn enter_raw_mode(&self) -> Result<TermiosState> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Err(Error::RawModeUnavailable(
                "standard input is not a terminal".to_string(),
            ));
        }

        let original = tcgetattr(&stdin).map_err(|e| unavailable("tcgetattr failed", e))?;

        let mut raw = original.clone();
        raw.local_flags
            .remove(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::ISIG);
        raw.input_flags.remove(InputFlags::IXON | InputFlags::ICRNL);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

        tcsetattr(&stdin, SetArg::TCSANOW, &raw).map_err(|e| unavailable("tcsetattr failed", e))?;

        Ok(TermiosState {
            original: Mutex::new(original),
        })
    }

    fn restore(&self, saved: Option<&TermiosState>) {
        let Some(saved) = saved else {
            return;
        };

        let original = saved.original.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = tcsetattr(io::stdin(), SetArg::TCSANOW, &original) {
            warn!("Failed to restore terminal mode: {e}");
        }
    }
}
