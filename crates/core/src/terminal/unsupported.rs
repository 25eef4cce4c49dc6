use crate::error::{Error, Result};

use super::TerminalMode;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinTerminal;

pub struct UnsupportedState(());

impl TerminalMode for StdinTerminal {
    type SavedState = UnsupportedState;

    fn enter_raw_mode(&self) -> Result<UnsupportedState> {
        Err(Error::RawModeUnavailable(
            "raw mode is not supported on this platform".to_string(),
        ))
    }

    fn restore(&self, _saved: Option<&UnsupportedState>) {}
}
