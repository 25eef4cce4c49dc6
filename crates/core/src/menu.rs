//! The interactive picker session.
//!
//! A session enters raw mode, then loops: draw, read one key, apply it to
//! the [`MenuState`]. It ends on a selection, a cancel or an input error,
//! and the terminal mode is restored on every one of those paths. A
//! termination signal restores the mode from the watcher thread and exits
//! the process without returning here.

use std::io::{self, BufRead, Read, Write};

use crossterm::{cursor, execute, queue};
use log::{debug, warn};

use crate::config::MenuConfig;
use crate::error::{Error, Result};
use crate::fallback::run_fallback_menu;
use crate::items::{Item, SelectionResult};
use crate::keys::KeyReader;
use crate::render::Renderer;
use crate::state::{MenuState, Step};
use crate::terminal::signals::SignalWatcher;
use crate::terminal::{RawModeGuard, StdinTerminal, TerminalMode};
use crate::text::MenuText;

pub struct Picker<'a, T> {
    items: &'a [Item],
    config: &'a MenuConfig,
    text: &'a MenuText,
    terminal: T,
    watch_signals: bool,
}

impl<'a, T> Picker<'a, T>
where
    T: TerminalMode + Clone + Send + 'static,
{
    pub fn new(items: &'a [Item], config: &'a MenuConfig, text: &'a MenuText, terminal: T) -> Self {
        Self {
            items,
            config,
            text,
            terminal,
            watch_signals: true,
        }
    }

    /// Leaves signal dispositions untouched for the session.
    pub fn without_signal_watcher(mut self) -> Self {
        self.watch_signals = false;
        self
    }

    /// Runs one interactive session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RawModeUnavailable`] when the terminal cannot be put
    /// in raw mode, and any error writing to `output`. A failure reading
    /// `input` is not an error: the session ends with no selection.
    pub fn run<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<SelectionResult> {
        if self.items.is_empty() {
            return Ok(SelectionResult::cancelled());
        }

        self.config.validate()?;
        let renderer = Renderer::new(self.config, self.text)?;

        let guard = RawModeGuard::enter(&self.terminal)?;
        // Declared after the guard so it stops before the mode is restored
        let _watcher = if self.watch_signals {
            Some(self.spawn_signal_watcher(&guard)?)
        } else {
            None
        };

        queue!(output, cursor::Hide)?;
        let result = self.event_loop(&renderer, input, &mut output);
        execute!(output, cursor::Show)?;

        result
    }

    /// Like [`Picker::run`], but answers [`Error::RawModeUnavailable`] by
    /// running the numbered fallback prompt on the same streams.
    pub fn run_with_fallback<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<SelectionResult> {
        match self.run(&mut input, &mut output) {
            Err(Error::RawModeUnavailable(reason)) => {
                warn!("Raw mode unavailable ({reason}), using the numbered prompt");
                run_fallback_menu(
                    self.items,
                    &self.config.color_palette,
                    self.text,
                    input,
                    output,
                )
            }
            other => other,
        }
    }

    fn event_loop<R: Read, W: Write>(
        &self,
        renderer: &Renderer,
        input: R,
        output: &mut W,
    ) -> Result<SelectionResult> {
        let mut state = MenuState::new(self.items, self.config.viewport_height);
        let mut reader = KeyReader::new(input);

        loop {
            renderer.draw(output, &mut state, self.items)?;

            let key = match reader.read_key() {
                Ok(key) => key,
                Err(e) => {
                    warn!("Reading input failed, ending without a selection: {e}");
                    renderer.erase(output, &mut state)?;
                    return Ok(SelectionResult::cancelled());
                }
            };

            if let Step::Done(result) = state.handle_key(key, self.items, &self.config.key_scheme) {
                renderer.erase(output, &mut state)?;
                debug!("Session finished, confirmed: {}", result.confirmed);
                return Ok(result);
            }
        }
    }

    fn spawn_signal_watcher(&self, guard: &RawModeGuard<'_, T>) -> Result<SignalWatcher> {
        let terminal = self.terminal.clone();
        let saved = guard.saved_state();
        let exit_code = self.config.interrupt_exit_code;

        SignalWatcher::spawn(move |_signal| {
            terminal.restore(Some(&saved));
            // The process is exiting; nothing useful can be done on failure
            let _ = execute!(io::stderr(), cursor::Show);
            std::process::exit(exit_code);
        })
    }
}

/// Runs a picker reading standard input and drawing on standard error,
/// which leaves standard output to the caller.
///
/// Falls back to the numbered prompt when standard input is not a
/// controllable terminal.
pub fn run_selection_menu(
    items: &[Item],
    config: &MenuConfig,
    text: &MenuText,
) -> Result<SelectionResult> {
    let picker = Picker::new(items, config, text, StdinTerminal::default());
    picker.run_with_fallback(io::stdin().lock(), io::stderr())
}
