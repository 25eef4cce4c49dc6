//! Integration tests for rust-picker-core
//!
//! These tests drive complete picker sessions through a scripted terminal
//! and scripted input, from raw mode entry to the returned selection.

use rust_picker_core::{
    config::MenuConfig,
    error::{Error, Result},
    file_handling::{get_items, get_settings},
    items::{Item, SelectionResult},
    key_scheme::KeyScheme,
    menu::Picker,
    terminal::TerminalMode,
    text::MenuText,
};
use std::collections::VecDeque;
use std::io::{self, Cursor, Read, Write};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

const ARROW_UP: &[u8] = b"\x1b[A";
const ARROW_DOWN: &[u8] = b"\x1b[B";
const ENTER: &[u8] = b"\r";
const ESCAPE: &[u8] = b"\x1b";
const CTRL_C: &[u8] = b"\x03";

/// Records raw mode transitions instead of touching a real terminal.
#[derive(Clone, Default)]
struct FakeTerminal {
    events: Arc<Mutex<Vec<&'static str>>>,
    unavailable: bool,
}

impl FakeTerminal {
    fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl TerminalMode for FakeTerminal {
    type SavedState = ();

    fn enter_raw_mode(&self) -> Result<()> {
        if self.unavailable {
            return Err(Error::RawModeUnavailable("not a terminal".to_string()));
        }
        self.events.lock().unwrap().push("enter");
        Ok(())
    }

    fn restore(&self, saved: Option<&()>) {
        if saved.is_some() {
            self.events.lock().unwrap().push("restore");
        }
    }
}

/// Delivers one scripted chunk per read, like a terminal in raw mode.
struct ScriptedInput(VecDeque<Vec<u8>>);

impl ScriptedInput {
    fn new(chunks: &[&[u8]]) -> Self {
        Self(chunks.iter().map(|chunk| chunk.to_vec()).collect())
    }
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.0.pop_front() {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None => Ok(0),
        }
    }
}

struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }
}

fn items() -> Vec<Item> {
    vec![
        Item::new("dev", "npm run dev"),
        Item::new("build", "npm run build").with_description("Production bundle"),
        Item::new("test:watch", "npm run test:watch"),
    ]
}

fn run_session(config: &MenuConfig, chunks: &[&[u8]]) -> (SelectionResult, FakeTerminal) {
    let items = items();
    let text = MenuText::default();
    let terminal = FakeTerminal::default();
    let picker = Picker::new(&items, config, &text, terminal.clone()).without_signal_watcher();

    let result = picker
        .run(ScriptedInput::new(chunks), Vec::new())
        .unwrap();
    (result, terminal)
}

#[test]
fn test_arrow_navigation_selects_item() {
    let (result, terminal) = run_session(
        &MenuConfig::default(),
        &[ARROW_DOWN, ARROW_DOWN, ARROW_DOWN, ARROW_UP, ENTER],
    );

    assert!(result.confirmed);
    assert_eq!(result.item.unwrap().name, "build");
    assert_eq!(terminal.events(), vec!["enter", "restore"]);
}

#[test]
fn test_filter_then_select() {
    let (result, _) = run_session(&MenuConfig::default(), &[b"/", b"t", b"e", ENTER, ENTER]);

    assert_eq!(result.item.unwrap().name, "test:watch");
}

#[test]
fn test_escape_clears_filter_before_selecting() {
    let (result, _) = run_session(
        &MenuConfig::default(),
        &[b"/", b"b", b"u", ESCAPE, ARROW_DOWN, ENTER],
    );

    assert_eq!(result.item.unwrap().name, "build");
}

#[test]
fn test_enter_on_empty_view_keeps_session_open() {
    let (result, _) = run_session(
        &MenuConfig::default(),
        &[b"/", b"z", ENTER, ENTER, b"/", ESCAPE, ENTER],
    );

    assert_eq!(result.item.unwrap().name, "dev");
}

#[test]
fn test_quit_keys_cancel() {
    let (result, terminal) = run_session(&MenuConfig::default(), &[b"q"]);
    assert_eq!(result, SelectionResult::cancelled());
    assert_eq!(terminal.events(), vec!["enter", "restore"]);

    let (result, _) = run_session(&MenuConfig::default(), &[ARROW_DOWN, CTRL_C]);
    assert!(!result.confirmed);
}

#[test]
fn test_custom_scheme_with_q_as_up() {
    let config = MenuConfig {
        key_scheme: KeyScheme::custom(b'q', b'j').unwrap(),
        ..Default::default()
    };

    let (result, _) = run_session(&config, &[b"j", b"j", b"q", ENTER]);

    assert!(result.confirmed);
    assert_eq!(result.item.unwrap().name, "build");
}

#[test]
fn test_two_keys_scheme() {
    let config = MenuConfig {
        key_scheme: KeyScheme::TwoKeys,
        ..Default::default()
    };

    let (result, _) = run_session(&config, &[b"s", b"S", ARROW_UP, ENTER]);

    assert_eq!(result.item.unwrap().name, "build");
}

/// A session with the signal watcher leaves the default signal actions in place
#[cfg(unix)]
#[test]
fn test_session_with_signal_watcher_returns_default_actions() {
    use rust_picker_core::terminal::signals::default_actions_enabled;

    let items = items();
    let config = MenuConfig::default();
    let text = MenuText::default();
    let terminal = FakeTerminal::default();
    let picker = Picker::new(&items, &config, &text, terminal.clone());

    let result = picker
        .run(ScriptedInput::new(&[ARROW_DOWN, ENTER]), Vec::new())
        .unwrap();

    assert_eq!(result.item.unwrap().name, "build");
    assert_eq!(terminal.events(), vec!["enter", "restore"]);
    assert!(default_actions_enabled());
}

#[test]
fn test_read_error_cancels_and_restores() {
    let items = items();
    let config = MenuConfig::default();
    let text = MenuText::default();
    let terminal = FakeTerminal::default();
    let picker = Picker::new(&items, &config, &text, terminal.clone()).without_signal_watcher();

    let result = picker.run(BrokenInput, Vec::new()).unwrap();

    assert_eq!(result, SelectionResult::cancelled());
    assert_eq!(terminal.events(), vec!["enter", "restore"]);
}

#[test]
fn test_closed_input_cancels() {
    let (result, terminal) = run_session(&MenuConfig::default(), &[ARROW_DOWN]);

    assert!(!result.confirmed);
    assert_eq!(terminal.events(), vec!["enter", "restore"]);
}

#[test]
fn test_session_hides_cursor_and_erases_last_frame() {
    let items = items();
    let config = MenuConfig::default();
    let text = MenuText::default();
    let picker =
        Picker::new(&items, &config, &text, FakeTerminal::default()).without_signal_watcher();

    let mut output = Vec::new();
    picker
        .run(ScriptedInput::new(&[ENTER]), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("\x1b[?25l"));
    assert!(output.ends_with("\x1b[?25h"));
    // One frame of six lines drawn, then erased
    assert_eq!(output.matches("\x1b[1A\x1b[2K").count(), 6);
}

#[test]
fn test_empty_item_list_never_enters_raw_mode() {
    let config = MenuConfig::default();
    let text = MenuText::default();
    let terminal = FakeTerminal::default();
    let picker = Picker::new(&[], &config, &text, terminal.clone()).without_signal_watcher();

    let result = picker.run(ScriptedInput::new(&[ENTER]), Vec::new()).unwrap();

    assert_eq!(result, SelectionResult::cancelled());
    assert!(terminal.events().is_empty());
}

#[test]
fn test_raw_mode_unavailable_is_reported() {
    let items = items();
    let config = MenuConfig::default();
    let text = MenuText::default();
    let picker =
        Picker::new(&items, &config, &text, FakeTerminal::unavailable()).without_signal_watcher();

    let result = picker.run(ScriptedInput::new(&[ENTER]), Vec::new());

    assert!(matches!(result, Err(Error::RawModeUnavailable(_))));
}

#[test]
fn test_fallback_prompt_when_raw_mode_unavailable() {
    let items = items();
    let config = MenuConfig::default();
    let text = MenuText::default();
    let picker =
        Picker::new(&items, &config, &text, FakeTerminal::unavailable()).without_signal_watcher();

    let mut output = Vec::new();
    let result = picker
        .run_with_fallback(Cursor::new("2\n"), &mut output)
        .unwrap();
    assert!(result.confirmed);
    assert_eq!(result.item.unwrap().name, "build");
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("Production bundle").count(), 1);

    let result = picker
        .run_with_fallback(Cursor::new("q\n"), Vec::new())
        .unwrap();
    assert!(!result.confirmed);
    assert!(result.item.is_none());
}

#[test]
fn test_invalid_config_rejected_before_raw_mode() {
    let items = items();
    let config = MenuConfig {
        viewport_height: 0,
        ..Default::default()
    };
    let text = MenuText::default();
    let terminal = FakeTerminal::default();
    let picker = Picker::new(&items, &config, &text, terminal.clone()).without_signal_watcher();

    let result = picker.run(ScriptedInput::new(&[ENTER]), Vec::new());

    assert!(matches!(result, Err(Error::InvalidViewportHeight)));
    assert!(terminal.events().is_empty());
}

/// Loads items and settings from disk and runs a session with them
#[test]
fn test_complete_picker_workflow() {
    let mut items_file = NamedTempFile::new().unwrap();
    write!(
        items_file,
        r#"
- name: dev
  command: npm run dev
- name: build
  command: npm run build
- name: lint
  command: npm run lint
  description: Check sources
"#
    )
    .unwrap();

    let mut settings_file = NamedTempFile::new().unwrap();
    write!(
        settings_file,
        r#"
key_scheme: custom
up_key: k
down_key: j
color_scheme: none
viewport_height: 2
text:
  title: Scripts
"#
    )
    .unwrap();

    let items = get_items(items_file.path().to_str().unwrap()).unwrap();
    let settings = get_settings(settings_file.path().to_str().unwrap()).unwrap();
    let config = settings.menu_config().unwrap();
    assert!(config.color_palette.is_empty());

    let picker = Picker::new(&items, &config, &settings.text, FakeTerminal::default())
        .without_signal_watcher();
    let mut output = Vec::new();
    let result = picker
        .run(ScriptedInput::new(&[b"j", b"j", b"j", ENTER]), &mut output)
        .unwrap();

    assert_eq!(result.item.unwrap().command, "npm run lint");
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Scripts"));
    assert!(output.contains("3/3"));
}
