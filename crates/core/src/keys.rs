//! Keystroke decoding.
//!
//! Input arrives as raw byte chunks of at most [`KEY_CHUNK_SIZE`] bytes. Only
//! `ESC [ A` and `ESC [ B` are understood as escape sequences; every other
//! multi-byte sequence is dropped.

use std::io::{self, Read};

use log::debug;

use crate::error::{Error, Result};
use crate::terminal::{RawModeGuard, TerminalMode};

pub const KEY_CHUNK_SIZE: usize = 4;

/// Consecutive empty reads tolerated before the stream counts as closed.
const MAX_EMPTY_READS: usize = 16;

const CTRL_C: u8 = 3;
const BACKSPACE: u8 = 8;
const ENTER: u8 = 13;
const ESCAPE: u8 = 27;
const DELETE: u8 = 127;
pub const FILTER_KEY: u8 = b'/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    /// A bare ESC byte with nothing following it in the same chunk.
    Escape,
    Backspace,
    Interrupt,
    FilterToggle,
    /// Printable ASCII in `32..=126`, except `/`.
    Char(u8),
    Ignored,
}

/// Classifies one chunk of raw input. Returns `None` for an empty chunk.
pub fn decode(chunk: &[u8]) -> Option<Key> {
    let key = match chunk {
        [] => return None,
        [ESCAPE] => Key::Escape,
        [ESCAPE, b'[', b'A', ..] => Key::ArrowUp,
        [ESCAPE, b'[', b'B', ..] => Key::ArrowDown,
        [ESCAPE, ..] => {
            debug!("Dropping unsupported escape sequence {:?}", chunk);
            Key::Ignored
        }
        [ENTER, ..] => Key::Enter,
        [CTRL_C, ..] => Key::Interrupt,
        [BACKSPACE | DELETE, ..] => Key::Backspace,
        [FILTER_KEY, ..] => Key::FilterToggle,
        [byte @ 32..=126, ..] => Key::Char(*byte),
        _ => Key::Ignored,
    };

    Some(key)
}

/// Reads one key per chunk from a raw input stream.
pub struct KeyReader<R: Read> {
    input: R,
}

impl<R: Read> KeyReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Blocks until a key is available.
    ///
    /// Empty reads and `EINTR` are retried. A stream that keeps returning
    /// nothing is treated as closed and reported as `UnexpectedEof`.
    pub fn read_key(&mut self) -> io::Result<Key> {
        let mut buffer = [0u8; KEY_CHUNK_SIZE];
        let mut empty_reads = 0;

        loop {
            let read = match self.input.read(&mut buffer) {
                Ok(read) => read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            match decode(&buffer[..read]) {
                Some(key) => return Ok(key),
                None => {
                    empty_reads += 1;
                    if empty_reads >= MAX_EMPTY_READS {
                        return Err(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            "input stream closed",
                        ));
                    }
                }
            }
        }
    }
}

/// Enters raw mode and returns the first printable key (`33..=126`, not `/`).
///
/// Escape sequences, Enter, Tab and Backspace are skipped. Ctrl-C aborts
/// with [`Error::Interrupted`].
pub fn capture_key<T: TerminalMode, R: Read>(terminal: &T, input: R) -> Result<u8> {
    let _guard = RawModeGuard::enter(terminal)?;
    let mut reader = KeyReader::new(input);

    loop {
        match reader.read_key()? {
            Key::Interrupt => return Err(Error::Interrupted),
            Key::Char(byte) if is_bindable(byte) => return Ok(byte),
            _ => {}
        }
    }
}

/// Whether a byte may be bound to navigation.
pub fn is_bindable(byte: u8) -> bool {
    (33..=126).contains(&byte) && byte != FILTER_KEY
}

/// Human-readable label for a key byte.
pub fn key_display_name(byte: u8) -> String {
    if (33..=126).contains(&byte) {
        (byte as char).to_ascii_uppercase().to_string()
    } else {
        format!("0x{byte:02x}")
    }
}
