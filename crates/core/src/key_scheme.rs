//! Maps navigation intents to concrete keys.

use crate::error::{Error, Result};
use crate::keys::{is_bindable, key_display_name, Key, FILTER_KEY};
use crate::text::{render_template, MenuText};

const QUIT_LETTER: u8 = b'q';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyScheme {
    /// Arrow keys only.
    #[default]
    Arrows,
    /// `w` for up, `s` for down, arrows still work.
    TwoKeys,
    /// Two user-chosen printable bytes, arrows still work.
    Custom { up: u8, down: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Quit,
}

fn eq_ignore_case(a: u8, b: u8) -> bool {
    a.eq_ignore_ascii_case(&b)
}

impl KeyScheme {
    /// Builds a custom scheme, rejecting bindings that would be ambiguous.
    pub fn custom(up: u8, down: u8) -> Result<Self> {
        let scheme = KeyScheme::Custom { up, down };
        scheme.validate()?;
        Ok(scheme)
    }

    /// Builds a scheme from its configuration name.
    pub fn from_parts(name: &str, up: Option<u8>, down: Option<u8>) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "arrows" => Ok(KeyScheme::Arrows),
            "two-keys" | "two_keys" | "wasd" => Ok(KeyScheme::TwoKeys),
            "custom" => match (up, down) {
                (Some(up), Some(down)) => KeyScheme::custom(up, down),
                _ => Err(Error::MissingCustomKey),
            },
            _ => Err(Error::UnknownKeyScheme(name.to_string())),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let KeyScheme::Custom { up, down } = *self else {
            return Ok(());
        };

        for key in [up, down] {
            if key == FILTER_KEY {
                return Err(Error::ReservedKey(key));
            }
            if !is_bindable(key) {
                return Err(Error::UnprintableKey(key));
            }
        }

        if eq_ignore_case(up, down) {
            return Err(Error::DuplicateKeyBinding(up));
        }

        Ok(())
    }

    /// True when a navigation key shadows the `q` quit letter, leaving
    /// Ctrl-C as the only way out.
    pub fn quit_letter_suppressed(&self) -> bool {
        match *self {
            KeyScheme::Custom { up, down } => {
                eq_ignore_case(up, QUIT_LETTER) || eq_ignore_case(down, QUIT_LETTER)
            }
            _ => false,
        }
    }

    pub fn is_quit(&self, byte: u8) -> bool {
        eq_ignore_case(byte, QUIT_LETTER) && !self.quit_letter_suppressed()
    }

    pub fn is_up(&self, byte: u8) -> bool {
        match *self {
            KeyScheme::Arrows => false,
            KeyScheme::TwoKeys => eq_ignore_case(byte, b'w'),
            KeyScheme::Custom { up, .. } => eq_ignore_case(byte, up),
        }
    }

    pub fn is_down(&self, byte: u8) -> bool {
        match *self {
            KeyScheme::Arrows => false,
            KeyScheme::TwoKeys => eq_ignore_case(byte, b's'),
            KeyScheme::Custom { down, .. } => eq_ignore_case(byte, down),
        }
    }

    /// Resolves a key pressed while browsing. Quitting wins over navigation.
    pub fn intent(&self, key: Key) -> Option<Intent> {
        match key {
            Key::Interrupt => Some(Intent::Quit),
            Key::ArrowUp => Some(Intent::Up),
            Key::ArrowDown => Some(Intent::Down),
            Key::Char(byte) if self.is_quit(byte) => Some(Intent::Quit),
            Key::Char(byte) if self.is_up(byte) => Some(Intent::Up),
            Key::Char(byte) if self.is_down(byte) => Some(Intent::Down),
            _ => None,
        }
    }

    /// The static hint line shown while browsing without a filter.
    pub fn hint(&self, text: &MenuText) -> Result<String> {
        let quit = if self.quit_letter_suppressed() {
            text.interrupt_quit_hint.clone()
        } else {
            text.quit_hint.clone()
        };

        match *self {
            KeyScheme::Arrows => render_template(&text.arrows_hint, &[("quit", quit)]),
            KeyScheme::TwoKeys => render_template(&text.two_keys_hint, &[("quit", quit)]),
            KeyScheme::Custom { up, down } => render_template(
                &text.custom_hint,
                &[
                    ("up", key_display_name(up).to_lowercase()),
                    ("down", key_display_name(down).to_lowercase()),
                    ("quit", quit),
                ],
            ),
        }
    }
}
