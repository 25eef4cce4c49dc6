//! Session configuration and settings file paths.
//!
//! [`MenuConfig`] is what a picker session runs with. [`Settings`] is its
//! on-disk form, read from YAML and never written back.

use crossterm::style::Color;
use serde::Deserialize;

use crate::colors::{palette_from_definitions, ColorDefinition, ColorScheme};
use crate::error::{Error, Result};
use crate::key_scheme::KeyScheme;
use crate::text::MenuText;

/// Default path for the settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.rust-picker/settings.yml";
/// Default path for the item list
const DEFAULT_ITEMS_PATH: &str = "~/.rust-picker/items.yml";

/// Rows shown at once before the list scrolls
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 15;

/// Conventional exit status for a process stopped by an interrupt
pub const DEFAULT_INTERRUPT_EXIT_CODE: i32 = 130;

/// Immutable configuration of one picker session.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    pub key_scheme: KeyScheme,
    /// Row colors; empty means default terminal coloring.
    pub color_palette: Vec<Color>,
    pub viewport_height: usize,
    /// Exit status used when a termination signal ends the process.
    pub interrupt_exit_code: i32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            key_scheme: KeyScheme::default(),
            color_palette: ColorScheme::default().palette(),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            interrupt_exit_code: DEFAULT_INTERRUPT_EXIT_CODE,
        }
    }
}

impl MenuConfig {
    pub fn validate(&self) -> Result<()> {
        if self.viewport_height == 0 {
            return Err(Error::InvalidViewportHeight);
        }
        self.key_scheme.validate()
    }
}

/// Settings as written in the YAML file. Every field is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub key_scheme: Option<String>,
    pub up_key: Option<char>,
    pub down_key: Option<char>,
    pub color_scheme: Option<String>,
    /// Explicit palette; takes precedence over `color_scheme`.
    pub palette: Option<Vec<ColorDefinition>>,
    pub viewport_height: Option<usize>,
    pub interrupt_exit_code: Option<i32>,
    pub text: MenuText,
}

fn key_byte(key: Option<char>) -> Result<Option<u8>> {
    match key {
        None => Ok(None),
        Some(c) if c.is_ascii() => Ok(Some(c as u8)),
        Some(c) => Err(Error::NonAsciiKey(c)),
    }
}

impl Settings {
    /// Resolves the settings into a validated session configuration.
    pub fn menu_config(&self) -> Result<MenuConfig> {
        let key_scheme = match &self.key_scheme {
            Some(name) => {
                KeyScheme::from_parts(name, key_byte(self.up_key)?, key_byte(self.down_key)?)?
            }
            None => KeyScheme::default(),
        };

        let color_palette = match (&self.palette, &self.color_scheme) {
            (Some(definitions), _) => palette_from_definitions(definitions)?,
            (None, Some(scheme)) => scheme.parse::<ColorScheme>()?.palette(),
            (None, None) => ColorScheme::default().palette(),
        };

        let config = MenuConfig {
            key_scheme,
            color_palette,
            viewport_height: self.viewport_height.unwrap_or(DEFAULT_VIEWPORT_HEIGHT),
            interrupt_exit_code: self
                .interrupt_exit_code
                .unwrap_or(DEFAULT_INTERRUPT_EXIT_CODE),
        };
        config.validate()?;

        Ok(config)
    }
}

fn resolve_path(path_arg: &Option<String>, default: &str) -> String {
    let path = match path_arg {
        Some(path) => path,
        None => default,
    };

    shellexpand::tilde(path).to_string()
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_picker_core::config::get_settings_path;
///
/// let default_path = get_settings_path(&None);
/// assert!(default_path.ends_with("settings.yml"));
/// ```
pub fn get_settings_path(settings_path_arg: &Option<String>) -> String {
    resolve_path(settings_path_arg, DEFAULT_SETTINGS_PATH)
}

/// Resolves the item list path, expanding `~`.
pub fn get_items_path(items_path_arg: &Option<String>) -> String {
    resolve_path(items_path_arg, DEFAULT_ITEMS_PATH)
}
