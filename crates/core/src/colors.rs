//! Color palettes for the picker rows.
//!
//! A palette is an ordered list of terminal colors; row `i` of the filtered
//! view is drawn with `palette[i % palette.len()]`. An empty palette means
//! default terminal coloring.

use std::str::FromStr;

use crossterm::style::Color;
use serde::Deserialize;

use crate::error::{Error, Result};

/// A user-supplied color, given as exactly one of an RGB triple, an ANSI
/// 256-color index or a named color.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(color_from_name(name)?),
            (None, None, None) => None,
            _ => unreachable!(), // This case is prevented by the earlier check
        })
    }
}

fn color_from_name(name: &str) -> Result<Color> {
    Ok(match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    })
}

/// Converts a list of definitions into a palette, skipping empty entries.
pub fn palette_from_definitions(definitions: &[ColorDefinition]) -> Result<Vec<Color>> {
    let mut palette = Vec::with_capacity(definitions.len());
    for definition in definitions {
        if let Some(color) = definition.as_crossterm_color()? {
            palette.push(color);
        }
    }
    Ok(palette)
}

/// Built-in palettes. The non-default ones are tuned for common forms of
/// color blindness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Rainbow,
    Deuteranopia,
    Tritanopia,
    HighContrast,
    None,
}

impl ColorScheme {
    pub fn palette(self) -> Vec<Color> {
        match self {
            ColorScheme::Rainbow => vec![
                Color::DarkRed,
                Color::DarkYellow,
                Color::DarkGreen,
                Color::DarkCyan,
                Color::DarkBlue,
                Color::DarkMagenta,
            ],
            ColorScheme::Deuteranopia => vec![
                Color::DarkBlue,
                Color::DarkYellow,
                Color::DarkCyan,
                Color::DarkMagenta,
                Color::Blue,
                Color::Yellow,
            ],
            ColorScheme::Tritanopia => vec![
                Color::DarkRed,
                Color::DarkMagenta,
                Color::DarkGreen,
                Color::Red,
                Color::Magenta,
                Color::Green,
            ],
            ColorScheme::HighContrast => vec![
                Color::Red,
                Color::Yellow,
                Color::Green,
                Color::Cyan,
                Color::Blue,
                Color::Magenta,
            ],
            ColorScheme::None => vec![],
        }
    }
}

impl FromStr for ColorScheme {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "rainbow" => Ok(ColorScheme::Rainbow),
            "deuteranopia" => Ok(ColorScheme::Deuteranopia),
            "tritanopia" => Ok(ColorScheme::Tritanopia),
            "high-contrast" | "high_contrast" => Ok(ColorScheme::HighContrast),
            "none" | "plain" => Ok(ColorScheme::None),
            _ => Err(Error::UnknownColorScheme(value.to_string())),
        }
    }
}
