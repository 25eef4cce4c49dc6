use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Raw terminal mode is unavailable: {}", _0)]
    RawModeUnavailable(String),

    #[error("Interrupted by user.")]
    Interrupted,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error parsing placeholder string: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering placeholder template string: {}", .0)]
    Render(#[from] RenderError),

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("No items were found in the item definition YAML. Is `{}` empty?", .path)]
    EmptyItemList { path: String },

    #[error("Unknown key scheme: `{}` (expected `arrows`, `two-keys` or `custom`)", .0)]
    UnknownKeyScheme(String),

    #[error("The custom key scheme needs both an up and a down key.")]
    MissingCustomKey,

    #[error("Key `{}` is reserved for filtering and cannot be bound to navigation.", *.0 as char)]
    ReservedKey(u8),

    #[error("Key 0x{:02x} is not a printable character.", .0)]
    UnprintableKey(u8),

    #[error("Key `{}` is not an ASCII character.", .0)]
    NonAsciiKey(char),

    #[error("Key `{}` is bound to both up and down.", *.0 as char)]
    DuplicateKeyBinding(u8),

    #[error("Viewport height must be at least 1.")]
    InvalidViewportHeight,

    #[error("Unknown color scheme: `{}`", .0)]
    UnknownColorScheme(String),

    #[error("No items in group `{}`. Available groups: {}", .group, .available)]
    UnknownGroup { group: String, available: String },
}

impl Error {
    pub fn empty_item_list(path: String) -> Self {
        Self::EmptyItemList { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
