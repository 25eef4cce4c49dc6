//! Merging command-line options into the loaded settings and items.

use itertools::Itertools;
use log::debug;
use rust_picker_core::config::Settings;
use rust_picker_core::error::{Error, Result};
use rust_picker_core::items::Item;

use crate::cli_args::Args;

/// Applies the options given on the command line on top of the settings file.
pub fn apply_overrides(mut settings: Settings, args: &Args) -> Settings {
    if let Some(key_scheme) = &args.key_scheme {
        settings.key_scheme = Some(key_scheme.clone());
    }
    if args.up_key.is_some() {
        settings.up_key = args.up_key;
    }
    if args.down_key.is_some() {
        settings.down_key = args.down_key;
    }
    if let Some(colors) = &args.colors {
        // A preset named on the command line also replaces an explicit palette
        settings.color_scheme = Some(colors.clone());
        settings.palette = None;
    }
    if args.height.is_some() {
        settings.viewport_height = args.height;
    }

    settings
}

/// Keeps the items of one group, compared case-insensitively. `None` keeps
/// every item.
///
/// # Errors
///
/// Returns [`Error::UnknownGroup`] listing the groups that do exist when no
/// item belongs to `group`.
pub fn select_group(items: Vec<Item>, group: Option<&str>) -> Result<Vec<Item>> {
    let Some(group) = group else {
        return Ok(items);
    };

    let (selected, others): (Vec<Item>, Vec<Item>) = items
        .into_iter()
        .partition(|item| item.group.eq_ignore_ascii_case(group));

    if selected.is_empty() {
        let available = others
            .iter()
            .map(|item| item.group.as_str())
            .filter(|group| !group.is_empty())
            .unique()
            .sorted()
            .join(", ");

        return Err(Error::UnknownGroup {
            group: group.to_string(),
            available,
        });
    }

    debug!("Offering {} items of group `{}`", selected.len(), group);
    Ok(selected)
}

/// Quotes a key for a single-quoted YAML scalar.
fn yaml_char(key: u8) -> String {
    let key = key as char;
    if key == '\'' {
        "''''".to_string()
    } else {
        format!("'{key}'")
    }
}

/// Settings file lines binding the `custom` key scheme to two keys.
pub fn custom_keys_snippet(up: u8, down: u8) -> String {
    format!(
        "key_scheme: custom\nup_key: {}\ndown_key: {}",
        yaml_char(up),
        yaml_char(down)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_char_escapes_quote() {
        assert_eq!(yaml_char(b'k'), "'k'");
        assert_eq!(yaml_char(b'#'), "'#'");
        assert_eq!(yaml_char(b'\''), "''''");
    }
}
