//! Reading the item list and settings files.
//!
//! Both files are YAML. Nothing here ever writes to disk.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::items::Item;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads the items offered by the picker.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or does not match the item structure
/// - The list is empty
pub fn get_items(items_path: &str) -> Result<Vec<Item>> {
    let reader = get_reader("items", items_path)?;

    let items: Vec<Item> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "items".to_string(),
            items_path.to_string(),
            e,
        )
    })?;

    if items.is_empty() {
        return Err(Error::empty_item_list(items_path.to_string()));
    }

    debug!("Loaded {} items from `{}`", items.len(), items_path);
    Ok(items)
}

/// Reads the settings file, falling back to defaults when it does not exist.
pub fn get_settings(settings_path: &str) -> Result<Settings> {
    if !Path::new(settings_path).exists() {
        debug!("No settings file at `{}`, using defaults", settings_path);
        return Ok(Settings::default());
    }

    let reader = get_reader("settings", settings_path)?;

    // An empty file deserializes to `None` rather than an empty mapping
    let settings: Option<Settings> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })?;

    debug!("Loaded settings from `{}`", settings_path);
    Ok(settings.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_get_items() {
        let file = write_temp(
            r#"
- name: dev
  command: vite
  description: Start the dev server
  group: frontend
- name: lint
  command: eslint .
"#,
        );

        let items = get_items(file.path().to_str().unwrap()).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].group, "frontend");
        assert_eq!(items[1].description, "");
        assert_eq!(items[1].detail(), "eslint .");
    }

    #[test]
    fn test_get_items_empty_list() {
        let file = write_temp("[]");
        let result = get_items(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::EmptyItemList { .. })));
    }

    #[test]
    fn test_get_items_missing_command() {
        let file = write_temp("- name: dev\n");
        let result = get_items(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_items_missing_file() {
        let result = get_items("/nonexistent/rust-picker/items.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_get_settings_missing_file_uses_defaults() {
        let settings = get_settings("/nonexistent/rust-picker/settings.yml").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_get_settings_empty_file_uses_defaults() {
        let file = write_temp("");
        let settings = get_settings(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_get_settings() {
        let file = write_temp(
            r#"
key_scheme: custom
up_key: k
down_key: j
color_scheme: tritanopia
viewport_height: 8
text:
  title: Scripts
"#,
        );

        let settings = get_settings(file.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.key_scheme.as_deref(), Some("custom"));
        assert_eq!(settings.up_key, Some('k'));
        assert_eq!(settings.viewport_height, Some(8));
        assert_eq!(settings.text.title, "Scripts");
        assert_eq!(settings.text.no_matches, "No matching items");
    }
}
