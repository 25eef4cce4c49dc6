//! User-facing strings for the picker.
//!
//! The engine never composes language of its own: every label, hint and
//! prompt comes from a [`MenuText`] supplied by the caller. Strings that
//! carry values are `leon` templates, e.g. `{position}/{total}`.

use std::collections::HashMap;

use leon::Template;
use serde::Deserialize;

use crate::error::Result;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MenuText {
    pub title: String,
    pub filter_label: String,
    pub filter_active_label: String,
    pub no_matches: String,
    /// Scroll indicator. Placeholders: `{position}`, `{total}`.
    pub count: String,
    /// Placeholders: `{quit}`.
    pub arrows_hint: String,
    /// Placeholders: `{quit}`.
    pub two_keys_hint: String,
    /// Placeholders: `{up}`, `{down}`, `{quit}`.
    pub custom_hint: String,
    pub quit_hint: String,
    pub interrupt_quit_hint: String,
    pub fallback_title: String,
    /// Placeholders: `{count}`.
    pub fallback_prompt: String,
    /// Placeholders: `{count}`.
    pub fallback_invalid: String,
    pub cancelled: String,
}

impl Default for MenuText {
    fn default() -> Self {
        Self {
            title: "Select a command".to_string(),
            filter_label: "Filter: ".to_string(),
            filter_active_label: "Filtered by: ".to_string(),
            no_matches: "No matching items".to_string(),
            count: "{position}/{total}".to_string(),
            arrows_hint: "↑/↓ navigate · / filter · enter select · {quit}".to_string(),
            two_keys_hint: "w/s navigate · / filter · enter select · {quit}".to_string(),
            custom_hint: "{up}/{down} navigate · / filter · enter select · {quit}".to_string(),
            quit_hint: "q quit".to_string(),
            interrupt_quit_hint: "ctrl+c quit".to_string(),
            fallback_title: "Available commands".to_string(),
            fallback_prompt: "Enter a number (1-{count}) or q to quit: ".to_string(),
            fallback_invalid: "Invalid choice. Enter a number between 1 and {count}, or q: "
                .to_string(),
            cancelled: "Cancelled.".to_string(),
        }
    }
}

/// Renders a `leon` template with the given placeholder values.
pub fn render_template(template: &str, values: &[(&str, String)]) -> Result<String> {
    let template = Template::parse(template)?;
    let context: HashMap<String, String> = values
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();

    Ok(template.render(&context)?)
}

impl MenuText {
    /// Renders every template once with placeholder values so that a broken
    /// override is reported before the terminal is touched.
    pub fn validate(&self) -> Result<()> {
        let sample = |key: &'static str| (key, "0".to_string());

        render_template(&self.count, &[sample("position"), sample("total")])?;
        render_template(&self.arrows_hint, &[sample("quit")])?;
        render_template(&self.two_keys_hint, &[sample("quit")])?;
        render_template(
            &self.custom_hint,
            &[sample("up"), sample("down"), sample("quit")],
        )?;
        render_template(&self.fallback_prompt, &[sample("count")])?;
        render_template(&self.fallback_invalid, &[sample("count")])?;

        Ok(())
    }

    pub fn count_line(&self, position: usize, total: usize) -> Result<String> {
        render_template(
            &self.count,
            &[("position", position.to_string()), ("total", total.to_string())],
        )
    }
}
