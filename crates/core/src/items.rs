use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A single entry offered by the picker.
///
/// Items are never mutated once loaded. Names do not have to be unique; a
/// selection always refers to a position in the filtered view.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub group: String,
}

impl Item {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            description: String::new(),
            group: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Text shown next to the name: the description, or the command when
    /// there is no description.
    pub fn detail(&self) -> &str {
        if self.description.is_empty() {
            &self.command
        } else {
            &self.description
        }
    }

    /// Case-insensitive substring match against name, command and description.
    ///
    /// `lowercase_filter` must already be lower-cased.
    pub fn matches(&self, lowercase_filter: &str) -> bool {
        [&self.name, &self.command, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(lowercase_filter))
    }
}

impl Display for Item {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.name, self.detail())
    }
}

/// Outcome of one picker session.
///
/// `confirmed` is only ever true when `item` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionResult {
    pub item: Option<Item>,
    pub confirmed: bool,
}

impl SelectionResult {
    pub fn selected(item: Item) -> Self {
        Self {
            item: Some(item),
            confirmed: true,
        }
    }

    pub fn cancelled() -> Self {
        Self::default()
    }
}
