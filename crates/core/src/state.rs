//! Navigation and filter state for one picker session.
//!
//! The state works on indexes into the caller's item slice; the slice itself
//! is never modified. `cursor` and `scroll` always index the filtered view.

use crate::items::{Item, SelectionResult};
use crate::key_scheme::{Intent, KeyScheme};
use crate::keys::{Key, FILTER_KEY};

/// What the session loop should do after a key was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done(SelectionResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub cursor: usize,
    pub scroll: usize,
    pub filter_text: String,
    /// True while keystrokes edit the filter instead of navigating.
    pub filtering: bool,
    /// Lines drawn by the last render, erased before the next one.
    pub previous_rendered_line_count: usize,
    pub viewport_height: usize,
    filtered: Vec<usize>,
}

/// Indexes of the items whose name, command or description contain
/// `filter`, ignoring case. An empty filter keeps every item.
pub fn apply_filter(items: &[Item], filter: &str) -> Vec<usize> {
    let filter = filter.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.is_empty() || item.matches(&filter))
        .map(|(index, _)| index)
        .collect()
}

impl MenuState {
    pub fn new(items: &[Item], viewport_height: usize) -> Self {
        Self {
            cursor: 0,
            scroll: 0,
            filter_text: String::new(),
            filtering: false,
            previous_rendered_line_count: 0,
            viewport_height: viewport_height.max(1),
            filtered: apply_filter(items, ""),
        }
    }

    /// Indexes into the full item list, in display order.
    pub fn filtered_indexes(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The items of the filtered view, in display order.
    pub fn filtered_view<'a>(&'a self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
        self.filtered.iter().map(move |&index| &items[index])
    }

    /// Range of filtered positions currently on screen.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.scroll + self.viewport_height).min(self.filtered.len());
        self.scroll.min(end)..end
    }

    pub fn selected<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        self.filtered.get(self.cursor).map(|&index| &items[index])
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.cursor < self.scroll {
                self.scroll -= 1;
            }
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
            if self.cursor >= self.scroll + self.viewport_height {
                self.scroll += 1;
            }
        }
    }

    /// Applies one key and reports whether the session is over.
    pub fn handle_key(&mut self, key: Key, items: &[Item], key_scheme: &KeyScheme) -> Step {
        if self.filtering {
            self.handle_filter_key(key, items);
            return Step::Continue;
        }

        match key {
            Key::FilterToggle => {
                self.filtering = true;
                self.filter_text.clear();
                self.refilter(items);
                self.reset_position();
            }
            Key::Enter => {
                if let Some(item) = self.selected(items) {
                    return Step::Done(SelectionResult::selected(item.clone()));
                }
            }
            other => match key_scheme.intent(other) {
                Some(Intent::Quit) => return Step::Done(SelectionResult::cancelled()),
                Some(Intent::Up) => self.move_up(),
                Some(Intent::Down) => self.move_down(),
                None => {}
            },
        }

        Step::Continue
    }

    fn handle_filter_key(&mut self, key: Key, items: &[Item]) {
        match key {
            Key::Escape => {
                self.filtering = false;
                self.filter_text.clear();
            }
            Key::Enter => {
                self.filtering = false;
            }
            Key::Backspace => {
                self.filter_text.pop();
            }
            Key::FilterToggle => self.filter_text.push(FILTER_KEY as char),
            Key::Char(byte) => self.filter_text.push(byte as char),
            _ => return,
        }

        self.refilter(items);
        self.reset_position();
    }

    fn refilter(&mut self, items: &[Item]) {
        self.filtered = apply_filter(items, &self.filter_text);
        if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len().saturating_sub(1);
        }
    }

    fn reset_position(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
    }
}
