//! In-place drawing of the picker.
//!
//! Each frame first erases exactly the lines the previous frame printed,
//! then prints the new one. The screen is never cleared as a whole, so
//! scrollback above the picker is left alone.

use std::io::Write;

use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::config::MenuConfig;
use crate::error::Result;
use crate::items::Item;
use crate::state::MenuState;
use crate::text::MenuText;

/// Names are padded to at least this many columns.
pub const MIN_NAME_WIDTH: usize = 20;

const ACCENT: Color = Color::DarkMagenta;
const MUTED: Color = Color::DarkGrey;
const SELECTION_MARKER: &str = "▶ ";
const FILTER_CARET: &str = "█";

pub struct Renderer<'a> {
    config: &'a MenuConfig,
    text: &'a MenuText,
    hint: String,
}

fn end_line<W: Write>(out: &mut W, lines: &mut usize) -> Result<()> {
    queue!(out, Print("\r\n"))?;
    *lines += 1;
    Ok(())
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a MenuConfig, text: &'a MenuText) -> Result<Self> {
        text.validate()?;
        let hint = config.key_scheme.hint(text)?;

        Ok(Self { config, text, hint })
    }

    fn palette_color(&self, position: usize) -> Option<Color> {
        let palette = &self.config.color_palette;
        if palette.is_empty() {
            None
        } else {
            Some(palette[position % palette.len()])
        }
    }

    /// Moves up over the previous frame, clearing each line on the way.
    pub fn erase<W: Write>(&self, out: &mut W, state: &mut MenuState) -> Result<()> {
        for _ in 0..state.previous_rendered_line_count {
            queue!(out, MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
        state.previous_rendered_line_count = 0;
        out.flush()?;
        Ok(())
    }

    pub fn draw<W: Write>(&self, out: &mut W, state: &mut MenuState, items: &[Item]) -> Result<()> {
        self.erase(out, state)?;

        let mut lines = 0;

        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(ACCENT),
            Print(&self.text.title),
            SetAttribute(Attribute::Reset),
        )?;
        end_line(out, &mut lines)?;

        self.draw_status_line(out, state)?;
        end_line(out, &mut lines)?;
        end_line(out, &mut lines)?;

        if state.filtered_len() == 0 {
            queue!(
                out,
                SetForegroundColor(MUTED),
                Print("  "),
                Print(&self.text.no_matches),
                ResetColor,
            )?;
            end_line(out, &mut lines)?;
        } else {
            self.draw_rows(out, state, items, &mut lines)?;

            if state.filtered_len() > state.viewport_height {
                let count = self.text.count_line(state.cursor + 1, state.filtered_len())?;
                queue!(out, SetForegroundColor(MUTED), Print("  "), Print(count), ResetColor)?;
                end_line(out, &mut lines)?;
            }
        }

        out.flush()?;
        state.previous_rendered_line_count = lines;
        Ok(())
    }

    fn draw_status_line<W: Write>(&self, out: &mut W, state: &MenuState) -> Result<()> {
        if state.filtering {
            queue!(
                out,
                SetForegroundColor(MUTED),
                Print("  "),
                Print(&self.text.filter_label),
                ResetColor,
                Print(&state.filter_text),
                Print(FILTER_CARET),
            )?;
        } else if !state.filter_text.is_empty() {
            queue!(
                out,
                SetForegroundColor(MUTED),
                Print("  "),
                Print(&self.text.filter_active_label),
                ResetColor,
                Print(&state.filter_text),
            )?;
        } else {
            queue!(out, SetForegroundColor(MUTED), Print("  "), Print(&self.hint), ResetColor)?;
        }
        Ok(())
    }

    fn draw_rows<W: Write>(
        &self,
        out: &mut W,
        state: &MenuState,
        items: &[Item],
        lines: &mut usize,
    ) -> Result<()> {
        let range = state.visible_range();
        let visible = &state.filtered_indexes()[range.clone()];

        let width = visible
            .iter()
            .map(|&index| items[index].name.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH);

        for (position, &index) in range.zip(visible) {
            let item = &items[index];
            let name = format!("{:<width$}", item.name);
            let color = self.palette_color(position);

            if position == state.cursor {
                queue!(
                    out,
                    Print("  "),
                    SetAttribute(Attribute::Bold),
                    SetForegroundColor(ACCENT),
                    Print(SELECTION_MARKER),
                    SetForegroundColor(color.unwrap_or(ACCENT)),
                    Print(name),
                    SetAttribute(Attribute::Reset),
                )?;
            } else if let Some(color) = color {
                queue!(out, Print("    "), SetForegroundColor(color), Print(name), ResetColor)?;
            } else {
                queue!(out, Print("    "), Print(name))?;
            }

            queue!(
                out,
                Print("  "),
                SetForegroundColor(MUTED),
                Print(item.detail()),
                ResetColor,
            )?;
            end_line(out, lines)?;
        }

        Ok(())
    }
}
