//! Line-buffered numbered prompt, used when raw mode cannot be entered.

use std::io::{BufRead, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use log::debug;

use crate::error::Result;
use crate::items::{Item, SelectionResult};
use crate::text::{render_template, MenuText};

const NAME_WIDTH: usize = 30;
const ACCENT: Color = Color::DarkMagenta;
const ERROR: Color = Color::Red;

enum Answer {
    Quit,
    Choice(usize),
    Invalid,
}

fn parse_answer(line: &str, count: usize) -> Answer {
    let answer = line.trim();
    if answer == "q" {
        return Answer::Quit;
    }

    // `parse` alone would also take a leading `+`
    if answer.is_empty() || !answer.bytes().all(|byte| byte.is_ascii_digit()) {
        return Answer::Invalid;
    }

    match answer.parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Answer::Choice(number - 1),
        _ => Answer::Invalid,
    }
}

fn print_listing<W: Write>(
    items: &[Item],
    palette: &[Color],
    text: &MenuText,
    output: &mut W,
) -> Result<()> {
    queue!(
        output,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(ACCENT),
        Print(&text.fallback_title),
        SetAttribute(Attribute::Reset),
        Print("\n\n"),
    )?;

    for (i, item) in items.iter().enumerate() {
        let row = format!("  {:>2}. {:<NAME_WIDTH$} {}", i + 1, item.name, item.detail());
        if palette.is_empty() {
            queue!(output, Print(row), Print("\n"))?;
        } else {
            queue!(
                output,
                SetForegroundColor(palette[i % palette.len()]),
                Print(row),
                ResetColor,
                Print("\n"),
            )?;
        }
    }

    queue!(output, Print("\n"))?;
    output.flush()?;
    Ok(())
}

/// Prints every item once, then reads answers line by line until one is
/// valid. `q` and end of input both cancel.
pub fn run_fallback_menu<R: BufRead, W: Write>(
    items: &[Item],
    palette: &[Color],
    text: &MenuText,
    mut input: R,
    mut output: W,
) -> Result<SelectionResult> {
    if items.is_empty() {
        return Ok(SelectionResult::cancelled());
    }

    let count = [("count", items.len().to_string())];
    let prompt = render_template(&text.fallback_prompt, &count)?;
    let invalid = render_template(&text.fallback_invalid, &count)?;

    print_listing(items, palette, text, &mut output)?;
    queue!(output, Print(&prompt))?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Fallback input closed without a choice");
            return Ok(SelectionResult::cancelled());
        }

        match parse_answer(&line, items.len()) {
            Answer::Quit => return Ok(SelectionResult::cancelled()),
            Answer::Choice(index) => return Ok(SelectionResult::selected(items[index].clone())),
            Answer::Invalid => {
                queue!(output, SetForegroundColor(ERROR), Print(&invalid), ResetColor)?;
                output.flush()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn items() -> Vec<Item> {
        vec![
            Item::new("dev", "vite"),
            Item::new("build", "vite build").with_description("Production bundle"),
            Item::new("test:watch", "vitest --watch"),
        ]
    }

    fn run(input: &str) -> (SelectionResult, String) {
        let mut output = Vec::new();
        let result = run_fallback_menu(
            &items(),
            &[],
            &MenuText::default(),
            Cursor::new(input.as_bytes()),
            &mut output,
        )
        .unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_number_selects_item() {
        let (result, output) = run("2\n");
        assert!(result.confirmed);
        assert_eq!(result.item.unwrap().name, "build");
        assert!(output.contains(&format!("   2. {:<30} Production bundle", "build")));
        assert!(output.contains("Enter a number (1-3) or q to quit: "));
    }

    #[test]
    fn test_q_cancels() {
        let (result, _) = run("q\n");
        assert_eq!(result, SelectionResult::cancelled());

        let (result, _) = run("  q  \n");
        assert!(!result.confirmed);
    }

    #[test]
    fn test_only_plain_answers_accepted() {
        let (result, output) = run("Q\n+2\n 2 \n");
        assert_eq!(result.item.unwrap().name, "build");
        assert_eq!(output.matches("Invalid choice.").count(), 2);
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let (result, output) = run("0\n4\nabc\n\n3\n");
        assert_eq!(result.item.unwrap().name, "test:watch");
        assert_eq!(
            output
                .matches("Invalid choice. Enter a number between 1 and 3, or q: ")
                .count(),
            4
        );
    }

    #[test]
    fn test_listing_printed_once() {
        let (_, output) = run("9\n1\n");
        assert_eq!(output.matches("Available commands").count(), 1);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (result, _) = run("");
        assert!(!result.confirmed);
        assert!(result.item.is_none());
    }

    #[test]
    fn test_palette_colors_rows() {
        let mut output = Vec::new();
        run_fallback_menu(
            &items(),
            &[Color::DarkCyan],
            &MenuText::default(),
            Cursor::new("1\n".as_bytes()),
            &mut output,
        )
        .unwrap();

        let mut expected = Vec::new();
        queue!(expected, SetForegroundColor(Color::DarkCyan)).unwrap();
        let expected = String::from_utf8(expected).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(&expected).count(), 3);
    }
}
