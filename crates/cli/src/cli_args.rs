//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate. Every option that overlaps the settings file takes
//! precedence over it.

use clap::Parser;

/// Command-line arguments for the rust-picker CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_picker_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rp", "--group", "frontend"]);
/// assert_eq!(args.group.as_deref(), Some("frontend"));
/// ```
#[derive(Parser, Debug, Default)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the item list YAML.
    ///
    /// If not provided, defaults to `~/.rust-picker/items.yml`.
    #[arg(long, short = 'i')]
    pub items_path: Option<String>,

    /// Path to the settings YAML.
    ///
    /// If not provided, defaults to `~/.rust-picker/settings.yml`.
    #[arg(long, short = 's')]
    pub settings_path: Option<String>,

    /// Navigation keys: `arrows`, `two-keys` or `custom`.
    #[arg(long, short = 'k')]
    pub key_scheme: Option<String>,

    /// Up key for the `custom` key scheme.
    #[arg(long)]
    pub up_key: Option<char>,

    /// Down key for the `custom` key scheme.
    #[arg(long)]
    pub down_key: Option<char>,

    /// Row colors: `rainbow`, `deuteranopia`, `tritanopia`, `high-contrast`
    /// or `none`.
    #[arg(long)]
    pub colors: Option<String>,

    /// Number of rows shown before the list scrolls.
    #[arg(long)]
    pub height: Option<usize>,

    /// Only offer items of this group (case-insensitive).
    #[arg(long)]
    pub group: Option<String>,

    /// Press two keys to print a `custom` key scheme settings snippet, then exit.
    #[arg(long, action)]
    pub capture_keys: bool,

    /// Use the numbered line prompt even when a terminal is available.
    #[arg(long, action)]
    pub fallback: bool,
}
