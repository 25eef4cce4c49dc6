use clap::Parser;
use log::debug;
use rust_picker_core::config::{self, MenuConfig};
use rust_picker_core::error::Result;
use rust_picker_core::fallback::run_fallback_menu;
use rust_picker_core::file_handling;
use rust_picker_core::items::{Item, SelectionResult};
use rust_picker_core::key_scheme::KeyScheme;
use rust_picker_core::keys::{capture_key, key_display_name};
use rust_picker_core::menu::run_selection_menu;
use rust_picker_core::terminal::StdinTerminal;
use rust_picker_core::text::MenuText;
use std::io::{self, Write};
use std::process::ExitCode;

use rust_picker_cli::cli_args::Args;
use rust_picker_cli::overrides::{apply_overrides, custom_keys_snippet, select_group};

/// Asks for two keys in raw mode and prints them as settings lines.
fn capture_custom_keys() -> Result<()> {
    let terminal = StdinTerminal;
    let mut stderr = io::stderr();

    write!(stderr, "Press the key for up: ")?;
    stderr.flush()?;
    let up = capture_key(&terminal, io::stdin().lock())?;
    writeln!(stderr, "{}", key_display_name(up))?;

    write!(stderr, "Press the key for down: ")?;
    stderr.flush()?;
    let down = capture_key(&terminal, io::stdin().lock())?;
    writeln!(stderr, "{}", key_display_name(down))?;

    // Rejects a repeated key before it reaches a settings file
    KeyScheme::custom(up, down)?;

    println!("{}", custom_keys_snippet(up, down));
    Ok(())
}

fn pick(args: &Args, items: &[Item], config: &MenuConfig, text: &MenuText) -> Result<SelectionResult> {
    if args.fallback {
        debug!("Numbered prompt requested on the command line");
        return run_fallback_menu(
            items,
            &config.color_palette,
            text,
            io::stdin().lock(),
            io::stderr(),
        );
    }

    run_selection_menu(items, config, text)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    if args.capture_keys {
        return capture_custom_keys();
    }

    let settings_path = config::get_settings_path(&args.settings_path);
    debug!("Settings path: `{}`", settings_path);
    let settings = apply_overrides(file_handling::get_settings(&settings_path)?, &args);
    let menu_config = settings.menu_config()?;

    let items_path = config::get_items_path(&args.items_path);
    debug!("Items path: `{}`", items_path);
    let items = select_group(file_handling::get_items(&items_path)?, args.group.as_deref())?;

    let result = pick(&args, &items, &menu_config, &settings.text)?;

    match result.item {
        Some(item) if result.confirmed => println!("{}", item.command),
        _ => eprintln!("{}", settings.text.cancelled),
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
