//! Rust Picker Core Library
//!
//! This crate provides the interactive selection engine behind rust-picker:
//! a small in-place terminal menu that lets the user pick one item from a
//! list with the keyboard, narrowing it down with a live text filter.
//!
//! # Key Features
//!
//! - **Raw Mode Control**: Platform implementations behind one [`terminal::TerminalMode`] trait
//! - **Key Decoding**: Arrow keys, Enter, Escape, Backspace and Ctrl-C from raw byte chunks
//! - **Navigation and Filtering**: A cursor and scroll window over a case-insensitive substring filter
//! - **Flicker-free Redraw**: Only the lines drawn by the previous frame are erased
//! - **Fallback Prompt**: A numbered line prompt when no terminal is available
//! - **Signal Safety**: The terminal mode is restored when the process is terminated
//!
//! # Examples
//!
//! Letting the user pick an item:
//!
//! ```no_run
//! use rust_picker_core::config::MenuConfig;
//! use rust_picker_core::items::Item;
//! use rust_picker_core::menu::run_selection_menu;
//! use rust_picker_core::text::MenuText;
//!
//! let items = vec![
//!     Item::new("dev", "vite"),
//!     Item::new("build", "vite build").with_description("Production bundle"),
//! ];
//! let result = run_selection_menu(&items, &MenuConfig::default(), &MenuText::default())?;
//! if let Some(item) = result.item {
//!     println!("{}", item.command);
//! }
//! # Ok::<(), rust_picker_core::error::Error>(())
//! ```

pub mod colors;
pub mod config;
pub mod error;
pub mod fallback;
pub mod file_handling;
pub mod items;
pub mod key_scheme;
pub mod keys;
pub mod menu;
pub mod render;
pub mod state;
pub mod terminal;
pub mod text;
