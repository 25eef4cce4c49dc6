//! Rust Picker CLI Library
//!
//! This crate provides the command-line front end for rust-picker. It loads
//! the item list and settings, runs the interactive picker from
//! `rust-picker-core` and prints the command of the chosen item. It never
//! runs that command itself.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`overrides`]: Merging command-line options into settings, group selection
//!
//! # Examples
//!
//! ```bash
//! # Pick from ~/.rust-picker/items.yml
//! rp
//!
//! # Pick a frontend script and run it
//! eval "$(rp --group frontend)"
//!
//! # Bind custom navigation keys
//! rp --capture-keys >> ~/.rust-picker/settings.yml
//! ```

pub mod cli_args;
pub mod overrides;
