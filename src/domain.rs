//! Launcher records extracted from a manifest document.
//!
//! A manifest has a `version`, a `menu` of labels and a mapping of named
//! `start_commands`. Each record type is built from nodes of a
//! [`Document`](crate::Document) and is immutable afterwards.

/// Menu entries and their selector characters.
pub mod menu_item;
pub use menu_item::{MenuItem, SELECTORS};

/// Named start commands.
pub mod start_command;
pub use start_command::StartCommand;

mod manifest;
pub use manifest::Manifest;
