//! Typed launcher manifests
//!
//! A manifest is a YAML document with a version, a menu and a set of named
//! start commands. The [`document`] module parses YAML into a tree of
//! [`Node`]s with checked accessors; the [`domain`] module builds the
//! launcher records from that tree.

pub mod document;
pub use document::{Document, Mapping, Node, NodeKind, Sequence};

pub mod domain;
pub use domain::{Manifest, MenuItem, StartCommand};

mod error;
pub use error::{Error, ParseError};

mod config;
pub use config::{ColorChoice, Config, ConfigError};
