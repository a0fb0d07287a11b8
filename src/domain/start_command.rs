use serde::Serialize;

use crate::{Error, Node, document::map_mapping};

/// A named command that starts something from a compose file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartCommand {
    name: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    except: Option<String>,
}

impl StartCommand {
    /// Creates a start command.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>, except: Option<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            except,
        }
    }

    /// Builds a start command from a mapping entry.
    ///
    /// The value must be a mapping with a required `path` and an optional
    /// `except`.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a mapping, if `path` is missing, or if
    /// either field is not a scalar.
    pub fn from_entry(name: &str, node: &Node) -> Result<Self, Error> {
        let fields = node.as_mapping()?;
        Ok(Self::new(
            name,
            fields.string("path")?,
            fields.optional_string("except")?,
        ))
    }

    /// The key this command is stored under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the file the command starts from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// What to leave out when starting, if anything.
    #[must_use]
    pub fn except(&self) -> Option<&str> {
        self.except.as_deref()
    }
}

/// Builds one start command per entry of a mapping node, in document order.
///
/// # Errors
///
/// Fails if the node is not a mapping, or if any entry is invalid.
pub fn start_commands(node: &Node) -> Result<Vec<StartCommand>, Error> {
    map_mapping(node, StartCommand::from_entry)?.collect()
}
