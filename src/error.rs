use std::{io, path::PathBuf};

use crate::document::NodeKind;

/// Errors raised while loading a document or extracting records from it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be opened or read.
    #[error("failed to read '{}'", path.display())]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source is not a usable YAML document.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A required key is absent from a mapping.
    #[error("missing required key '{0}'")]
    MissingKey(String),

    /// A node is not of the kind the caller asked for.
    #[error("expected a {expected} node, found a {found} node")]
    TypeMismatch {
        /// The kind the caller expected.
        expected: NodeKind,
        /// The kind the node actually has.
        found: NodeKind,
    },

    /// The menu has more entries than there are selector characters.
    #[error("menu has {len} entries but only {max} selectors are available")]
    TooManyMenuItems {
        /// Number of entries in the menu.
        len: usize,
        /// Number of available selectors.
        max: usize,
    },
}

/// The input could not be turned into a document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not well-formed YAML.
    #[error("malformed YAML")]
    Syntax(#[from] serde_yaml::Error),

    /// The input is well-formed, but its root is not a mapping.
    #[error("document root must be a mapping, found a {0} node")]
    RootNotMapping(NodeKind),

    /// Two keys of one mapping have the same text, e.g. `1` and `'1'`.
    #[error("duplicate mapping key '{0}'")]
    DuplicateKey(String),

    /// The input could not be read into memory.
    #[error("failed to read YAML source")]
    Read(#[from] io::Error),
}

impl Error {
    /// Returns the missing key if this is a [`Error::MissingKey`].
    #[must_use]
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Self::MissingKey(key) => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_names_both_kinds() {
        let error = Error::TypeMismatch {
            expected: NodeKind::Sequence,
            found: NodeKind::Mapping,
        };
        assert_eq!(
            error.to_string(),
            "expected a sequence node, found a mapping node"
        );
    }

    #[test]
    fn missing_key_accessor() {
        assert_eq!(
            Error::MissingKey("version".to_string()).missing_key(),
            Some("version")
        );
        assert_eq!(
            Error::TooManyMenuItems { len: 40, max: 36 }.missing_key(),
            None
        );
    }
}
