//! The YAML document model and its typed accessors.
//!
//! A [`Document`] is parsed once and is immutable afterwards. Records are
//! extracted from it with the accessors on [`Mapping`] and the traversal
//! helpers [`map_sequence`] and [`map_mapping`].

use std::{fs::File, io::Read, path::Path, str::FromStr};

mod node;
pub use node::{Mapping, Node, NodeKind, Sequence};

use crate::{Error, ParseError};

/// A parsed YAML document whose root is a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Reads and parses a YAML document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read, and
    /// [`Error::Parse`] if its content is not a YAML mapping.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut content = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut content))
            .map_err(io_error)?;

        tracing::debug!("Read {} bytes from {}", content.len(), path.display());
        content.parse()
    }

    /// Reads a YAML document from any reader.
    ///
    /// The whole source is read into memory before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the source cannot be read, or is not a YAML
    /// mapping.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(ParseError::Read)?;
        content.parse()
    }

    /// The root mapping of the document.
    #[must_use]
    pub const fn root(&self) -> &Mapping {
        &self.root
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: serde_yaml::Value = serde_yaml::from_str(s).map_err(ParseError::Syntax)?;
        match Node::try_from(value)? {
            Node::Mapping(root) => {
                tracing::debug!("Parsed document with {} top-level keys", root.len());
                Ok(Self { root })
            }
            other => Err(ParseError::RootNotMapping(other.kind()).into()),
        }
    }
}

/// Lazily applies `f` to each element of a sequence node, together with its
/// zero-based position.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `node` is not a sequence.
pub fn map_sequence<'a, R, F>(node: &'a Node, f: F) -> Result<impl Iterator<Item = R>, Error>
where
    F: FnMut(usize, &'a Node) -> R,
{
    Ok(node.as_sequence()?.map_indexed(f))
}

/// Lazily applies `f` to each key and value of a mapping node, in document
/// order.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `node` is not a mapping.
pub fn map_mapping<'a, R, F>(node: &'a Node, f: F) -> Result<impl Iterator<Item = R>, Error>
where
    F: FnMut(&'a str, &'a Node) -> R,
{
    Ok(node.as_mapping()?.map_entries(f))
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn parses_root_mapping() {
        let document: Document = "version: 1\nname: demo\n".parse().unwrap();
        assert_eq!(document.root().len(), 2);
        assert_eq!(document.root().string("name").unwrap(), "demo");
    }

    #[test]
    fn malformed_yaml_is_a_syntax_error() {
        let result = "key: [unclosed".parse::<Document>();
        assert!(matches!(result, Err(Error::Parse(ParseError::Syntax(_)))));
    }

    #[test]
    fn scalar_root_is_rejected() {
        let result = "just a string".parse::<Document>();
        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::RootNotMapping(NodeKind::Scalar)))
        ));
    }

    #[test]
    fn sequence_root_is_rejected() {
        let result = "- a\n- b\n".parse::<Document>();
        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::RootNotMapping(NodeKind::Sequence)))
        ));
    }

    #[test]
    fn duplicate_start_command_names_are_rejected() {
        let result = "start_commands:\n  1: {path: /a}\n  '1': {path: /b}\n".parse::<Document>();
        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::DuplicateKey(key))) if key == "1"
        ));
    }

    #[test]
    fn reads_from_reader() {
        let document = Document::from_reader(Cursor::new("key: value")).unwrap();
        assert_eq!(document.root().string("key").unwrap(), "value");
    }

    #[test]
    fn opens_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"menu:\n  - one\n  - two\n").unwrap();

        let document = Document::open(file.path()).unwrap();
        let menu = document.root().child("menu").unwrap();
        assert_eq!(menu.as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.yml");

        let error = Document::open(&missing).unwrap_err();
        assert!(matches!(error, Error::Io { path, .. } if path == missing));
    }

    #[test]
    fn map_sequence_checks_node_kind() {
        let document: Document = "list: [x, y]\nmap: {k: v}\n".parse().unwrap();
        let list = document.root().child("list").unwrap();
        let map = document.root().child("map").unwrap();

        let indices: Vec<_> = map_sequence(list, |index, _| index).unwrap().collect();
        assert_eq!(indices, [0, 1]);
        assert!(map_sequence(map, |index, _| index).is_err());
    }

    #[test]
    fn map_mapping_checks_node_kind() {
        let document: Document = "list: [x, y]\nmap: {k: v, j: w}\n".parse().unwrap();
        let list = document.root().child("list").unwrap();
        let map = document.root().child("map").unwrap();

        let keys: Vec<_> = map_mapping(map, |key, _| key).unwrap().collect();
        assert_eq!(keys, ["k", "j"]);
        assert!(map_mapping(list, |key, _| key).is_err());
    }
}
