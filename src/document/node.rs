use std::{collections::HashSet, fmt};

use serde_yaml::Value;

use crate::{Error, ParseError};

/// The structural kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf value with a text representation.
    Scalar,
    /// An ordered list of nodes.
    Sequence,
    /// An ordered collection of key/value pairs.
    Mapping,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// One element of a parsed YAML tree.
///
/// Scalars keep their canonical text: strings verbatim, booleans as
/// `true`/`false`, numbers in their shortest decimal form, and null as the
/// empty string. Tags are dropped and the tagged value is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf value.
    Scalar(String),
    /// An ordered list of nodes.
    Sequence(Sequence),
    /// An ordered collection of key/value pairs.
    Mapping(Mapping),
}

impl Node {
    /// Returns the structural kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Scalar(_) => NodeKind::Scalar,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Mapping(_) => NodeKind::Mapping,
        }
    }

    /// Returns the text of a scalar node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is not a scalar.
    pub fn as_scalar(&self) -> Result<&str, Error> {
        match self {
            Self::Scalar(text) => Ok(text),
            other => Err(other.mismatch(NodeKind::Scalar)),
        }
    }

    /// Returns the node as a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is not a sequence.
    pub fn as_sequence(&self) -> Result<&Sequence, Error> {
        match self {
            Self::Sequence(sequence) => Ok(sequence),
            other => Err(other.mismatch(NodeKind::Sequence)),
        }
    }

    /// Returns the node as a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is not a mapping.
    pub fn as_mapping(&self) -> Result<&Mapping, Error> {
        match self {
            Self::Mapping(mapping) => Ok(mapping),
            other => Err(other.mismatch(NodeKind::Mapping)),
        }
    }

    const fn mismatch(&self, expected: NodeKind) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl TryFrom<Value> for Node {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let node = match value {
            Value::Null => Self::Scalar(String::new()),
            Value::Bool(b) => Self::Scalar(b.to_string()),
            Value::Number(n) => Self::Scalar(n.to_string()),
            Value::String(s) => Self::Scalar(s),
            Value::Sequence(items) => Self::Sequence(Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            )),
            Value::Mapping(mapping) => Self::Mapping(Mapping::try_from(mapping)?),
            Value::Tagged(tagged) => {
                let serde_yaml::value::TaggedValue { value, .. } = *tagged;
                Self::try_from(value)?
            }
        };
        Ok(node)
    }
}

/// An ordered list of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence(Vec<Node>);

impl Sequence {
    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    /// Lazily applies `f` to each element together with its zero-based
    /// position, in document order.
    pub fn map_indexed<'a, R, F>(&'a self, mut f: F) -> impl Iterator<Item = R>
    where
        F: FnMut(usize, &'a Node) -> R,
    {
        self.iter()
            .enumerate()
            .map(move |(index, node)| f(index, node))
    }
}

/// An ordered collection of key/value pairs, in document order.
///
/// Keys are the text of scalar keys in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping(Vec<(String, Node)>);

impl Mapping {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.iter().find(|(k, _)| *k == key).map(|(_, node)| node)
    }

    /// Iterates over the entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.0.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Iterates over the keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Looks up a required child node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if there is no entry for `key`.
    pub fn child(&self, key: &str) -> Result<&Node, Error> {
        self.get(key)
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }

    /// Returns the text of the scalar stored under `key`, or `None` if the
    /// key is absent.
    ///
    /// A key that is present with an empty value gives `Some("")`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a scalar.
    pub fn optional_string(&self, key: &str) -> Result<Option<String>, Error> {
        self.get(key)
            .map(|node| node.as_scalar().map(str::to_string))
            .transpose()
    }

    /// Returns the text of the scalar stored under `key`, or `default` if
    /// the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a scalar.
    pub fn string_or(&self, key: &str, default: impl Into<String>) -> Result<String, Error> {
        Ok(self
            .optional_string(key)?
            .unwrap_or_else(|| default.into()))
    }

    /// Returns the text of the scalar stored under a required `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if the key is absent, or
    /// [`Error::TypeMismatch`] if the value is not a scalar.
    pub fn string(&self, key: &str) -> Result<String, Error> {
        self.child(key)?.as_scalar().map(str::to_string)
    }

    /// Lazily applies `f` to each key and value, in document order.
    pub fn map_entries<'a, R, F>(&'a self, mut f: F) -> impl Iterator<Item = R>
    where
        F: FnMut(&'a str, &'a Node) -> R,
    {
        self.iter().map(move |(key, node)| f(key, node))
    }
}

impl TryFrom<serde_yaml::Mapping> for Mapping {
    type Error = Error;

    fn try_from(mapping: serde_yaml::Mapping) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(mapping.len());
        let mut entries = Vec::with_capacity(mapping.len());

        for (key, value) in mapping {
            let key = match Node::try_from(key)? {
                Node::Scalar(text) => text,
                other => return Err(other.mismatch(NodeKind::Scalar)),
            };
            if !seen.insert(key.clone()) {
                return Err(ParseError::DuplicateKey(key).into());
            }
            entries.push((key, Node::try_from(value)?));
        }

        Ok(Self(entries))
    }
}
