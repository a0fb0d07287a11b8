use std::fmt;

use serde::Serialize;

use crate::{Error, Node, document::map_sequence};

/// The characters used to select menu entries, assigned by position.
pub const SELECTORS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// A single entry of the launcher menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    selector: char,
    label: String,
}

impl MenuItem {
    /// Creates the menu entry at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyMenuItems`] if `index` has no selector
    /// character.
    pub fn new(index: usize, label: impl Into<String>) -> Result<Self, Error> {
        let selector = SELECTORS
            .chars()
            .nth(index)
            .ok_or(Error::TooManyMenuItems {
                len: index + 1,
                max: SELECTORS.len(),
            })?;

        Ok(Self {
            selector,
            label: label.into(),
        })
    }

    /// Creates the menu entry at position `index` from a scalar node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is not a scalar, or
    /// [`Error::TooManyMenuItems`] if `index` has no selector character.
    pub fn from_node(index: usize, node: &Node) -> Result<Self, Error> {
        Self::new(index, node.as_scalar()?)
    }

    /// The character that selects this entry.
    #[must_use]
    pub const fn selector(&self) -> char {
        self.selector
    }

    /// The text shown for this entry.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.selector, self.label)
    }
}

/// Builds the menu from a sequence node, one entry per element, in order.
///
/// # Errors
///
/// Fails if the node is not a sequence of scalars, or if it has more
/// elements than there are [`SELECTORS`].
pub fn menu_items(node: &Node) -> Result<Vec<MenuItem>, Error> {
    let len = node.as_sequence()?.len();
    if len > SELECTORS.len() {
        return Err(Error::TooManyMenuItems {
            len,
            max: SELECTORS.len(),
        });
    }

    map_sequence(node, MenuItem::from_node)?.collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::Document;

    fn menu_node(len: usize) -> Node {
        let yaml: String = (1..=len).map(|i| format!("- item {i}\n")).collect();
        let yaml = if yaml.is_empty() {
            "[]".to_string()
        } else {
            yaml
        };
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        Node::try_from(value).unwrap()
    }

    #[test_case(0; "empty menu")]
    #[test_case(1; "single item")]
    #[test_case(10; "all digits")]
    #[test_case(36; "full alphabet")]
    fn selectors_follow_position(len: usize) {
        let items = menu_items(&menu_node(len)).unwrap();

        assert_eq!(items.len(), len);
        let selectors: String = items.iter().map(MenuItem::selector).collect();
        assert_eq!(selectors, SELECTORS[..len]);
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.label(), format!("item {}", index + 1));
        }
    }

    #[test]
    fn too_many_items_is_an_error() {
        let error = menu_items(&menu_node(37)).unwrap_err();
        assert!(matches!(
            error,
            Error::TooManyMenuItems { len: 37, max: 36 }
        ));
    }

    #[test]
    fn new_rejects_out_of_range_index() {
        assert!(MenuItem::new(35, "last").is_ok());
        assert!(matches!(
            MenuItem::new(36, "overflow"),
            Err(Error::TooManyMenuItems { len: 37, max: 36 })
        ));
    }

    #[test]
    fn non_scalar_entry_is_a_mismatch() {
        let document: Document = "menu:\n  - plain\n  - {nested: map}\n".parse().unwrap();
        let menu = document.root().child("menu").unwrap();

        assert!(matches!(
            menu_items(menu),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn display_shows_selector_and_label() {
        let item = MenuItem::new(11, "logs").unwrap();
        assert_eq!(item.to_string(), "[b] logs");
    }
}
