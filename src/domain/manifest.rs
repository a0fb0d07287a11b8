use serde::Serialize;

use super::{MenuItem, StartCommand, menu_item::menu_items, start_command::start_commands};
use crate::{Document, Error};

const DEMO: &str = include_str!("../demo.yml");

/// Everything a launcher manifest describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    version: String,
    menu: Vec<MenuItem>,
    start_commands: Vec<StartCommand>,
}

impl Manifest {
    /// Reads the `version` of a manifest document.
    ///
    /// An absent version is `Ok(None)` so that callers can decide what to do
    /// about it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the version is not a scalar.
    pub fn read_version(document: &Document) -> Result<Option<String>, Error> {
        document.root().optional_string("version")
    }

    /// Extracts the whole manifest from a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `version`, `menu` or
    /// `start_commands` is absent, and propagates any error from building
    /// the menu or the start commands.
    pub fn from_document(document: &Document) -> Result<Self, Error> {
        let version =
            Self::read_version(document)?.ok_or_else(|| Error::MissingKey("version".to_string()))?;
        Self::with_version(document, version)
    }

    /// Extracts the menu and start commands, using an already-read version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `menu` or `start_commands` is
    /// absent, and propagates any error from building their records.
    pub fn with_version(document: &Document, version: String) -> Result<Self, Error> {
        let root = document.root();
        let menu = menu_items(root.child("menu")?)?;
        let start_commands = start_commands(root.child("start_commands")?)?;

        tracing::debug!(
            "Extracted manifest {version}: {} menu items, {} start commands",
            menu.len(),
            start_commands.len()
        );

        Ok(Self {
            version,
            menu,
            start_commands,
        })
    }

    /// The document bundled with the crate, used when no manifest is given.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document is invalid.
    pub fn demo_document() -> Result<Document, Error> {
        DEMO.parse()
    }

    /// The manifest of the bundled demo document.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document is invalid.
    pub fn demo() -> Result<Self, Error> {
        Self::from_document(&Self::demo_document()?)
    }

    /// The manifest version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The menu entries, in order.
    #[must_use]
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// The start commands, in document order.
    #[must_use]
    pub fn start_commands(&self) -> &[StartCommand] {
        &self.start_commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_manifest() {
        let manifest = Manifest::demo().unwrap();

        assert_eq!(manifest.version(), "3.4");

        let menu: Vec<_> = manifest
            .menu()
            .iter()
            .map(|item| (item.selector(), item.label()))
            .collect();
        assert_eq!(
            menu,
            [
                ('0', "item 1"),
                ('1', "item 2"),
                ('2', "item 3"),
                ('3', "item 4"),
            ]
        );

        assert_eq!(
            manifest.start_commands(),
            [
                StartCommand::new(
                    "start_infra",
                    "/my/wonderful/path/to/a/compose/file.yml",
                    Some("aws-cli".to_string()),
                ),
                StartCommand::new(
                    "check_status",
                    "/other/path/that/is/also/good/for/something",
                    None,
                ),
            ]
        );
    }

    #[test]
    fn missing_version_is_absent_not_an_error() {
        let document: Document = "menu: []\nstart_commands: {}\n".parse().unwrap();

        assert_eq!(Manifest::read_version(&document).unwrap(), None);
        assert_eq!(
            Manifest::from_document(&document).unwrap_err().missing_key(),
            Some("version")
        );
    }

    #[test]
    fn missing_menu_is_an_error() {
        let document: Document = "version: 1\nstart_commands: {}\n".parse().unwrap();

        let error = Manifest::from_document(&document).unwrap_err();
        assert_eq!(error.missing_key(), Some("menu"));
    }

    #[test]
    fn empty_sections_are_allowed() {
        let document: Document = "version: '2'\nmenu: []\nstart_commands: {}\n"
            .parse()
            .unwrap();

        let manifest = Manifest::from_document(&document).unwrap();
        assert_eq!(manifest.version(), "2");
        assert!(manifest.menu().is_empty());
        assert!(manifest.start_commands().is_empty());
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(Manifest::demo().unwrap()).unwrap();

        assert_eq!(json["version"], "3.4");
        assert_eq!(json["menu"][0]["selector"], "0");
        assert_eq!(json["start_commands"][0]["except"], "aws-cli");
        assert!(json["start_commands"][1].get("except").is_none());
    }
}
