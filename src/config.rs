use std::{
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// When to colour console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout supports it.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

/// Settings for the launcher.
///
/// Read from an optional TOML file. Every field has a default, so an empty
/// (versioned) file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    /// The manifest to load when none is given on the command line.
    ///
    /// Relative paths are resolved against the directory of the config file.
    manifest: Option<PathBuf>,

    /// When to colour console output.
    pub color: ColorChoice,
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content)?;

        if let Some(dir) = path.parent() {
            config.manifest = config.manifest.map(|manifest| {
                if manifest.is_relative() {
                    dir.join(manifest)
                } else {
                    manifest
                }
            });
        }

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The configured manifest path, if any.
    #[must_use]
    pub fn manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

}

/// Errors that can occur when loading a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{}'", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The config file is not valid TOML for this configuration.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
}

/// The serialized versions of the configuration.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        manifest: Option<PathBuf>,

        #[serde(default)]
        color: ColorChoice,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { manifest, color } => Self { manifest, color },
        }
    }
}
