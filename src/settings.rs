//! Build settings.
//!
//! `defaults/leaves.default.toml` is embedded into the crate so the
//! conventional build needs no arguments. Callers layer a user TOML file and
//! individual overrides on top via [`Loader`] before deserializing into
//! [`BuildConfig`].

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;

use crate::Result;

const DEFAULT_TOML: &str = include_str!("../defaults/leaves.default.toml");

/// Everything a build needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    /// Pages per output chunk.
    pub chunk_size: usize,
    /// Identity fields.
    pub book: BookConfig,
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Markup stripping.
    pub markup: MarkupConfig,
}

/// Fixed identity fields written to `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookConfig {
    /// Identifier written as `id`.
    pub id: String,
    /// Name written as `author`.
    pub author: String,
}

/// Input and output locations. Relative paths are resolved by
/// [`BuildConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathsConfig {
    /// Raw page corpus.
    pub raw: PathBuf,
    /// Index/metadata source.
    pub index: PathBuf,
    /// Where `index.json` is written.
    pub output_dir: PathBuf,
    /// Chunk directory, relative to `output_dir`.
    pub pages_dir: PathBuf,
}

/// Page text cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkupConfig {
    /// Inline tag whose markers are stripped from page text.
    pub tag: String,
}

impl BuildConfig {
    /// The built-in configuration.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded defaults are malformed.
    pub fn defaults() -> Result<Self> {
        Loader::new().build()
    }

    /// Join relative input and output paths onto `root`.
    ///
    /// Absolute paths are left alone, so a user file can point anywhere.
    #[must_use]
    pub fn resolve(mut self, root: &Path) -> Self {
        self.paths.raw = root.join(&self.paths.raw);
        self.paths.index = root.join(&self.paths.index);
        self.paths.output_dir = root.join(&self.paths.output_dir);
        self
    }
}

/// Name of the per-root config file picked up by [`Loader::with_root_file`].
pub const ROOT_CONFIG_FILE: &str = "leaves.toml";

/// Builds a [`BuildConfig`] from layers, later layers winning:
///
/// ```text
/// embedded defaults  <  <root>/leaves.toml  <  --config FILE  <  overrides
/// ```
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer the TOML file at `path`; [`Loader::build`] fails if it is missing.
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer `<root>/leaves.toml` when the root carries one.
    #[must_use]
    pub fn with_root_file(self, root: impl AsRef<Path>) -> Self {
        self.layer(&root.as_ref().join(ROOT_CONFIG_FILE), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key (`"chunk_size"`, `"paths.output_dir"`) above every file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if `key` is not a valid path expression.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into a [`BuildConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if a required file is missing, a file
    /// is not valid TOML, or a value has the wrong type.
    pub fn build(self) -> Result<BuildConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
