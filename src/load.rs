//! Reading the export documents.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, IndexSource, RawCorpus, Result};

/// Read `path` and decode it as `T`.
///
/// The whole file is read before decoding, so a read failure is always
/// [`Error::NotFound`] and a decode failure is always [`Error::Parse`].
///
/// # Errors
///
/// - [`Error::NotFound`] if the file is missing or unreadable.
/// - [`Error::Parse`] if it is not valid JSON or does not match `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|source| Error::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");

    serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Both input documents of a build.
#[derive(Debug, Clone)]
pub struct Sources {
    /// The raw page corpus.
    pub corpus: RawCorpus,
    /// The index/metadata source.
    pub index: IndexSource,
}

impl Sources {
    /// Load the raw corpus and the index source.
    ///
    /// # Errors
    ///
    /// See [`load_json`]. The corpus is read first.
    pub fn load(raw_path: &Path, index_path: &Path) -> Result<Self> {
        let corpus: RawCorpus = load_json(raw_path)?;
        let index: IndexSource = load_json(index_path)?;
        Ok(Self { corpus, index })
    }
}
