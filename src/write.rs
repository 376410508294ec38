//! Emitting the index and page chunks.
//!
//! Output layout under the output directory:
//!
//! ```text
//! <out>/index.json
//! <out>/<pages_dir>/0.json
//! <out>/<pages_dir>/1.json
//! ...
//! ```
//!
//! Files are compact JSON and overwrite whatever is already there. Writes are
//! not transactional: a failure partway through leaves the chunks written so
//! far next to any left over from an earlier run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{BookIndex, Chunk, Error, Page, Result};

/// Name of the metadata file.
pub const INDEX_FILE: &str = "index.json";

/// A file that was written, with its encoded size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Where the file was written.
    pub path: PathBuf,
    /// Encoded length in bytes.
    pub bytes: usize,
}

impl WrittenFile {
    /// Size in KiB, for progress output.
    #[must_use]
    pub fn kib(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Writes build outputs into a directory tree.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    out_dir: PathBuf,
    pages_dir: PathBuf,
}

impl OutputWriter {
    /// A writer rooted at `out_dir`, placing chunks in `out_dir/pages_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>, pages_dir: impl AsRef<Path>) -> Self {
        let out_dir = out_dir.into();
        let pages_dir = out_dir.join(pages_dir);
        Self { out_dir, pages_dir }
    }

    /// The output root.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// The directory chunk files go to.
    #[must_use]
    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Create the output and pages directories if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if a directory cannot be created.
    pub fn prepare(&self) -> Result<()> {
        for dir in [&self.out_dir, &self.pages_dir] {
            std::fs::create_dir_all(dir).map_err(|source| Error::Write {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Write `index.json`.
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] or [`Error::Write`].
    pub fn write_index(&self, index: &BookIndex) -> Result<WrittenFile> {
        write_json(&self.out_dir.join(INDEX_FILE), index)
    }

    /// Write one chunk as `<index>.json`.
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] or [`Error::Write`].
    pub fn write_chunk(&self, chunk: &Chunk<'_, Page>) -> Result<WrittenFile> {
        write_json(&self.pages_dir.join(chunk.file_name()), chunk.items)
    }
}

/// Encode `value` as compact JSON and write it to `path`, replacing any
/// existing file.
///
/// # Errors
///
/// [`Error::Encode`] if encoding fails, [`Error::Write`] if the file cannot
/// be written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<WrittenFile> {
    let encoded = serde_json::to_vec(value).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, &encoded).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WrittenFile {
        path: path.to_path_buf(),
        bytes: encoded.len(),
    })
}
