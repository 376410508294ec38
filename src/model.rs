//! Input and output documents.
//!
//! ## Inputs
//!
//! Both inputs come from an upstream export tool and are read as-is:
//!
//! ```text
//! raw corpus:    { "pages": [ { "text": "...", "vol": "1", "page": 3 }, ... ] }
//! index source:  { "meta": { "name": "..." },
//!                  "indexes": { "volumes": [...],
//!                               "headings": [ { "title": "...", "level": 1, "page": 1 } ] } }
//! ```
//!
//! Heading pages in the index source are 1-based. Unknown fields are ignored.
//!
//! ## Outputs
//!
//! `index.json` is a [`BookIndex`]; every `pages/<n>.json` is an array of
//! [`Page`]. Field order on the wire follows declaration order here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One physical page of the book.
///
/// `vol` and `page` are carried through exactly as exported: the export uses
/// strings for some books and numbers for others, and the emitted files must
/// reproduce whichever it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page text, possibly containing inline markup.
    pub text: String,
    /// Volume number.
    pub vol: Value,
    /// Page number within the volume.
    pub page: Value,
}

impl Page {
    /// Create a page.
    #[must_use]
    pub fn new(text: impl Into<String>, vol: impl Into<Value>, page: impl Into<Value>) -> Self {
        Self {
            text: text.into(),
            vol: vol.into(),
            page: page.into(),
        }
    }
}

/// The raw page corpus document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCorpus {
    /// Pages in reading order; array position is the page sequence number.
    pub pages: Vec<Page>,
}

/// The index/metadata source document.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexSource {
    /// Book-level metadata.
    pub meta: SourceMeta,
    /// Volume list and table of contents.
    pub indexes: SourceIndexes,
}

/// The `meta` record of the index source.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceMeta {
    /// Book title.
    pub name: String,
}

/// The `indexes` record of the index source.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceIndexes {
    /// One entry per volume. Only the count is used.
    pub volumes: Vec<Value>,
    /// Table of contents in source order.
    pub headings: Vec<RawHeading>,
}

/// A table-of-contents entry as exported, with a 1-based page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawHeading {
    /// Heading text.
    pub title: String,
    /// Nesting depth.
    pub level: i64,
    /// 1-based page; may be out of range.
    pub page: i64,
}

/// A table-of-contents entry pointing at a zero-based page index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text.
    pub title: String,
    /// Nesting depth, as exported.
    pub level: i64,
    /// Index into the page sequence, always `< totalPages`.
    pub page: usize,
}

/// Book metadata and table of contents, written as `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIndex {
    /// Fixed identifier of the book.
    pub id: String,
    /// Title, from the index source.
    pub title: String,
    /// Fixed author name.
    pub author: String,
    /// Number of volumes.
    pub volumes: usize,
    /// Number of pages across all volumes.
    pub total_pages: usize,
    /// Pages per chunk file.
    pub chunk_size: usize,
    /// `ceil(total_pages / chunk_size)`.
    pub total_chunks: usize,
    /// Headings in source order.
    pub headings: Vec<Heading>,
}

/// A fully transformed book: its metadata plus cleaned pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Metadata and headings.
    pub index: BookIndex,
    /// Cleaned pages, in the same order as the corpus.
    pub pages: Vec<Page>,
}
