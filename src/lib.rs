//! # leaves
//!
//! Pre-chunking a book export for clients that page through it.
//!
//! ## The Problem
//!
//! A book export arrives as one large JSON document: every page of every
//! volume, with inline markup in the text, plus a separate table of contents
//! whose page numbers start at 1. A reader app should not download megabytes
//! to show a single page.
//!
//! The name "leaves" is the bookbinder's word for pages: the book is taken
//! apart into bundles of leaves a client can fetch one at a time.
//!
//! ## The Pipeline
//!
//! ```text
//! Stage A  load       raw corpus + index source  (two JSON documents)
//! Stage B  transform  strip markup from page text
//!                     shift headings to 0-based pages, clamp into range
//! Stage C  emit       index.json
//!                     pages/0.json, pages/1.json, ...  (chunk_size pages each)
//! ```
//!
//! ## Output
//!
//! `index.json`:
//!
//! ```text
//! { "id": "...", "title": "...", "author": "...", "volumes": 3,
//!   "totalPages": 120, "chunkSize": 50, "totalChunks": 3,
//!   "headings": [ { "title": "...", "level": 1, "page": 0 }, ... ] }
//! ```
//!
//! `pages/<n>.json` is an array of `{ "text", "vol", "page" }` holding pages
//! `[n * chunkSize, min((n + 1) * chunkSize, totalPages))`. Page `p` lives in
//! file `p / chunkSize` at position `p % chunkSize`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leaves::{BookBuilder, Loader};
//!
//! let config = Loader::new().build()?.resolve(Path::new("/srv/library"));
//! let report = BookBuilder::new(config)?.run()?;
//! println!("{} chunks", report.chunks.len());
//! ```
//!
//! The pieces are usable on their own:
//!
//! ```rust,ignore
//! use leaves::{strip_spans, FixedChunker, normalize_headings};
//!
//! assert_eq!(strip_spans("<span>hello</span> world"), "hello world");
//! let chunks = FixedChunker::new(50)?.chunk(&pages);
//! let headings = normalize_headings(&raw_headings, pages.len())?;
//! ```

mod chunk;
mod clean;
mod error;
mod fixed;
mod headings;
mod load;
mod model;
mod pipeline;
mod settings;
mod write;

pub use chunk::Chunk;
pub use clean::{strip_spans, MarkupStripper, DEFAULT_TAG};
pub use error::{Error, Result};
pub use fixed::{FixedChunker, DEFAULT_CHUNK_SIZE};
pub use headings::{clamp_page, normalize_headings};
pub use load::{load_json, Sources};
pub use model::{
    Book, BookIndex, Heading, IndexSource, Page, RawCorpus, RawHeading, SourceIndexes, SourceMeta,
};
pub use pipeline::{BookBuilder, BuildReport, ChunkReport};
pub use settings::{BookConfig, BuildConfig, Loader, MarkupConfig, PathsConfig, ROOT_CONFIG_FILE};
pub use write::{write_json, OutputWriter, WrittenFile, INDEX_FILE};
