//! The build pipeline: load, transform, emit.
//!
//! ```text
//! raw corpus ──┐                    ┌── index.json
//!              ├─ load ─ transform ─┤
//! index src ───┘                    └── pages/0.json .. pages/N.json
//! ```
//!
//! Each stage can be run on its own; [`BookBuilder::run`] chains them and
//! stops at the first error.

use crate::{
    normalize_headings, Book, BookIndex, BuildConfig, Error, FixedChunker, MarkupStripper,
    OutputWriter, Result, Sources, WrittenFile,
};

/// One emitted chunk file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    /// Zero-based chunk index.
    pub index: usize,
    /// First page in the chunk.
    pub first_page: usize,
    /// Last page in the chunk (inclusive).
    pub last_page: usize,
    /// The chunk file.
    pub file: WrittenFile,
}

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// The `index.json` file.
    pub index: WrittenFile,
    /// Chunk files, in index order.
    pub chunks: Vec<ChunkReport>,
}

impl BuildReport {
    /// Total bytes across all written files.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.index.bytes + self.chunks.iter().map(|c| c.file.bytes).sum::<usize>()
    }
}

/// Builds one book according to a [`BuildConfig`].
#[derive(Debug, Clone)]
pub struct BookBuilder {
    config: BuildConfig,
    stripper: MarkupStripper,
    chunker: FixedChunker,
}

impl BookBuilder {
    /// Create a builder. Paths in `config` are used as given.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidChunkSize`] or [`Error::InvalidMarkupTag`] for a bad
    /// configuration.
    pub fn new(config: BuildConfig) -> Result<Self> {
        let stripper = MarkupStripper::new(&config.markup.tag)?;
        let chunker = FixedChunker::new(config.chunk_size)?;
        Ok(Self {
            config,
            stripper,
            chunker,
        })
    }

    /// The configuration this builder runs with.
    #[must_use]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Stage A: read both input documents.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] or [`Error::Parse`].
    pub fn load(&self) -> Result<Sources> {
        tracing::info!(
            raw = %self.config.paths.raw.display(),
            index = %self.config.paths.index.display(),
            "reading book data"
        );
        Sources::load(&self.config.paths.raw, &self.config.paths.index)
    }

    /// Stage B: clean page text and build the metadata.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the corpus has no pages.
    pub fn transform(&self, sources: Sources) -> Result<Book> {
        let Sources { corpus, index } = sources;
        let total_pages = corpus.pages.len();
        tracing::info!(total_pages, "loaded pages");
        if total_pages == 0 {
            return Err(Error::InvalidInput(format!(
                "{} contains no pages",
                self.config.paths.raw.display()
            )));
        }

        let pages: Vec<_> = corpus
            .pages
            .iter()
            .map(|p| self.stripper.clean_page(p))
            .collect();

        let headings = normalize_headings(&index.indexes.headings, total_pages)?;
        tracing::info!(headings = headings.len(), "normalized headings");

        let book_index = BookIndex {
            id: self.config.book.id.clone(),
            title: index.meta.name,
            author: self.config.book.author.clone(),
            volumes: index.indexes.volumes.len(),
            total_pages,
            chunk_size: self.chunker.size(),
            total_chunks: self.chunker.chunk_count(total_pages),
            headings,
        };

        Ok(Book {
            index: book_index,
            pages,
        })
    }

    /// Stage C: write `index.json` and every chunk file.
    ///
    /// # Errors
    ///
    /// [`Error::Write`] or [`Error::Encode`]. Files written before the
    /// failure are left in place.
    pub fn emit(&self, book: &Book) -> Result<BuildReport> {
        let writer = OutputWriter::new(&self.config.paths.output_dir, &self.config.paths.pages_dir);
        writer.prepare()?;

        let index = writer.write_index(&book.index)?;
        tracing::info!(
            path = %index.path.display(),
            kib = format_args!("{:.1}", index.kib()),
            "wrote index"
        );

        let chunks = self.chunker.chunk(&book.pages);
        let mut reports = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let file = writer.write_chunk(chunk)?;
            tracing::info!(
                chunk = chunk.index,
                pages = format_args!("{}–{}", chunk.start, chunk.end - 1),
                kib = format_args!("{:.1}", file.kib()),
                "wrote chunk"
            );
            reports.push(ChunkReport {
                index: chunk.index,
                first_page: chunk.start,
                last_page: chunk.end - 1,
                file,
            });
        }

        Ok(BuildReport {
            index,
            chunks: reports,
        })
    }

    /// Run all three stages.
    ///
    /// # Errors
    ///
    /// The first error from any stage.
    pub fn run(&self) -> Result<BuildReport> {
        let sources = self.load()?;
        let book = self.transform(sources)?;
        let report = self.emit(&book)?;
        tracing::info!(
            chunks = report.chunks.len(),
            bytes = report.total_bytes(),
            "done"
        );
        Ok(report)
    }
}
