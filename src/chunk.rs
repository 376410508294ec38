//! The Chunk type: a contiguous run of pages with its position metadata.

/// A contiguous slice of the page sequence, persisted as one output file.
///
/// ## Page Ranges
///
/// `start` and `end` are indices into the full page sequence, `end` exclusive.
/// With `chunk_size = 50` and 120 pages:
///
/// ```text
/// Chunk 0: pages [0..50)     -> pages/0.json
/// Chunk 1: pages [50..100)   -> pages/1.json
/// Chunk 2: pages [100..120)  -> pages/2.json  <- last chunk may be shorter
/// ```
///
/// A reader that wants page `p` fetches chunk `p / chunk_size` and takes
/// element `p % chunk_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a, T> {
    /// The pages in this chunk, in order.
    pub items: &'a [T],
    /// Index of the first page in the full sequence.
    pub start: usize,
    /// Index one past the last page (exclusive).
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl<'a, T> Chunk<'a, T> {
    /// Create a new chunk.
    #[must_use]
    pub fn new(items: &'a [T], start: usize, index: usize) -> Self {
        Self {
            items,
            start,
            end: start + items.len(),
            index,
        }
    }

    /// Number of pages in this chunk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The page range covered by this chunk.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// File name for this chunk: the plain decimal index, no padding.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.index)
    }
}

impl<T> std::fmt::Display for Chunk<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, pages: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}
