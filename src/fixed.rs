//! Fixed-size partitioning of the page sequence.
//!
//! The page sequence is cut into consecutive groups of `size` pages. There is
//! no overlap: every page lands in exactly one chunk.
//!
//! ## How It Works
//!
//! ```text
//! size = 50, 120 pages
//!
//! Chunk 0: [0..50)
//! Chunk 1: [50..100)
//! Chunk 2: [100..120)   <- final chunk may be shorter
//! ```
//!
//! `L` pages yield `ceil(L / size)` chunks; zero pages yield zero chunks.
//! Concatenating the chunks in index order gives back the input exactly.

use crate::{Chunk, Error, Result};

/// The chunk size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Fixed-size, non-overlapping chunker.
///
/// ## Example
///
/// ```rust
/// use leaves::FixedChunker;
///
/// let chunker = FixedChunker::new(50).unwrap();
/// let pages: Vec<u32> = (0..120).collect();
/// let chunks = chunker.chunk(&pages);
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2].len(), 20);
/// assert_eq!(chunks[1].start, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChunker {
    size: usize,
}

impl FixedChunker {
    /// Create a new fixed-size chunker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `size == 0`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidChunkSize(size));
        }
        Ok(Self { size })
    }

    /// Pages per chunk.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of chunks `len` items produce.
    #[must_use]
    pub fn chunk_count(&self, len: usize) -> usize {
        len.div_ceil(self.size)
    }

    /// Split `items` into ordered chunks of at most `size` items.
    #[must_use]
    pub fn chunk<'a, T>(&self, items: &'a [T]) -> Vec<Chunk<'a, T>> {
        items
            .chunks(self.size)
            .enumerate()
            .map(|(index, slice)| Chunk::new(slice, index * self.size, index))
            .collect()
    }
}

impl Default for FixedChunker {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_chunking() {
        let chunker = FixedChunker::new(50).unwrap();
        let pages: Vec<usize> = (0..120).collect();
        let chunks = chunker.chunk(&pages);

        let lens: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(lens, vec![50, 50, 20]);
        assert_eq!(chunks[0].span(), 0..50);
        assert_eq!(chunks[1].span(), 50..100);
        assert_eq!(chunks[2].span(), 100..120);
        assert_eq!(chunks[2].items[0], 100);
        assert_eq!(chunker.chunk_count(pages.len()), 3);
    }

    #[test]
    fn test_empty_input() {
        let chunker = FixedChunker::default();
        let pages: Vec<u8> = vec![];
        assert!(chunker.chunk(&pages).is_empty());
        assert_eq!(chunker.chunk_count(0), 0);
    }

    #[test]
    fn test_exact_multiple() {
        let chunker = FixedChunker::new(10).unwrap();
        let pages = vec!['x'; 30];
        let chunks = chunker.chunk(&pages);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == 10));
    }

    #[test]
    fn test_input_smaller_than_chunk() {
        let chunker = FixedChunker::new(50).unwrap();
        let pages = [1, 2, 3];
        let chunks = chunker.chunk(&pages);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].items, &pages[..]);
        assert_eq!(chunks[0].index, 0);
    }

    #[test]
    fn test_indices_sequential() {
        let chunker = FixedChunker::new(3).unwrap();
        let pages: Vec<u8> = (0..10).collect();
        for (i, chunk) in chunker.chunk(&pages).iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert_eq!(chunk.start, i * 3);
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            FixedChunker::new(0),
            Err(Error::InvalidChunkSize(0))
        ));
    }

    #[test]
    fn test_default_size() {
        assert_eq!(FixedChunker::default().size(), DEFAULT_CHUNK_SIZE);
    }
}
