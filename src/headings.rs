//! Table-of-contents normalization.
//!
//! The export numbers heading pages from 1; page files are indexed from 0.
//! Each heading is shifted down by one and then clamped into the page range,
//! since exports occasionally point past the last page or at page 0:
//!
//! ```text
//! totalPages = 120
//!
//! source page   1  ->  0
//! source page  57  ->  56
//! source page 125  ->  119   (past the end)
//! source page   0  ->  0     (before the start)
//! ```
//!
//! Order is preserved. Duplicates are kept.

use crate::{Error, Heading, RawHeading, Result};

/// Convert one 1-based source page into a valid zero-based page index.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `total_pages == 0`.
pub fn clamp_page(source_page: i64, total_pages: usize) -> Result<usize> {
    let last = total_pages.checked_sub(1).ok_or_else(no_pages)?;
    let shifted = source_page.saturating_sub(1);
    if shifted <= 0 {
        return Ok(0);
    }
    Ok(usize::try_from(shifted).map_or(last, |p| p.min(last)))
}

fn no_pages() -> Error {
    Error::InvalidInput("book has no pages; headings cannot be indexed".to_string())
}

/// Normalize `raw` headings against a book of `total_pages` pages.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `total_pages == 0`: there is no valid
/// page for any heading to point at.
pub fn normalize_headings(raw: &[RawHeading], total_pages: usize) -> Result<Vec<Heading>> {
    if total_pages == 0 {
        return Err(no_pages());
    }

    let headings = raw
        .iter()
        .map(|h| {
            Ok(Heading {
                title: h.title.clone(),
                level: h.level,
                page: clamp_page(h.page, total_pages)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let clamped = raw
        .iter()
        .filter(|h| h.page < 1 || usize::try_from(h.page).is_ok_and(|p| p > total_pages))
        .count();
    if clamped > 0 {
        tracing::debug!(clamped, total_pages, "clamped out-of-range heading pages");
    }

    Ok(headings)
}
