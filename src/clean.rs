//! Inline markup stripping.
//!
//! Exported page text wraps runs of text in inline markup (footnote markers,
//! Quranic verses, highlighted words). Readers only want the text:
//!
//! ```text
//! <span class="x">hello</span> world   ->   hello world
//! ```
//!
//! ## Policy
//!
//! Opening and closing markers are removed by two independent pattern matches,
//! not by a nesting-aware parser:
//!
//! - opening: `<TAG` followed by anything up to the next `>` (attributes included)
//! - closing: exactly `</TAG>`
//!
//! Everything else, including whitespace and non-Latin text, is kept verbatim.
//! Unbalanced markup is not repaired; stray markers are simply dropped.
//!
//! Removing a marker can splice its neighbours into a new marker
//! (`<<span>span>` becomes `<span>`). Both passes repeat until neither
//! matches, so cleaning is idempotent.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Page, Result};

/// The marker tag stripped by default.
pub const DEFAULT_TAG: &str = "span";

static SPAN_STRIPPER: Lazy<MarkupStripper> = Lazy::new(|| {
    MarkupStripper::new(DEFAULT_TAG).expect("default tag is a valid pattern")
});

/// Strip `<span ...>` and `</span>` markers, keeping the wrapped text.
///
/// ## Example
///
/// ```rust
/// assert_eq!(leaves::strip_spans(r#"<span class="x">hello</span> world"#), "hello world");
/// ```
#[must_use]
pub fn strip_spans(text: &str) -> Cow<'_, str> {
    SPAN_STRIPPER.strip(text)
}

/// Removes the open/close markers of one inline tag.
#[derive(Debug, Clone)]
pub struct MarkupStripper {
    tag: String,
    open: Regex,
    close: Regex,
}

impl MarkupStripper {
    /// Create a stripper for `tag` (e.g. `"span"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMarkupTag`] if `tag` is empty or contains
    /// characters that cannot appear in a tag name.
    pub fn new(tag: &str) -> Result<Self> {
        let valid = !tag.is_empty()
            && tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ':' || c == '_');
        if !valid {
            return Err(Error::InvalidMarkupTag(tag.to_string()));
        }

        let name = regex::escape(tag);
        let open = Regex::new(&format!("<{name}[^>]*>"))
            .map_err(|_| Error::InvalidMarkupTag(tag.to_string()))?;
        let close = Regex::new(&format!("</{name}>"))
            .map_err(|_| Error::InvalidMarkupTag(tag.to_string()))?;

        Ok(Self {
            tag: tag.to_string(),
            open,
            close,
        })
    }

    /// The tag this stripper removes.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Remove every marker from `text`.
    ///
    /// Borrows when `text` has nothing to remove.
    #[must_use]
    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.has_markers(text) {
            return Cow::Borrowed(text);
        }

        let mut current = text.to_string();
        loop {
            let opened = self.open.replace_all(&current, "");
            let closed = self.close.replace_all(&opened, "").into_owned();
            if closed == current {
                return Cow::Owned(closed);
            }
            current = closed;
        }
    }

    /// Whether `text` still contains an opening or closing marker.
    #[must_use]
    pub fn has_markers(&self, text: &str) -> bool {
        self.open.is_match(text) || self.close.is_match(text)
    }

    /// A copy of `page` with its text stripped. `vol` and `page` are untouched.
    #[must_use]
    pub fn clean_page(&self, page: &Page) -> Page {
        Page {
            text: self.strip(&page.text).into_owned(),
            vol: page.vol.clone(),
            page: page.page.clone(),
        }
    }
}

impl Default for MarkupStripper {
    fn default() -> Self {
        SPAN_STRIPPER.clone()
    }
}
