//! Even-length page buffer with pair-wise insert and delete.
//!
//! Pages are always viewed as left/right pairs, so the page list must
//! stay even-length and hold at least one pair. The buffer enforces both
//! at every mutation and repairs invalid input at the load boundary, so
//! rendering code never has to defend against an odd list.
//!
//! The buffer is an in-memory edit copy. Whoever owns the persisted page
//! list decides when to commit it back; canceling an edit session simply
//! drops the buffer.

use serde::{Deserialize, Serialize};

/// Smallest legal book: one left/right pair.
pub const MIN_PAGES: usize = 2;

/// A mutation would break the page-list invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Deleting this pair would leave the book with fewer than
    /// [`MIN_PAGES`] pages.
    MinimumPages,
    /// The index does not name an existing page.
    PageOutOfRange { index: usize, page_count: usize },
}

impl std::fmt::Display for InvariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantError::MinimumPages => {
                write!(f, "a book must keep at least {} pages", MIN_PAGES)
            }
            InvariantError::PageOutOfRange { index, page_count } => {
                write!(f, "page {} out of range (book has {} pages)", index, page_count)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Ordered page list holding the even-length invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBuffer {
    pages: Vec<String>,
}

impl PageBuffer {
    /// A fresh book: two blank pages.
    pub fn new() -> Self {
        Self { pages: vec![String::new(), String::new()] }
    }

    /// Build a buffer from a loaded page list, repairing invalid input:
    /// an empty list becomes a fresh book and an odd-length list is
    /// padded with one trailing blank page.
    pub fn from_pages(pages: Vec<String>) -> Self {
        let mut pages = pages;
        if pages.is_empty() {
            return Self::new();
        }
        if pages.len() % 2 != 0 {
            pages.push(String::new());
        }
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of one page. Out-of-range reads return an empty page rather
    /// than panicking, matching how closed covers render.
    pub fn page(&self, index: usize) -> &str {
        self.pages.get(index).map_or("", String::as_str)
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Consume the buffer, yielding the page list for a commit.
    pub fn into_pages(self) -> Vec<String> {
        self.pages
    }

    /// Insert a blank left/right pair before `at`. `at` may equal the
    /// page count to append a pair at the back.
    pub fn insert_page_pair(&mut self, at: usize) -> Result<(), InvariantError> {
        if at > self.pages.len() {
            return Err(InvariantError::PageOutOfRange {
                index: at,
                page_count: self.pages.len(),
            });
        }
        self.pages.insert(at, String::new());
        self.pages.insert(at, String::new());
        Ok(())
    }

    /// Delete the aligned pair containing `index` (pages `index & !1` and
    /// `index | 1`). Refuses to shrink the book below [`MIN_PAGES`].
    pub fn delete_page_pair(&mut self, index: usize) -> Result<(), InvariantError> {
        if index >= self.pages.len() {
            return Err(InvariantError::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            });
        }
        if self.pages.len() - 2 < MIN_PAGES {
            return Err(InvariantError::MinimumPages);
        }
        let start = index & !1;
        self.pages.drain(start..start + 2);
        Ok(())
    }

    /// Overwrite one page's text.
    pub fn replace_page_text(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), InvariantError> {
        match self.pages.get_mut(index) {
            Some(page) => {
                *page = text.into();
                Ok(())
            }
            None => Err(InvariantError::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            }),
        }
    }

    /// Whether a pair delete is currently allowed at all.
    pub fn can_delete_pair(&self) -> bool {
        self.pages.len() > MIN_PAGES
    }
}

impl Default for PageBuffer {
    fn default() -> Self {
        Self::new()
    }
}
