//! The book component itself.

use lorebook_logic::color::Color;
use lorebook_logic::pages::PageBuffer;
use serde::{Deserialize, Serialize};

/// How a book's pages are meant to be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookType {
    Written,
    Picture,
}

/// Marks an item entity as a book that can be opened and read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookComponent {
    /// Name shown on the front cover, if the book has been titled.
    pub title: Option<String>,
    /// Cover tint applied to the exterior texture regions.
    pub tint: Color,
    pub book_type: BookType,
    /// Read-only books can never enter edit mode, whatever the reader
    /// is holding.
    pub read_only: bool,
    /// Ordered page list. Kept even-length; see
    /// [`lorebook_logic::pages::PageBuffer`] for the load-time repair.
    pub pages: Vec<String>,
}

impl BookComponent {
    /// A blank, writable book with one empty page pair.
    pub fn blank() -> Self {
        Self {
            title: None,
            tint: Color::WHITE,
            book_type: BookType::Written,
            read_only: false,
            pages: PageBuffer::new().into_pages(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = PageBuffer::from_pages(pages).into_pages();
        self
    }
}

impl Default for BookComponent {
    fn default() -> Self {
        Self::blank()
    }
}
