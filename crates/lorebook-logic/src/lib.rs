//! Pure book logic for Lorebook.
//!
//! This crate contains everything about in-game books that is independent
//! of the host engine: how pages are parsed, how the reader pages through
//! a book, and how an edit session mutates the page list. Functions take
//! plain data and return results, making them unit-testable and portable
//! across engines.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`color`] | RGBA cover tint |
//! | [`faces`] | Texture-region selection per display state (widget draw logic) |
//! | [`markup`] | Page markup parser (`<recipe name>` tags between text runs) |
//! | [`pages`] | Even-length page buffer with pair insert/delete |
//! | [`pagination`] | Closed/open/spread display states and navigation |

pub mod color;
pub mod faces;
pub mod markup;
pub mod pages;
pub mod pagination;
