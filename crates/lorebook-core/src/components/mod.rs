//! Components - pure data attached to entities

mod book;
mod bookcase;
mod recipe;

pub use book::*;
pub use bookcase::*;
pub use recipe::*;
