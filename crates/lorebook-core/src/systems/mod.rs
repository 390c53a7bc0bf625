//! Systems - logic that operates on components

mod bookcase;

pub use bookcase::*;
