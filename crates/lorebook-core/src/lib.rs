//! Lorebook Core - book content for a voxel game.
//!
//! Adds readable, editable in-world books on top of a `hecs` world:
//! - **Components**: Pure data attached to entities (BookComponent,
//!   BookRecipeComponent, BookcaseComponent, Inventory, ...)
//! - **Session**: The screen controller driving paging, rendering, and
//!   edit gating for one open book
//! - **Systems**: Bookcase filtering and spill-on-destroy
//!
//! # Example
//!
//! ```rust,no_run
//! use hecs::World;
//! use lorebook_core::prelude::*;
//!
//! let mut world = World::new();
//! let book = world.spawn((BookComponent::default(),));
//!
//! let registry = RecipeRegistry::new();
//! let mut session = BookSession::open(&world, book, &registry, false).unwrap();
//! session.advance();
//! for paragraph in session.left_paragraphs() {
//!     // hand each paragraph to the host canvas
//!     let _ = paragraph;
//! }
//! ```

pub mod components;
pub mod persistence;
pub mod prefab;
pub mod recipes;
pub mod session;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::recipes::{RecipeDefinition, RecipeRegistry};
    pub use crate::session::BookSession;
}
