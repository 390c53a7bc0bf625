//! Bookcase, inventory, and edit-capability components.

use hecs::Entity;
use serde::{Deserialize, Serialize};

/// Marker: a block with an inventory that should act as a bookshelf,
/// accepting only books.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BookcaseComponent;

/// Marker: items carrying this component let the holder edit books.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EditBooksComponent;

/// Minimal item-slot list. The host inventory system owns the real
/// thing; this is just enough surface for the bookcase system to filter
/// and spill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Occupied slots. Entity handles are runtime-only and rebuilt by
    /// the host on load.
    #[serde(skip)]
    pub slots: Vec<Entity>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_items(slots: Vec<Entity>) -> Self {
        Self { slots }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
