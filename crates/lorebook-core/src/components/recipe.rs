//! Recipe data attached to prefab entities.
//!
//! A prefab carrying [`BookRecipeComponent`] can be embedded in a page
//! with a `<recipe module:prefab>` tag. The component only names assets;
//! resolving names to display icons happens in
//! [`crate::recipes::RecipeRegistry`].

use serde::{Deserialize, Serialize};

/// Whether an ingredient or result is a world block or an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientKind {
    Block,
    Item,
}

/// One ingredient or result slot: an asset reference plus what it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSlot {
    pub kind: IngredientKind,
    /// Asset reference, e.g. `core:Torch`.
    pub reference: String,
}

impl RecipeSlot {
    pub fn block(reference: impl Into<String>) -> Self {
        Self { kind: IngredientKind::Block, reference: reference.into() }
    }

    pub fn item(reference: impl Into<String>) -> Self {
        Self { kind: IngredientKind::Item, reference: reference.into() }
    }
}

/// Declares a recipe that books can embed and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecipeComponent {
    /// Ingredients in display order, blocks and items mixed.
    pub ingredients: Vec<RecipeSlot>,
    /// What the recipe produces.
    pub result: RecipeSlot,
    /// How many results one craft yields.
    pub result_count: u32,
}
