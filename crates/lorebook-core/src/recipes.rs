//! Recipe reference resolution.
//!
//! Page markup names recipes by reference (`<recipe core:TorchRecipe>`).
//! The registry maps those references to displayable definitions built
//! from [`BookRecipeComponent`] data plus the host's icon/label lookup.
//! Unknown references surface [`NotFoundError`] so the screen can render
//! an inline error instead of silently dropping the paragraph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::{BookRecipeComponent, IngredientKind, RecipeSlot};

/// A recipe reference that no registered definition answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    pub reference: String,
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no recipe registered under '{}'", self.reference)
    }
}

impl std::error::Error for NotFoundError {}

/// One ingredient or result, resolved to what the widget draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientView {
    pub kind: IngredientKind,
    /// Symbolic icon name the host asset system resolves. Blocks render
    /// their mesh over the terrain atlas, items their flat icon.
    pub icon: String,
    /// Tooltip label.
    pub label: String,
}

/// A fully resolved recipe, ready for the recipe paragraph renderer:
/// ingredients drawn left to right, then the result with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    pub ingredients: Vec<IngredientView>,
    pub result: IngredientView,
    pub result_count: u32,
}

/// Maps recipe references to definitions.
///
/// In the running game this is populated once from every prefab carrying
/// a [`BookRecipeComponent`]; the host's own asset cache sits behind the
/// icon lookup, so no extra caching happens here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeRegistry {
    recipes: HashMap<String, RecipeDefinition>,
}

impl RecipeRegistry {
    pub fn new() -> Self {
        Self { recipes: HashMap::new() }
    }

    /// Register a prefab's recipe under its reference name.
    pub fn register(&mut self, reference: impl Into<String>, recipe: &BookRecipeComponent) {
        let definition = RecipeDefinition {
            ingredients: recipe.ingredients.iter().map(resolve_slot).collect(),
            result: resolve_slot(&recipe.result),
            result_count: recipe.result_count,
        };
        self.recipes.insert(reference.into(), definition);
    }

    /// Resolve a reference from page markup.
    pub fn resolve(&self, reference: &str) -> Result<&RecipeDefinition, NotFoundError> {
        self.recipes
            .get(reference)
            .ok_or_else(|| NotFoundError { reference: reference.to_string() })
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Translate an asset reference into icon name and tooltip label.
///
/// Blocks use the shared terrain atlas, items their own icon asset. The
/// label is the reference's short name, the same fallback the host uses
/// when a prefab carries no display name.
fn resolve_slot(slot: &RecipeSlot) -> IngredientView {
    let icon = match slot.kind {
        IngredientKind::Block => format!("engine:terrain#{}", slot.reference),
        IngredientKind::Item => format!("{}.icon", slot.reference),
    };
    let label = slot
        .reference
        .rsplit(':')
        .next()
        .unwrap_or(&slot.reference)
        .to_string();
    IngredientView { kind: slot.kind, icon, label }
}
