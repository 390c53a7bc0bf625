//! Bookcase system - keeps bookshelves book-only and spills them on
//! destruction.
//!
//! Bookcases contrast with chests on purpose: a destroyed chest drops as
//! one item with its contents inside, while a destroyed bookcase scatters
//! its books on the ground.

use hecs::{Entity, World};

use crate::components::{BookComponent, BookcaseComponent, Inventory};

/// Before-put filter: may `item` enter `container`'s inventory?
///
/// Non-bookcase containers accept anything; bookcases accept only
/// entities carrying a [`BookComponent`].
pub fn accepts_item(world: &World, container: Entity, item: Entity) -> bool {
    if world.get::<&BookcaseComponent>(container).is_err() {
        return true;
    }
    world.get::<&BookComponent>(item).is_ok()
}

/// Put an item into a container's inventory, honoring the bookcase
/// filter. Returns whether the item was accepted.
pub fn put_item(world: &mut World, container: Entity, item: Entity) -> bool {
    if !accepts_item(world, container, item) {
        return false;
    }
    let Ok(mut inventory) = world.get::<&mut Inventory>(container) else {
        return false;
    };
    inventory.slots.push(item);
    true
}

/// Destruction hook: drain a bookcase's inventory and return the books
/// to drop at its location. Anything that somehow is not a book is
/// discarded rather than dropped.
pub fn spill_bookcase(world: &mut World, bookcase: Entity) -> Vec<Entity> {
    if world.get::<&BookcaseComponent>(bookcase).is_err() {
        return Vec::new();
    }
    let items = match world.get::<&mut Inventory>(bookcase) {
        Ok(mut inventory) => std::mem::take(&mut inventory.slots),
        Err(_) => return Vec::new(),
    };
    items
        .into_iter()
        .filter(|&item| world.get::<&BookComponent>(item).is_ok())
        .collect()
}
