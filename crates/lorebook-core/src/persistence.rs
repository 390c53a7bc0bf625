//! Save/Load functionality for book entities
//!
//! Uses bincode for binary serialization. Each book entity's components
//! are captured individually and respawned on load; inventory slot
//! handles are runtime-only and rebuilt by the host, so they are not
//! part of the save.

use hecs::World;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use lorebook_logic::pages::PageBuffer;

use crate::components::{BookComponent, BookRecipeComponent, BookcaseComponent};

/// Version number for save file format (increment when format changes)
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of all book-module entities in a world
#[derive(Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version
    pub version: u32,
    /// All book-module entities with their components
    pub entities: Vec<SerializableEntity>,
}

/// All possible book-module components for an entity, as optionals
#[derive(Serialize, Deserialize, Default)]
pub struct SerializableEntity {
    pub book: Option<BookComponent>,
    pub recipe: Option<BookRecipeComponent>,
    pub bookcase: Option<BookcaseComponent>,
}

fn serialize_entities(world: &World) -> Vec<SerializableEntity> {
    let mut entities = Vec::new();

    for entity in world.iter() {
        let mut se = SerializableEntity::default();

        if let Some(c) = entity.get::<&BookComponent>() {
            se.book = Some((*c).clone());
        }
        if let Some(c) = entity.get::<&BookRecipeComponent>() {
            se.recipe = Some((*c).clone());
        }
        if let Some(c) = entity.get::<&BookcaseComponent>() {
            se.bookcase = Some(*c);
        }

        if se.book.is_some() || se.recipe.is_some() || se.bookcase.is_some() {
            entities.push(se);
        }
    }

    entities
}

fn spawn_entity(world: &mut World, se: SerializableEntity) {
    let entity = world.spawn(());

    if let Some(mut book) = se.book {
        // Repair the even-length invariant at the load boundary.
        book.pages = PageBuffer::from_pages(book.pages).into_pages();
        let _ = world.insert_one(entity, book);
    }
    if let Some(c) = se.recipe {
        let _ = world.insert_one(entity, c);
    }
    if let Some(c) = se.bookcase {
        let _ = world.insert_one(entity, c);
    }
}

/// Save every book-module entity in the world to a writer
pub fn save_books<W: Write>(writer: W, world: &World) -> Result<(), SaveError> {
    let save_data = SaveData {
        version: SAVE_VERSION,
        entities: serialize_entities(world),
    };
    bincode::serialize_into(writer, &save_data)?;
    Ok(())
}

/// Load book-module entities from a reader into a world
pub fn load_books<R: Read>(reader: R, world: &mut World) -> Result<usize, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;

    if save_data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save_data.version,
        });
    }

    let count = save_data.entities.len();
    for se in save_data.entities {
        spawn_entity(world, se);
    }
    Ok(count)
}

/// Errors that can occur during save/load
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Bincode(Box<bincode::ErrorKind>),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Bincode(e) => write!(f, "Serialization error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Save version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SaveError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::RecipeSlot;
    use lorebook_logic::color::Color;

    #[test]
    fn save_load_roundtrip() {
        let mut world = World::new();
        world.spawn((BookComponent::blank()
            .with_title("Journal")
            .with_tint(Color::rgb(200, 30, 30))
            .with_pages(vec!["day one".to_string(), "day two".to_string()]),));
        world.spawn((BookcaseComponent,));
        world.spawn((BookRecipeComponent {
            ingredients: vec![RecipeSlot::item("core:Stick")],
            result: RecipeSlot::block("core:Torch"),
            result_count: 1,
        },));
        // Unrelated entities are not saved.
        world.spawn(());

        let mut buffer = Vec::new();
        save_books(&mut buffer, &world).expect("save failed");

        let mut restored = World::new();
        let count = load_books(&buffer[..], &mut restored).expect("load failed");
        assert_eq!(count, 3);

        let mut titles: Vec<Option<String>> = restored
            .query::<&BookComponent>()
            .iter()
            .map(|(_, b)| b.title.clone())
            .collect();
        titles.sort();
        assert_eq!(titles, vec![Some("Journal".to_string())]);

        let recipes = restored.query::<&BookRecipeComponent>().iter().count();
        assert_eq!(recipes, 1);
    }

    #[test]
    fn load_repairs_odd_page_lists() {
        let mut world = World::new();
        let mut book = BookComponent::blank();
        // Bypass the builder to simulate a corrupt save.
        book.pages = vec!["lonely".to_string()];
        world.spawn((book,));

        let mut buffer = Vec::new();
        save_books(&mut buffer, &world).expect("save failed");

        let mut restored = World::new();
        load_books(&buffer[..], &mut restored).expect("load failed");

        for (_, book) in restored.query::<&BookComponent>().iter() {
            assert_eq!(book.pages.len() % 2, 0);
            assert!(book.pages.len() >= 2);
        }
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let save_data = SaveData { version: 99, entities: Vec::new() };
        let buffer = bincode::serialize(&save_data).unwrap();

        let mut world = World::new();
        let err = load_books(&buffer[..], &mut world).unwrap_err();
        assert!(matches!(
            err,
            SaveError::VersionMismatch { expected: SAVE_VERSION, found: 99 }
        ));
    }
}
