//! The book screen controller.
//!
//! One `BookSession` exists per open book screen. It owns the edit
//! buffer, the page cursor, and the edit gating, and turns the raw pages
//! into paragraphs the host canvas can draw. Both the reading screen and
//! the page-editor sub-screen work against the same session, so there is
//! no shared static state anywhere.
//!
//! Mutations stay in the session's buffer until [`BookSession::save`]
//! commits them back to the entity's [`BookComponent`] in one atomic
//! replace; dropping or [`BookSession::cancel`]-ing the session discards
//! them.

use hecs::{Entity, World};

use lorebook_logic::color::Color;
use lorebook_logic::faces::{faces, BookFaces};
use lorebook_logic::markup::{parse_page, ContentBlock};
use lorebook_logic::pages::{InvariantError, PageBuffer};
use lorebook_logic::pagination::{
    advance, clamp_index, display_state, left_page, retreat, right_page, DisplayState, PageIndex,
};

use crate::components::{BookComponent, EditBooksComponent, Inventory};
use crate::recipes::{RecipeDefinition, RecipeRegistry};

/// One displayable paragraph for a page pane.
#[derive(Debug, Clone, PartialEq)]
pub enum Paragraph {
    /// Styled text run.
    Text(String),
    /// A resolved recipe to draw as an icon strip.
    Recipe(RecipeDefinition),
    /// Inline error indicator shown where a block failed to parse or
    /// resolve. The page keeps rendering; the screen never crashes.
    Error(String),
}

/// Which half of the spread a control or pane refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Left,
    Right,
}

/// Status label shown under the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Editing,
    Reading,
    ReadOnly,
}

/// Visibility of the five edit controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSet {
    pub edit_left: bool,
    pub edit_right: bool,
    pub delete_left: bool,
    pub delete_right: bool,
    pub add_pages: bool,
}

/// Session-level failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The target entity carries no [`BookComponent`].
    NotABook,
    /// An edit was attempted without the edit capability, or on a
    /// read-only book.
    NotEditable,
    /// The addressed pane shows no page (covers, or the blank half of a
    /// first/last page view).
    NoPageVisible,
    /// The page buffer refused the mutation.
    Invariant(InvariantError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotABook => write!(f, "entity is not a book"),
            SessionError::NotEditable => write!(f, "book is not editable in this session"),
            SessionError::NoPageVisible => write!(f, "no page is visible in that pane"),
            SessionError::Invariant(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<InvariantError> for SessionError {
    fn from(e: InvariantError) -> Self {
        SessionError::Invariant(e)
    }
}

/// Whether any item in the holder's inventory grants book editing.
pub fn holds_edit_tool(world: &World, holder: Entity) -> bool {
    let Ok(inventory) = world.get::<&Inventory>(holder) else {
        return false;
    };
    inventory
        .slots
        .iter()
        .any(|&item| world.get::<&EditBooksComponent>(item).is_ok())
}

/// Controller for one open book screen.
#[derive(Debug)]
pub struct BookSession<'a> {
    entity: Entity,
    registry: &'a RecipeRegistry,
    buffer: PageBuffer,
    title: Option<String>,
    tint: Color,
    read_only: bool,
    can_edit: bool,
    index: PageIndex,
}

impl<'a> BookSession<'a> {
    /// Open a book entity. `has_capability` says whether the opener
    /// holds an edit tool (see [`holds_edit_tool`]); editing is enabled
    /// only when that is true and the book is not read-only.
    ///
    /// The persisted page list is copied into the edit buffer, repairing
    /// an odd length at this boundary so rendering can rely on the
    /// even-length invariant.
    pub fn open(
        world: &World,
        entity: Entity,
        registry: &'a RecipeRegistry,
        has_capability: bool,
    ) -> Result<Self, SessionError> {
        let book = world
            .get::<&BookComponent>(entity)
            .map_err(|_| SessionError::NotABook)?;
        Ok(Self {
            entity,
            registry,
            buffer: PageBuffer::from_pages(book.pages.clone()),
            title: book.title.clone(),
            tint: book.tint,
            read_only: book.read_only,
            can_edit: has_capability && !book.read_only,
            index: -1,
        })
    }

    // ── Navigation ─────────────────────────────────────────────────────

    pub fn advance(&mut self) {
        self.index = advance(self.index, self.buffer.page_count());
    }

    pub fn retreat(&mut self) {
        self.index = retreat(self.index, self.buffer.page_count());
    }

    pub fn index(&self) -> PageIndex {
        self.index
    }

    pub fn state(&self) -> DisplayState {
        display_state(self.index, self.buffer.page_count())
    }

    /// Texture regions for the widget's four slots.
    pub fn faces(&self) -> BookFaces {
        faces(self.state())
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn page_count(&self) -> usize {
        self.buffer.page_count()
    }

    // ── Rendering ──────────────────────────────────────────────────────

    /// Page index shown in a pane, if any.
    pub fn visible_page(&self, pane: Pane) -> Option<usize> {
        let count = self.buffer.page_count();
        match pane {
            Pane::Left => left_page(self.index, count),
            Pane::Right => right_page(self.index, count),
        }
    }

    /// Raw text of the page shown in a pane, for prefilling the page
    /// editor's text box.
    pub fn pane_text(&self, pane: Pane) -> Option<&str> {
        self.visible_page(pane).map(|page| self.buffer.page(page))
    }

    /// Paragraphs for one pane. Closed covers and blank halves yield an
    /// empty list; markup and resolution failures become inline
    /// [`Paragraph::Error`] entries.
    pub fn pane_paragraphs(&self, pane: Pane) -> Vec<Paragraph> {
        match self.visible_page(pane) {
            Some(page) => self.render_page(self.buffer.page(page)),
            None => Vec::new(),
        }
    }

    pub fn left_paragraphs(&self) -> Vec<Paragraph> {
        self.pane_paragraphs(Pane::Left)
    }

    pub fn right_paragraphs(&self) -> Vec<Paragraph> {
        self.pane_paragraphs(Pane::Right)
    }

    fn render_page(&self, text: &str) -> Vec<Paragraph> {
        let blocks = match parse_page(text) {
            Ok(blocks) => blocks,
            Err(e) => return vec![Paragraph::Error(e.to_string())],
        };
        blocks
            .into_iter()
            .map(|block| match block {
                ContentBlock::Text(text) => Paragraph::Text(text),
                ContentBlock::Recipe(reference) => match self.registry.resolve(&reference) {
                    Ok(recipe) => Paragraph::Recipe(recipe.clone()),
                    Err(e) => Paragraph::Error(e.to_string()),
                },
            })
            .collect()
    }

    // ── Edit gating ────────────────────────────────────────────────────

    pub fn status(&self) -> Status {
        if self.read_only {
            Status::ReadOnly
        } else if self.can_edit {
            Status::Editing
        } else {
            Status::Reading
        }
    }

    /// Control visibility for the current view. Delete controls hide
    /// individually whenever removing a pair would drop below the
    /// two-page minimum.
    pub fn controls(&self) -> ControlSet {
        let left_visible = self.visible_page(Pane::Left).is_some();
        let right_visible = self.visible_page(Pane::Right).is_some();
        let open = left_visible || right_visible;
        let deletable = self.buffer.can_delete_pair();
        ControlSet {
            edit_left: self.can_edit && left_visible,
            edit_right: self.can_edit && right_visible,
            delete_left: self.can_edit && left_visible && deletable,
            delete_right: self.can_edit && right_visible && deletable,
            add_pages: self.can_edit && open,
        }
    }

    // ── Editing ────────────────────────────────────────────────────────

    fn editable_page(&self, pane: Pane) -> Result<usize, SessionError> {
        if !self.can_edit {
            return Err(SessionError::NotEditable);
        }
        self.visible_page(pane).ok_or(SessionError::NoPageVisible)
    }

    /// Overwrite the text of the page shown in a pane.
    pub fn replace_pane_text(
        &mut self,
        pane: Pane,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        let page = self.editable_page(pane)?;
        self.buffer.replace_page_text(page, text)?;
        Ok(())
    }

    /// Delete the aligned pair containing the page shown in a pane.
    ///
    /// One consistent rule for both panes: each delete control removes
    /// the pair its own page belongs to. Afterwards the cursor is pulled
    /// back into range and onto spread parity.
    pub fn delete_pane_pair(&mut self, pane: Pane) -> Result<(), SessionError> {
        let page = self.editable_page(pane)?;
        self.buffer.delete_page_pair(page)?;
        self.resettle_cursor();
        Ok(())
    }

    /// Insert a blank pair after the pair containing the rightmost
    /// visible page; with the book closed, at the back.
    pub fn add_page_pair(&mut self) -> Result<(), SessionError> {
        if !self.can_edit {
            return Err(SessionError::NotEditable);
        }
        let count = self.buffer.page_count();
        let at = match self
            .visible_page(Pane::Right)
            .or_else(|| self.visible_page(Pane::Left))
        {
            Some(page) => (page & !1) + 2,
            None => count,
        };
        self.buffer.insert_page_pair(at)?;
        Ok(())
    }

    fn resettle_cursor(&mut self) {
        let count = self.buffer.page_count();
        self.index = clamp_index(self.index, count);
        // Spreads are odd-left; a delete can leave the cursor on an even
        // interior page.
        if display_state(self.index, count) == DisplayState::Spread && self.index % 2 == 0 {
            self.index -= 1;
        }
    }

    // ── Commit / discard ───────────────────────────────────────────────

    /// Commit the edit buffer to the persisted component as one atomic
    /// replace of the page list.
    pub fn save(&self, world: &mut World) -> Result<(), SessionError> {
        let mut book = world
            .get::<&mut BookComponent>(self.entity)
            .map_err(|_| SessionError::NotABook)?;
        book.pages = self.buffer.pages().to_vec();
        book.title = self.title.clone();
        book.tint = self.tint;
        Ok(())
    }

    /// Discard the edit buffer. Equivalent to dropping the session; it
    /// exists so screens can wire a cancel button to something explicit.
    pub fn cancel(self) {}

    /// Serialized prefab snippet for the current book state, for
    /// copy-to-clipboard export.
    pub fn prefab_text(&self) -> String {
        crate::prefab::book_prefab_text(
            self.title.as_deref(),
            self.buffer.pages(),
        )
    }
}
