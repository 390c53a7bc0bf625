//! Texture-region selection for the book widget.
//!
//! The widget draws into four slots: a cover half and a page half on each
//! side. Which symbolic texture region fills each slot is a pure function
//! of the display state; the host canvas only has to draw what this
//! module says, applying the cover tint where indicated.

use serde::{Deserialize, Serialize};

use crate::pagination::DisplayState;

/// Symbolic texture regions the host asset system resolves by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// Outside of the front/back cover, left half.
    ExteriorLeft,
    /// Outside of the front/back cover, right half.
    ExteriorRight,
    /// Inside of the opened cover, left half.
    InteriorLeft,
    /// Inside of the opened cover, right half.
    InteriorRight,
    /// A readable page surface, left half.
    PageLeft,
    /// A readable page surface, right half.
    PageRight,
    /// Nothing; the slot is not drawn.
    Blank,
}

/// What each widget slot shows. Cover slots take the book tint, page
/// slots do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFaces {
    pub cover_left: Region,
    pub cover_right: Region,
    pub page_left: Region,
    pub page_right: Region,
}

/// Select the regions for a display state.
pub fn faces(state: DisplayState) -> BookFaces {
    match state {
        DisplayState::ClosedFront => BookFaces {
            cover_left: Region::Blank,
            cover_right: Region::ExteriorRight,
            page_left: Region::Blank,
            page_right: Region::Blank,
        },
        DisplayState::ClosedBack => BookFaces {
            cover_left: Region::ExteriorLeft,
            cover_right: Region::Blank,
            page_left: Region::Blank,
            page_right: Region::Blank,
        },
        DisplayState::OpenFirstPage => BookFaces {
            cover_left: Region::InteriorLeft,
            cover_right: Region::InteriorRight,
            page_left: Region::Blank,
            page_right: Region::PageRight,
        },
        DisplayState::OpenLastPage => BookFaces {
            cover_left: Region::InteriorLeft,
            cover_right: Region::InteriorRight,
            page_left: Region::PageLeft,
            page_right: Region::Blank,
        },
        DisplayState::Spread => BookFaces {
            cover_left: Region::InteriorLeft,
            cover_right: Region::InteriorRight,
            page_left: Region::PageLeft,
            page_right: Region::PageRight,
        },
    }
}
