//! Display states and navigation for paging through a book.
//!
//! A book is viewed as left/right pairs. The cursor is the index of the
//! left-hand page of the current spread, with `-1` meaning "closed,
//! looking at the front cover" and `page_count` meaning "closed from the
//! back". The display state is always derived from the cursor and the
//! page count; it is never stored, so the two cannot diverge.
//!
//! # State map
//!
//! | index | state |
//! |-------|-------|
//! | -1 | [`DisplayState::ClosedFront`] |
//! | 0 | [`DisplayState::OpenFirstPage`] |
//! | interior | [`DisplayState::Spread`] (right page is `index + 1`) |
//! | count - 1 | [`DisplayState::OpenLastPage`] |
//! | count | [`DisplayState::ClosedBack`] |
//!
//! Books with fewer than two pages degenerate to a two-state machine that
//! flips between the covers.

use serde::{Deserialize, Serialize};

/// Cursor position of the left-hand page, or a closed-cover sentinel.
pub type PageIndex = i32;

/// What the book widget should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    /// Closed, front cover visible.
    ClosedFront,
    /// Only the first page is visible; the spread has no left neighbor.
    OpenFirstPage,
    /// Two interior pages visible.
    Spread,
    /// Only the last page is visible; the spread has no right neighbor.
    OpenLastPage,
    /// Closed from the back, back cover visible.
    ClosedBack,
}

/// Clamp a cursor into the valid range `[-1, page_count]`.
///
/// Out-of-range requests are valid "stay at the boundary" signals, not
/// errors.
pub fn clamp_index(index: PageIndex, page_count: usize) -> PageIndex {
    index.clamp(-1, page_count as i32)
}

/// Derive the display state from the cursor and page count.
pub fn display_state(index: PageIndex, page_count: usize) -> DisplayState {
    let index = clamp_index(index, page_count);
    let count = page_count as i32;

    // Degenerate books flip straight from cover to cover.
    if page_count < 2 {
        return if index < 0 {
            DisplayState::ClosedFront
        } else {
            DisplayState::ClosedBack
        };
    }

    if index == -1 {
        DisplayState::ClosedFront
    } else if index == 0 {
        DisplayState::OpenFirstPage
    } else if index == count - 1 {
        DisplayState::OpenLastPage
    } else if index == count {
        DisplayState::ClosedBack
    } else {
        DisplayState::Spread
    }
}

/// Step forward: open the front cover, or turn one spread.
pub fn advance(index: PageIndex, page_count: usize) -> PageIndex {
    let step = match display_state(index, page_count) {
        DisplayState::ClosedFront => return clamp_index(0, page_count),
        DisplayState::Spread => 2,
        _ => 1,
    };
    clamp_index(index + step, page_count)
}

/// Step backward: the exact inverse of [`advance`].
///
/// Turning a pair back moves two pages but cannot close the book on its
/// own; the lowest it lands is the first-page view. Closing happens from
/// there with one more step, mirroring how [`advance`] opens the cover
/// onto the first page.
pub fn retreat(index: PageIndex, page_count: usize) -> PageIndex {
    match display_state(index, page_count) {
        DisplayState::ClosedFront => -1,
        DisplayState::Spread | DisplayState::OpenLastPage => {
            clamp_index((index - 2).max(0), page_count)
        }
        _ => clamp_index(index - 1, page_count),
    }
}

/// Page shown in the left pane, if any.
pub fn left_page(index: PageIndex, page_count: usize) -> Option<usize> {
    match display_state(index, page_count) {
        DisplayState::Spread | DisplayState::OpenLastPage => Some(index as usize),
        _ => None,
    }
}

/// Page shown in the right pane, if any.
pub fn right_page(index: PageIndex, page_count: usize) -> Option<usize> {
    match display_state(index, page_count) {
        DisplayState::OpenFirstPage => Some(index as usize),
        DisplayState::Spread => Some(index as usize + 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_anchor_points() {
        assert_eq!(display_state(-1, 6), DisplayState::ClosedFront);
        assert_eq!(display_state(0, 6), DisplayState::OpenFirstPage);
        assert_eq!(display_state(3, 6), DisplayState::Spread);
        assert_eq!(display_state(5, 6), DisplayState::OpenLastPage);
        assert_eq!(display_state(6, 6), DisplayState::ClosedBack);
    }

    #[test]
    fn two_page_book_has_no_spread() {
        assert_eq!(display_state(-1, 2), DisplayState::ClosedFront);
        assert_eq!(display_state(0, 2), DisplayState::OpenFirstPage);
        assert_eq!(display_state(1, 2), DisplayState::OpenLastPage);
        assert_eq!(display_state(2, 2), DisplayState::ClosedBack);
    }

    #[test]
    fn degenerate_books_flip_between_covers() {
        for count in [0, 1] {
            let mut index = -1;
            assert_eq!(display_state(index, count), DisplayState::ClosedFront);
            index = advance(index, count);
            assert_eq!(display_state(index, count), DisplayState::ClosedBack);
            index = advance(index, count);
            assert_eq!(display_state(index, count), DisplayState::ClosedBack);
            index = retreat(index, count);
            index = retreat(index, count);
            assert_eq!(display_state(index, count), DisplayState::ClosedFront);
        }
    }

    #[test]
    fn advance_walks_front_to_back() {
        let count = 6;
        let mut index = -1;
        let mut seen = vec![display_state(index, count)];
        for _ in 0..10 {
            index = advance(index, count);
            seen.push(display_state(index, count));
        }
        assert_eq!(
            &seen[..6],
            &[
                DisplayState::ClosedFront,
                DisplayState::OpenFirstPage,
                DisplayState::Spread,
                DisplayState::Spread,
                DisplayState::OpenLastPage,
                DisplayState::ClosedBack,
            ]
        );
        // Saturates at the back cover.
        assert!(seen[6..].iter().all(|s| *s == DisplayState::ClosedBack));
    }

    #[test]
    fn index_never_leaves_range() {
        let count = 8;
        let mut index = -1;
        // Pseudo-random walk over advance/retreat.
        for step in 0..200 {
            index = if (step * 7 + 3) % 5 < 2 {
                advance(index, count)
            } else {
                retreat(index, count)
            };
            assert!((-1..=count as i32).contains(&index));
        }
    }

    #[test]
    fn advance_retreat_round_trips_from_non_spread_states() {
        let count = 6;
        for index in [-1, 0, 5] {
            assert_ne!(display_state(index, count), DisplayState::Spread);
            let forward = advance(index, count);
            assert_eq!(retreat(forward, count), index);
        }
    }

    #[test]
    fn retreat_is_the_inverse_of_advance() {
        // Walk to the back cover, then walk back; the same cursor chain
        // must appear in reverse.
        let count = 8;
        let mut index = -1;
        let mut forward_chain = vec![index];
        while index < count as i32 {
            index = advance(index, count);
            forward_chain.push(index);
        }
        let mut backward_chain = vec![index];
        while index > -1 {
            index = retreat(index, count);
            backward_chain.push(index);
        }
        backward_chain.reverse();
        assert_eq!(forward_chain, backward_chain);
    }

    #[test]
    fn boundaries_saturate() {
        assert_eq!(retreat(-1, 6), -1);
        assert_eq!(advance(6, 6), 6);
        assert_eq!(clamp_index(-40, 6), -1);
        assert_eq!(clamp_index(40, 6), 6);
    }

    #[test]
    fn spread_turns_a_full_pair() {
        assert_eq!(advance(1, 6), 3);
        assert_eq!(retreat(3, 6), 1);
    }

    #[test]
    fn pane_pages_follow_state() {
        // Open at the first page: text only on the right.
        assert_eq!(left_page(0, 6), None);
        assert_eq!(right_page(0, 6), Some(0));
        // Spread shows index and its right neighbor.
        assert_eq!(left_page(3, 6), Some(3));
        assert_eq!(right_page(3, 6), Some(4));
        // Last page: text only on the left.
        assert_eq!(left_page(5, 6), Some(5));
        assert_eq!(right_page(5, 6), None);
        // Closed covers show nothing.
        assert_eq!(left_page(-1, 6), None);
        assert_eq!(right_page(6, 6), None);
    }
}
