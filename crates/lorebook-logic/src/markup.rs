//! Page markup parser.
//!
//! Book pages are plain text with optional embedded recipe tags. A tag
//! looks like `<recipe core:Torch>`: the literal token `<recipe` followed
//! by a reference name and a closing `>`. The parser splits a page into an
//! ordered sequence of content blocks, alternating text runs and recipe
//! references, preserving source order.
//!
//! ```
//! use lorebook_logic::markup::{parse_page, ContentBlock};
//!
//! let blocks = parse_page("hello <recipe foo> world").unwrap();
//! assert_eq!(
//!     blocks,
//!     vec![
//!         ContentBlock::Text("hello ".to_string()),
//!         ContentBlock::Recipe("foo".to_string()),
//!         ContentBlock::Text(" world".to_string()),
//!     ]
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Token that opens an embedded recipe tag.
const RECIPE_TAG_OPEN: &str = "<recipe";

/// The host UI's line-break markup. Raw newlines in page text are
/// rewritten to this token so the text renderer wraps where the author
/// pressed enter.
pub const LINE_BREAK: &str = "<l>";

/// One block of page content, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentBlock {
    /// A run of styled text, with newlines already translated to [`LINE_BREAK`].
    Text(String),
    /// A reference to an externally defined recipe, to be resolved before
    /// rendering.
    Recipe(String),
}

/// Malformed page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A `<recipe` tag was opened but never closed with `>`. Carries the
    /// byte offset of the offending tag.
    UnterminatedTag { at: usize },
}

impl std::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupError::UnterminatedTag { at } => {
                write!(f, "recipe tag at byte {} is missing its closing '>'", at)
            }
        }
    }
}

impl std::error::Error for MarkupError {}

/// Parse one page of raw text into an ordered block sequence.
///
/// An empty page yields an empty sequence, and empty text runs between
/// adjacent tags produce no block, so downstream renderers never see an
/// empty paragraph. A `<recipe` with no closing `>` fails fast with
/// [`MarkupError::UnterminatedTag`] instead of scanning forever.
pub fn parse_page(text: &str) -> Result<Vec<ContentBlock>, MarkupError> {
    let mut blocks = Vec::new();
    let mut rest = text;
    let mut offset = 0;

    while let Some(tag_start) = rest.find(RECIPE_TAG_OPEN) {
        push_text(&mut blocks, &rest[..tag_start]);

        let body_start = tag_start + RECIPE_TAG_OPEN.len();
        let body_end = rest[body_start..]
            .find('>')
            .ok_or(MarkupError::UnterminatedTag { at: offset + tag_start })?;

        let reference = rest[body_start..body_start + body_end].trim();
        blocks.push(ContentBlock::Recipe(reference.to_string()));

        // Resume after the closing '>'.
        rest = &rest[body_start + body_end + 1..];
        offset += body_start + body_end + 1;
    }

    push_text(&mut blocks, rest);
    Ok(blocks)
}

fn push_text(blocks: &mut Vec<ContentBlock>, run: &str) {
    if !run.is_empty() {
        blocks.push(ContentBlock::Text(run.replace('\n', LINE_BREAK)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_yields_no_blocks() {
        assert_eq!(parse_page("").unwrap(), Vec::new());
    }

    #[test]
    fn plain_text_is_single_block() {
        assert_eq!(
            parse_page("once upon a time").unwrap(),
            vec![ContentBlock::Text("once upon a time".to_string())]
        );
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(
            parse_page("line one\nline two").unwrap(),
            vec![ContentBlock::Text("line one<l>line two".to_string())]
        );
    }

    #[test]
    fn text_recipe_text() {
        let blocks = parse_page("hello <recipe foo> world").unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Text("hello ".to_string()),
                ContentBlock::Recipe("foo".to_string()),
                ContentBlock::Text(" world".to_string()),
            ]
        );
    }

    #[test]
    fn reference_is_whitespace_trimmed() {
        let blocks = parse_page("<recipe   core:Torch  >").unwrap();
        assert_eq!(blocks, vec![ContentBlock::Recipe("core:Torch".to_string())]);
    }

    #[test]
    fn adjacent_tags_produce_no_empty_text() {
        let blocks = parse_page("<recipe a><recipe b>").unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Recipe("a".to_string()),
                ContentBlock::Recipe("b".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_tag_errors_instead_of_looping() {
        let err = parse_page("<recipe foo").unwrap_err();
        assert_eq!(err, MarkupError::UnterminatedTag { at: 0 });
    }

    #[test]
    fn unterminated_tag_after_text_reports_offset() {
        let err = parse_page("intro <recipe foo").unwrap_err();
        assert_eq!(err, MarkupError::UnterminatedTag { at: 6 });
    }

    #[test]
    fn second_tag_unterminated() {
        let err = parse_page("<recipe a> mid <recipe b").unwrap_err();
        assert_eq!(err, MarkupError::UnterminatedTag { at: 15 });
    }

    #[test]
    fn trailing_text_preserved() {
        let blocks = parse_page("<recipe a> the end").unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Recipe("a".to_string()),
                ContentBlock::Text(" the end".to_string()),
            ]
        );
    }
}
