//! Prefab text export.
//!
//! Serializes a book into the host's JSON prefab syntax so authors can
//! copy an in-game book straight into a module's asset tree. This is a
//! copy-to-clipboard convenience: the key set is fixed and the output is
//! valid JSON, but nothing round-trips through it.

/// Render the prefab snippet for a book.
///
/// Untitled books export with an empty display name. Page strings are
/// escaped through `serde_json`, one page per line.
pub fn book_prefab_text(title: Option<&str>, pages: &[String]) -> String {
    let pages_json = pages
        .iter()
        .map(|page| json_string(page))
        .collect::<Vec<_>>()
        .join(",\n        ");
    format!(
        "{{\n    \"parent\": \"lorebook:book\",\n    \"Item.icon\": \"lorebook:book.icon\",\n    \"Item.usage\": \"NONE\",\n    \"DisplayName.name\": {},\n    \"Book.pages\": [\n        {}\n    ],\n    \"InteractionTarget\": {{}},\n    \"InteractionScreen.screen\": \"lorebook:bookScreen\"\n}}\n",
        json_string(title.unwrap_or("")),
        pages_json
    )
}

fn json_string(s: &str) -> String {
    // Strings cannot fail to serialize.
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn export_is_valid_json() {
        let text = book_prefab_text(Some("Field Notes"), &pages(&["one", "two"]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["DisplayName.name"], "Field Notes");
        assert_eq!(value["Book.pages"][0], "one");
        assert_eq!(value["Book.pages"][1], "two");
        assert_eq!(value["parent"], "lorebook:book");
        assert_eq!(value["InteractionScreen.screen"], "lorebook:bookScreen");
    }

    #[test]
    fn pages_are_separated_quote_comma_newline() {
        let text = book_prefab_text(None, &pages(&["one", "two"]));
        assert!(text.contains("\"one\",\n"));
    }

    #[test]
    fn page_text_is_escaped() {
        let text = book_prefab_text(None, &pages(&["he said \"hi\"\nbye"]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["Book.pages"][0], "he said \"hi\"\nbye");
    }

    #[test]
    fn untitled_book_exports_empty_name() {
        let text = book_prefab_text(None, &pages(&["a", "b"]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["DisplayName.name"], "");
    }
}
