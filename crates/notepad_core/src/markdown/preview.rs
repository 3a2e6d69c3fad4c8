//! Plain-text preview derivation for list rows.

use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\*_`#>~\-]+").expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derives a one-line summary of markdown `content`.
///
/// Rules:
/// - markdown symbols are removed and whitespace is collapsed;
/// - at most the first 100 chars are retained;
/// - `None` when nothing readable is left.
pub fn preview_text(content: &str) -> Option<String> {
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(content, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::preview_text;

    #[test]
    fn preview_strips_markdown_symbols() {
        let text = preview_text("# Title\n\n> **bold** and *it*").expect("preview should exist");
        assert_eq!(text, "Title bold and it");
    }

    #[test]
    fn preview_is_none_for_symbol_only_content() {
        assert_eq!(preview_text(""), None);
        assert_eq!(preview_text("## **"), None);
    }

    #[test]
    fn preview_limits_length_in_chars() {
        let text = preview_text(&"é".repeat(300)).expect("preview should exist");
        assert_eq!(text.chars().count(), 100);
    }
}
