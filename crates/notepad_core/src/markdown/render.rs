//! Ordered regex pipeline from markdown subset to markup.
//!
//! # Responsibility
//! - Apply heading, emphasis, blockquote and trailing-break rules in a fixed
//!   order; later stages run on the output of earlier ones.
//!
//! # Invariants
//! - Stage order is part of the contract (`###` before `##` before `#`,
//!   `**` before `*`).
//! - Every pattern is case-insensitive and multiline: `^`/`$` anchor at line
//!   boundaries, and `\r\n` counts as one line terminator.
//! - `MarkupPolicy::Raw` passes source text through unescaped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One substitution stage of the pipeline.
struct Stage {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Stage {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid markdown stage regex"),
            replacement,
        }
    }
}

static STAGES: Lazy<[Stage; 7]> = Lazy::new(|| {
    [
        Stage::new("h3", r"(?imR)^### (.*)$", "<h3>${1}</h3>"),
        Stage::new("h2", r"(?imR)^## (.*)$", "<h2>${1}</h2>"),
        Stage::new("h1", r"(?imR)^# (.*)$", "<h1>${1}</h1>"),
        Stage::new("bold", r"(?imR)\*\*(.*?)\*\*", "<b>${1}</b>"),
        Stage::new("italic", r"(?imR)\*(.*?)\*", "<i>${1}</i>"),
        Stage::new(
            "blockquote",
            r"(?imR)^> (.*)$",
            "<blockquote>${1}</blockquote>",
        ),
        Stage::new("trailing_break", r"\r?\n\z", "<br />"),
    ]
});

/// How source text that looks like markup is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupPolicy {
    /// Source text reaches the output unescaped, including literal tags.
    #[default]
    Raw,
    /// `&`, `<`, `"` and `'` are escaped before the pipeline runs.
    ///
    /// `>` is kept so blockquote markers still match.
    EscapeTags,
}

/// Markdown subset renderer bound to one markup policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownRenderer {
    policy: MarkupPolicy,
}

impl MarkdownRenderer {
    pub fn new(policy: MarkupPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MarkupPolicy {
        self.policy
    }

    /// Converts `markdown` into markup. Empty input yields empty output.
    pub fn render(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let mut output = match self.policy {
            MarkupPolicy::Raw => markdown.to_string(),
            MarkupPolicy::EscapeTags => escape_tags(markdown),
        };
        for stage in STAGES.iter() {
            let replaced = match stage.pattern.replace_all(&output, stage.replacement) {
                Cow::Owned(next) => Some(next),
                Cow::Borrowed(_) => None,
            };
            if let Some(next) = replaced {
                log::trace!(
                    "event=markdown_stage module=markdown status=ok stage={} bytes={}",
                    stage.name,
                    next.len()
                );
                output = next;
            }
        }
        output
    }

    /// Same as [`MarkdownRenderer::render`], with `None` treated as empty.
    pub fn render_optional(&self, markdown: Option<&str>) -> String {
        markdown.map(|value| self.render(value)).unwrap_or_default()
    }
}

/// Renders `markdown` with [`MarkupPolicy::Raw`].
pub fn render(markdown: &str) -> String {
    MarkdownRenderer::default().render(markdown)
}

/// Renders optional `markdown` with [`MarkupPolicy::Raw`]; `None` yields `""`.
pub fn render_optional(markdown: Option<&str>) -> String {
    MarkdownRenderer::default().render_optional(markdown)
}

fn escape_tags(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_tags, render, MarkdownRenderer, MarkupPolicy};

    #[test]
    fn deeper_heading_is_matched_before_shallower_ones() {
        assert_eq!(render("### Small"), "<h3>Small</h3>");
        assert_eq!(render("## Medium"), "<h2>Medium</h2>");
    }

    #[test]
    fn heading_marker_requires_trailing_space() {
        assert_eq!(render("#NoSpace"), "#NoSpace");
    }

    #[test]
    fn emphasis_is_non_greedy_per_pair() {
        assert_eq!(render("**a** x **b**"), "<b>a</b> x <b>b</b>");
        assert_eq!(render("*a* x *b*"), "<i>a</i> x <i>b</i>");
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        assert_eq!(render("*open\nclose*"), "*open\nclose*");
    }

    #[test]
    fn only_the_final_newline_becomes_a_break() {
        assert_eq!(render("a\n\nb\n"), "a\n\nb<br />");
    }

    #[test]
    fn crlf_trailing_newline_becomes_one_break() {
        assert_eq!(render("a\r\n"), "a<br />");
        assert_eq!(render("a\r\n\r\n"), "a\r\n<br />");
    }

    #[test]
    fn raw_policy_passes_tags_through() {
        assert_eq!(render("<script>x</script>"), "<script>x</script>");
    }

    #[test]
    fn escape_policy_neutralizes_tags_but_keeps_blockquotes() {
        let renderer = MarkdownRenderer::new(MarkupPolicy::EscapeTags);
        assert_eq!(
            renderer.render("> <img src=x>"),
            "<blockquote>&lt;img src=x></blockquote>"
        );
    }

    #[test]
    fn escape_tags_handles_ampersand_first() {
        assert_eq!(escape_tags("&lt;"), "&amp;lt;");
        assert_eq!(escape_tags("\"'"), "&quot;&#39;");
    }
}
