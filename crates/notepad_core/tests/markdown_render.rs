use notepad_core::{render, render_optional, MarkdownRenderer, MarkupPolicy};

#[test]
fn headings_render_per_level() {
    assert_eq!(render("# Title"), "<h1>Title</h1>");
    assert_eq!(
        render("# One\n## Two\n### Three"),
        "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>"
    );
}

#[test]
fn bold_and_italic_render_on_one_line() {
    assert_eq!(
        render("**bold** and *italic*"),
        "<b>bold</b> and <i>italic</i>"
    );
}

#[test]
fn blockquote_renders() {
    assert_eq!(render("> quoted"), "<blockquote>quoted</blockquote>");
}

#[test]
fn empty_and_missing_input_render_empty() {
    assert_eq!(render(""), "");
    assert_eq!(render_optional(None), "");
    assert_eq!(render_optional(Some("")), "");
    assert_eq!(render_optional(Some("# x")), "<h1>x</h1>");
}

#[test]
fn plain_text_is_unchanged_apart_from_trailing_break() {
    let samples = [
        "just words",
        "two\nlines",
        "numbers 1 2 3, punctuation!?",
        "#hashtag without space",
        "a > b inside a line",
    ];
    for sample in samples {
        assert_eq!(render(sample), sample);
        assert_eq!(render(&format!("{sample}\n")), format!("{sample}<br />"));
    }
}

#[test]
fn rules_apply_in_order_on_previous_output() {
    assert_eq!(
        render("## **Bold** heading\n> *quote*\n"),
        "<h2><b>Bold</b> heading</h2>\n<blockquote><i>quote</i></blockquote><br />"
    );
}

#[test]
fn emphasis_inside_heading_markers_is_rendered() {
    assert_eq!(render("# *a*"), "<h1><i>a</i></h1>");
}

#[test]
fn escape_policy_applies_before_rules() {
    let renderer = MarkdownRenderer::new(MarkupPolicy::EscapeTags);
    assert_eq!(
        renderer.render("# <b>x</b> & **y**"),
        "<h1>&lt;b>x&lt;/b> &amp; <b>y</b></h1>"
    );
    assert_eq!(renderer.render_optional(None), "");
}

#[test]
fn crlf_line_endings_close_tags_before_the_terminator() {
    assert_eq!(render("# T\r\nbody"), "<h1>T</h1>\r\nbody");
    assert_eq!(render("> q\r\n"), "<blockquote>q</blockquote><br />");
    assert_eq!(
        render("## a\r\n**b**\r\n*c*"),
        "<h2>a</h2>\r\n<b>b</b>\r\n<i>c</i>"
    );
}
