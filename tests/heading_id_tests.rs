use glossmark::to_html;
use glossmark::toc::heading_id;

#[test]
fn test_basic_heading_id() {
    let html = to_html("# Hello World");
    assert_eq!(html, "<h1 id=\"hello-world\">Hello World</h1>\n");
}

#[test]
fn test_heading_id_punctuation() {
    assert_eq!(heading_id("Hello, World!"), "hello-world");
    let html = to_html("## Hello, World!");
    assert!(html.contains("id=\"hello-world\""), "Got: {html}");
}

#[test]
fn test_heading_with_emphasis() {
    let html = to_html("## Hello **World**");
    assert!(html.contains("id=\"hello-world\""), "Got: {html}");
    assert!(html.contains("<strong>World</strong>"), "Got: {html}");
}

#[test]
fn test_heading_with_code() {
    let html = to_html("## The `code` function");
    assert!(html.contains("id=\"the-code-function\""), "Got: {html}");
    assert!(html.contains("<code>code</code>"), "Got: {html}");
}

#[test]
fn test_heading_with_color_span() {
    let html = to_html("# [Hot]{color:red} take");
    assert!(html.contains("id=\"hot-color-red-take\""), "Got: {html}");
}

#[test]
fn test_heading_with_escaped_characters() {
    let html = to_html("# Fish & Chips <3");
    assert_eq!(
        html,
        "<h1 id=\"fish-chips-3\">Fish &amp; Chips &lt;3</h1>\n"
    );
}

#[test]
fn test_heading_with_apostrophe() {
    let html = to_html("# Don't panic");
    assert!(html.contains("id=\"don-t-panic\""), "Got: {html}");
}

#[test]
fn test_duplicate_headings_share_id() {
    let html = to_html("# Hello\n\n# Hello");
    assert_eq!(html.matches("id=\"hello\"").count(), 2);
}

#[test]
fn test_heading_symbols_only() {
    let html = to_html("# !!!");
    assert_eq!(html, "<h1 id=\"heading\">!!!</h1>\n");
}

#[test]
fn test_heading_unicode_text() {
    let html = to_html("# Über Café");
    assert!(html.contains("id=\"ber-caf\""), "Got: {html}");
}

#[test]
fn test_heading_numbers() {
    let html = to_html("### Step 2: Install");
    assert!(html.contains("<h3 id=\"step-2-install\">"), "Got: {html}");
}

#[test]
fn test_heading_needs_space() {
    assert_eq!(to_html("#NoSpace"), "<p>#NoSpace</p>\n");
}

#[test]
fn test_level_four_is_paragraph() {
    assert_eq!(to_html("#### Deep"), "<p>#### Deep</p>\n");
}

#[test]
fn test_heading_first_line_only() {
    let html = to_html("# Title\n## Subtitle\ntext");
    assert_eq!(
        html,
        "<h1 id=\"title\">Title</h1>\n<h2 id=\"subtitle\">Subtitle</h2>\n<p>text</p>\n"
    );
}

#[test]
fn test_code_span_cannot_cross_heading_line() {
    assert_eq!(
        to_html("# A `x\ny` z"),
        "<h1 id=\"a-x\">A `x</h1>\n<p>y` z</p>\n"
    );
    assert_eq!(
        to_html("# Run `a`\nthen `b`"),
        "<h1 id=\"run-a\">Run <code>a</code></h1>\n<p>then <code>b</code></p>\n"
    );
}
