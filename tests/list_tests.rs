use glossmark::block::{ListKind, ListTree};
use glossmark::to_html;

#[test]
fn test_flat_unordered() {
    assert_eq!(
        to_html("- one\n- two\n- three"),
        "<ul>\n<li>one</li>\n<li>two</li>\n<li>three</li>\n</ul>\n"
    );
}

#[test]
fn test_flat_ordered() {
    assert_eq!(
        to_html("1. one\n2. two"),
        "<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n"
    );
}

#[test]
fn test_nested_list() {
    assert_eq!(
        to_html("- a\n  - b\n- c"),
        "<ul>\n<li>a<ul>\n<li>b</li>\n</ul>\n</li>\n<li>c</li>\n</ul>\n"
    );
}

#[test]
fn test_three_levels() {
    let html = to_html("- a\n  - b\n    - c\n- d");
    assert_eq!(html.matches("<ul>").count(), 3);
    assert_eq!(html.matches("</ul>").count(), 3);
    assert!(html.contains("<li>b<ul>\n<li>c</li>\n</ul>\n</li>"));
}

#[test]
fn test_dedent_to_middle_level() {
    // `c` is shallower than `b` but deeper than `a`, so it stays under `a`.
    let tree = ListTree::parse("- a\n    - b\n  - c", ListKind::Unordered);
    assert_eq!(tree.roots(), &[0]);
    assert_eq!(tree.children(0), &[1, 2]);
}

#[test]
fn test_no_entry_is_dropped() {
    let text = "  - starts indented\n- a\n      - deep\n  - shallow\n- b";
    let tree = ListTree::parse(text, ListKind::Unordered);
    assert_eq!(tree.entries().len(), 5);
    let html = to_html(&format!("intro\n{text}"));
    for word in ["starts indented", "deep", "shallow"] {
        assert!(html.contains(word), "missing {word}: {html}");
    }
}

#[test]
fn test_continuation_lines_join() {
    assert_eq!(
        to_html("- first\n  wrapped\n- second"),
        "<ul>\n<li>first wrapped</li>\n<li>second</li>\n</ul>\n"
    );
}

#[test]
fn test_list_items_render_inline() {
    assert_eq!(
        to_html("- **bold** and [x](https://a.test)"),
        "<ul>\n<li><strong>bold</strong> and \
         <a href=\"https://a.test\" target=\"_blank\" rel=\"noopener noreferrer\">x</a></li>\n</ul>\n"
    );
}

#[test]
fn test_list_item_with_code_span() {
    assert_eq!(
        to_html("- run `a*b*c`"),
        "<ul>\n<li>run <code>a*b*c</code></li>\n</ul>\n"
    );
}

#[test]
fn test_dash_needs_space() {
    assert_eq!(to_html("-not a list"), "<p>-not a list</p>\n");
}

#[test]
fn test_number_needs_dot_and_space() {
    assert_eq!(to_html("2024 was a year"), "<p>2024 was a year</p>\n");
    assert_eq!(to_html("3.14 is pi"), "<p>3.14 is pi</p>\n");
}

#[test]
fn test_bullet_wins_over_numbers() {
    let html = to_html("1. one\n- two");
    assert!(html.starts_with("<ul>"), "Got: {html}");
}

#[test]
fn test_blank_line_ends_list() {
    assert_eq!(
        to_html("- a\n\n- b"),
        "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n"
    );
}

#[test]
fn test_two_nested_between_top_level() {
    assert_eq!(
        to_html("- top\n  - one\n  - two\n- end"),
        "<ul>\n<li>top<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n</li>\n<li>end</li>\n</ul>\n"
    );
}
