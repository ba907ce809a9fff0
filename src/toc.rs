//! Heading ids and table of contents generation.
//!
//! The TOC is built from a line scan of the whole sanitized document before
//! any block is rendered, so it can be substituted at every `#TOC`
//! placeholder, including ones that appear before the headings they list.

use crate::block::{Segment, segments};
use crate::escape::unescape;
use memchr::memchr_iter;

/// Placeholder paragraph that is replaced with the table of contents.
pub const TOC_MARKER: &str = "#TOC";

/// Fragment emitted when the document has no level 1-3 headings.
pub const EMPTY_TOC: &str =
    "<div class=\"toc-empty\">No headings found for table of contents.</div>\n";

/// Fallback id for headings with no usable characters.
const FALLBACK_ID: &str = "heading";

/// A heading found by the TOC line scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingRecord<'a> {
    /// Heading level, 1 to 3.
    pub level: u8,
    /// Sanitized heading text, not inline-transformed.
    pub text: &'a str,
}

impl HeadingRecord<'_> {
    /// Anchor id of this heading.
    pub fn id(&self) -> String {
        heading_id(self.text)
    }
}

/// Derive the anchor id for a heading.
///
/// Decodes character references, lower-cases the text, collapses every run
/// of characters outside `[a-z0-9]` into one `-`, and trims `-` from both
/// ends.
///
/// # Example
/// ```
/// use glossmark::toc::heading_id;
///
/// assert_eq!(heading_id("Hello, World!"), "hello-world");
/// ```
pub fn heading_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in unescape(text).chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    if id.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        id
    }
}

/// Match a `# `, `## ` or `### ` heading line.
///
/// Returns the level and the text after the marker; the text must be
/// non-empty.
pub fn heading_prefix(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    if text.is_empty() {
        return None;
    }
    Some((hashes as u8, text))
}

/// Collect level 1-3 headings in document order, skipping fenced code.
///
/// Only lines of text segments are scanned. Fences are found by the same
/// [`segments`] cut the block renderer uses, so a fence closed mid-line hides
/// exactly the lines that are rendered as code.
pub fn collect_headings(text: &str) -> Vec<HeadingRecord<'_>> {
    segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(range) => Some(range.slice(text)),
            Segment::CodeBlock { .. } => None,
        })
        .flat_map(lines)
        .filter_map(heading_prefix)
        .map(|(level, text)| HeadingRecord { level, text })
        .collect()
}

/// Render the TOC fragment for a list of headings.
///
/// Deeper levels open nested lists inside the current item; a jump of more
/// than one level opens an anchorless holder item per skipped level, so the
/// output stays well-formed.
pub fn render_toc(headings: &[HeadingRecord<'_>]) -> String {
    if headings.is_empty() {
        return EMPTY_TOC.to_string();
    }

    let mut html = String::with_capacity(128 + headings.len() * 96);
    html.push_str(
        "<nav class=\"toc\"><div class=\"toc-title\">Table of Contents</div>\n<ul class=\"toc-list\">\n",
    );

    // Depth of the innermost open list; the outer list is depth 1.
    let mut depth = 1u8;
    // Whether the innermost list has an `<li>` left open.
    let mut item_open = false;

    for heading in headings {
        while depth < heading.level {
            if !item_open {
                html.push_str("<li class=\"toc-item\">");
            }
            html.push_str("\n<ul class=\"toc-list\">\n");
            depth += 1;
            item_open = false;
        }
        while depth > heading.level {
            if item_open {
                html.push_str("</li>\n");
            }
            html.push_str("</ul>\n");
            depth -= 1;
            item_open = true;
        }
        if item_open {
            html.push_str("</li>\n");
        }

        let id = heading.id();
        html.push_str("<li class=\"toc-item toc-level-");
        html.push(char::from(b'0' + heading.level));
        html.push_str("\"><a href=\"#");
        html.push_str(&id);
        html.push_str("\" data-scroll-to=\"");
        html.push_str(&id);
        html.push_str("\">");
        html.push_str(heading.text);
        html.push_str("</a>");
        item_open = true;
    }

    while depth > 1 {
        if item_open {
            html.push_str("</li>\n");
        }
        html.push_str("</ul>\n");
        depth -= 1;
        item_open = true;
    }
    if item_open {
        html.push_str("</li>\n");
    }

    html.push_str("</ul></nav>\n");
    html
}

/// Scan a sanitized document and render its TOC fragment.
pub fn generate(text: &str) -> String {
    let headings = collect_headings(text);
    log::debug!("table of contents: {} headings", headings.len());
    render_toc(&headings)
}

/// Split on `\n` without dropping a trailing empty line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut start = 0;
    memchr_iter(b'\n', text.as_bytes())
        .map(Some)
        .chain(std::iter::once(None))
        .map(move |nl| {
            let end = nl.unwrap_or(text.len());
            let line = &text[start..end];
            start = end + 1;
            line
        })
}
