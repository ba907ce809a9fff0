//! Single-pair emphasis: `**bold**`, `*italic*`, `__underline__`, `~~strike~~`.
//!
//! Content is one or more bytes other than the delimiter character, so
//! emphasis never nests within itself and an unmatched opener stays literal.

use super::{InlineRenderer, find_outside_tags, rewrite_spans};
use crate::render::HtmlWriter;

pub(super) fn bold(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    wrap_pairs(text, out, "**", "strong");
}

pub(super) fn italic(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    wrap_pairs(text, out, "*", "em");
}

pub(super) fn underline(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    wrap_pairs(text, out, "__", "u");
}

pub(super) fn strikethrough(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    wrap_pairs(text, out, "~~", "del");
}

/// Wrap every `DELIM content DELIM` in `<tag>`. `delim` repeats one ASCII byte.
fn wrap_pairs(text: &str, out: &mut HtmlWriter, delim: &str, tag: &'static str) {
    let marker = delim.as_bytes()[0];

    rewrite_spans(text, out, marker, |text, at, out| {
        if !text[at..].starts_with(delim) {
            return None;
        }
        let start = at + delim.len();
        let close = find_outside_tags(text, start, marker)?;
        if close == start {
            return None;
        }
        if !text[close..].starts_with(delim) {
            return None;
        }
        out.wrap(tag, &text[start..close]);
        Some(close + delim.len())
    });
}
