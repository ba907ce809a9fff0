//! Block-level structure.
//!
//! The sanitized document is cut into fenced code blocks and text, text is
//! split into paragraphs on blank lines, and each paragraph is classified as
//! exactly one block kind:
//! - Headings (`#`, `##`, `###`)
//! - Horizontal rules
//! - Image rows
//! - Blockquotes
//! - Lists
//! - Tables
//! - Paragraphs

mod classify;
pub mod list;
pub mod table;

pub use classify::{Block, classify};
pub use list::{ListEntry, ListKind, ListTree};
pub use table::{Table, TableRow};

use crate::Range;
use crate::inline::{InlineRenderer, render_code_spans};
use crate::toc::{TOC_MARKER, heading_prefix};
use memchr::memmem;
use std::borrow::Cow;

const FENCE: &[u8] = b"```";

/// A top-level piece of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Text outside fenced code.
    Text(Range),
    /// A fenced code block.
    CodeBlock {
        /// Language tag, possibly empty.
        language: Range,
        /// Code between the fences, excluding the newline after the tag.
        body: Range,
    },
}

/// Cut `text` into text and fenced code segments, left to right.
///
/// The language tag is the run of non-whitespace, non-backtick bytes after
/// the opening fence; one newline directly after it is dropped. An opening
/// fence with no closing fence stays text. `text` may be at most
/// [`MAX_TEXT_LEN`](crate::MAX_TEXT_LEN) bytes long.
pub fn segments(text: &str) -> Vec<Segment> {
    let bytes = text.as_bytes();
    let finder = memmem::Finder::new(FENCE);
    let mut segments = Vec::new();
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = finder.find(&bytes[pos..]) {
        let open = pos + offset;
        let lang_start = open + FENCE.len();
        let lang_end = lang_start
            + bytes[lang_start..]
                .iter()
                .take_while(|&&b| !b.is_ascii_whitespace() && b != b'`')
                .count();
        let body_start = if bytes.get(lang_end) == Some(&b'\n') {
            lang_end + 1
        } else {
            lang_end
        };

        let Some(len) = finder.find(&bytes[body_start..]) else {
            pos = open + 1;
            continue;
        };
        let close = body_start + len;

        if open > copied {
            segments.push(Segment::Text(Range::from_usize(copied, open)));
        }
        segments.push(Segment::CodeBlock {
            language: Range::from_usize(lang_start, lang_end),
            body: Range::from_usize(body_start, close),
        });
        copied = close + FENCE.len();
        pos = copied;
    }

    if copied < bytes.len() {
        segments.push(Segment::Text(Range::from_usize(copied, bytes.len())));
    }
    segments
}

/// Split a text segment on runs of two or more newlines.
///
/// Paragraphs are trimmed; blank ones are dropped.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    let separator = memmem::Finder::new(b"\n\n");
    let mut rest = Some(text);

    std::iter::from_fn(move || {
        loop {
            let current = rest?;
            let (paragraph, next) = match separator.find(current.as_bytes()) {
                Some(at) => (&current[..at], Some(current[at..].trim_start_matches('\n'))),
                None => (current, None),
            };
            rest = next;

            let paragraph = paragraph.trim();
            if !paragraph.is_empty() {
                return Some(paragraph);
            }
        }
    })
}

/// A paragraph waiting for block classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// Trimmed text, or finished inline markup when `already_rendered`.
    pub content: Cow<'a, str>,
    /// The sanitized source text, used for heading ids.
    pub source: &'a str,
    /// Inline code extraction already ran the inline grammar.
    pub already_rendered: bool,
}

impl<'a> Paragraph<'a> {
    /// A paragraph that still needs inline transforms.
    pub fn plain(text: &'a str) -> Self {
        Self {
            content: Cow::Borrowed(text),
            source: text,
            already_rendered: false,
        }
    }
}

/// A unit of output, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<'a> {
    CodeBlock { language: &'a str, body: &'a str },
    /// Table of contents placeholder.
    Toc,
    Paragraph(Paragraph<'a>),
}

/// Split leading heading lines off a paragraph, so every heading is a
/// paragraph of its own.
///
/// Works on source text, before code spans are rendered, so the split can
/// never land inside a code span.
pub fn split_headings(paragraph: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(paragraph);

    std::iter::from_fn(move || {
        let current = rest?;
        match current.split_once('\n') {
            Some((first, tail)) if heading_prefix(first).is_some() => {
                let tail = tail.trim();
                rest = (!tail.is_empty()).then_some(tail);
                Some(first.trim_end())
            }
            _ => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Build the item list for a sanitized document.
///
/// Paragraphs with inline code are rendered here, so their code content
/// never reaches the inline grammar.
pub fn items<'a>(text: &'a str, toc: bool, inline: &InlineRenderer<'_>) -> Vec<Item<'a>> {
    let mut items = Vec::new();

    for segment in segments(text) {
        match segment {
            Segment::CodeBlock { language, body } => items.push(Item::CodeBlock {
                language: language.slice(text),
                body: body.slice(text),
            }),
            Segment::Text(range) => {
                for paragraph in paragraphs(range.slice(text)) {
                    if toc && paragraph == TOC_MARKER {
                        items.push(Item::Toc);
                        continue;
                    }
                    for part in split_headings(paragraph) {
                        items.push(Item::Paragraph(match render_code_spans(part, inline) {
                            Some(rendered) => Paragraph {
                                content: Cow::Owned(rendered),
                                source: part,
                                already_rendered: true,
                            },
                            None => Paragraph::plain(part),
                        }));
                    }
                }
            }
        }
    }

    items
}
