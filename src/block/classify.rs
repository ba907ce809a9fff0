//! Paragraph classification.

use super::Paragraph;
use super::list::{ListKind, ListTree};
use super::table::Table;
use crate::escape::strip_tags;
use crate::inline::{ImageSpan, parse_image_span};
use crate::toc::{heading_id, heading_prefix};

/// Escaped `> ` that opens a blockquote.
const QUOTE_MARKER: &str = "&gt; ";

/// The block a paragraph renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'p> {
    /// A one-line paragraph opening with `#`, `##` or `###`. Heading lines
    /// are split off their paragraph by [`items`](super::items).
    Heading {
        /// Heading level (1-3).
        level: u8,
        /// Anchor id, derived from the source line.
        id: String,
        text: &'p str,
    },
    /// Horizontal rule (`---`).
    Rule,
    /// Two or more `|`-separated images.
    ImageRow(Vec<ImageSpan<'p>>),
    /// Blockquote text with the markers removed and lines joined.
    BlockQuote(String),
    List(ListTree<'p>),
    Table(Table<'p>),
    Paragraph(&'p str),
}

/// Classify a paragraph; the first matching kind wins, in the order of the
/// [`Block`] variants.
pub fn classify<'p>(paragraph: &'p Paragraph<'_>) -> Block<'p> {
    let content: &'p str = &paragraph.content;

    if let Some(block) = heading(paragraph, content) {
        return block;
    }
    if content.trim() == "---" {
        return Block::Rule;
    }
    if let Some(images) = image_row(content) {
        return Block::ImageRow(images);
    }
    if content.starts_with(QUOTE_MARKER) {
        return Block::BlockQuote(blockquote_text(content));
    }
    if let Some(kind) = ListKind::detect(content) {
        return Block::List(ListTree::parse(content, kind));
    }
    if let Some(table) = Table::parse(content) {
        return Block::Table(table);
    }
    Block::Paragraph(content)
}

fn heading<'p>(paragraph: &'p Paragraph<'_>, content: &'p str) -> Option<Block<'p>> {
    if content.contains('\n') {
        return None;
    }
    let (level, text) = heading_prefix(content)?;
    let text = text.trim_end();

    let id = match heading_prefix(paragraph.source) {
        Some((_, source_text)) => heading_id(source_text),
        None => heading_id(&strip_tags(text)),
    };

    Some(Block::Heading { level, id, text })
}

/// Every `|`-separated piece must be exactly one image span.
fn image_row(content: &str) -> Option<Vec<ImageSpan<'_>>> {
    if !content.contains('|') {
        return None;
    }
    let images = content
        .split('|')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(parse_image_span)
        .collect::<Option<Vec<_>>>()?;
    (images.len() >= 2).then_some(images)
}

fn blockquote_text(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(line.strip_prefix(QUOTE_MARKER).unwrap_or(line));
    }
    text
}
