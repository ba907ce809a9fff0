//! List reconstruction from indented `- ` / `1. ` lines.
//!
//! Entries are kept flat in document order; nesting is an index tree on top
//! of them. An entry is a child of the nearest preceding entry with a smaller
//! indent, so every entry lands somewhere and none is dropped.

use crate::render::HtmlWriter;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bullet list (`- `).
    Unordered,
    /// Numbered list (`1. `).
    Ordered,
}

impl ListKind {
    /// Detect a list paragraph: any line starting `- ` makes it unordered,
    /// otherwise any line starting with digits and `. ` makes it ordered.
    pub fn detect(text: &str) -> Option<Self> {
        if text.split('\n').any(|line| line.starts_with("- ")) {
            return Some(Self::Unordered);
        }
        text.split('\n')
            .any(|line| {
                let digits = line.bytes().take_while(u8::is_ascii_digit).count();
                digits > 0 && line[digits..].starts_with(". ")
            })
            .then_some(Self::Ordered)
    }
}

/// One list item before nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry<'a> {
    /// Count of leading whitespace characters.
    pub indent: usize,
    /// Item text, with continuation lines joined by single spaces.
    pub content: Cow<'a, str>,
}

/// Match `^(\s*)(-|\d+\.)\s+(.+)$`, returning the indent and the content.
fn entry_line(line: &str) -> Option<(usize, &str)> {
    let rest = line.trim_start();
    let indent = line[..line.len() - rest.len()].chars().count();

    let after_marker = match rest.strip_prefix('-') {
        Some(after) => after,
        None => {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return None;
            }
            rest[digits..].strip_prefix('.')?
        }
    };

    let content = after_marker.trim_start();
    if content.len() == after_marker.len() {
        return None;
    }
    let content = content.trim_end();
    (!content.is_empty()).then_some((indent, content))
}

/// Split list text into flat entries.
pub fn parse_entries(text: &str) -> Vec<ListEntry<'_>> {
    let mut entries: Vec<ListEntry<'_>> = Vec::new();

    for line in text.split('\n') {
        if let Some((indent, content)) = entry_line(line) {
            entries.push(ListEntry {
                indent,
                content: Cow::Borrowed(content),
            });
            continue;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match entries.last_mut() {
            Some(last) => {
                let content = last.content.to_mut();
                content.push(' ');
                content.push_str(line);
            }
            None => entries.push(ListEntry {
                indent: 0,
                content: Cow::Borrowed(line),
            }),
        }
    }

    entries
}

/// A nested list: flat entries plus child index lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTree<'a> {
    pub kind: ListKind,
    entries: Vec<ListEntry<'a>>,
    children: Vec<SmallVec<[usize; 4]>>,
    roots: Vec<usize>,
}

impl<'a> ListTree<'a> {
    /// Parse list text and build the nesting.
    pub fn parse(text: &'a str, kind: ListKind) -> Self {
        Self::from_entries(parse_entries(text), kind)
    }

    pub fn from_entries(entries: Vec<ListEntry<'a>>, kind: ListKind) -> Self {
        let mut children = vec![SmallVec::new(); entries.len()];
        let roots = build_level(&entries, &mut 0, None, &mut children).into_vec();

        Self {
            kind,
            entries,
            children,
            roots,
        }
    }

    pub fn entries(&self) -> &[ListEntry<'a>] {
        &self.entries
    }

    /// Indices of the top-level entries.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Indices of the direct children of an entry.
    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    /// Write the list as nested `<ul>`/`<ol>` elements, calling `item` for
    /// the content of every entry.
    pub fn render<F>(&self, out: &mut HtmlWriter, mut item: F)
    where
        F: FnMut(&str, &mut HtmlWriter),
    {
        self.render_level(&self.roots, out, &mut item);
    }

    fn render_level<F>(&self, level: &[usize], out: &mut HtmlWriter, item: &mut F)
    where
        F: FnMut(&str, &mut HtmlWriter),
    {
        match self.kind {
            ListKind::Unordered => out.ul_start(),
            ListKind::Ordered => out.ol_start(),
        }
        for &index in level {
            out.li_start();
            item(&self.entries[index].content, out);
            let nested = &self.children[index];
            if !nested.is_empty() {
                self.render_level(nested, out, item);
            }
            out.li_end();
        }
        match self.kind {
            ListKind::Unordered => out.ul_end(),
            ListKind::Ordered => out.ol_end(),
        }
    }
}

/// Collect the siblings starting at `pos` that are deeper than `parent`.
///
/// Each entry adopts the run of deeper entries that follows it.
fn build_level(
    entries: &[ListEntry<'_>],
    pos: &mut usize,
    parent: Option<usize>,
    children: &mut [SmallVec<[usize; 4]>],
) -> SmallVec<[usize; 4]> {
    let mut level = SmallVec::new();

    while let Some(entry) = entries.get(*pos) {
        if parent.is_some_and(|indent| entry.indent <= indent) {
            break;
        }
        let index = *pos;
        *pos += 1;

        if entries.get(*pos).is_some_and(|next| next.indent > entry.indent) {
            children[index] = build_level(entries, pos, Some(entry.indent), children);
        }
        level.push(index);
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indents(text: &str) -> Vec<(usize, String)> {
        parse_entries(text)
            .into_iter()
            .map(|e| (e.indent, e.content.into_owned()))
            .collect()
    }

    fn render(text: &str, kind: ListKind) -> String {
        let mut out = HtmlWriter::new();
        ListTree::parse(text, kind).render(&mut out, |content, out| out.write_str(content));
        out.into_string()
    }

    #[test]
    fn detect_kind() {
        assert_eq!(ListKind::detect("- a"), Some(ListKind::Unordered));
        assert_eq!(ListKind::detect("intro\n1. a"), Some(ListKind::Ordered));
        assert_eq!(ListKind::detect("12. a\n- b"), Some(ListKind::Unordered));
        assert_eq!(ListKind::detect("-a"), None);
        assert_eq!(ListKind::detect("1.a"), None);
        assert_eq!(ListKind::detect("  - indented only"), None);
    }

    #[test]
    fn entry_lines() {
        assert_eq!(entry_line("- a"), Some((0, "a")));
        assert_eq!(entry_line("    - b  "), Some((4, "b")));
        assert_eq!(entry_line("\t10.\tten"), Some((1, "ten")));
        assert_eq!(entry_line("-a"), None);
        assert_eq!(entry_line("-   "), None);
        assert_eq!(entry_line("1 a"), None);
    }

    #[test]
    fn continuation_lines_join() {
        assert_eq!(
            indents("- a\n  more\n- b"),
            vec![(0, "a more".to_string()), (0, "b".to_string())]
        );
    }

    #[test]
    fn leading_continuation_starts_entry() {
        assert_eq!(
            indents("Intro:\n- a"),
            vec![(0, "Intro:".to_string()), (0, "a".to_string())]
        );
    }

    #[test]
    fn flat_list() {
        assert_eq!(
            render("- a\n- b", ListKind::Unordered),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn nested_list() {
        assert_eq!(
            render("- a\n  - b\n  - c\n- d", ListKind::Unordered),
            "<ul>\n<li>a<ul>\n<li>b</li>\n<li>c</li>\n</ul>\n</li>\n<li>d</li>\n</ul>\n"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            render("1. a\n2. b", ListKind::Ordered),
            "<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n"
        );
    }

    #[test]
    fn uneven_dedent_keeps_every_entry() {
        let tree = ListTree::parse("- a\n    - b\n  - c\n- d", ListKind::Unordered);
        assert_eq!(tree.roots(), &[0, 3]);
        assert_eq!(tree.children(0), &[1, 2]);
        assert!(tree.children(1).is_empty());
    }

    #[test]
    fn first_entry_deeper_than_later_ones() {
        let tree = ListTree::parse("  - a\n- b", ListKind::Unordered);
        assert_eq!(tree.roots(), &[0, 1]);
        assert_eq!(tree.entries().len(), 2);
    }

    #[test]
    fn deep_nesting() {
        let text = "- a\n  - b\n    - c\n      - d";
        let html = render(text, ListKind::Unordered);
        assert_eq!(html.matches("<ul>").count(), 4);
        assert_eq!(html.matches("</li>").count(), 4);
    }
}
