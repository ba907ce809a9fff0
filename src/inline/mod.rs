//! Inline span grammar.
//!
//! Inline text is rewritten by a fixed sequence of passes over the sanitized
//! string. Each pass sees the output of the previous one, so a later pass can
//! wrap markup an earlier one produced (a link around a colored span).
//!
//! Sanitized text never holds a raw `<`, so every `<...>` a pass sees is a tag
//! an earlier pass generated. Passes step over those tags whole: nothing is
//! ever matched inside a tag or its attribute values.

mod code_span;
mod color;
mod embed;
mod emphasis;
mod links;

pub use code_span::render_code_spans;
pub use embed::{IconParams, ImageSpan, MediaParams, parse_image_span, write_image_row_item};

use crate::icon::IconRegistry;
use crate::render::HtmlWriter;
use crate::theme::Palette;
use memchr::{memchr, memchr2};

/// One rewrite pass: read `text`, write the rewritten text to `out`.
type Pass = fn(&InlineRenderer<'_>, &str, &mut HtmlWriter);

/// Passes in application order, each with the byte that must be present for
/// it to match anything.
const PASSES: [(u8, Pass); 11] = [
    (b'[', color::color_spans),
    (b'[', color::hex_spans),
    (b'[', color::rainbow_spans),
    (b'!', embed::icons),
    (b'!', embed::images),
    (b'!', embed::iframes),
    (b'*', emphasis::bold),
    (b'*', emphasis::italic),
    (b'_', emphasis::underline),
    (b'~', emphasis::strikethrough),
    (b'[', links::links),
];

/// Applies the inline passes with a bound palette and icon registry.
#[derive(Debug, Clone, Copy)]
pub struct InlineRenderer<'a> {
    palette: Option<&'a Palette>,
    icons: &'a IconRegistry,
}

impl<'a> InlineRenderer<'a> {
    pub fn new(palette: Option<&'a Palette>, icons: &'a IconRegistry) -> Self {
        Self { palette, icons }
    }

    /// Rewrite sanitized text through every inline pass.
    ///
    /// # Example
    /// ```
    /// use glossmark::icon::IconRegistry;
    /// use glossmark::inline::InlineRenderer;
    ///
    /// let icons = IconRegistry::builtin();
    /// let inline = InlineRenderer::new(None, &icons);
    /// assert_eq!(inline.render("**A** *B*"), "<strong>A</strong> <em>B</em>");
    /// ```
    pub fn render(&self, text: &str) -> String {
        let mut current = HtmlWriter::with_capacity_for(text.len());
        current.write_str(text);
        let mut next = HtmlWriter::with_capacity_for(text.len());

        for (trigger, pass) in PASSES {
            if memchr(trigger, current.as_str().as_bytes()).is_none() {
                continue;
            }
            next.clear();
            pass(self, current.as_str(), &mut next);
            std::mem::swap(&mut current, &mut next);
        }

        current.into_string()
    }
}

/// Offer every occurrence of `trigger` outside generated tags to `rewrite`.
///
/// On a match `rewrite` writes the replacement into its scratch writer and
/// returns the end of the consumed span; scanning resumes there. On `None`
/// the byte is kept as literal text and scanning resumes one byte later.
pub(crate) fn rewrite_spans<F>(text: &str, out: &mut HtmlWriter, trigger: u8, mut rewrite: F)
where
    F: FnMut(&str, usize, &mut HtmlWriter) -> Option<usize>,
{
    let bytes = text.as_bytes();
    let mut scratch = HtmlWriter::default();
    let mut copied = 0;
    let mut pos = 0;

    while let Some(at) = find_outside_tags(text, pos, trigger) {
        scratch.clear();
        match rewrite(text, at, &mut scratch) {
            Some(end) => {
                out.write_str(&text[copied..at]);
                out.write_str(scratch.as_str());
                copied = end;
                pos = end;
            }
            None => pos = at + 1,
        }
        if pos >= bytes.len() {
            break;
        }
    }

    out.write_str(&text[copied..]);
}

/// First `byte` at or after `from` that is not inside a `<...>` tag.
pub(crate) fn find_outside_tags(text: &str, from: usize, byte: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = from;
    while let Some(offset) = memchr2(byte, b'<', bytes.get(pos..)?) {
        let at = pos + offset;
        if bytes[at] == byte {
            return Some(at);
        }
        pos = at + 2 + memchr(b'>', &bytes[at + 1..])?;
    }
    None
}

/// Match `open content close` at `at`, where content is non-empty and free of
/// `close` outside tags. Returns the content and the offset just past `close`.
#[inline]
pub(crate) fn delimited(text: &str, at: usize, open: u8, close: u8) -> Option<(&str, usize)> {
    if text.as_bytes().get(at) != Some(&open) {
        return None;
    }
    let close_at = find_outside_tags(text, at + 1, close)?;
    if close_at == at + 1 {
        return None;
    }
    Some((&text[at + 1..close_at], close_at + 1))
}

/// Length of the leading `[A-Za-z0-9_]` run.
#[inline]
pub(crate) fn word_len(text: &str) -> usize {
    text.bytes().take_while(|&b| is_word_byte(b)).count()
}

#[inline]
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        let icons = IconRegistry::builtin();
        InlineRenderer::new(None, &icons).render(text)
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(render("just words"), "just words");
        assert_eq!(render(""), "");
    }

    #[test]
    fn delimited_requires_content() {
        assert_eq!(delimited("[a]", 0, b'[', b']'), Some(("a", 3)));
        assert_eq!(delimited("[]", 0, b'[', b']'), None);
        assert_eq!(delimited("[a", 0, b'[', b']'), None);
        assert_eq!(delimited("x[a]", 0, b'[', b']'), None);
    }

    #[test]
    fn delimited_stops_at_first_close() {
        assert_eq!(delimited("[a]b]", 0, b'[', b']'), Some(("a", 3)));
    }

    #[test]
    fn rewrite_keeps_unmatched_triggers() {
        let mut out = HtmlWriter::new();
        rewrite_spans("a!b!c", &mut out, b'!', |_, _, _| None);
        assert_eq!(out.as_str(), "a!b!c");
    }

    #[test]
    fn rewrite_replaces_spans() {
        let mut out = HtmlWriter::new();
        rewrite_spans("x[ab]y[c]", &mut out, b'[', |text, at, out| {
            let (content, end) = delimited(text, at, b'[', b']')?;
            out.write_str(&content.to_uppercase());
            Some(end)
        });
        assert_eq!(out.as_str(), "xAByC");
    }

    #[test]
    fn tags_are_stepped_over() {
        let text = "<a title=\"[x]\">[y]</a>";
        assert_eq!(find_outside_tags(text, 0, b'['), Some(15));
        assert_eq!(find_outside_tags("<b", 0, b'['), None);
        assert_eq!(delimited("[<i a=\"]\">b</i>]", 0, b'[', b']'), Some(("<i a=\"]\">b</i>", 16)));
    }

    #[test]
    fn rewrite_ignores_triggers_inside_tags() {
        let mut out = HtmlWriter::new();
        rewrite_spans("<img alt=\"!x\">!y", &mut out, b'!', |_, at, out| {
            out.write_str("#");
            Some(at + 1)
        });
        assert_eq!(out.as_str(), "<img alt=\"!x\">#y");
    }

    #[test]
    fn passes_compose() {
        assert_eq!(
            render("[**hot**]{color:red}"),
            "<span style=\"color: red\"><strong>hot</strong></span>"
        );
    }

    #[test]
    fn link_wraps_earlier_markup() {
        assert_eq!(
            render("[*go*](https://a.test)"),
            "<a href=\"https://a.test\" target=\"_blank\" rel=\"noopener noreferrer\"><em>go</em></a>"
        );
    }

    #[test]
    fn word_run() {
        assert_eq!(word_len("abc_1}"), 5);
        assert_eq!(word_len("-x"), 0);
    }
}
