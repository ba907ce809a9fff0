//! Inline code spans.
//!
//! Code spans are cut out of a paragraph before any other inline pass runs,
//! so their content is never transformed. The text in between goes through
//! the full inline grammar.

use super::InlineRenderer;
use crate::render::HtmlWriter;
use memchr::memchr;

/// Render a paragraph that contains `` `code` `` spans.
///
/// A span is one or more non-backtick bytes between single backticks. Returns
/// `None` when the paragraph has no span; the caller then treats it as plain
/// text. Sanitized text is already escaped, so code content is copied as is.
///
/// # Example
/// ```
/// use glossmark::icon::IconRegistry;
/// use glossmark::inline::{InlineRenderer, render_code_spans};
///
/// let icons = IconRegistry::new();
/// let inline = InlineRenderer::new(None, &icons);
/// assert_eq!(
///     render_code_spans("run `**x**` *now*", &inline).as_deref(),
///     Some("run <code>**x**</code> <em>now</em>"),
/// );
/// assert_eq!(render_code_spans("no code", &inline), None);
/// ```
pub fn render_code_spans(text: &str, inline: &InlineRenderer<'_>) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = HtmlWriter::with_capacity_for(text.len());
    let mut found = false;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'`', &bytes[pos..]) {
        let open = pos + offset;
        let Some(len) = memchr(b'`', &bytes[open + 1..]) else {
            break;
        };
        if len == 0 {
            pos = open + 1;
            continue;
        }
        let close = open + 1 + len;

        if open > copied {
            out.write_str(&inline.render(&text[copied..open]));
        }
        out.inline_code(&text[open + 1..close]);
        found = true;
        copied = close + 1;
        pos = copied;
    }

    if !found {
        return None;
    }
    if copied < text.len() {
        out.write_str(&inline.render(&text[copied..]));
    }
    Some(out.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconRegistry;

    fn code(text: &str) -> Option<String> {
        let icons = IconRegistry::new();
        render_code_spans(text, &InlineRenderer::new(None, &icons))
    }

    #[test]
    fn no_spans() {
        assert_eq!(code("plain *text*"), None);
        assert_eq!(code("one ` tick"), None);
        assert_eq!(code("empty `` pair"), None);
    }

    #[test]
    fn single_span() {
        assert_eq!(code("`x`").as_deref(), Some("<code>x</code>"));
    }

    #[test]
    fn content_is_not_transformed() {
        assert_eq!(
            code("`[a](https://x.test)` and `__u__`").as_deref(),
            Some("<code>[a](https://x.test)</code> and <code>__u__</code>")
        );
    }

    #[test]
    fn escaped_content_is_not_escaped_again() {
        assert_eq!(code("`a &lt; b`").as_deref(), Some("<code>a &lt; b</code>"));
    }

    #[test]
    fn surrounding_text_is_transformed() {
        assert_eq!(
            code("**a** `b` ~~c~~").as_deref(),
            Some("<strong>a</strong> <code>b</code> <del>c</del>")
        );
    }

    #[test]
    fn double_tick_then_span() {
        // The empty `` pair is skipped; the second tick opens a span.
        assert_eq!(code("``x`").as_deref(), Some("`<code>x</code>"));
    }

    #[test]
    fn trailing_unmatched_tick_is_text() {
        assert_eq!(code("`a` b `c").as_deref(), Some("<code>a</code> b `c"));
    }
}
