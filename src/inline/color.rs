//! Colored text: `[text]{color:NAME}`, `[text]{hex:#HEX}`, `[text]{rainbow}`.

use super::{InlineRenderer, delimited, rewrite_spans, word_len};
use crate::render::HtmlWriter;

/// Longest character reference kept whole inside rainbow text (`&#x1F600;`).
const MAX_ENTITY_LEN: usize = 12;

/// `[text]{color:NAME}`, resolved against the active palette.
pub(super) fn color_spans(inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    const TAG: &str = "{color:";

    rewrite_spans(text, out, b'[', |text, at, out| {
        let (content, after) = delimited(text, at, b'[', b']')?;
        let rest = text[after..].strip_prefix(TAG)?;
        let name_len = word_len(rest);
        if name_len == 0 || rest.as_bytes().get(name_len) != Some(&b'}') {
            return None;
        }
        let name = &rest[..name_len];

        if name.bytes().all(|b| b.is_ascii_alphanumeric()) {
            let themed = inline.palette.is_some_and(|p| p.contains(name));
            out.color_span(name, content, themed);
        } else {
            out.write_str(content);
        }
        Some(after + TAG.len() + name_len + 1)
    });
}

/// `[text]{hex:#RRGGBB}` and `[text]{hex:#RGB}`.
pub(super) fn hex_spans(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    const TAG: &str = "{hex:";

    rewrite_spans(text, out, b'[', |text, at, out| {
        let (content, after) = delimited(text, at, b'[', b']')?;
        let rest = text[after..].strip_prefix(TAG)?;
        let digits = rest.strip_prefix('#')?;
        let run = digits.bytes().take_while(u8::is_ascii_hexdigit).count();
        let len = [6, 3]
            .into_iter()
            .find(|&n| run >= n && digits.as_bytes().get(n) == Some(&b'}'))?;

        out.color_span(&rest[..len + 1], content, false);
        Some(after + TAG.len() + len + 2)
    });
}

/// `[text]{rainbow}`: one animated span per visible character.
pub(super) fn rainbow_spans(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    const TAG: &str = "{rainbow}";

    rewrite_spans(text, out, b'[', |text, at, out| {
        let (content, after) = delimited(text, at, b'[', b']')?;
        if !text[after..].starts_with(TAG) {
            return None;
        }
        out.write_str("<span class=\"rainbow-text\">");
        rainbow_chars(content, out);
        out.write_str("</span>");
        Some(after + TAG.len())
    });
}

/// Wrap every visible unit of `content`.
///
/// Tags from earlier passes are copied through without taking an index;
/// character references count as one unit; whitespace is copied unwrapped
/// but takes an index.
fn rainbow_chars(content: &str, out: &mut HtmlWriter) {
    let mut index = 0;
    let mut rest = content;

    while let Some(ch) = rest.chars().next() {
        let (len, is_tag) = match ch {
            '<' => rest.find('>').map_or((1, false), |gt| (gt + 1, true)),
            '&' => (entity_len(rest).unwrap_or(1), false),
            _ => (ch.len_utf8(), false),
        };
        let (unit, tail) = rest.split_at(len);
        rest = tail;

        if is_tag {
            out.write_str(unit);
            continue;
        }
        if ch.is_whitespace() {
            out.write_str(unit);
        } else {
            out.rainbow_char(unit, index);
        }
        index += 1;
    }
}

/// Length of a `&name;` / `&#123;` reference at the start of `text`.
fn entity_len(text: &str) -> Option<usize> {
    let body = text.as_bytes().get(1..)?;
    let len = body
        .iter()
        .take(MAX_ENTITY_LEN)
        .take_while(|&&b| b.is_ascii_alphanumeric() || b == b'#')
        .count();
    (len > 0 && body.get(len) == Some(&b';')).then_some(len + 2)
}

#[cfg(test)]
mod tests {
    use crate::icon::IconRegistry;
    use crate::inline::InlineRenderer;
    use crate::theme::Palette;

    fn render(text: &str) -> String {
        let icons = IconRegistry::new();
        InlineRenderer::new(None, &icons).render(text)
    }

    fn render_with(palette: &Palette, text: &str) -> String {
        let icons = IconRegistry::new();
        InlineRenderer::new(Some(palette), &icons).render(text)
    }

    #[test]
    fn palette_color_uses_variable() {
        let palette = Palette::from_colors([("red", "#f00")]);
        assert_eq!(
            render_with(&palette, "[hot]{color:red}"),
            "<span style=\"color: var(--red)\">hot</span>"
        );
    }

    #[test]
    fn unknown_color_is_literal() {
        let palette = Palette::from_colors([("red", "#f00")]);
        assert_eq!(
            render_with(&palette, "[sea]{color:teal}"),
            "<span style=\"color: teal\">sea</span>"
        );
        assert_eq!(render("[hot]{color:red}"), "<span style=\"color: red\">hot</span>");
    }

    #[test]
    fn color_name_with_underscore_is_bare_text() {
        assert_eq!(render("a [b]{color:my_red} c"), "a b c");
    }

    #[test]
    fn malformed_color_is_literal() {
        assert_eq!(render("[x]{color:}"), "[x]{color:}");
        assert_eq!(render("[x]{color:red"), "[x]{color:red");
        assert_eq!(render("[x]{color:re-d}"), "[x]{color:re-d}");
    }

    #[test]
    fn hex_six_and_three() {
        assert_eq!(render("[a]{hex:#ff8800}"), "<span style=\"color: #ff8800\">a</span>");
        assert_eq!(render("[b]{hex:#F80}"), "<span style=\"color: #F80\">b</span>");
    }

    #[test]
    fn hex_wrong_length_is_literal() {
        assert_eq!(render("[a]{hex:#abcd}"), "[a]{hex:#abcd}");
        assert_eq!(render("[a]{hex:#ggg}"), "[a]{hex:#ggg}");
    }

    #[test]
    fn rainbow_delays_and_spaces() {
        assert_eq!(
            render("[a b]{rainbow}"),
            "<span class=\"rainbow-text\">\
             <span class=\"rainbow-char\" style=\"--rainbow-delay: 0.0s\">a</span> \
             <span class=\"rainbow-char\" style=\"--rainbow-delay: 0.2s\">b</span>\
             </span>"
        );
    }

    #[test]
    fn rainbow_keeps_entities_whole() {
        let html = render("[&amp;]{rainbow}");
        assert_eq!(
            html,
            "<span class=\"rainbow-text\"><span class=\"rainbow-char\" style=\"--rainbow-delay: 0.0s\">&amp;</span></span>"
        );
    }

    #[test]
    fn rainbow_passes_markup_through() {
        let mut out = crate::render::HtmlWriter::new();
        super::rainbow_chars("a<b>c</b>", &mut out);
        assert_eq!(
            out.as_str(),
            "<span class=\"rainbow-char\" style=\"--rainbow-delay: 0.0s\">a</span><b>\
             <span class=\"rainbow-char\" style=\"--rainbow-delay: 0.1s\">c</span></b>"
        );
    }

    #[test]
    fn rainbow_counts_multibyte_characters() {
        let html = render("[éa]{rainbow}");
        assert!(html.contains("0.0s\">é</span>"));
        assert!(html.contains("0.1s\">a</span>"));
    }

    #[test]
    fn entity_lengths() {
        assert_eq!(super::entity_len("&amp;x"), Some(5));
        assert_eq!(super::entity_len("&#39;"), Some(5));
        assert_eq!(super::entity_len("& x;"), None);
        assert_eq!(super::entity_len("&"), None);
    }
}
