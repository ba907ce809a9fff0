//! Embeds: `![SVG](name){..}`, `![Image](url){..}`, `![Iframe](url){..}`.

use super::{InlineRenderer, delimited, is_word_byte, rewrite_spans};
use crate::icon::IconColors;
use crate::render::{Dimensions, HtmlWriter};
use crate::url::sanitize_url;
use smallvec::SmallVec;

/// Icon size used when the parameters give none.
const DEFAULT_ICON_SIZE: u32 = 24;

const DEFAULT_IMAGE_ALT: &str = "Image";
const DEFAULT_IFRAME_TITLE: &str = "Embedded content";

/// A matched `![LABEL](target){params}` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmbedSpan<'a> {
    target: &'a str,
    params: Option<&'a str>,
    end: usize,
}

/// Match `![LABEL](target)` at `at`, with an optional `{params}` suffix.
fn embed_span<'a>(text: &'a str, at: usize, label: &str) -> Option<EmbedSpan<'a>> {
    let rest = text[at..].strip_prefix("![")?.strip_prefix(label)?;
    if !rest.starts_with(']') {
        return None;
    }
    let (target, after) = delimited(text, at + label.len() + 3, b'(', b')')?;
    Some(match delimited(text, after, b'{', b'}') {
        Some((params, end)) => EmbedSpan {
            target,
            params: Some(params),
            end,
        },
        None => EmbedSpan {
            target,
            params: None,
            end: after,
        },
    })
}

/// Comma-separated tokens, trimmed, empty ones dropped.
fn tokens(params: &str) -> impl Iterator<Item = &str> {
    params.split(',').map(str::trim).filter(|t| !t.is_empty())
}

fn is_number(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

/// Image and iframe parameters: bare integers size the element, every other
/// token is part of the caption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaParams<'a> {
    /// Caption tokens joined with `, `.
    pub caption: Option<String>,
    pub dims: Dimensions<'a>,
}

impl<'a> MediaParams<'a> {
    /// # Example
    /// ```
    /// use glossmark::inline::MediaParams;
    ///
    /// let params = MediaParams::parse("Sunset, 640, Lake view, 480");
    /// assert_eq!(params.caption.as_deref(), Some("Sunset, Lake view"));
    /// assert_eq!(params.dims.width, Some("640"));
    /// assert_eq!(params.dims.height, Some("480"));
    /// ```
    pub fn parse(params: &'a str) -> Self {
        let mut caption: SmallVec<[&str; 4]> = SmallVec::new();
        let mut dims = Dimensions::default();

        for token in tokens(params) {
            if !is_number(token) {
                caption.push(token);
            } else if dims.width.is_none() {
                dims.width = Some(token);
            } else if dims.height.is_none() {
                dims.height = Some(token);
            }
        }

        Self {
            caption: (!caption.is_empty()).then(|| caption.join(", ")),
            dims,
        }
    }
}

/// Icon parameters: `key:value` color slots and a bare width and height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconParams<'a> {
    pub colors: IconColors<'a>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl<'a> IconParams<'a> {
    /// Pairs whose value is not a hex color, a `var(--name)` reference or a
    /// plain word are ignored.
    pub fn parse(params: &'a str) -> Self {
        let mut parsed = Self::default();
        let mut numbers = 0;

        for token in tokens(params) {
            if let Some((key, value)) = token.split_once(':') {
                let (key, value) = (key.trim(), value.trim());
                if is_icon_color(value) {
                    parsed.colors.insert(key, value);
                } else {
                    log::debug!("ignoring icon color `{key}:{value}`");
                }
            } else if is_number(token) {
                let size = token.parse().ok();
                match numbers {
                    0 => parsed.width = size,
                    1 => parsed.height = size,
                    _ => {}
                }
                numbers += 1;
            }
        }
        parsed
    }
}

/// `#hex{3,6}`, `var(--[\w-]+)` or `\w+`.
fn is_icon_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return (3..=6).contains(&hex.len()) && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    if let Some(name) = value
        .strip_prefix("var(--")
        .and_then(|v| v.strip_suffix(')'))
    {
        return !name.is_empty() && name.bytes().all(|b| is_word_byte(b) || b == b'-');
    }
    !value.is_empty() && value.bytes().all(is_word_byte)
}

/// `![SVG](name){params}` through the icon registry.
pub(super) fn icons(inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    rewrite_spans(text, out, b'!', |text, at, out| {
        let span = embed_span(text, at, "SVG")?;
        let name = span.target.trim();
        let params = span.params.map(IconParams::parse).unwrap_or_default();
        let svg = inline.icons.get_icon(
            name,
            &params.colors,
            Some(params.width.unwrap_or(DEFAULT_ICON_SIZE)),
            Some(params.height.unwrap_or(DEFAULT_ICON_SIZE)),
        );

        if svg.is_empty() {
            out.write_str("[SVG: ");
            out.write_str(name);
            out.write_str(" not found]");
        } else {
            out.write_str(&svg);
        }
        Some(span.end)
    });
}

/// `![Image](url){params}`, wrapped in a figure when captioned.
pub(super) fn images(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    rewrite_spans(text, out, b'!', |text, at, out| {
        let span = embed_span(text, at, "Image")?;
        let src = sanitize_url(span.target);
        let params = span.params.map(MediaParams::parse).unwrap_or_default();

        match &params.caption {
            Some(caption) => {
                out.write_str("<figure>");
                out.image(&src, caption, params.dims);
                out.figcaption(caption);
                out.write_str("</figure>");
            }
            None => out.image(&src, DEFAULT_IMAGE_ALT, params.dims),
        }
        Some(span.end)
    });
}

/// `![Iframe](url){params}`, wrapped in a figure when titled.
pub(super) fn iframes(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    rewrite_spans(text, out, b'!', |text, at, out| {
        let span = embed_span(text, at, "Iframe")?;
        let src = sanitize_url(span.target);
        let params = span.params.map(MediaParams::parse).unwrap_or_default();

        match &params.caption {
            Some(title) => {
                out.write_str("<figure>");
                out.iframe(&src, title, params.dims);
                out.figcaption(title);
                out.write_str("</figure>");
            }
            None => out.iframe(&src, DEFAULT_IFRAME_TITLE, params.dims),
        }
        Some(span.end)
    });
}

/// One image of an image row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpan<'a> {
    /// Target as written, before URL filtering.
    pub url: &'a str,
    pub params: MediaParams<'a>,
}

/// Match a piece of text that is exactly one `![Image](url){params}` span.
pub fn parse_image_span(piece: &str) -> Option<ImageSpan<'_>> {
    let span = embed_span(piece, 0, "Image")?;
    if span.end != piece.len() {
        return None;
    }
    Some(ImageSpan {
        url: span.target,
        params: span.params.map(MediaParams::parse).unwrap_or_default(),
    })
}

/// Write `<div class="image-row-item">` for one image of a row.
pub fn write_image_row_item(out: &mut HtmlWriter, image: &ImageSpan<'_>) {
    let src = sanitize_url(image.url);
    let caption = image.params.caption.as_deref();

    out.write_str("<div class=\"image-row-item\">");
    out.image(&src, caption.unwrap_or(DEFAULT_IMAGE_ALT), image.params.dims);
    if let Some(caption) = caption {
        out.figcaption(caption);
    }
    out.write_str("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconRegistry;

    fn render(text: &str) -> String {
        let icons = IconRegistry::builtin();
        InlineRenderer::new(None, &icons).render(text)
    }

    #[test]
    fn embed_span_bounds() {
        let span = embed_span("x ![Image](/a.png){Cat} y", 2, "Image").unwrap();
        assert_eq!(span.target, "/a.png");
        assert_eq!(span.params, Some("Cat"));
        assert_eq!(span.end, 23);
        assert!(embed_span("![Image]", 0, "Image").is_none());
        assert!(embed_span("![Images](/a)", 0, "Image").is_none());
    }

    #[test]
    fn media_params_skip_empty_tokens() {
        let params = MediaParams::parse(" , 100,, ");
        assert_eq!(params.caption, None);
        assert_eq!(params.dims.width, Some("100"));
        assert_eq!(params.dims.height, None);
    }

    #[test]
    fn icon_params() {
        let params = IconParams::parse("stroke:#fff, fill: var(--accent-2), 32, 16, bad:#zz");
        assert_eq!(params.colors.get("stroke"), Some(&"#fff"));
        assert_eq!(params.colors.get("fill"), Some(&"var(--accent-2)"));
        assert!(!params.colors.contains_key("bad"));
        assert_eq!(params.width, Some(32));
        assert_eq!(params.height, Some(16));
    }

    #[test]
    fn icon_color_values() {
        assert!(is_icon_color("#abc"));
        assert!(is_icon_color("#a1b2c3"));
        assert!(!is_icon_color("#ab"));
        assert!(!is_icon_color("#abcdef1"));
        assert!(is_icon_color("var(--x-y)"));
        assert!(!is_icon_color("var(--)"));
        assert!(is_icon_color("red"));
        assert!(!is_icon_color("red;x"));
    }

    #[test]
    fn icon_default_size() {
        let html = render("![SVG](check)");
        assert!(html.starts_with("<svg width=\"24\" height=\"24\""));
    }

    #[test]
    fn icon_custom_size() {
        let html = render("![SVG](star){16, 20}");
        assert!(html.starts_with("<svg width=\"16\" height=\"20\""));
    }

    #[test]
    fn icon_not_found() {
        assert_eq!(render("![SVG](nope)"), "[SVG: nope not found]");
    }

    #[test]
    fn image_plain() {
        assert_eq!(
            render("![Image](/cat.png)"),
            "<img src=\"/cat.png\" alt=\"Image\" />"
        );
    }

    #[test]
    fn image_with_caption_and_size() {
        assert_eq!(
            render("![Image](https://x.test/a.png){A cat, 200, 100}"),
            "<figure><img src=\"https://x.test/a.png\" alt=\"A cat\" width=\"200\" height=\"100\" />\
             <figcaption>A cat</figcaption></figure>"
        );
    }

    #[test]
    fn image_blocked_url() {
        assert_eq!(
            render("![Image](javascript:alert(1))"),
            "<img src=\"#\" alt=\"Image\" />)"
        );
    }

    #[test]
    fn iframe_default_title() {
        assert_eq!(
            render("![Iframe](https://v.test/e){560, 315}"),
            "<iframe src=\"https://v.test/e\" title=\"Embedded content\" width=\"560\" height=\"315\" \
             frameborder=\"0\" allowfullscreen></iframe>"
        );
    }

    #[test]
    fn iframe_titled_is_figure() {
        let html = render("![Iframe](https://v.test/e){Demo}");
        assert!(html.starts_with("<figure><iframe"));
        assert!(html.contains("title=\"Demo\""));
        assert!(html.ends_with("<figcaption>Demo</figcaption></figure>"));
    }

    #[test]
    fn caption_markup_is_stripped_from_attributes() {
        let html = render("![Image](/a.png){[hi]{color:red}}");
        assert!(html.contains("alt=\"hi\""));
        assert!(html.contains("<figcaption>hi</figcaption>"));
    }

    #[test]
    fn image_span_must_fill_piece() {
        assert!(parse_image_span("![Image](/a.png){A}").is_some());
        assert!(parse_image_span("![Image](/a.png){A} tail").is_none());
        assert!(parse_image_span("lead ![Image](/a.png)").is_none());
    }

    #[test]
    fn row_item() {
        let image = parse_image_span("![Image](/a.png){Left, 50}").unwrap();
        let mut out = HtmlWriter::new();
        write_image_row_item(&mut out, &image);
        assert_eq!(
            out.as_str(),
            "<div class=\"image-row-item\"><img src=\"/a.png\" alt=\"Left\" width=\"50\" />\
             <figcaption>Left</figcaption></div>"
        );
    }
}
