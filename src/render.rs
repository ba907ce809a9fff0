//! HTML output writer.
//!
//! All text handed to the writer is already sanitized, so element helpers
//! copy it verbatim. Attribute values that may carry generated markup go
//! through [`escape::write_attr_text`].

use crate::escape;

/// Optional pixel dimensions of an embed, kept as the digits from the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions<'a> {
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
}

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use glossmark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.paragraph_start();
/// writer.write_str("Hello");
/// writer.paragraph_end();
/// assert_eq!(writer.into_string(), "<p>Hello</p>\n");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Output is typically larger than the input; we reserve extra.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 2),
        }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Write sanitized text into an attribute value, dropping any tags.
    #[inline]
    pub fn write_attr_text(&mut self, text: &str) {
        escape::write_attr_text(&mut self.out, text);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Get mutable reference to internal buffer.
    ///
    /// Use with caution - allows bypassing escaping.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.out
    }

    // --- Block elements ---

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>\n");
    }

    /// Write heading start: `<hN id="...">`
    #[inline]
    pub fn heading_start(&mut self, level: u8, id: &str) {
        debug_assert!((1..=3).contains(&level));
        self.write_str("<h");
        self.write_char(char::from(b'0' + level));
        self.write_str(" id=\"");
        self.write_str(id);
        self.write_str("\">");
    }

    /// Write heading end: `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        self.write_str("</h");
        self.write_char(char::from(b'0' + level));
        self.write_str(">\n");
    }

    /// Write code block start with optional language class.
    #[inline]
    pub fn code_block_start(&mut self, lang: &str) {
        if lang.is_empty() {
            self.write_str("<pre><code>");
        } else {
            self.write_str("<pre><code class=\"language-");
            self.write_attr_text(lang);
            self.write_str("\">");
        }
    }

    /// Write code block end: `</code></pre>\n`
    #[inline]
    pub fn code_block_end(&mut self) {
        self.write_str("</code></pre>\n");
    }

    /// Write thematic break: `<hr />\n`
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str("<hr />\n");
    }

    /// Write blockquote start: `<blockquote>`
    #[inline]
    pub fn blockquote_start(&mut self) {
        self.write_str("<blockquote>");
    }

    /// Write blockquote end: `</blockquote>\n`
    #[inline]
    pub fn blockquote_end(&mut self) {
        self.write_str("</blockquote>\n");
    }

    #[inline]
    pub fn ul_start(&mut self) {
        self.write_str("<ul>\n");
    }

    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>\n");
    }

    #[inline]
    pub fn ol_start(&mut self) {
        self.write_str("<ol>\n");
    }

    #[inline]
    pub fn ol_end(&mut self) {
        self.write_str("</ol>\n");
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str("<li>");
    }

    /// Write list item end: `</li>\n`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>\n");
    }

    #[inline]
    pub fn table_start(&mut self) {
        self.write_str("<table>\n");
    }

    #[inline]
    pub fn table_end(&mut self) {
        self.write_str("</table>\n");
    }

    #[inline]
    pub fn thead_start(&mut self) {
        self.write_str("<thead>\n");
    }

    #[inline]
    pub fn thead_end(&mut self) {
        self.write_str("</thead>\n");
    }

    #[inline]
    pub fn tbody_start(&mut self) {
        self.write_str("<tbody>\n");
    }

    #[inline]
    pub fn tbody_end(&mut self) {
        self.write_str("</tbody>\n");
    }

    #[inline]
    pub fn tr_start(&mut self) {
        self.write_str("<tr>\n");
    }

    #[inline]
    pub fn tr_end(&mut self) {
        self.write_str("</tr>\n");
    }

    #[inline]
    pub fn th_start(&mut self) {
        self.write_str("<th>");
    }

    #[inline]
    pub fn th_end(&mut self) {
        self.write_str("</th>\n");
    }

    #[inline]
    pub fn td_start(&mut self) {
        self.write_str("<td>");
    }

    #[inline]
    pub fn td_end(&mut self) {
        self.write_str("</td>\n");
    }

    /// Write image row start: `<div class="image-row">`
    #[inline]
    pub fn image_row_start(&mut self) {
        self.write_str("<div class=\"image-row\">");
    }

    /// Write image row end: `</div>\n`
    #[inline]
    pub fn image_row_end(&mut self) {
        self.write_str("</div>\n");
    }

    // --- Inline elements ---

    /// Write inline code: `<code>content</code>`
    #[inline]
    pub fn inline_code(&mut self, content: &str) {
        self.write_str("<code>");
        self.write_str(content);
        self.write_str("</code>");
    }

    /// Write a `<span>` with an inline color style.
    #[inline]
    pub fn color_span(&mut self, color: &str, content: &str, themed: bool) {
        self.write_str("<span style=\"color: ");
        if themed {
            self.write_str("var(--");
            self.write_str(color);
            self.write_str(")");
        } else {
            self.write_str(color);
        }
        self.write_str("\">");
        self.write_str(content);
        self.write_str("</span>");
    }

    /// Write a delay-staggered rainbow character: `--rainbow-delay: I.Ds`.
    #[inline]
    pub fn rainbow_char(&mut self, unit: &str, index: usize) {
        self.write_str("<span class=\"rainbow-char\" style=\"--rainbow-delay: ");
        self.write_usize(index / 10);
        self.write_char('.');
        self.write_usize(index % 10);
        self.write_str("s\">");
        self.write_str(unit);
        self.write_str("</span>");
    }

    /// Write `<img ... />`.
    pub fn image(&mut self, src: &str, alt: &str, dims: Dimensions<'_>) {
        self.write_str("<img src=\"");
        self.write_str(src);
        self.write_str("\" alt=\"");
        self.write_attr_text(alt);
        self.write_str("\"");
        self.dimensions(dims);
        self.write_str(" />");
    }

    /// Write a borderless, fullscreen-capable `<iframe>`.
    pub fn iframe(&mut self, src: &str, title: &str, dims: Dimensions<'_>) {
        self.write_str("<iframe src=\"");
        self.write_str(src);
        self.write_str("\" title=\"");
        self.write_attr_text(title);
        self.write_str("\"");
        self.dimensions(dims);
        self.write_str(" frameborder=\"0\" allowfullscreen></iframe>");
    }

    /// Write `<figcaption>caption</figcaption>` as plain text.
    #[inline]
    pub fn figcaption(&mut self, caption: &str) {
        self.write_str("<figcaption>");
        self.write_attr_text(caption);
        self.write_str("</figcaption>");
    }

    /// Write a link that opens in a new browsing context without leaking the
    /// opener or referrer.
    #[inline]
    pub fn external_link(&mut self, href: &str, text: &str) {
        self.write_str("<a href=\"");
        self.write_str(href);
        self.write_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
        self.write_str(text);
        self.write_str("</a>");
    }

    /// Write `<tag>content</tag>` for a simple inline wrapper.
    #[inline]
    pub fn wrap(&mut self, tag: &'static str, content: &str) {
        self.write_char('<');
        self.write_str(tag);
        self.write_char('>');
        self.write_str(content);
        self.write_str("</");
        self.write_str(tag);
        self.write_char('>');
    }

    fn dimensions(&mut self, dims: Dimensions<'_>) {
        if let Some(w) = dims.width {
            self.write_str(" width=\"");
            self.write_str(w);
            self.write_str("\"");
        }
        if let Some(h) = dims.height {
            self.write_str(" height=\"");
            self.write_str(h);
            self.write_str("\"");
        }
    }

    /// Write a usize as decimal.
    fn write_usize(&mut self, mut n: usize) {
        if n == 0 {
            self.write_char('0');
            return;
        }

        let mut buf = [0u8; 20];
        let mut i = buf.len();
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }

        for &b in &buf[i..] {
            self.out.push(char::from(b));
        }
    }
}
