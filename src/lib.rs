//! glossmark: a Markdown-flavored markup dialect rendered to HTML.
//!
//! The dialect covers headings with anchor ids, a generated table of
//! contents, fenced code with optional highlighting, themed and rainbow text,
//! SVG icons, images, iframes, nested lists and pipe tables.
//!
//! # Design Principles
//! - Escape first: the whole input is sanitized before any syntax is
//!   recognized, so user text never reaches the output unescaped
//! - No regex: byte-level scanning with `memchr`
//! - Infallible: malformed syntax degrades to literal text
//! - Injected collaborators: palette, icons and highlighter belong to an
//!   engine instance, not to globals

pub mod block;
pub mod escape;
pub mod highlight;
pub mod icon;
pub mod inline;
pub mod range;
pub mod render;
pub mod theme;
pub mod toc;
pub mod url;

// Re-export primary types
pub use block::{Block, Item, Paragraph, Segment};
pub use highlight::{CodeHighlighter, NoHighlighter};
pub use icon::IconRegistry;
pub use inline::InlineRenderer;
pub use range::{MAX_TEXT_LEN, Range};
pub use render::HtmlWriter;
pub use theme::{Palette, ThemeError, Variant};

use block::classify;
use memchr::memmem;
use std::fmt;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Palette for `[text]{color:NAME}`; known names render as CSS variables.
    pub palette: Option<Palette>,
    /// Replace `#TOC` paragraphs with a generated table of contents.
    pub toc: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            palette: None,
            toc: true,
        }
    }
}

/// Renders the dialect with a fixed set of options and collaborators.
///
/// The engine is immutable once built, so one instance can serve concurrent
/// callers.
///
/// # Example
/// ```
/// use glossmark::{MarkupEngine, Options, Palette, Variant};
///
/// let palette = Palette::builtin("dracula", Variant::Dark).unwrap();
/// let engine = MarkupEngine::new(Options {
///     palette: Some(palette),
///     ..Options::default()
/// });
/// let html = engine.parse("[warm]{color:red}");
/// assert_eq!(html, "<p><span style=\"color: var(--red)\">warm</span></p>\n");
/// ```
pub struct MarkupEngine {
    options: Options,
    icons: IconRegistry,
    highlighter: Box<dyn CodeHighlighter>,
}

impl MarkupEngine {
    /// Create an engine with the built-in icons and no highlighter.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            icons: IconRegistry::builtin(),
            highlighter: Box::new(NoHighlighter),
        }
    }

    /// Replace the icon registry.
    pub fn with_icons(mut self, icons: IconRegistry) -> Self {
        self.icons = icons;
        self
    }

    /// Use a syntax highlighter for fenced code with a language tag.
    pub fn with_highlighter(mut self, highlighter: impl CodeHighlighter + 'static) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn icons(&self) -> &IconRegistry {
        &self.icons
    }

    /// Render a document to an HTML fragment.
    ///
    /// A document whose sanitized text is longer than [`MAX_TEXT_LEN`] bytes
    /// renders to an empty fragment and logs an error.
    pub fn parse(&self, text: &str) -> String {
        let mut writer = HtmlWriter::with_capacity_for(text.len());
        self.render_to_writer(text, &mut writer);
        writer.into_string()
    }

    /// Render a document, replacing the contents of `out`.
    ///
    /// This avoids allocation if the buffer has sufficient capacity.
    pub fn parse_into(&self, text: &str, out: &mut String) {
        out.clear();
        out.reserve(text.len() + text.len() / 2);
        let mut writer = HtmlWriter::default();
        std::mem::swap(writer.buffer_mut(), out);
        self.render_to_writer(text, &mut writer);
        std::mem::swap(writer.buffer_mut(), out);
    }

    /// Render one line of inline markup, without block structure.
    ///
    /// # Example
    /// ```
    /// let engine = glossmark::MarkupEngine::default();
    /// assert_eq!(engine.parse_inline("**hi** `x`"), "<strong>hi</strong> <code>x</code>");
    /// ```
    pub fn parse_inline(&self, text: &str) -> String {
        let text = escape::sanitize(text);
        let inline = self.inline();
        inline::render_code_spans(&text, &inline).unwrap_or_else(|| inline.render(&text))
    }

    fn inline(&self) -> InlineRenderer<'_> {
        InlineRenderer::new(self.options.palette.as_ref(), &self.icons)
    }

    fn render_to_writer(&self, input: &str, writer: &mut HtmlWriter) {
        let text = escape::sanitize(input);
        if !range::addressable(text.len()) {
            log::error!(
                "document of {} bytes exceeds the {MAX_TEXT_LEN} byte limit, nothing rendered",
                text.len()
            );
            return;
        }
        let inline = self.inline();

        // Generated once, before any block, so every placeholder gets the same
        // fragment wherever it sits.
        let toc = (self.options.toc && memmem::find(text.as_bytes(), toc::TOC_MARKER.as_bytes()).is_some())
            .then(|| toc::generate(&text));

        for item in block::items(&text, self.options.toc, &inline) {
            match item {
                Item::CodeBlock { language, body } => self.render_code_block(language, body, writer),
                Item::Toc => {
                    if let Some(toc) = &toc {
                        writer.write_str(toc);
                    }
                }
                Item::Paragraph(paragraph) => render_paragraph(&paragraph, &inline, writer),
            }
        }
    }

    fn render_code_block(&self, language: &str, body: &str, writer: &mut HtmlWriter) {
        let body = body.trim();
        writer.code_block_start(language);

        let highlighted = if language.is_empty() {
            None
        } else {
            let source = escape::unescape(body);
            self.highlighter
                .highlight(&source, highlight::normalize_language(language))
        };
        match highlighted {
            Some(html) => writer.write_str(&html),
            None => writer.write_str(body),
        }

        writer.code_block_end();
    }
}

impl Default for MarkupEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for MarkupEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupEngine")
            .field("options", &self.options)
            .field("icons", &self.icons.len())
            .finish_non_exhaustive()
    }
}

/// Convert a document to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = glossmark::to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1 id=\"hello\">Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn to_html(input: &str) -> String {
    MarkupEngine::default().parse(input)
}

/// Convert a document to HTML, writing into a provided buffer.
pub fn to_html_into(input: &str, out: &mut String) {
    MarkupEngine::default().parse_into(input, out);
}

/// Convert a document to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    MarkupEngine::new(options.clone()).parse(input)
}

/// Render one classified paragraph.
fn render_paragraph(paragraph: &Paragraph<'_>, inline: &InlineRenderer<'_>, writer: &mut HtmlWriter) {
    let rendered = paragraph.already_rendered;
    let content = |text: &str, writer: &mut HtmlWriter| {
        if rendered {
            writer.write_str(text);
        } else {
            writer.write_str(&inline.render(text));
        }
    };

    match classify(paragraph) {
        Block::Heading { level, id, text } => {
            writer.heading_start(level, &id);
            content(text, writer);
            writer.heading_end(level);
        }
        Block::Rule => writer.thematic_break(),
        Block::ImageRow(images) => {
            writer.image_row_start();
            for image in &images {
                inline::write_image_row_item(writer, image);
            }
            writer.image_row_end();
        }
        Block::BlockQuote(text) => {
            writer.blockquote_start();
            content(&text, writer);
            writer.blockquote_end();
        }
        Block::List(list) => {
            log::trace!("{:?} list with {} entries", list.kind, list.entries().len());
            list.render(writer, content);
        }
        Block::Table(table) => table.render(writer, content),
        Block::Paragraph(text) => {
            writer.paragraph_start();
            content(text, writer);
            writer.paragraph_end();
        }
    }
}
