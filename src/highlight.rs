//! Syntax highlighting seam for fenced code blocks.
//!
//! The engine works without a highlighter: code is emitted escaped. Enable the
//! `syntect` feature for a class-based HTML backend.

/// Highlights raw source code into HTML.
pub trait CodeHighlighter: Send + Sync {
    /// Highlight `code` (raw, unescaped source) written in `language`
    /// (already alias-normalized).
    ///
    /// Returns `None` when the language is not supported; the engine then
    /// emits the escaped code instead. Returned HTML is inserted verbatim and
    /// must escape the code itself.
    fn highlight(&self, code: &str, language: &str) -> Option<String>;
}

/// Highlighter that supports no language.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHighlighter;

impl CodeHighlighter for NoHighlighter {
    fn highlight(&self, _code: &str, _language: &str) -> Option<String> {
        None
    }
}

/// Expand short language tags to full grammar names.
///
/// # Example
/// ```
/// use glossmark::highlight::normalize_language;
///
/// assert_eq!(normalize_language("js"), "javascript");
/// assert_eq!(normalize_language("rust"), "rust");
/// ```
pub fn normalize_language(language: &str) -> &str {
    match language {
        "js" => "javascript",
        "ts" => "typescript",
        "py" => "python",
        "sh" => "bash",
        "yml" => "yaml",
        other => other,
    }
}

#[cfg(feature = "syntect")]
pub use self::syntect_backend::SyntectHighlighter;

#[cfg(feature = "syntect")]
mod syntect_backend {
    use super::CodeHighlighter;
    use syntect::html::{ClassStyle, ClassedHTMLGenerator};
    use syntect::parsing::{SyntaxReference, SyntaxSet};
    use syntect::util::LinesWithEndings;

    /// Class-based HTML highlighter backed by syntect's default syntaxes.
    ///
    /// Output uses `<span class="...">` markup; pair it with a stylesheet
    /// generated by `syntect::html::css_for_theme_with_class_style`.
    pub struct SyntectHighlighter {
        syntax_set: SyntaxSet,
    }

    impl SyntectHighlighter {
        pub fn new() -> Self {
            Self {
                syntax_set: SyntaxSet::load_defaults_newlines(),
            }
        }

        fn syntax_for(&self, language: &str) -> Option<&SyntaxReference> {
            self.syntax_set
                .find_syntax_by_extension(language)
                .or_else(|| self.syntax_set.find_syntax_by_token(language))
        }
    }

    impl Default for SyntectHighlighter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CodeHighlighter for SyntectHighlighter {
        fn highlight(&self, code: &str, language: &str) -> Option<String> {
            let syntax = self.syntax_for(language)?;
            let mut generator =
                ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);
            for line in LinesWithEndings::from(code) {
                if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
                    log::warn!("highlighting `{language}` failed: {err}");
                    return None;
                }
            }
            Some(generator.finalize())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn highlights_known_language() {
            let h = SyntectHighlighter::new();
            let html = h.highlight("fn main() {}\n", "rs").unwrap();
            assert!(html.contains("<span class="));
            assert!(html.contains("main"));
        }

        #[test]
        fn escapes_code() {
            let h = SyntectHighlighter::new();
            let html = h.highlight("let x = a < b;\n", "rust").unwrap();
            assert!(html.contains("&lt;"));
        }

        #[test]
        fn unknown_language_is_unsupported() {
            let h = SyntectHighlighter::new();
            assert!(h.highlight("x", "definitely-not-a-language").is_none());
        }
    }
}
