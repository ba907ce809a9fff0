//! `[text](url)` hyperlinks.

use super::{InlineRenderer, delimited, rewrite_spans};
use crate::render::HtmlWriter;
use crate::url::sanitize_url;

/// Rewrite `[text](url)` into an external link with a filtered target.
pub(super) fn links(_inline: &InlineRenderer<'_>, text: &str, out: &mut HtmlWriter) {
    rewrite_spans(text, out, b'[', |text, at, out| {
        let (label, after) = delimited(text, at, b'[', b']')?;
        let (target, end) = delimited(text, after, b'(', b')')?;
        out.external_link(&sanitize_url(target), label);
        Some(end)
    });
}
