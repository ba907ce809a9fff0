//! HTML escaping and input sanitization.
//!
//! Fast-path optimized: scans for the first escapable character,
//! then bulk-copies segments between escapes.

use memchr::{memchr, memchr2, memchr3};
use std::borrow::Cow;

/// Lookup table for the five HTML-significant characters.
/// Index by byte value, true if needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape `<`, `>`, `&`, `"` and `'` into the output buffer.
///
/// # Example
/// ```
/// use glossmark::escape::escape_into;
///
/// let mut out = String::new();
/// escape_into(&mut out, "<a href=\"x\">");
/// assert_eq!(out, "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[inline]
pub fn escape_into(out: &mut String, input: &str) {
    if input.is_empty() {
        return;
    }

    let bytes = input.as_bytes();
    let mut pos = match first_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }

        // Escapable bytes are ASCII, so both ends are char boundaries
        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                b'"' => "&quot;",
                b'\'' => "&#39;",
                _ => unreachable!(),
            });
            pos += 1;
        }
    }
}

/// Escape and return as a new String.
///
/// Prefer `escape_into` to reuse buffers.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_into(&mut out, input);
    out
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    min_opt(a, b)
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Normalize `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(input: &str) -> Cow<'_, str> {
    if memchr(b'\r', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Turn raw user text into plain, escaped text.
///
/// Line endings are normalized, existing character references are decoded,
/// and the five HTML-significant characters are escaped. Decoding first
/// makes the operation idempotent: sanitizing its own output changes nothing.
///
/// # Example
/// ```
/// use glossmark::escape::sanitize;
///
/// let once = sanitize("<b>Tom & Jerry</b>");
/// assert_eq!(once, "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
/// assert_eq!(sanitize(&once), once);
/// ```
pub fn sanitize(input: &str) -> String {
    let normalized = normalize_newlines(input);
    let decoded = if memchr(b'&', normalized.as_bytes()).is_some() {
        html_escape::decode_html_entities(normalized.as_ref())
    } else {
        Cow::Borrowed(normalized.as_ref())
    };
    escape(&decoded)
}

/// Decode character references in already-sanitized text back to raw text.
pub fn unescape(input: &str) -> Cow<'_, str> {
    if memchr(b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    html_escape::decode_html_entities(input)
}

/// Copy sanitized text that may carry generated markup into an attribute
/// value, dropping every `<...>` tag.
///
/// Raw `<` only appears in sanitized text as the start of markup the engine
/// produced itself, so what is left never holds a quote or angle bracket.
pub fn write_attr_text(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut pos = 0;
    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let lt = pos + offset;
        out.push_str(&text[pos..lt]);
        match memchr(b'>', &bytes[lt..]) {
            Some(gt) => pos = lt + gt + 1,
            None => {
                pos = bytes.len();
            }
        }
    }
    out.push_str(&text[pos..]);
}

/// Remove every `<...>` tag and return the remaining text.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    if memchr(b'<', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    write_attr_text(&mut out, text);
    Cow::Owned(out)
}
