//! URL safety filter for link, image and iframe targets.

use std::borrow::Cow;

/// Neutral target substituted for every rejected URL.
pub const BLOCKED_URL: &str = "#";

/// Schemes that are never allowed, matched case-insensitively.
const DANGEROUS_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:", "file:", "about:"];

/// Prefixes a URL must start with, matched case-insensitively.
const ALLOWED_PREFIXES: &[&str] = &[
    "http://", "https://", "mailto:", "tel:", "#", "/", "./", "../",
];

/// Filter a URL taken from sanitized text.
///
/// Returns the trimmed URL when it starts with an allowed prefix, otherwise
/// [`BLOCKED_URL`]. Rejections are logged as warnings.
///
/// # Example
/// ```
/// use glossmark::url::sanitize_url;
///
/// assert_eq!(sanitize_url(" https://example.com "), "https://example.com");
/// assert_eq!(sanitize_url("javascript:alert(1)"), "#");
/// ```
pub fn sanitize_url(url: &str) -> Cow<'_, str> {
    let trimmed = url.trim();

    if DANGEROUS_SCHEMES
        .iter()
        .any(|scheme| starts_with_ignore_case(trimmed, scheme))
    {
        log::warn!("blocked dangerous URL: {trimmed}");
        return Cow::Borrowed(BLOCKED_URL);
    }

    let allowed = ALLOWED_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(trimmed, prefix));
    // Sanitized text has no raw `<`, `>` or `"`; seeing one means the URL
    // swallowed markup produced by an earlier inline pass. Inner whitespace
    // would let a target carry extra attribute text.
    if !allowed
        || trimmed
            .bytes()
            .any(|b| matches!(b, b'<' | b'>' | b'"') || b.is_ascii_whitespace())
    {
        log::warn!("blocked suspicious URL: {trimmed}");
        return Cow::Borrowed(BLOCKED_URL);
    }

    Cow::Borrowed(trimmed)
}

#[inline]
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
