//! Icon substitution engine.
//!
//! Icons are SVG templates with `{{name}}` color slots. Rendering fills the
//! slots from caller-supplied colors, falls back to `currentColor` for the
//! rest, and optionally pins the icon size.

use memchr::memmem;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// Color assigned to every slot the caller did not fill.
pub const DEFAULT_ICON_COLOR: &str = "currentColor";

/// Slot name → color value.
pub type IconColors<'a> = FxHashMap<&'a str, &'a str>;

/// Registry of named SVG icon templates.
///
/// Templates are kept on a single line so an icon never introduces a line
/// break into the paragraph it is embedded in.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    templates: FxHashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl IconRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in icon set.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &(name, template) in BUILTIN_ICONS {
            registry
                .templates
                .insert(Cow::Borrowed(name), Cow::Borrowed(template));
        }
        registry
    }

    /// Add or replace a template.
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) {
        self.templates.insert(name.into(), template.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render an icon.
    ///
    /// Every `{{slot}}` named in `colors` gets that color, the remaining
    /// slots get [`DEFAULT_ICON_COLOR`]. Size attributes are added only when
    /// both `width` and `height` are given. An unknown `name` yields an empty
    /// string and a warning; callers treat the empty string as "not found".
    ///
    /// # Example
    /// ```
    /// use glossmark::icon::{IconColors, IconRegistry};
    ///
    /// let icons = IconRegistry::builtin();
    /// let mut colors = IconColors::default();
    /// colors.insert("stroke", "#ff0000");
    ///
    /// let svg = icons.get_icon("check", &colors, Some(16), Some(16));
    /// assert!(svg.starts_with("<svg width=\"16\" height=\"16\""));
    /// assert!(svg.contains("stroke=\"#ff0000\""));
    /// assert!(icons.get_icon("nope", &colors, None, None).is_empty());
    /// ```
    pub fn get_icon(
        &self,
        name: &str,
        colors: &IconColors<'_>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> String {
        let Some(template) = self.templates.get(name) else {
            log::warn!("icon `{name}` not found in registry");
            return String::new();
        };

        let mut svg = String::with_capacity(template.len() + 48);
        fill_slots(&mut svg, template, colors);

        if let (Some(w), Some(h)) = (width, height) {
            if let Some(pos) = memmem::find(svg.as_bytes(), b"<svg") {
                svg.insert_str(pos + 4, &format!(" width=\"{w}\" height=\"{h}\""));
            }
        }
        svg
    }
}

/// Copy `template` into `out`, replacing `{{slot}}` markers.
fn fill_slots(out: &mut String, template: &str, colors: &IconColors<'_>) {
    let bytes = template.as_bytes();
    let opener = memmem::Finder::new(b"{{");
    let mut pos = 0;

    while let Some(offset) = opener.find(&bytes[pos..]) {
        let open = pos + offset;
        let name_start = open + 2;
        let name_end = name_start
            + bytes[name_start..]
                .iter()
                .take_while(|&&b| b.is_ascii_alphanumeric() || b == b'_')
                .count();

        if name_end > name_start && bytes[name_end..].starts_with(b"}}") {
            let slot = &template[name_start..name_end];
            out.push_str(&template[pos..open]);
            out.push_str(colors.get(slot).copied().unwrap_or(DEFAULT_ICON_COLOR));
            pos = name_end + 2;
        } else {
            out.push_str(&template[pos..open + 1]);
            pos = open + 1;
        }
    }
    out.push_str(&template[pos..]);
}

/// Built-in icon set.
const BUILTIN_ICONS: &[(&str, &str)] = &[
    (
        "github",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path fill-rule="evenodd" clip-rule="evenodd" d="M12 0C5.37 0 0 5.37 0 12c0 5.31 3.435 9.795 8.205 11.385.6.105.825-.255.825-.57 0-.285-.015-1.23-.015-2.235-3.015.555-3.795-.735-4.035-1.41-.135-.345-.72-1.41-1.23-1.695-.42-.225-1.02-.78-.015-.795.945-.015 1.62.87 1.845 1.23 1.08 1.815 2.805 1.305 3.495.99.105-.78.42-1.305.765-1.605-2.67-.3-5.46-1.335-5.46-5.925 0-1.305.465-2.385 1.23-3.225-.12-.3-.54-1.53.12-3.18 0 0 1.005-.315 3.3 1.23.96-.27 1.98-.405 3-.405s2.04.135 3 .405c2.295-1.56 3.3-1.23 3.3-1.23.66 1.65.24 2.88.12 3.18.765.84 1.23 1.905 1.23 3.225 0 4.605-2.805 5.625-5.475 5.925.435.375.81 1.095.81 2.22 0 1.605-.015 2.895-.015 3.3 0 .315.225.69.825.57A12.02 12.02 0 0024 12c0-6.63-5.37-12-12-12z" fill="{{fill}}"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "email",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M3 8L10.89 13.26C11.2187 13.4793 11.6049 13.5963 12 13.5963C12.3951 13.5963 12.7813 13.4793 13.11 13.26L21 8M5 19H19C19.5304 19 20.0391 18.7893 20.4142 18.4142C20.7893 18.0391 21 17.5304 21 17V7C21 6.46957 20.7893 5.96086 20.4142 5.58579C20.0391 5.21071 19.5304 5 19 5H5C4.46957 5 3.96086 5.21071 3.58579 5.58579C3.21071 5.96086 3 6.46957 3 7V17C3 17.5304 3.21071 18.0391 3.58579 18.4142C3.96086 18.7893 4.46957 19 5 19Z" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "linkedin",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z" fill="{{fill}}"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "resume",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M14 2H6C5.46957 2 4.96086 2.21071 4.58579 2.58579C4.21071 2.96086 4 3.46957 4 4V20C4 20.5304 4.21071 21.0391 4.58579 21.4142C4.96086 21.7893 5.46957 22 6 22H18C18.5304 22 19.0391 21.7893 19.4142 21.4142C19.7893 21.0391 20 20.5304 20 20V8L14 2Z" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M14 2V8H20" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M16 13H8" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M16 17H8" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M10 9H9H8" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "twitter",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M23 3a10.9 10.9 0 01-3.14 1.53 4.48 4.48 0 00-7.86 3v1A10.66 10.66 0 013 4s-4 9 5 13a11.64 11.64 0 01-7 2c9 5 20 0 20-11.5a4.5 4.5 0 00-.08-.83A7.72 7.72 0 0023 3z" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "website",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<circle cx="12" cy="12" r="10" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M2 12h20M12 2a15.3 15.3 0 014 10 15.3 15.3 0 01-4 10 15.3 15.3 0 01-4-10 15.3 15.3 0 014-10z" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "link",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M10 13a5 5 0 007.54.54l3-3a5 5 0 00-7.07-7.07l-1.72 1.71" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M14 11a5 5 0 00-7.54-.54l-3 3a5 5 0 007.07 7.07l1.71-1.71" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "download",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "external",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6M15 3h6v6M10 14L21 3" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "arrow",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M5 12h14M12 5l7 7-7 7" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "check",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M20 6L9 17l-5-5" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "star",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" fill="{{fill}}" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "home",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M3 9l9-7 9 7v11a2 2 0 01-2 2H5a2 2 0 01-2-2V9z" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M9 22V12h6v10" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "document",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M14 2H6C5.46957 2 4.96086 2.21071 4.58579 2.58579C4.21071 2.96086 4 3.46957 4 4V20C4 20.5304 4.21071 21.0391 4.58579 21.4142C4.96086 21.7893 5.46957 22 6 22H18C18.5304 22 19.0391 21.7893 19.4142 21.4142C19.7893 21.0391 20 20.5304 20 20V8L14 2Z" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M14 2V8H20" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "blog",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M17 3a2.828 2.828 0 114 4L7.5 20.5 2 22l1.5-5.5L17 3z" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "warning",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<path d="M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0z" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M12 9v4M12 17h.01" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
    (
        "alert",
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<circle cx="12" cy="12" r="10" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"<path d="M12 8v4M12 16h.01" stroke="{{stroke}}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            r#"</svg>"#,
        ),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn colors<'a>(pairs: &[(&'a str, &'a str)]) -> IconColors<'a> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn builtin_set_is_complete() {
        let icons = IconRegistry::builtin();
        assert_eq!(icons.len(), 17);
        for name in ["github", "email", "linkedin", "star", "alert"] {
            assert!(icons.contains(name), "{name}");
        }
    }

    #[test]
    fn templates_are_single_line() {
        for (name, template) in BUILTIN_ICONS {
            assert!(!template.contains('\n'), "{name}");
            assert!(template.starts_with("<svg"), "{name}");
        }
    }

    #[test]
    fn fills_every_occurrence_of_a_slot() {
        let icons = IconRegistry::builtin();
        let svg = icons.get_icon("resume", &colors(&[("stroke", "var(--blue)")]), None, None);
        assert_eq!(svg.matches("stroke=\"var(--blue)\"").count(), 5);
        assert!(!svg.contains("{{"));
    }

    #[test]
    fn unfilled_slots_inherit_text_color() {
        let icons = IconRegistry::builtin();
        let svg = icons.get_icon("star", &colors(&[("fill", "#ffcc00")]), None, None);
        assert!(svg.contains("fill=\"#ffcc00\""));
        assert!(svg.contains("stroke=\"currentColor\""));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let icons = IconRegistry::builtin();
        let svg = icons.get_icon("check", &colors(&[("fill", "red")]), None, None);
        assert!(svg.contains("stroke=\"currentColor\""));
        assert!(!svg.contains("red"));
    }

    #[test]
    fn size_requires_both_dimensions() {
        let icons = IconRegistry::builtin();
        let none = IconColors::default();

        let sized = icons.get_icon("arrow", &none, Some(32), Some(20));
        assert!(sized.starts_with("<svg width=\"32\" height=\"20\" viewBox"));

        let unsized_svg = icons.get_icon("arrow", &none, Some(32), None);
        assert!(!unsized_svg.contains("width=\"32\""));
        assert!(unsized_svg.starts_with("<svg viewBox"));
    }

    #[test]
    fn unknown_icon_is_empty() {
        let icons = IconRegistry::builtin();
        assert_eq!(icons.get_icon("does-not-exist", &IconColors::default(), Some(24), Some(24)), "");
    }

    #[test]
    fn custom_templates() {
        let mut icons = IconRegistry::new();
        assert!(icons.is_empty());
        icons.insert("dot", "<svg><circle fill=\"{{fill}}\" stroke=\"{{ not a slot }}\"/></svg>");
        let svg = icons.get_icon("dot", &colors(&[("fill", "#000")]), None, None);
        assert_eq!(svg, "<svg><circle fill=\"#000\" stroke=\"{{ not a slot }}\"/></svg>");
        assert!(icons.contains("dot"));
        assert_eq!(icons.len(), 1);
    }
}
