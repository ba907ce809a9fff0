//! Theme palettes used to resolve `[text]{color:NAME}` spans.
//!
//! A [`Palette`] maps color roles (`red`, `text`, `surface0`, ...) to CSS
//! values. The engine only asks whether a role exists: known roles render as
//! `var(--role)`, so the host page decides the actual color through CSS
//! custom properties (see [`Palette::to_css_variables`]).

mod builtin;

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Names of the built-in themes.
pub const THEME_NAMES: &[&str] = &["catppuccin", "gruvbox", "tokyonight", "kanagawa", "dracula"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme `{0}` (available: catppuccin, gruvbox, tokyonight, kanagawa, dracula)")]
    UnknownTheme(String),

    #[error("unknown theme variant `{0}` (expected `light` or `dark`)")]
    UnknownVariant(String),
}

/// Light or dark flavor of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    Light,
    #[default]
    Dark,
}

impl FromStr for Variant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("light") {
            Ok(Variant::Light)
        } else if s.eq_ignore_ascii_case("dark") {
            Ok(Variant::Dark)
        } else {
            Err(ThemeError::UnknownVariant(s.to_string()))
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        })
    }
}

/// Read-only color table for one theme variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: FxHashMap<String, String>,
}

impl Palette {
    /// Load one of the built-in themes.
    ///
    /// # Example
    /// ```
    /// use glossmark::theme::{Palette, Variant};
    ///
    /// let palette = Palette::builtin("catppuccin", Variant::Dark).unwrap();
    /// assert_eq!(palette.get("base"), Some("#1e1e2e"));
    /// ```
    pub fn builtin(theme: &str, variant: Variant) -> Result<Self, ThemeError> {
        let name = theme.to_ascii_lowercase();
        let table = builtin::table(&name, variant == Variant::Dark)
            .ok_or_else(|| ThemeError::UnknownTheme(theme.to_string()))?;
        Ok(Self::from_colors(table.iter().copied()))
    }

    /// Build a palette from `(role, value)` pairs. Later pairs win.
    pub fn from_colors<K, V>(colors: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            colors: colors
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// CSS value for a color role.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(String::as_str)
    }

    /// Whether the palette defines a color role.
    #[inline]
    pub fn contains(&self, role: &str) -> bool {
        self.colors.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over `(role, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the palette as a `:root` block of CSS custom properties,
    /// sorted by role name.
    ///
    /// # Example
    /// ```
    /// use glossmark::theme::Palette;
    ///
    /// let palette = Palette::from_colors([("red", "#f00"), ("blue", "#00f")]);
    /// assert_eq!(palette.to_css_variables(), ":root {\n  --blue: #00f;\n  --red: #f00;\n}\n");
    /// ```
    pub fn to_css_variables(&self) -> String {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_unstable_by_key(|&(role, _)| role);

        let mut css = String::with_capacity(16 + entries.len() * 24);
        css.push_str(":root {\n");
        for (role, value) in entries {
            css.push_str("  --");
            css.push_str(role);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push_str("}\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_themes_load_both_variants() {
        for theme in THEME_NAMES {
            for variant in [Variant::Light, Variant::Dark] {
                let palette = Palette::builtin(theme, variant).unwrap();
                assert!(palette.contains("red"), "{theme} {variant}");
                assert!(palette.contains("base"), "{theme} {variant}");
            }
        }
    }

    #[test]
    fn builtin_theme_name_is_case_insensitive() {
        assert!(Palette::builtin("Catppuccin", Variant::Light).is_ok());
    }

    #[test]
    fn light_and_dark_differ() {
        let light = Palette::builtin("catppuccin", Variant::Light).unwrap();
        let dark = Palette::builtin("catppuccin", Variant::Dark).unwrap();
        assert_eq!(light.get("base"), Some("#eff1f5"));
        assert_eq!(dark.get("base"), Some("#1e1e2e"));
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let err = Palette::builtin("solarized", Variant::Dark).unwrap_err();
        assert_eq!(err, ThemeError::UnknownTheme("solarized".into()));
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn variant_parsing() {
        assert_eq!("light".parse::<Variant>(), Ok(Variant::Light));
        assert_eq!("DARK".parse::<Variant>(), Ok(Variant::Dark));
        assert_eq!(
            "dim".parse::<Variant>(),
            Err(ThemeError::UnknownVariant("dim".into()))
        );
        assert_eq!(Variant::Light.to_string(), "light");
    }

    #[test]
    fn custom_palette_later_pairs_win() {
        let palette = Palette::from_colors([("accent", "#111"), ("accent", "#222")]);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get("accent"), Some("#222"));
        assert!(!palette.contains("red"));
    }
}
