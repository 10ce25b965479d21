//! Theme definitions binding palette roles to concrete colors.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::palette::{Palette, PaletteColor};

/// A named set of role-to-color bindings for one theme variant.
///
/// All four references are resolved against the palette at construction time,
/// so a `ThemeDefinition` can only exist with valid colors. Definitions are
/// built once per process and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub slug: String,
    pub background: PaletteColor,
    pub body_text: PaletteColor,
    pub comment_text: PaletteColor,
    pub selection: PaletteColor,
}

impl ThemeDefinition {
    /// Human-facing name, e.g. "Financial Times Standard".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("Financial Times {}", self.title_slug())
    }

    /// The slug with its first letter upper-cased.
    #[must_use]
    pub fn title_slug(&self) -> String {
        let mut chars = self.slug.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    #[must_use]
    pub fn is_inverse(&self) -> bool {
        self.slug == "inverse"
    }
}

/// Theme with paper background, standard text, and muted comments.
///
/// # Errors
///
/// Fails if any referenced color is missing from the palette.
pub fn standard_theme(palette: &Palette) -> Result<ThemeDefinition> {
    Ok(ThemeDefinition {
        slug: "standard".to_string(),
        background: palette.lookup("paper")?.clone(),
        body_text: palette.lookup("body-text")?.clone(),
        comment_text: palette.lookup("muted-text")?.clone(),
        selection: palette.lookup("sky")?.clone(),
    })
}

/// Inverse variant using the matching FT inverse use cases.
///
/// # Errors
///
/// Fails if any referenced color is missing from the palette.
pub fn inverse_theme(palette: &Palette) -> Result<ThemeDefinition> {
    Ok(ThemeDefinition {
        slug: "inverse".to_string(),
        background: palette.lookup("slate")?.clone(),
        body_text: palette.lookup("paper")?.clone(),
        comment_text: palette.lookup("muted-inverse-text")?.clone(),
        selection: palette.lookup("jade")?.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_theme_resolves() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        assert_eq!(theme.slug, "standard");
        assert_eq!(theme.background.value, "#fff1e5");
        assert_eq!(theme.body_text.value, "#33302e");
        assert_eq!(theme.comment_text.value, "#807973");
        assert_eq!(theme.selection.value, "#cce6ff");
        assert!(!theme.is_inverse());
    }

    #[test]
    fn inverse_theme_resolves() {
        let palette = Palette::origami();
        let theme = inverse_theme(&palette).unwrap();
        assert_eq!(theme.slug, "inverse");
        assert_eq!(theme.background.value, "#262a33");
        assert_eq!(theme.body_text.value, "#fff1e5");
        assert_eq!(theme.comment_text.value, "#a8aaad");
        assert_eq!(theme.selection.value, "#00994d");
        assert!(theme.is_inverse());
    }

    #[test]
    fn display_name_title_cases_slug() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        assert_eq!(theme.display_name(), "Financial Times Standard");
    }
}
