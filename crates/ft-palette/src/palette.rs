//! The FT Origami color palette.
//!
//! Values mirror the public palette documented at
//! <https://origami.ft.com/foundations/colours/>. Entries come in two kinds:
//! raw palette colors (`--o3-color-palette-*`) and use-case tokens
//! (`--o3-color-use-case-*`) that give roles like "body text" a stable name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// One named palette entry.
///
/// `value` is usually a 24-bit hex triplet. One legacy use-case token
/// (`error-background`) carries an `rgba(...)` string; it is stored verbatim
/// and rejected by the color math layer if ever passed there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub css_variable: String,
    pub description: Option<String>,
    pub value: String,
}

/// Immutable registry of palette entries, keyed by semantic name.
///
/// Constructed once at startup via [`Palette::origami`] and injected into
/// renderers as a read-only dependency.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: BTreeMap<String, PaletteColor>,
}

impl Palette {
    /// Build the full FT Origami palette.
    #[must_use]
    pub fn origami() -> Self {
        let mut colors = BTreeMap::new();
        for color in origami_entries() {
            colors.insert(color.name.clone(), color);
        }
        Self { colors }
    }

    /// Return a palette entry by name.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownColor`] when the name is absent.
    pub fn lookup(&self, name: &str) -> Result<&PaletteColor> {
        self.colors
            .get(name)
            .ok_or_else(|| PaletteError::UnknownColor(name.to_string()))
    }

    /// Shorthand for `lookup(name).map(|c| c.value.clone())`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownColor`] when the name is absent.
    pub fn value(&self, name: &str) -> Result<String> {
        self.lookup(name).map(|color| color.value.clone())
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteColor> {
        self.colors.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn palette_entry(name: &str, value: &str) -> PaletteColor {
    PaletteColor {
        name: name.to_string(),
        css_variable: format!("--o3-color-palette-{name}"),
        description: None,
        value: value.to_string(),
    }
}

fn use_case_entry(name: &str, value: &str) -> PaletteColor {
    PaletteColor {
        name: name.to_string(),
        css_variable: format!("--o3-color-use-case-{name}"),
        description: None,
        value: value.to_string(),
    }
}

fn described(mut color: PaletteColor, description: &str) -> PaletteColor {
    color.description = Some(description.to_string());
    color
}

#[allow(clippy::too_many_lines)]
fn origami_entries() -> Vec<PaletteColor> {
    vec![
        described(
            palette_entry("ft-pink", "#fcd0b1"),
            "FT Pink is used for the FT logo",
        ),
        palette_entry("ft-grey", "#333333"),
        palette_entry("white", "#ffffff"),
        palette_entry("black", "#000000"),
        described(
            palette_entry("claret", "#990f3d"),
            "Claret is the main branding colour for MyFT related products. \
             It should be used sparingly and never be used as a background colour.",
        ),
        described(
            palette_entry("teal", "#0d7680"),
            "Teal is the most striking colour and main CTA colour on ft.com. \
             It is reserved for important action items that need to stand out.",
        ),
        described(
            palette_entry("oxford", "#0f5499"),
            "Oxford is used to denote opinion pieces (in combination with Sky). \
             Use for information and callouts in general.",
        ),
        described(
            palette_entry("slate", "#262a33"),
            "Slate is a warmer version of black. It is used as inverse \
             backgrounds for editorial content.",
        ),
        described(
            palette_entry("paper", "#fff1e5"),
            "Paper, as its name implies, is the FT's main background colour. \
             It is a lighter, more legible shade of FT Pink and can be seen as \
             a kind of replacement of white.",
        ),
        palette_entry("mandarin", "#ff8833"),
        palette_entry("light-blue", "#00a0dd"),
        palette_entry("crimson", "#cc0000"),
        palette_entry("graphics-dark-blue", "#006f9b"),
        palette_entry("wheat", "#f2dfce"),
        palette_entry("candy", "#ff7faa"),
        palette_entry("wasabi", "#96cc28"),
        palette_entry("jade", "#00994d"),
        palette_entry("velvet", "#593380"),
        palette_entry("lemon", "#ffec1a"),
        palette_entry("sky", "#cce6ff"),
        palette_entry("matisse-blue", "#355778"),
        use_case_entry("link-text", "#0d7680"),
        use_case_entry("link-text-hover", "#08474d"),
        use_case_entry("link-underline", "#cfd8d1"),
        use_case_entry("link-underline-hover", "#9ec0bd"),
        use_case_entry("link-inverse-text", "#ffffff"),
        use_case_entry("link-inverse-text-hover", "#d4d4d6"),
        use_case_entry("link-inverse-underline", "#ffffff"),
        use_case_entry("link-inverse-underline-hover", "#d4d4d6"),
        use_case_entry("page-background", "#fff1e5"),
        use_case_entry("page-inverse-background", "#262a33"),
        use_case_entry("body-text", "#33302e"),
        use_case_entry("body-inverse-text", "#ffffff"),
        use_case_entry("support-text", "#4d4845"),
        use_case_entry("support-inverse-text", "#e9eaeb"),
        described(
            use_case_entry("muted-text", "#807973"),
            "\"Muted\" text is less prominent, for example credits and captions.",
        ),
        described(
            use_case_entry("muted-inverse-text", "#a8aaad"),
            "\"Muted\" text is less prominent, for example credits and captions.",
        ),
        use_case_entry("heading-text", "#33302e"),
        use_case_entry("heading-inverse-text", "#ffffff"),
        use_case_entry("footer-text", "#33302e"),
        use_case_entry("caption-text", "#33302e"),
        use_case_entry("button-foreground", "#ffffff"),
        use_case_entry("button-foreground-disabled", "#fff7ef"),
        use_case_entry("button-default", "#0d7680"),
        use_case_entry("button-hover", "#0a5e66"),
        use_case_entry("button-pressed", "#052f33"),
        use_case_entry("button-disabled", "#9ec0bd"),
        use_case_entry("error-background", "rgba(204, 0, 0, 0.06)"),
        use_case_entry("error-text", "#cc0000"),
        described(
            use_case_entry("error", "#cc0000"),
            "[DEPRECATED] This token is going to be looked at in the upcoming audit.",
        ),
        use_case_entry("success-background", "#d7f0d1"),
        use_case_entry("success-foreground", "#00572c"),
        palette_entry("black-5", "#f2e5da"),
        palette_entry("black-10", "#e6d9ce"),
        palette_entry("black-20", "#ccc1b7"),
        palette_entry("black-30", "#b3a9a0"),
        palette_entry("black-40", "#999189"),
        palette_entry("black-50", "#807973"),
        palette_entry("black-60", "#66605c"),
        palette_entry("black-70", "#4d4845"),
        palette_entry("black-80", "#33302e"),
        palette_entry("black-90", "#1a1817"),
        palette_entry("white-10", "#fff2e8"),
        palette_entry("white-20", "#fff4ea"),
        palette_entry("white-40", "#fff7ef"),
        palette_entry("white-60", "#fff9f5"),
        palette_entry("white-80", "#fffcfa"),
        palette_entry("oxford-30", "#082a4d"),
        palette_entry("oxford-40", "#0a3866"),
        palette_entry("oxford-50", "#0d4680"),
        palette_entry("oxford-60", "#0f5499"),
        palette_entry("oxford-70", "#1262b3"),
        palette_entry("oxford-80", "#1470cc"),
        palette_entry("oxford-90", "#177ee6"),
        palette_entry("oxford-100", "#1a8cff"),
        palette_entry("teal-20", "#052f33"),
        palette_entry("teal-30", "#08474d"),
        palette_entry("teal-40", "#0a5e66"),
        palette_entry("teal-50", "#0d7680"),
        palette_entry("teal-60", "#0f8e99"),
        palette_entry("teal-70", "#12a5b3"),
        palette_entry("teal-80", "#14bdcc"),
        palette_entry("teal-90", "#17d4e6"),
        palette_entry("teal-100", "#1aecff"),
        palette_entry("claret-30", "#4d081f"),
        palette_entry("claret-40", "#660a29"),
        palette_entry("claret-50", "#800d33"),
        palette_entry("claret-60", "#990f3d"),
        palette_entry("claret-70", "#b31247"),
        palette_entry("claret-80", "#cc1452"),
        palette_entry("claret-90", "#e6175c"),
        palette_entry("claret-100", "#ff1a66"),
        palette_entry("wheat-100", "#ffebd9"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_color() {
        let palette = Palette::origami();
        let paper = palette.lookup("paper").unwrap();
        assert_eq!(paper.value, "#fff1e5");
        assert_eq!(paper.css_variable, "--o3-color-palette-paper");
    }

    #[test]
    fn lookup_use_case_token() {
        let palette = Palette::origami();
        let body = palette.lookup("body-text").unwrap();
        assert_eq!(body.value, "#33302e");
        assert_eq!(body.css_variable, "--o3-color-use-case-body-text");
    }

    #[test]
    fn lookup_unknown_color_fails() {
        let palette = Palette::origami();
        let error = palette.lookup("cerulean").unwrap_err();
        assert!(matches!(error, PaletteError::UnknownColor(name) if name == "cerulean"));
    }

    #[test]
    fn palette_has_expected_size() {
        let palette = Palette::origami();
        assert_eq!(palette.len(), 85);
    }

    #[test]
    fn names_are_unique() {
        // BTreeMap deduplicates; entry list and map must agree.
        assert_eq!(origami_entries().len(), Palette::origami().len());
    }

    #[test]
    fn error_background_keeps_rgba_value() {
        let palette = Palette::origami();
        assert_eq!(
            palette.value("error-background").unwrap(),
            "rgba(204, 0, 0, 0.06)"
        );
    }
}
