//! Ghostty terminal theme renderer.
//!
//! Emits a plain key-value config: a 16-entry ANSI palette followed by
//! background/foreground/cursor/selection settings. Palette entries are
//! contrast-repaired against the theme background, and on dark backgrounds
//! the green/red pair is additionally checked for colorblind-safe luminance
//! separation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use ft_color::{ensure_colorblind_separation, ensure_contrast};
use ft_palette::{Palette, ThemeDefinition};

use crate::common::{MIN_CONTRAST_RATIO, MIN_LUMINANCE_RATIO, trim_hash, write_lines};

/// Palette names backing ANSI slots 0-15.
pub const ANSI_PALETTE_NAMES: [&str; 16] = [
    "slate",
    "claret",
    "jade",
    "mandarin",
    "oxford",
    "velvet",
    "teal",
    "paper",
    "support-text",
    "crimson",
    "wasabi",
    "lemon",
    "light-blue",
    "candy",
    "teal-80",
    "white",
];

const ANSI_RED: usize = 1;
const ANSI_GREEN: usize = 2;

/// Map the configured palette names to hex values with contrast fixes.
///
/// # Errors
///
/// Fails on a palette miss or a malformed palette value.
pub fn build_palette_values(theme: &ThemeDefinition, palette: &Palette) -> Result<Vec<String>> {
    let background = &theme.background.value;
    let fallback = &theme.body_text.value;
    let mut values = Vec::with_capacity(ANSI_PALETTE_NAMES.len());
    for name in ANSI_PALETTE_NAMES {
        let color = palette.value(name)?;
        let fixed = ensure_contrast(&color, background, fallback, MIN_CONTRAST_RATIO)?;
        if fixed != color {
            debug!(slot = name, original = %color, repaired = %fixed, "contrast repair");
        }
        values.push(fixed);
    }
    // The emitted green must stay distinguishable from the emitted red for
    // red-green colorblind readers; no-op on light backgrounds.
    let separated = ensure_colorblind_separation(
        &values[ANSI_GREEN],
        &values[ANSI_RED],
        background,
        fallback,
        MIN_LUMINANCE_RATIO,
        MIN_CONTRAST_RATIO,
    )?;
    if separated != values[ANSI_GREEN] {
        debug!(original = %values[ANSI_GREEN], adjusted = %separated, "colorblind separation");
        values[ANSI_GREEN] = separated;
    }
    Ok(values)
}

/// Compose the Ghostty config lines for a given theme.
#[must_use]
pub fn build_theme_lines(theme: &ThemeDefinition, palette_values: &[String]) -> Vec<String> {
    let mut lines = vec![format!("# {} (Ghostty)", theme.display_name())];
    for (index, value) in palette_values.iter().enumerate() {
        lines.push(format!("palette = {index}=#{}", trim_hash(value)));
    }

    let background = trim_hash(&theme.background.value);
    let foreground = trim_hash(&theme.body_text.value);
    let selection_bg = trim_hash(&theme.selection.value);
    let comment = trim_hash(&theme.comment_text.value);

    lines.extend([
        format!("background = {background}"),
        format!("foreground = {foreground}"),
        format!("cursor-color = {foreground}"),
        format!("cursor-text = {background}"),
        format!("selection-background = {selection_bg}"),
        format!("selection-foreground = {foreground}"),
        format!("split-divider-color = {comment}"),
    ]);
    lines
}

/// File name for a theme's Ghostty config.
#[must_use]
pub fn file_name(theme: &ThemeDefinition) -> String {
    format!("financial-times-{}", theme.slug)
}

/// Write a Ghostty theme file and return its path.
///
/// # Errors
///
/// Fails on palette misses or IO errors.
pub fn write_theme(
    theme: &ThemeDefinition,
    palette: &Palette,
    out_dir: &Path,
) -> Result<PathBuf> {
    let values = build_palette_values(theme, palette)
        .with_context(|| format!("build ghostty palette for {}", theme.slug))?;
    let lines = build_theme_lines(theme, &values);
    write_lines(out_dir, &file_name(theme), &lines)
}

#[cfg(test)]
mod tests {
    use ft_color::contrast_ratio;
    use ft_palette::{inverse_theme, standard_theme};

    use super::*;

    #[test]
    fn repaired_palette_meets_contrast_or_fallback() {
        let palette = Palette::origami();
        for theme in [
            standard_theme(&palette).unwrap(),
            inverse_theme(&palette).unwrap(),
        ] {
            let values = build_palette_values(&theme, &palette).unwrap();
            assert_eq!(values.len(), 16);
            for value in &values {
                let ratio = contrast_ratio(value, &theme.background.value).unwrap();
                assert!(
                    ratio >= MIN_CONTRAST_RATIO || value == &theme.body_text.value,
                    "{value} fails contrast against {}: {ratio}",
                    theme.background.value
                );
            }
        }
    }

    #[test]
    fn light_theme_darkens_bright_slots() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let values = build_palette_values(&theme, &palette).unwrap();
        // lemon on paper is hopeless without repair; the sweep darkens it
        assert_eq!(values[11], "#706828");
        // slate already passes and is kept verbatim
        assert_eq!(values[0], "#262a33");
    }

    #[test]
    fn dark_theme_separates_green_from_red() {
        let palette = Palette::origami();
        let theme = inverse_theme(&palette).unwrap();
        let values = build_palette_values(&theme, &palette).unwrap();
        // repaired claret and jade end up with near-equal luminance, so the
        // colorblind pass lightens the green further
        assert_eq!(values[ANSI_RED], "#cc8091");
        assert_eq!(values[ANSI_GREEN], "#b3d7b8");
    }

    #[test]
    fn theme_lines_carry_roles_after_palette() {
        let palette = Palette::origami();
        let theme = inverse_theme(&palette).unwrap();
        let values = build_palette_values(&theme, &palette).unwrap();
        let lines = build_theme_lines(&theme, &values);
        assert_eq!(lines[0], "# Financial Times Inverse (Ghostty)");
        assert_eq!(lines[1], "palette = 0=#9d9795");
        assert!(lines.contains(&"background = 262a33".to_string()));
        assert!(lines.contains(&"selection-background = 00994d".to_string()));
        assert!(lines.contains(&"split-divider-color = a8aaad".to_string()));
    }
}
