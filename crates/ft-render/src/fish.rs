//! fish shell theme renderer.
//!
//! Emits `fish_color_*` / `fish_pager_color_*` universal-variable
//! assignments, one per line, in fish's canonical key order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ft_palette::{Palette, ThemeDefinition};

use crate::common::write_lines;

const INLINE_KEYS: [&str; 13] = [
    "fish_color_normal",
    "fish_color_command",
    "fish_color_keyword",
    "fish_color_quote",
    "fish_color_redirection",
    "fish_color_end",
    "fish_color_error",
    "fish_color_param",
    "fish_color_comment",
    "fish_color_selection",
    "fish_color_operator",
    "fish_color_escape",
    "fish_color_autosuggestion",
];

const PAGER_KEYS: [&str; 13] = [
    "fish_pager_color_progress",
    "fish_pager_color_background",
    "fish_pager_color_prefix",
    "fish_pager_color_completion",
    "fish_pager_color_description",
    "fish_pager_color_selected_background",
    "fish_pager_color_selected_prefix",
    "fish_pager_color_selected_completion",
    "fish_pager_color_selected_description",
    "fish_pager_color_secondary_background",
    "fish_pager_color_secondary_prefix",
    "fish_pager_color_secondary_completion",
    "fish_pager_color_secondary_description",
];

fn selection_background(theme: &ThemeDefinition, palette: &Palette) -> Result<String> {
    let name = match theme.slug.as_str() {
        "standard" => "oxford-40",
        "inverse" => "jade",
        _ => "sky",
    };
    Ok(palette.value(name)?)
}

/// Compose fish color assignments for the theme.
///
/// # Errors
///
/// Fails on a palette miss.
pub fn build_assignment_lines(theme: &ThemeDefinition, palette: &Palette) -> Result<Vec<String>> {
    let fg = theme.body_text.value.clone();
    let comment = theme.comment_text.value.clone();
    let selection_bg = selection_background(theme, palette)?;

    let value_for = |key: &str| -> Result<String> {
        Ok(match key {
            "fish_color_normal"
            | "fish_color_param"
            | "fish_color_operator"
            | "fish_pager_color_prefix"
            | "fish_pager_color_selected_prefix"
            | "fish_pager_color_selected_completion"
            | "fish_pager_color_selected_description"
            | "fish_pager_color_secondary_prefix"
            | "fish_pager_color_secondary_completion" => fg.clone(),
            "fish_color_command" => palette.value("teal")?,
            "fish_color_keyword" | "fish_color_redirection" => palette.value("oxford")?,
            "fish_color_quote" | "fish_pager_color_progress" => palette.value("mandarin")?,
            "fish_color_end" | "fish_color_escape" => palette.value("jade")?,
            "fish_color_error" => palette.value("claret")?,
            "fish_color_comment"
            | "fish_pager_color_description"
            | "fish_pager_color_secondary_description" => comment.clone(),
            "fish_color_selection" | "fish_pager_color_selected_background" => {
                format!("--background={selection_bg}")
            }
            "fish_color_autosuggestion" | "fish_pager_color_completion" => {
                palette.value("support-text")?
            }
            // backgrounds left unset inherit the terminal background
            _ => String::new(),
        })
    };

    let mut lines = Vec::with_capacity(INLINE_KEYS.len() + PAGER_KEYS.len() + 1);
    for key in INLINE_KEYS {
        let value = value_for(key)?;
        lines.push(format!("{key} {value}").trim_end().to_string());
    }
    lines.push("\n# Completion Pager Colors".to_string());
    for key in PAGER_KEYS {
        let value = value_for(key)?;
        lines.push(format!("{key} {value}").trim_end().to_string());
    }
    Ok(lines)
}

/// Return the header and assignment lines for the fish theme.
///
/// # Errors
///
/// Fails on a palette miss.
pub fn build_theme_lines(theme: &ThemeDefinition, palette: &Palette) -> Result<Vec<String>> {
    let mut lines = vec![
        format!("# {} fish theme", theme.display_name()),
        "# Source this file to apply the colors globally (universal vars).".to_string(),
    ];
    lines.extend(build_assignment_lines(theme, palette)?);
    Ok(lines)
}

/// File name for a theme's fish color file.
#[must_use]
pub fn file_name(theme: &ThemeDefinition) -> String {
    format!("financial-times-{}.theme", theme.slug)
}

/// Write the fish theme file and return its path.
///
/// # Errors
///
/// Fails on palette misses or IO errors.
pub fn write_theme(
    theme: &ThemeDefinition,
    palette: &Palette,
    out_dir: &Path,
) -> Result<PathBuf> {
    let lines = build_theme_lines(theme, palette)
        .with_context(|| format!("build fish theme for {}", theme.slug))?;
    write_lines(out_dir, &file_name(theme), &lines)
}

#[cfg(test)]
mod tests {
    use ft_palette::{inverse_theme, standard_theme};

    use super::*;

    #[test]
    fn standard_selection_uses_dark_oxford() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let lines = build_assignment_lines(&theme, &palette).unwrap();
        assert!(lines.contains(&"fish_color_selection --background=#0a3866".to_string()));
    }

    #[test]
    fn inverse_selection_uses_jade() {
        let palette = Palette::origami();
        let theme = inverse_theme(&palette).unwrap();
        let lines = build_assignment_lines(&theme, &palette).unwrap();
        assert!(lines.contains(&"fish_color_selection --background=#00994d".to_string()));
    }

    #[test]
    fn unset_backgrounds_have_no_trailing_space() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let lines = build_assignment_lines(&theme, &palette).unwrap();
        assert!(lines.contains(&"fish_pager_color_background".to_string()));
        assert!(lines.contains(&"fish_pager_color_secondary_background".to_string()));
    }

    #[test]
    fn keys_appear_in_canonical_order() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let lines = build_theme_lines(&theme, &palette).unwrap();
        assert_eq!(lines[2], "fish_color_normal #33302e");
        assert_eq!(lines[3], "fish_color_command #0d7680");
        // pager section is preceded by its comment header
        let header_index = lines
            .iter()
            .position(|line| line.ends_with("# Completion Pager Colors"))
            .unwrap();
        assert_eq!(lines[header_index + 1], "fish_pager_color_progress #ff8833");
    }
}
