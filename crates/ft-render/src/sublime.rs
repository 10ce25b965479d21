//! Sublime Text color scheme renderer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use ft_palette::{Palette, ThemeDefinition};

use crate::common::write_json;

#[derive(Debug, Serialize)]
pub struct SublimeColorScheme {
    pub name: String,
    pub author: String,
    pub variables: Variables,
    pub globals: Globals,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Serialize)]
pub struct Variables {
    pub background: String,
    pub foreground: String,
    pub selection: String,
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct Globals {
    pub background: String,
    pub foreground: String,
    pub caret: String,
    pub block_caret: String,
    pub line_highlight: String,
    pub selection: String,
    pub selection_border: String,
    pub inactive_selection: String,
    pub misspelling: String,
    pub shadow: String,
    pub active_guide: String,
    pub stack_guide: String,
    pub guide: String,
    pub find_highlight: String,
    pub find_highlight_foreground: String,
    pub brackets_foreground: String,
    pub brackets_options: String,
    pub bracket_contents_foreground: String,
    pub bracket_contents_options: String,
    pub tags_foreground: String,
    pub tags_options: String,
    pub gutter: String,
    pub gutter_foreground: String,
    pub gutter_foreground_highlight: String,
    pub line_diff_added: String,
    pub line_diff_modified: String,
    pub line_diff_deleted: String,
    pub accent: String,
    pub popup_css: String,
}

#[derive(Debug, Serialize)]
pub struct Rule {
    pub name: String,
    pub scope: String,
    pub foreground: String,
}

/// Return the Sublime Text color scheme payload for a given theme.
///
/// # Errors
///
/// Fails on a palette miss.
pub fn build_color_scheme(
    theme: &ThemeDefinition,
    palette: &Palette,
) -> Result<SublimeColorScheme> {
    let background = theme.background.value.clone();
    let foreground = theme.body_text.value.clone();
    let selection = theme.selection.value.clone();
    let comment = theme.comment_text.value.clone();

    // Colors for git diff indicators
    let jade = palette.value("jade")?;
    let oxford = palette.value("oxford")?;
    let claret = palette.value("claret")?;
    let teal = palette.value("teal")?;

    let (line_highlight, gutter_fg, find_highlight, guide_color) = if theme.is_inverse() {
        (
            palette.value("black-80")?,
            palette.value("muted-inverse-text")?,
            palette.value("oxford-40")?,
            palette.value("black-70")?,
        )
    } else {
        (
            palette.value("wheat")?,
            comment.clone(),
            palette.value("sky")?,
            palette.value("black-20")?,
        )
    };

    Ok(SublimeColorScheme {
        name: theme.display_name(),
        author: "FT Theme Generator".to_string(),
        variables: Variables {
            background: background.clone(),
            foreground: foreground.clone(),
            selection,
            comment,
        },
        globals: Globals {
            background: "var(background)".to_string(),
            foreground: "var(foreground)".to_string(),
            caret: "var(foreground)".to_string(),
            block_caret: "var(foreground)".to_string(),
            line_highlight,
            selection: "var(selection)".to_string(),
            selection_border: "var(selection)".to_string(),
            inactive_selection: "var(selection)".to_string(),
            misspelling: claret.clone(),
            shadow: background.clone(),
            active_guide: teal.clone(),
            stack_guide: guide_color.clone(),
            guide: guide_color,
            find_highlight,
            find_highlight_foreground: foreground.clone(),
            brackets_foreground: "var(foreground)".to_string(),
            brackets_options: "underline".to_string(),
            bracket_contents_foreground: "var(foreground)".to_string(),
            bracket_contents_options: "underline".to_string(),
            tags_foreground: "var(foreground)".to_string(),
            tags_options: "stippled_underline".to_string(),
            gutter: "var(background)".to_string(),
            gutter_foreground: gutter_fg,
            gutter_foreground_highlight: "var(foreground)".to_string(),
            line_diff_added: jade,
            line_diff_modified: oxford,
            line_diff_deleted: claret,
            accent: teal,
            popup_css: format!(
                "html {{ background-color: {background}; color: {foreground}; }}"
            ),
        },
        rules: vec![Rule {
            name: "Comment".to_string(),
            scope: "comment, punctuation.definition.comment".to_string(),
            foreground: "var(comment)".to_string(),
        }],
    })
}

/// File name for a theme's color scheme, e.g.
/// `Financial Times Standard.sublime-color-scheme`.
#[must_use]
pub fn file_name(theme: &ThemeDefinition) -> String {
    format!("{}.sublime-color-scheme", theme.display_name())
}

/// Write a Sublime Text color scheme file and return its path.
///
/// # Errors
///
/// Fails on palette misses or IO errors.
pub fn write_color_scheme(
    theme: &ThemeDefinition,
    palette: &Palette,
    out_dir: &Path,
) -> Result<PathBuf> {
    let payload = build_color_scheme(theme, palette)
        .with_context(|| format!("build sublime scheme for {}", theme.slug))?;
    write_json(out_dir, &file_name(theme), &payload)
}

#[cfg(test)]
mod tests {
    use ft_palette::{inverse_theme, standard_theme};

    use super::*;

    #[test]
    fn standard_scheme_uses_wheat_line_highlight() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let scheme = build_color_scheme(&theme, &palette).unwrap();
        assert_eq!(scheme.globals.line_highlight, "#f2dfce");
        assert_eq!(scheme.globals.gutter_foreground, "#807973");
        assert_eq!(scheme.globals.find_highlight, "#cce6ff");
        assert_eq!(scheme.globals.guide, "#ccc1b7");
    }

    #[test]
    fn inverse_scheme_uses_dark_chrome() {
        let palette = Palette::origami();
        let theme = inverse_theme(&palette).unwrap();
        let scheme = build_color_scheme(&theme, &palette).unwrap();
        assert_eq!(scheme.globals.line_highlight, "#33302e");
        assert_eq!(scheme.globals.gutter_foreground, "#a8aaad");
        assert_eq!(scheme.globals.find_highlight, "#0a3866");
        assert_eq!(scheme.globals.guide, "#4d4845");
    }

    #[test]
    fn popup_css_inlines_theme_colors() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let scheme = build_color_scheme(&theme, &palette).unwrap();
        assert_eq!(
            scheme.globals.popup_css,
            "html { background-color: #fff1e5; color: #33302e; }"
        );
    }

    #[test]
    fn single_comment_rule() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let scheme = build_color_scheme(&theme, &palette).unwrap();
        assert_eq!(scheme.rules.len(), 1);
        assert_eq!(scheme.rules[0].foreground, "var(comment)");
    }
}
