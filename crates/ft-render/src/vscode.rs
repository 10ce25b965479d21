//! VS Code theme renderer.
//!
//! Emits one color-theme JSON per variant plus the extension `package.json`
//! manifest listing them. Documents are explicit typed structures so the
//! serialized key order and field set never drift.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use ft_palette::{Palette, ThemeDefinition};

use crate::common::write_json;

const SCHEMA: &str = "vscode://schemas/color-theme";

#[derive(Debug, Serialize)]
pub struct VsCodeTheme {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: WorkbenchColors,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
}

/// Workbench color assignments, in the order VS Code documents them.
#[derive(Debug, Serialize)]
pub struct WorkbenchColors {
    #[serde(rename = "editor.background")]
    pub editor_background: String,
    #[serde(rename = "editor.foreground")]
    pub editor_foreground: String,
    #[serde(rename = "editor.selectionBackground")]
    pub editor_selection_background: String,
    #[serde(rename = "editor.selectionHighlightBackground")]
    pub editor_selection_highlight_background: String,
    #[serde(rename = "editor.inactiveSelectionBackground")]
    pub editor_inactive_selection_background: String,
    #[serde(rename = "editor.selectionForeground")]
    pub editor_selection_foreground: String,
    #[serde(rename = "editorGutter.commentRangeForeground")]
    pub editor_gutter_comment_range_foreground: String,
    #[serde(rename = "sideBar.background")]
    pub side_bar_background: String,
    #[serde(rename = "sideBar.foreground")]
    pub side_bar_foreground: String,
    #[serde(rename = "statusBar.background")]
    pub status_bar_background: String,
    #[serde(rename = "statusBar.foreground")]
    pub status_bar_foreground: String,
    #[serde(rename = "statusBar.noFolderBackground")]
    pub status_bar_no_folder_background: String,
    #[serde(rename = "statusBar.noFolderForeground")]
    pub status_bar_no_folder_foreground: String,
    #[serde(rename = "activityBar.background")]
    pub activity_bar_background: String,
    #[serde(rename = "activityBar.foreground")]
    pub activity_bar_foreground: String,
    #[serde(rename = "editorLineNumber.foreground")]
    pub editor_line_number_foreground: String,
    #[serde(rename = "editorLineNumber.activeForeground")]
    pub editor_line_number_active_foreground: String,
}

#[derive(Debug, Serialize)]
pub struct TokenColor {
    pub name: String,
    pub scope: Vec<String>,
    pub settings: TokenSettings,
}

#[derive(Debug, Serialize)]
pub struct TokenSettings {
    pub foreground: String,
}

/// Extension manifest (`package.json`).
#[derive(Debug, Serialize)]
pub struct ExtensionManifest {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub description: String,
    pub version: String,
    pub publisher: String,
    pub engines: Engines,
    pub license: String,
    pub categories: Vec<String>,
    pub contributes: Contributes,
}

#[derive(Debug, Serialize)]
pub struct Engines {
    pub vscode: String,
}

#[derive(Debug, Serialize)]
pub struct Contributes {
    pub themes: Vec<ThemeContribution>,
}

#[derive(Debug, Serialize)]
pub struct ThemeContribution {
    pub label: String,
    #[serde(rename = "uiTheme")]
    pub ui_theme: String,
    pub path: String,
}

/// Return the VS Code theme JSON payload for a given theme.
///
/// # Errors
///
/// Fails on a palette miss.
pub fn build_theme_payload(theme: &ThemeDefinition, palette: &Palette) -> Result<VsCodeTheme> {
    let background = theme.background.value.clone();
    let foreground = theme.body_text.value.clone();
    let selection = theme.selection.value.clone();
    let comment = theme.comment_text.value.clone();

    // Use a subtler, muted color for the status bar to reduce visual
    // prominence on the light variant
    let status_bar_bg = if theme.slug == "standard" {
        palette.value("black-10")?
    } else {
        background.clone()
    };

    let colors = WorkbenchColors {
        editor_background: background.clone(),
        editor_foreground: foreground.clone(),
        editor_selection_background: selection.clone(),
        editor_selection_highlight_background: selection.clone(),
        editor_inactive_selection_background: selection,
        editor_selection_foreground: foreground.clone(),
        editor_gutter_comment_range_foreground: comment.clone(),
        side_bar_background: background.clone(),
        side_bar_foreground: foreground.clone(),
        status_bar_background: status_bar_bg.clone(),
        status_bar_foreground: foreground.clone(),
        status_bar_no_folder_background: status_bar_bg,
        status_bar_no_folder_foreground: foreground.clone(),
        activity_bar_background: background,
        activity_bar_foreground: foreground.clone(),
        editor_line_number_foreground: comment.clone(),
        editor_line_number_active_foreground: foreground.clone(),
    };

    let token_colors = vec![
        TokenColor {
            name: "Comments".to_string(),
            scope: vec![
                "comment".to_string(),
                "punctuation.definition.comment".to_string(),
            ],
            settings: TokenSettings { foreground: comment },
        },
        TokenColor {
            name: "Keywords".to_string(),
            scope: vec!["keyword".to_string()],
            settings: TokenSettings { foreground },
        },
    ];

    Ok(VsCodeTheme {
        schema: SCHEMA.to_string(),
        name: theme.display_name(),
        kind: if theme.is_inverse() { "dark" } else { "light" }.to_string(),
        colors,
        token_colors,
    })
}

/// Emit the extension manifest pointing at the given theme files.
#[must_use]
pub fn build_manifest(theme_entries: &[(ThemeDefinition, PathBuf)]) -> ExtensionManifest {
    let themes = theme_entries
        .iter()
        .map(|(theme, path)| {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            ThemeContribution {
                label: theme.display_name(),
                ui_theme: if theme.is_inverse() { "vs-dark" } else { "vs" }.to_string(),
                path: format!("./{file_name}"),
            }
        })
        .collect();

    ExtensionManifest {
        name: "financial-times-theme".to_string(),
        display_name: "Financial Times Theme".to_string(),
        description: "FT paper-inspired light and inverse VSCode themes derived from the \
                      Origami palette."
            .to_string(),
        version: "0.1.0".to_string(),
        publisher: "meriksen".to_string(),
        engines: Engines {
            vscode: ">=1.85.0".to_string(),
        },
        license: "SEE LICENSE IN LICENSE".to_string(),
        categories: vec!["Themes".to_string()],
        contributes: Contributes { themes },
    }
}

/// File name for a theme's color-theme JSON.
#[must_use]
pub fn file_name(theme: &ThemeDefinition) -> String {
    format!("ft-{}.json", theme.slug)
}

/// File name of the extension manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Write a VS Code theme JSON file and return its path.
///
/// # Errors
///
/// Fails on palette misses or IO errors.
pub fn write_theme(
    theme: &ThemeDefinition,
    palette: &Palette,
    out_dir: &Path,
) -> Result<PathBuf> {
    let payload = build_theme_payload(theme, palette)
        .with_context(|| format!("build vscode theme for {}", theme.slug))?;
    write_json(out_dir, &file_name(theme), &payload)
}

/// Write the extension manifest and return its path.
///
/// # Errors
///
/// Fails on IO errors.
pub fn write_manifest(
    theme_entries: &[(ThemeDefinition, PathBuf)],
    out_dir: &Path,
) -> Result<PathBuf> {
    let manifest = build_manifest(theme_entries);
    write_json(out_dir, MANIFEST_FILE_NAME, &manifest)
}

#[cfg(test)]
mod tests {
    use ft_palette::{inverse_theme, standard_theme};

    use super::*;

    #[test]
    fn standard_theme_is_light_with_muted_status_bar() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let payload = build_theme_payload(&theme, &palette).unwrap();
        assert_eq!(payload.kind, "light");
        assert_eq!(payload.colors.status_bar_background, "#e6d9ce");
        assert_eq!(payload.colors.editor_background, "#fff1e5");
    }

    #[test]
    fn inverse_theme_is_dark_and_reuses_background() {
        let palette = Palette::origami();
        let theme = inverse_theme(&palette).unwrap();
        let payload = build_theme_payload(&theme, &palette).unwrap();
        assert_eq!(payload.kind, "dark");
        assert_eq!(payload.colors.status_bar_background, "#262a33");
    }

    #[test]
    fn serialized_theme_preserves_key_order() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let payload = build_theme_payload(&theme, &palette).unwrap();
        let json = serde_json::to_string_pretty(&payload).unwrap();
        let schema_pos = json.find("$schema").unwrap();
        let colors_pos = json.find("\"colors\"").unwrap();
        let tokens_pos = json.find("tokenColors").unwrap();
        assert!(schema_pos < colors_pos && colors_pos < tokens_pos);
        assert!(json.find("editor.background").unwrap() < json.find("sideBar.background").unwrap());
    }

    #[test]
    fn manifest_lists_both_variants() {
        let palette = Palette::origami();
        let entries = vec![
            (
                standard_theme(&palette).unwrap(),
                PathBuf::from("ft-standard.json"),
            ),
            (
                inverse_theme(&palette).unwrap(),
                PathBuf::from("ft-inverse.json"),
            ),
        ];
        let manifest = build_manifest(&entries);
        assert_eq!(manifest.contributes.themes.len(), 2);
        assert_eq!(manifest.contributes.themes[0].ui_theme, "vs");
        assert_eq!(manifest.contributes.themes[0].path, "./ft-standard.json");
        assert_eq!(manifest.contributes.themes[1].ui_theme, "vs-dark");
    }
}
