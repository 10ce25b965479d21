//! tmux theme renderer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ft_palette::{Palette, ThemeDefinition};

use crate::common::write_lines;

/// Compose the tmux config lines for a given theme.
///
/// # Errors
///
/// Fails on a palette miss.
pub fn build_theme_lines(theme: &ThemeDefinition, palette: &Palette) -> Result<Vec<String>> {
    let background = &theme.background.value;
    let foreground = &theme.body_text.value;
    let selection = &theme.selection.value;
    let comment = &theme.comment_text.value;

    // Use a subtler, muted color for the status bar
    let status_bg = if theme.slug == "standard" {
        palette.value("black-10")?
    } else {
        palette.value("black-90")?
    };

    // Accent color for active elements
    let accent = palette.value("teal")?;

    Ok(vec![
        format!("# {} (tmux)", theme.display_name()),
        "#".to_string(),
        "# Usage: Add to your ~/.tmux.conf or source this file:".to_string(),
        format!(
            "#   source-file ~/.config/tmux/financial-times-{}.conf",
            theme.slug
        ),
        String::new(),
        "# Status bar".to_string(),
        format!("set -g status-style 'bg={status_bg},fg={foreground}'"),
        format!("set -g status-left-style 'bg={status_bg},fg={foreground}'"),
        format!("set -g status-right-style 'bg={status_bg},fg={foreground}'"),
        String::new(),
        "# Window status".to_string(),
        format!("set -g window-status-style 'bg={status_bg},fg={comment}'"),
        format!("set -g window-status-current-style 'bg={status_bg},fg={foreground},bold'"),
        format!("set -g window-status-activity-style 'bg={status_bg},fg={accent}'"),
        format!("set -g window-status-bell-style 'bg={status_bg},fg={accent}'"),
        String::new(),
        "# Pane borders".to_string(),
        format!("set -g pane-border-style 'fg={comment}'"),
        format!("set -g pane-active-border-style 'fg={accent}'"),
        String::new(),
        "# Message styling".to_string(),
        format!("set -g message-style 'bg={selection},fg={foreground}'"),
        format!("set -g message-command-style 'bg={selection},fg={foreground}'"),
        String::new(),
        "# Mode styling (copy mode, etc.)".to_string(),
        format!("set -g mode-style 'bg={selection},fg={foreground}'"),
        String::new(),
        "# Clock mode".to_string(),
        format!("set -g clock-mode-colour '{accent}'"),
        String::new(),
        "# Copy mode match highlighting".to_string(),
        format!("set -g copy-mode-match-style 'bg={selection},fg={foreground}'"),
        format!("set -g copy-mode-current-match-style 'bg={accent},fg={background}'"),
    ])
}

/// File name for a theme's tmux config.
#[must_use]
pub fn file_name(theme: &ThemeDefinition) -> String {
    format!("financial-times-{}.conf", theme.slug)
}

/// Write a tmux theme file and return its path.
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
        .with_context(|| format!("build tmux theme for {}", theme.slug))?;
    write_lines(out_dir, &file_name(theme), &lines)
}
