//! Theme generation pipeline with explicit stages.
//!
//! 1. **Registry**: build the immutable palette and theme definitions
//! 2. **Render**: run each selected target renderer per theme
//! 3. **Write**: emit files under `<out>/<target>/` (skipped on dry runs)
//!
//! Renderers are independent and uncoordinated; the only shared resource is
//! the read-only palette.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use ft_palette::{Palette, ThemeDefinition, inverse_theme, standard_theme};
use ft_render::{fish, ghostty, sublime, tmux, vscode, zed};

/// One supported output tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Ghostty,
    Tmux,
    Fish,
    Vscode,
    Zed,
    Sublime,
}

impl Target {
    /// Every supported target, in summary order.
    pub const ALL: [Self; 6] = [
        Self::Ghostty,
        Self::Tmux,
        Self::Fish,
        Self::Vscode,
        Self::Zed,
        Self::Sublime,
    ];

    /// Stable lowercase name, also the output subdirectory.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ghostty => "ghostty",
            Self::Tmux => "tmux",
            Self::Fish => "fish",
            Self::Vscode => "vscode",
            Self::Zed => "zed",
            Self::Sublime => "sublime",
        }
    }
}

/// The immutable inputs shared by every renderer.
#[derive(Debug)]
pub struct Registry {
    pub palette: Palette,
    pub themes: Vec<ThemeDefinition>,
}

/// Build the palette registry and the requested theme definitions.
///
/// # Errors
///
/// Fails if a theme constructor references a missing palette entry.
pub fn build_registry(slugs: &[&str]) -> ft_palette::Result<Registry> {
    let palette = Palette::origami();
    let mut themes = Vec::with_capacity(slugs.len());
    for slug in slugs {
        let theme = match *slug {
            "inverse" => inverse_theme(&palette)?,
            _ => standard_theme(&palette)?,
        };
        themes.push(theme);
    }
    Ok(Registry { palette, themes })
}

/// Render one target for all themes and return the written (or planned)
/// paths.
///
/// With `dry_run` the payloads are still built, so palette misses and
/// malformed colors surface, but nothing touches the filesystem.
///
/// # Errors
///
/// Fails on palette misses, malformed colors, or IO errors.
pub fn render_target(
    target: Target,
    registry: &Registry,
    out_root: &Path,
    dry_run: bool,
) -> Result<Vec<PathBuf>> {
    let out_dir = out_root.join(target.name());
    let palette = &registry.palette;
    let themes = &registry.themes;
    let mut paths = Vec::new();

    match target {
        Target::Ghostty => {
            for theme in themes {
                if dry_run {
                    ghostty::build_palette_values(theme, palette)?;
                    paths.push(out_dir.join(ghostty::file_name(theme)));
                } else {
                    paths.push(ghostty::write_theme(theme, palette, &out_dir)?);
                }
            }
        }
        Target::Tmux => {
            for theme in themes {
                if dry_run {
                    tmux::build_theme_lines(theme, palette)?;
                    paths.push(out_dir.join(tmux::file_name(theme)));
                } else {
                    paths.push(tmux::write_theme(theme, palette, &out_dir)?);
                }
            }
        }
        Target::Fish => {
            for theme in themes {
                if dry_run {
                    fish::build_theme_lines(theme, palette)?;
                    paths.push(out_dir.join(fish::file_name(theme)));
                } else {
                    paths.push(fish::write_theme(theme, palette, &out_dir)?);
                }
            }
        }
        Target::Vscode => {
            let mut entries = Vec::with_capacity(themes.len());
            for theme in themes {
                let path = if dry_run {
                    vscode::build_theme_payload(theme, palette)?;
                    out_dir.join(vscode::file_name(theme))
                } else {
                    vscode::write_theme(theme, palette, &out_dir)?
                };
                paths.push(path.clone());
                entries.push((theme.clone(), path));
            }
            if dry_run {
                paths.push(out_dir.join(vscode::MANIFEST_FILE_NAME));
            } else {
                paths.push(vscode::write_manifest(&entries, &out_dir)?);
            }
        }
        Target::Zed => {
            if dry_run {
                zed::build_family(themes, palette)?;
                paths.push(out_dir.join(zed::FAMILY_FILE_NAME));
            } else {
                paths.push(zed::write_family(themes, palette, &out_dir)?);
            }
        }
        Target::Sublime => {
            for theme in themes {
                if dry_run {
                    sublime::build_color_scheme(theme, palette)?;
                    paths.push(out_dir.join(sublime::file_name(theme)));
                } else {
                    paths.push(sublime::write_color_scheme(theme, palette, &out_dir)?);
                }
            }
        }
    }

    for path in &paths {
        info!(target = target.name(), path = %path.display(), dry_run, "rendered");
    }
    Ok(paths)
}

/// Render every requested target, collecting failures instead of aborting
/// the remaining targets.
#[must_use]
pub fn render_all(
    targets: &[Target],
    registry: &Registry,
    out_root: &Path,
    dry_run: bool,
) -> (Vec<(Target, Vec<PathBuf>)>, Vec<String>) {
    let mut outcomes = Vec::new();
    let mut errors = Vec::new();
    for &target in targets {
        match render_target(target, registry, out_root, dry_run)
            .with_context(|| format!("render {}", target.name()))
        {
            Ok(paths) => outcomes.push((target, paths)),
            Err(error) => errors.push(format!("{error:#}")),
        }
    }
    (outcomes, errors)
}
