//! Shared helpers and constants for theme renderers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ft_palette::ThemeDefinition;

/// Minimum WCAG contrast ratio for repaired colors.
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

/// Minimum luminance separation between the ANSI green/red pair on dark
/// backgrounds.
pub const MIN_LUMINANCE_RATIO: f64 = 2.0;

/// Return the hex color without a leading hash.
#[must_use]
pub fn trim_hash(value: &str) -> &str {
    value.trim_start_matches('#')
}

/// Convert a hex color to RGBA notation with an alpha suffix.
///
/// 8-digit inputs pass through, except that a fully opaque `ff` suffix is
/// stripped. Otherwise a two-digit alpha channel is appended, `ff` for full
/// opacity.
#[must_use]
pub fn hex_rgba(color: &str, alpha: f64) -> String {
    let color = trim_hash(color);
    if color.len() == 8 {
        if color[6..8].eq_ignore_ascii_case("ff") {
            return format!("#{}", &color[..6]);
        }
        return format!("#{color}");
    }
    if alpha >= 1.0 {
        return format!("#{color}ff");
    }
    let a = ((alpha * 255.0).round().clamp(0.0, 255.0)) as u8;
    format!("#{color}{a:02x}")
}

/// Fully opaque shorthand for [`hex_rgba`].
#[must_use]
pub fn hex_rgba_opaque(color: &str) -> String {
    hex_rgba(color, 1.0)
}

/// Theme appearance for targets that distinguish light and dark.
#[must_use]
pub fn appearance(theme: &ThemeDefinition) -> &'static str {
    if theme.is_inverse() { "dark" } else { "light" }
}

/// Write newline-joined lines to `path`, creating parent directories.
pub fn write_lines(out_dir: &Path, file_name: &str, lines: &[String]) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let path = out_dir.join(file_name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Serialize a payload as pretty JSON with a trailing newline and write it,
/// creating parent directories.
pub fn write_json<T: serde::Serialize>(
    out_dir: &Path,
    file_name: &str,
    payload: &T,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let path = out_dir.join(file_name);
    let mut json = serde_json::to_string_pretty(payload)
        .with_context(|| format!("serialize {file_name}"))?;
    json.push('\n');
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
