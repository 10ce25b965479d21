//! Snapshot tests for rendered theme documents.

use ft_palette::{Palette, inverse_theme, standard_theme};
use ft_render::{fish, ghostty};

#[test]
fn ghostty_standard_snapshot() {
    let palette = Palette::origami();
    let theme = standard_theme(&palette).unwrap();
    let values = ghostty::build_palette_values(&theme, &palette).unwrap();
    let output = ghostty::build_theme_lines(&theme, &values).join("\n");
    insta::assert_snapshot!("ghostty_standard", output);
}

#[test]
fn ghostty_inverse_snapshot() {
    let palette = Palette::origami();
    let theme = inverse_theme(&palette).unwrap();
    let values = ghostty::build_palette_values(&theme, &palette).unwrap();
    let output = ghostty::build_theme_lines(&theme, &values).join("\n");
    insta::assert_snapshot!("ghostty_inverse", output);
}

#[test]
fn fish_standard_snapshot() {
    let palette = Palette::origami();
    let theme = standard_theme(&palette).unwrap();
    let output = fish::build_theme_lines(&theme, &palette).unwrap().join("\n");
    insta::assert_snapshot!("fish_standard", output);
}
