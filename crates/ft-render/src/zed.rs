//! Zed editor theme renderer.
//!
//! One theme-family JSON carries both variants. The whole document is an
//! explicit typed structure: field declaration order is the serialized key
//! order, so the output never reorders under it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use ft_color::mix;
use ft_palette::{Palette, ThemeDefinition};

use crate::common::{appearance, hex_rgba, hex_rgba_opaque, write_json};

const SCHEMA_URL: &str = "https://zed.dev/schema/themes/v0.2.0.json";
const TRANSPARENT: &str = "#00000000";

#[derive(Debug, Serialize)]
pub struct ZedThemeFamily {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub author: String,
    pub themes: Vec<ZedTheme>,
}

#[derive(Debug, Serialize)]
pub struct ZedTheme {
    pub name: String,
    pub appearance: String,
    pub style: ZedStyle,
}

#[derive(Debug, Serialize)]
pub struct SyntaxStyle {
    pub color: String,
    pub font_style: Option<String>,
    pub font_weight: Option<u32>,
}

impl SyntaxStyle {
    fn plain(color: String) -> Self {
        Self {
            color,
            font_style: None,
            font_weight: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Player {
    pub cursor: String,
    pub background: String,
    pub selection: String,
}

/// Style assignments in Zed's documented order.
#[derive(Debug, Serialize)]
pub struct ZedStyle {
    // Borders
    pub border: String,
    #[serde(rename = "border.variant")]
    pub border_variant: String,
    #[serde(rename = "border.focused")]
    pub border_focused: String,
    #[serde(rename = "border.selected")]
    pub border_selected: String,
    #[serde(rename = "border.transparent")]
    pub border_transparent: String,
    #[serde(rename = "border.disabled")]
    pub border_disabled: String,
    // Surfaces
    #[serde(rename = "elevated_surface.background")]
    pub elevated_surface_background: String,
    #[serde(rename = "surface.background")]
    pub surface_background: String,
    pub background: String,
    // Elements
    #[serde(rename = "element.background")]
    pub element_background: String,
    #[serde(rename = "element.hover")]
    pub element_hover: String,
    #[serde(rename = "element.active")]
    pub element_active: String,
    #[serde(rename = "element.selected")]
    pub element_selected: String,
    #[serde(rename = "element.disabled")]
    pub element_disabled: String,
    // Ghost elements
    #[serde(rename = "ghost_element.background")]
    pub ghost_element_background: String,
    #[serde(rename = "ghost_element.hover")]
    pub ghost_element_hover: String,
    #[serde(rename = "ghost_element.active")]
    pub ghost_element_active: String,
    #[serde(rename = "ghost_element.selected")]
    pub ghost_element_selected: String,
    #[serde(rename = "ghost_element.disabled")]
    pub ghost_element_disabled: String,
    // Text
    pub text: String,
    #[serde(rename = "text.muted")]
    pub text_muted: String,
    #[serde(rename = "text.placeholder")]
    pub text_placeholder: String,
    #[serde(rename = "text.disabled")]
    pub text_disabled: String,
    #[serde(rename = "text.accent")]
    pub text_accent: String,
    // Icons
    pub icon: String,
    #[serde(rename = "icon.muted")]
    pub icon_muted: String,
    #[serde(rename = "icon.disabled")]
    pub icon_disabled: String,
    #[serde(rename = "icon.placeholder")]
    pub icon_placeholder: String,
    #[serde(rename = "icon.accent")]
    pub icon_accent: String,
    // UI chrome
    #[serde(rename = "status_bar.background")]
    pub status_bar_background: String,
    #[serde(rename = "title_bar.background")]
    pub title_bar_background: String,
    #[serde(rename = "title_bar.inactive_background")]
    pub title_bar_inactive_background: String,
    #[serde(rename = "toolbar.background")]
    pub toolbar_background: String,
    #[serde(rename = "tab_bar.background")]
    pub tab_bar_background: String,
    #[serde(rename = "tab.inactive_background")]
    pub tab_inactive_background: String,
    #[serde(rename = "tab.active_background")]
    pub tab_active_background: String,
    // Search
    #[serde(rename = "search.match_background")]
    pub search_match_background: String,
    #[serde(rename = "search.active_match_background")]
    pub search_active_match_background: String,
    // Panel
    #[serde(rename = "panel.background")]
    pub panel_background: String,
    #[serde(rename = "panel.focused_border")]
    pub panel_focused_border: Option<String>,
    #[serde(rename = "pane.focused_border")]
    pub pane_focused_border: Option<String>,
    // Scrollbar
    #[serde(rename = "scrollbar.thumb.background")]
    pub scrollbar_thumb_background: String,
    #[serde(rename = "scrollbar.thumb.hover_background")]
    pub scrollbar_thumb_hover_background: String,
    #[serde(rename = "scrollbar.thumb.border")]
    pub scrollbar_thumb_border: String,
    #[serde(rename = "scrollbar.track.background")]
    pub scrollbar_track_background: String,
    #[serde(rename = "scrollbar.track.border")]
    pub scrollbar_track_border: String,
    // Editor
    #[serde(rename = "editor.foreground")]
    pub editor_foreground: String,
    #[serde(rename = "editor.background")]
    pub editor_background: String,
    #[serde(rename = "editor.gutter.background")]
    pub editor_gutter_background: String,
    #[serde(rename = "editor.subheader.background")]
    pub editor_subheader_background: String,
    #[serde(rename = "editor.active_line.background")]
    pub editor_active_line_background: String,
    #[serde(rename = "editor.highlighted_line.background")]
    pub editor_highlighted_line_background: String,
    #[serde(rename = "editor.line_number")]
    pub editor_line_number: String,
    #[serde(rename = "editor.active_line_number")]
    pub editor_active_line_number: String,
    #[serde(rename = "editor.invisible")]
    pub editor_invisible: String,
    #[serde(rename = "editor.wrap_guide")]
    pub editor_wrap_guide: String,
    #[serde(rename = "editor.active_wrap_guide")]
    pub editor_active_wrap_guide: String,
    // Document highlights (selections)
    #[serde(rename = "editor.document_highlight.read_background")]
    pub editor_document_highlight_read_background: String,
    #[serde(rename = "editor.document_highlight.write_background")]
    pub editor_document_highlight_write_background: String,
    // Terminal
    #[serde(rename = "terminal.background")]
    pub terminal_background: String,
    #[serde(rename = "terminal.foreground")]
    pub terminal_foreground: String,
    #[serde(rename = "terminal.bright_foreground")]
    pub terminal_bright_foreground: String,
    #[serde(rename = "terminal.dim_foreground")]
    pub terminal_dim_foreground: String,
    // Terminal ANSI colors
    #[serde(rename = "terminal.ansi.black")]
    pub terminal_ansi_black: String,
    #[serde(rename = "terminal.ansi.red")]
    pub terminal_ansi_red: String,
    #[serde(rename = "terminal.ansi.green")]
    pub terminal_ansi_green: String,
    #[serde(rename = "terminal.ansi.yellow")]
    pub terminal_ansi_yellow: String,
    #[serde(rename = "terminal.ansi.blue")]
    pub terminal_ansi_blue: String,
    #[serde(rename = "terminal.ansi.magenta")]
    pub terminal_ansi_magenta: String,
    #[serde(rename = "terminal.ansi.cyan")]
    pub terminal_ansi_cyan: String,
    #[serde(rename = "terminal.ansi.white")]
    pub terminal_ansi_white: String,
    #[serde(rename = "terminal.ansi.bright_black")]
    pub terminal_ansi_bright_black: String,
    #[serde(rename = "terminal.ansi.bright_red")]
    pub terminal_ansi_bright_red: String,
    #[serde(rename = "terminal.ansi.bright_green")]
    pub terminal_ansi_bright_green: String,
    #[serde(rename = "terminal.ansi.bright_yellow")]
    pub terminal_ansi_bright_yellow: String,
    #[serde(rename = "terminal.ansi.bright_blue")]
    pub terminal_ansi_bright_blue: String,
    #[serde(rename = "terminal.ansi.bright_magenta")]
    pub terminal_ansi_bright_magenta: String,
    #[serde(rename = "terminal.ansi.bright_cyan")]
    pub terminal_ansi_bright_cyan: String,
    #[serde(rename = "terminal.ansi.bright_white")]
    pub terminal_ansi_bright_white: String,
    #[serde(rename = "terminal.ansi.dim_black")]
    pub terminal_ansi_dim_black: String,
    #[serde(rename = "terminal.ansi.dim_red")]
    pub terminal_ansi_dim_red: String,
    #[serde(rename = "terminal.ansi.dim_green")]
    pub terminal_ansi_dim_green: String,
    #[serde(rename = "terminal.ansi.dim_yellow")]
    pub terminal_ansi_dim_yellow: String,
    #[serde(rename = "terminal.ansi.dim_blue")]
    pub terminal_ansi_dim_blue: String,
    #[serde(rename = "terminal.ansi.dim_magenta")]
    pub terminal_ansi_dim_magenta: String,
    #[serde(rename = "terminal.ansi.dim_cyan")]
    pub terminal_ansi_dim_cyan: String,
    #[serde(rename = "terminal.ansi.dim_white")]
    pub terminal_ansi_dim_white: String,
    // Links
    #[serde(rename = "link_text.hover")]
    pub link_text_hover: String,
    // Version control
    #[serde(rename = "version_control.added")]
    pub version_control_added: String,
    #[serde(rename = "version_control.modified")]
    pub version_control_modified: String,
    #[serde(rename = "version_control.deleted")]
    pub version_control_deleted: String,
    #[serde(rename = "version_control.word_added")]
    pub version_control_word_added: String,
    #[serde(rename = "version_control.word_deleted")]
    pub version_control_word_deleted: String,
    #[serde(rename = "version_control.conflict_marker.ours")]
    pub version_control_conflict_marker_ours: String,
    #[serde(rename = "version_control.conflict_marker.theirs")]
    pub version_control_conflict_marker_theirs: String,
    // Status colors
    pub conflict: String,
    #[serde(rename = "conflict.background")]
    pub conflict_background: String,
    #[serde(rename = "conflict.border")]
    pub conflict_border: String,
    pub created: String,
    #[serde(rename = "created.background")]
    pub created_background: String,
    #[serde(rename = "created.border")]
    pub created_border: String,
    pub deleted: String,
    #[serde(rename = "deleted.background")]
    pub deleted_background: String,
    #[serde(rename = "deleted.border")]
    pub deleted_border: String,
    pub error: String,
    #[serde(rename = "error.background")]
    pub error_background: String,
    #[serde(rename = "error.border")]
    pub error_border: String,
    pub hidden: String,
    #[serde(rename = "hidden.background")]
    pub hidden_background: String,
    #[serde(rename = "hidden.border")]
    pub hidden_border: String,
    pub hint: String,
    #[serde(rename = "hint.background")]
    pub hint_background: String,
    #[serde(rename = "hint.border")]
    pub hint_border: String,
    pub ignored: String,
    #[serde(rename = "ignored.background")]
    pub ignored_background: String,
    #[serde(rename = "ignored.border")]
    pub ignored_border: String,
    pub info: String,
    #[serde(rename = "info.background")]
    pub info_background: String,
    #[serde(rename = "info.border")]
    pub info_border: String,
    pub modified: String,
    #[serde(rename = "modified.background")]
    pub modified_background: String,
    #[serde(rename = "modified.border")]
    pub modified_border: String,
    pub predictive: String,
    #[serde(rename = "predictive.background")]
    pub predictive_background: String,
    #[serde(rename = "predictive.border")]
    pub predictive_border: String,
    pub renamed: String,
    #[serde(rename = "renamed.background")]
    pub renamed_background: String,
    #[serde(rename = "renamed.border")]
    pub renamed_border: String,
    pub success: String,
    #[serde(rename = "success.background")]
    pub success_background: String,
    #[serde(rename = "success.border")]
    pub success_border: String,
    pub unreachable: String,
    #[serde(rename = "unreachable.background")]
    pub unreachable_background: String,
    #[serde(rename = "unreachable.border")]
    pub unreachable_border: String,
    pub warning: String,
    #[serde(rename = "warning.background")]
    pub warning_background: String,
    #[serde(rename = "warning.border")]
    pub warning_border: String,
    // Syntax and collaborators close out the style document
    pub syntax: ZedSyntax,
    pub players: Vec<Player>,
}

/// Syntax highlighting rules: comments muted, everything else foreground.
#[derive(Debug, Serialize)]
pub struct ZedSyntax {
    pub comment: SyntaxStyle,
    #[serde(rename = "comment.doc")]
    pub comment_doc: SyntaxStyle,
    pub attribute: SyntaxStyle,
    pub boolean: SyntaxStyle,
    pub constant: SyntaxStyle,
    pub constructor: SyntaxStyle,
    pub embedded: SyntaxStyle,
    pub emphasis: SyntaxStyle,
    #[serde(rename = "emphasis.strong")]
    pub emphasis_strong: SyntaxStyle,
    #[serde(rename = "enum")]
    pub enum_: SyntaxStyle,
    pub function: SyntaxStyle,
    pub hint: SyntaxStyle,
    pub keyword: SyntaxStyle,
    pub label: SyntaxStyle,
    pub link_text: SyntaxStyle,
    pub link_uri: SyntaxStyle,
    pub namespace: SyntaxStyle,
    pub number: SyntaxStyle,
    pub operator: SyntaxStyle,
    pub predictive: SyntaxStyle,
    pub preproc: SyntaxStyle,
    pub primary: SyntaxStyle,
    pub property: SyntaxStyle,
    pub punctuation: SyntaxStyle,
    #[serde(rename = "punctuation.bracket")]
    pub punctuation_bracket: SyntaxStyle,
    #[serde(rename = "punctuation.delimiter")]
    pub punctuation_delimiter: SyntaxStyle,
    #[serde(rename = "punctuation.list_marker")]
    pub punctuation_list_marker: SyntaxStyle,
    #[serde(rename = "punctuation.markup")]
    pub punctuation_markup: SyntaxStyle,
    #[serde(rename = "punctuation.special")]
    pub punctuation_special: SyntaxStyle,
    pub selector: SyntaxStyle,
    #[serde(rename = "selector.pseudo")]
    pub selector_pseudo: SyntaxStyle,
    pub string: SyntaxStyle,
    #[serde(rename = "string.escape")]
    pub string_escape: SyntaxStyle,
    #[serde(rename = "string.regex")]
    pub string_regex: SyntaxStyle,
    #[serde(rename = "string.special")]
    pub string_special: SyntaxStyle,
    #[serde(rename = "string.special.symbol")]
    pub string_special_symbol: SyntaxStyle,
    pub tag: SyntaxStyle,
    #[serde(rename = "text.literal")]
    pub text_literal: SyntaxStyle,
    pub title: SyntaxStyle,
    #[serde(rename = "type")]
    pub type_: SyntaxStyle,
    pub variable: SyntaxStyle,
    #[serde(rename = "variable.special")]
    pub variable_special: SyntaxStyle,
    pub variant: SyntaxStyle,
}

fn build_syntax(theme: &ThemeDefinition) -> ZedSyntax {
    let fg = hex_rgba_opaque(&theme.body_text.value);
    let comment = hex_rgba_opaque(&theme.comment_text.value);
    let plain = || SyntaxStyle::plain(fg.clone());

    ZedSyntax {
        comment: SyntaxStyle::plain(comment.clone()),
        comment_doc: SyntaxStyle::plain(comment),
        attribute: plain(),
        boolean: plain(),
        constant: plain(),
        constructor: plain(),
        embedded: plain(),
        emphasis: plain(),
        emphasis_strong: SyntaxStyle {
            font_weight: Some(700),
            ..plain()
        },
        enum_: plain(),
        function: plain(),
        hint: plain(),
        keyword: plain(),
        label: plain(),
        link_text: plain(),
        link_uri: plain(),
        namespace: plain(),
        number: plain(),
        operator: plain(),
        predictive: SyntaxStyle {
            font_style: Some("italic".to_string()),
            ..plain()
        },
        preproc: plain(),
        primary: plain(),
        property: plain(),
        punctuation: plain(),
        punctuation_bracket: plain(),
        punctuation_delimiter: plain(),
        punctuation_list_marker: plain(),
        punctuation_markup: plain(),
        punctuation_special: plain(),
        selector: plain(),
        selector_pseudo: plain(),
        string: plain(),
        string_escape: plain(),
        string_regex: plain(),
        string_special: plain(),
        string_special_symbol: plain(),
        tag: plain(),
        text_literal: plain(),
        title: SyntaxStyle {
            font_weight: Some(400),
            ..plain()
        },
        type_: plain(),
        variable: plain(),
        variable_special: plain(),
        variant: plain(),
    }
}

fn build_players(theme: &ThemeDefinition, palette: &Palette) -> Result<Vec<Player>> {
    let is_dark = theme.is_inverse();
    let fg = &theme.body_text.value;
    let selection = &theme.selection.value;

    let mut players = vec![Player {
        cursor: hex_rgba_opaque(fg),
        background: hex_rgba_opaque(selection),
        selection: hex_rgba(selection, if is_dark { 0.75 } else { 1.0 }),
    }];
    for name in [
        "claret", "mandarin", "velvet", "teal", "crimson", "lemon", "jade",
    ] {
        let color = palette.value(name)?;
        players.push(Player {
            cursor: hex_rgba_opaque(&color),
            background: hex_rgba_opaque(&color),
            selection: hex_rgba(&color, 0.24),
        });
    }
    Ok(players)
}

/// Build the style block for a theme.
///
/// # Errors
///
/// Fails on a palette miss or a malformed palette value.
#[allow(clippy::too_many_lines)]
pub fn build_style(theme: &ThemeDefinition, palette: &Palette) -> Result<ZedStyle> {
    let bg = &theme.background.value;
    let fg = &theme.body_text.value;
    let muted = &theme.comment_text.value;
    let selection = &theme.selection.value;

    let is_dark = theme.is_inverse();
    let blend_target = if is_dark { "#ffffff" } else { "#000000" };

    // Derive colors
    let surface = mix(bg, blend_target, 0.04)?;
    let border = mix(bg, blend_target, 0.15)?;
    let border_variant = mix(bg, blend_target, 0.10)?;
    let element_bg = mix(bg, blend_target, 0.05)?;
    let element_hover = mix(bg, blend_target, 0.10)?;
    let element_active = mix(bg, blend_target, 0.20)?;

    // Accent color (using teal for info/links)
    let accent = if is_dark {
        palette.value("teal-100")?
    } else {
        palette.value("teal")?
    };

    // Status colors
    let error_color = palette.value("crimson")?;
    let warning_color = palette.value("mandarin")?;
    let success_color = palette.value("jade")?;

    Ok(ZedStyle {
        border: hex_rgba_opaque(&border),
        border_variant: hex_rgba_opaque(&border_variant),
        border_focused: hex_rgba_opaque(&accent),
        border_selected: hex_rgba_opaque(selection),
        border_transparent: TRANSPARENT.to_string(),
        border_disabled: hex_rgba_opaque(&border),
        elevated_surface_background: hex_rgba_opaque(&surface),
        surface_background: hex_rgba_opaque(&surface),
        background: hex_rgba_opaque(bg),
        element_background: hex_rgba_opaque(&element_bg),
        element_hover: hex_rgba_opaque(&element_hover),
        element_active: hex_rgba_opaque(&element_active),
        element_selected: hex_rgba_opaque(&element_active),
        element_disabled: hex_rgba_opaque(&element_bg),
        ghost_element_background: TRANSPARENT.to_string(),
        ghost_element_hover: hex_rgba_opaque(&element_hover),
        ghost_element_active: hex_rgba_opaque(&element_active),
        ghost_element_selected: hex_rgba_opaque(&element_active),
        ghost_element_disabled: hex_rgba_opaque(&element_bg),
        text: hex_rgba_opaque(fg),
        text_muted: hex_rgba_opaque(muted),
        text_placeholder: hex_rgba_opaque(muted),
        text_disabled: hex_rgba_opaque(muted),
        text_accent: hex_rgba_opaque(&accent),
        icon: hex_rgba_opaque(fg),
        icon_muted: hex_rgba_opaque(muted),
        icon_disabled: hex_rgba_opaque(muted),
        icon_placeholder: hex_rgba_opaque(muted),
        icon_accent: hex_rgba_opaque(&accent),
        status_bar_background: hex_rgba_opaque(bg),
        title_bar_background: hex_rgba_opaque(bg),
        title_bar_inactive_background: hex_rgba_opaque(&element_bg),
        toolbar_background: hex_rgba_opaque(&surface),
        tab_bar_background: hex_rgba_opaque(&surface),
        tab_inactive_background: hex_rgba_opaque(&surface),
        tab_active_background: hex_rgba_opaque(bg),
        search_match_background: hex_rgba(selection, 0.4),
        search_active_match_background: hex_rgba(&warning_color, 0.4),
        panel_background: hex_rgba_opaque(&surface),
        panel_focused_border: None,
        pane_focused_border: None,
        scrollbar_thumb_background: hex_rgba(&mix(bg, blend_target, 0.3)?, 0.3),
        scrollbar_thumb_hover_background: hex_rgba_opaque(&element_hover),
        scrollbar_thumb_border: hex_rgba_opaque(&element_hover),
        scrollbar_track_background: TRANSPARENT.to_string(),
        scrollbar_track_border: hex_rgba_opaque(&border_variant),
        editor_foreground: hex_rgba_opaque(fg),
        editor_background: hex_rgba_opaque(bg),
        editor_gutter_background: hex_rgba_opaque(bg),
        editor_subheader_background: hex_rgba_opaque(&surface),
        editor_active_line_background: hex_rgba(&surface, 0.75),
        editor_highlighted_line_background: hex_rgba_opaque(&surface),
        editor_line_number: hex_rgba_opaque(muted),
        editor_active_line_number: hex_rgba_opaque(fg),
        editor_invisible: hex_rgba_opaque(muted),
        editor_wrap_guide: hex_rgba(&border, 0.05),
        editor_active_wrap_guide: hex_rgba(&border, 0.1),
        editor_document_highlight_read_background: hex_rgba(
            selection,
            if is_dark { 0.4 } else { 0.75 },
        ),
        editor_document_highlight_write_background: hex_rgba(selection, 0.4),
        terminal_background: hex_rgba_opaque(bg),
        terminal_foreground: hex_rgba_opaque(fg),
        terminal_bright_foreground: hex_rgba_opaque(fg),
        terminal_dim_foreground: hex_rgba_opaque(muted),
        terminal_ansi_black: hex_rgba_opaque(&palette.value("slate")?),
        terminal_ansi_red: hex_rgba_opaque(&palette.value("claret")?),
        terminal_ansi_green: hex_rgba_opaque(&palette.value("jade")?),
        terminal_ansi_yellow: hex_rgba_opaque(&palette.value("mandarin")?),
        terminal_ansi_blue: hex_rgba_opaque(&palette.value("oxford")?),
        terminal_ansi_magenta: hex_rgba_opaque(&palette.value("velvet")?),
        terminal_ansi_cyan: hex_rgba_opaque(&palette.value("teal")?),
        terminal_ansi_white: hex_rgba_opaque(&palette.value("paper")?),
        terminal_ansi_bright_black: hex_rgba_opaque(&palette.value("black-70")?),
        terminal_ansi_bright_red: hex_rgba_opaque(&palette.value("crimson")?),
        terminal_ansi_bright_green: hex_rgba_opaque(&palette.value("wasabi")?),
        terminal_ansi_bright_yellow: hex_rgba_opaque(&palette.value("lemon")?),
        terminal_ansi_bright_blue: hex_rgba_opaque(&palette.value("light-blue")?),
        terminal_ansi_bright_magenta: hex_rgba_opaque(&palette.value("candy")?),
        terminal_ansi_bright_cyan: hex_rgba_opaque(&palette.value("teal-80")?),
        terminal_ansi_bright_white: hex_rgba_opaque(&palette.value("white")?),
        terminal_ansi_dim_black: hex_rgba_opaque(&palette.value("black-40")?),
        terminal_ansi_dim_red: hex_rgba_opaque(&mix(&palette.value("claret")?, bg, 0.3)?),
        terminal_ansi_dim_green: hex_rgba_opaque(&mix(&palette.value("jade")?, bg, 0.3)?),
        terminal_ansi_dim_yellow: hex_rgba_opaque(&mix(&palette.value("mandarin")?, bg, 0.3)?),
        terminal_ansi_dim_blue: hex_rgba_opaque(&mix(&palette.value("oxford")?, bg, 0.3)?),
        terminal_ansi_dim_magenta: hex_rgba_opaque(&mix(&palette.value("velvet")?, bg, 0.3)?),
        terminal_ansi_dim_cyan: hex_rgba_opaque(&mix(&palette.value("teal")?, bg, 0.3)?),
        terminal_ansi_dim_white: hex_rgba_opaque(muted),
        link_text_hover: hex_rgba_opaque(&accent),
        version_control_added: hex_rgba_opaque(&success_color),
        version_control_modified: hex_rgba_opaque(&warning_color),
        version_control_deleted: hex_rgba_opaque(&error_color),
        version_control_word_added: hex_rgba(&success_color, 0.35),
        version_control_word_deleted: hex_rgba(&error_color, 0.35),
        version_control_conflict_marker_ours: hex_rgba(&success_color, 0.1),
        version_control_conflict_marker_theirs: hex_rgba(&accent, 0.1),
        conflict: hex_rgba_opaque(&warning_color),
        conflict_background: hex_rgba(&warning_color, 0.1),
        conflict_border: hex_rgba(&warning_color, 0.3),
        created: hex_rgba_opaque(&success_color),
        created_background: hex_rgba(&success_color, 0.1),
        created_border: hex_rgba(&success_color, 0.3),
        deleted: hex_rgba_opaque(&error_color),
        deleted_background: hex_rgba(&error_color, 0.1),
        deleted_border: hex_rgba(&error_color, 0.3),
        error: hex_rgba_opaque(&error_color),
        error_background: hex_rgba(&error_color, 0.1),
        error_border: hex_rgba(&error_color, 0.3),
        hidden: hex_rgba_opaque(muted),
        hidden_background: hex_rgba_opaque(bg),
        hidden_border: hex_rgba_opaque(&border),
        hint: hex_rgba_opaque(&accent),
        hint_background: hex_rgba(&accent, 0.05),
        hint_border: hex_rgba(&accent, 0.3),
        ignored: hex_rgba_opaque(muted),
        ignored_background: hex_rgba_opaque(bg),
        ignored_border: hex_rgba_opaque(&border),
        info: hex_rgba_opaque(&accent),
        info_background: hex_rgba(&accent, 0.1),
        info_border: hex_rgba(&accent, 0.3),
        modified: hex_rgba_opaque(&warning_color),
        modified_background: hex_rgba(&warning_color, 0.1),
        modified_border: hex_rgba(&warning_color, 0.3),
        predictive: hex_rgba_opaque(muted),
        predictive_background: hex_rgba(muted, 0.1),
        predictive_border: hex_rgba(muted, 0.3),
        renamed: hex_rgba_opaque(&accent),
        renamed_background: hex_rgba(&accent, 0.1),
        renamed_border: hex_rgba(&accent, 0.3),
        success: hex_rgba_opaque(&success_color),
        success_background: hex_rgba(&success_color, 0.1),
        success_border: hex_rgba(&success_color, 0.3),
        unreachable: hex_rgba_opaque(muted),
        unreachable_background: hex_rgba_opaque(bg),
        unreachable_border: hex_rgba_opaque(&border),
        warning: hex_rgba_opaque(&warning_color),
        warning_background: hex_rgba(&warning_color, 0.1),
        warning_border: hex_rgba(&warning_color, 0.3),
        syntax: build_syntax(theme),
        players: build_players(theme, palette)?,
    })
}

/// Build a complete theme entry for the family document.
///
/// # Errors
///
/// Fails on a palette miss.
pub fn build_theme(theme: &ThemeDefinition, palette: &Palette) -> Result<ZedTheme> {
    Ok(ZedTheme {
        name: theme.display_name(),
        appearance: appearance(theme).to_string(),
        style: build_style(theme, palette)?,
    })
}

/// Build the theme family payload covering all given variants.
///
/// # Errors
///
/// Fails on a palette miss.
pub fn build_family(themes: &[ThemeDefinition], palette: &Palette) -> Result<ZedThemeFamily> {
    Ok(ZedThemeFamily {
        schema: SCHEMA_URL.to_string(),
        name: "Financial Times".to_string(),
        author: "meriksen".to_string(),
        themes: themes
            .iter()
            .map(|theme| build_theme(theme, palette))
            .collect::<Result<Vec<_>>>()?,
    })
}

/// File name of the theme family document.
pub const FAMILY_FILE_NAME: &str = "financial-times.json";

/// Write the theme family file and return its path.
///
/// # Errors
///
/// Fails on palette misses or IO errors.
pub fn write_family(
    themes: &[ThemeDefinition],
    palette: &Palette,
    out_dir: &Path,
) -> Result<PathBuf> {
    let payload = build_family(themes, palette).context("build zed theme family")?;
    write_json(out_dir, FAMILY_FILE_NAME, &payload)
}

#[cfg(test)]
mod tests {
    use ft_palette::{inverse_theme, standard_theme};

    use super::*;

    #[test]
    fn light_theme_blends_toward_black() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let style = build_style(&theme, &palette).unwrap();
        assert_eq!(style.background, "#fff1e5ff");
        // 4% toward black from paper
        assert_eq!(style.surface_background, "#f5e7dcff");
        assert_eq!(style.text_accent, "#0d7680ff");
        assert_eq!(style.search_match_background, "#cce6ff66");
    }

    #[test]
    fn dark_theme_blends_toward_white_and_uses_bright_accent() {
        let palette = Palette::origami();
        let theme = inverse_theme(&palette).unwrap();
        let style = build_style(&theme, &palette).unwrap();
        assert_eq!(style.background, "#262a33ff");
        assert_eq!(style.text_accent, "#1aecffff");
        assert_eq!(style.ghost_element_background, "#00000000");
        assert!(style.panel_focused_border.is_none());
    }

    #[test]
    fn syntax_mutes_only_comments() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let syntax = build_syntax(&theme);
        assert_eq!(syntax.comment.color, "#807973ff");
        assert_eq!(syntax.keyword.color, "#33302eff");
        assert_eq!(syntax.emphasis_strong.font_weight, Some(700));
        assert_eq!(syntax.predictive.font_style.as_deref(), Some("italic"));
    }

    #[test]
    fn family_carries_both_variants_in_order() {
        let palette = Palette::origami();
        let themes = vec![
            standard_theme(&palette).unwrap(),
            inverse_theme(&palette).unwrap(),
        ];
        let family = build_family(&themes, &palette).unwrap();
        assert_eq!(family.themes.len(), 2);
        assert_eq!(family.themes[0].appearance, "light");
        assert_eq!(family.themes[1].appearance, "dark");
        assert_eq!(family.themes[0].style.players.len(), 8);
    }

    #[test]
    fn style_serializes_dotted_keys_in_declaration_order() {
        let palette = Palette::origami();
        let theme = standard_theme(&palette).unwrap();
        let style = build_style(&theme, &palette).unwrap();
        let json = serde_json::to_string(&style).unwrap();
        let border = json.find("\"border\"").unwrap();
        let editor = json.find("\"editor.foreground\"").unwrap();
        let syntax = json.find("\"syntax\"").unwrap();
        let players = json.find("\"players\"").unwrap();
        assert!(border < editor && editor < syntax && syntax < players);
        // null fields are emitted, not skipped
        assert!(json.contains("\"panel.focused_border\":null"));
    }
}
