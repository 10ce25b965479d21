//! CLI argument definitions for the theme generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ft-themegen",
    version,
    about = "FT Theme Generator - Build terminal and editor themes from the FT palette",
    long_about = "Generate static color theme files from the FT Origami palette.\n\n\
                  Supports Ghostty, tmux, fish, VS Code, Zed, and Sublime Text outputs.\n\
                  Foreground colors are contrast-repaired against each theme background."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate theme files for the selected targets.
    Generate(GenerateArgs),

    /// List all palette entries.
    Palette,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Output directory for generated files.
    #[arg(value_name = "OUT_DIR", default_value = "build")]
    pub out_dir: PathBuf,

    /// Target tool to generate for (repeatable; default: all targets).
    #[arg(long = "target", value_enum, value_name = "TARGET")]
    pub targets: Vec<TargetArg>,

    /// Theme variant to generate.
    #[arg(long = "theme", value_enum, default_value = "all")]
    pub theme: ThemeArg,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Ghostty,
    Tmux,
    Fish,
    Vscode,
    Zed,
    Sublime,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Standard,
    Inverse,
    All,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
