use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use ft_cli::pipeline::{Registry, Target, build_registry, render_all};
use ft_palette::Palette;

use crate::cli::{GenerateArgs, TargetArg, ThemeArg};
use crate::summary::apply_table_style;
use crate::types::{GenerateResult, TargetSummary};

pub fn run_palette() -> Result<()> {
    let palette = Palette::origami();
    let mut table = Table::new();
    table.set_header(vec!["Name", "Value", "Description"]);
    apply_table_style(&mut table);
    for color in palette.iter() {
        let description = color.description.clone().unwrap_or_default();
        table.add_row(vec![color.name.clone(), color.value.clone(), description]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", out_dir = %args.out_dir.display());
    let _guard = span.enter();

    let registry = build_registry(&theme_slugs(args.theme))?;
    let targets = selected_targets(&args.targets);
    info!(
        theme_count = registry.themes.len(),
        target_count = targets.len(),
        dry_run = args.dry_run,
        "registry built"
    );

    let render_start = Instant::now();
    let (outcomes, errors) = render_all(&targets, &registry, &args.out_dir, args.dry_run);
    let file_count: usize = outcomes.iter().map(|(_, paths)| paths.len()).sum();
    info!(
        file_count,
        error_count = errors.len(),
        duration_ms = render_start.elapsed().as_millis(),
        "render complete"
    );

    let summaries = build_summaries(&registry, outcomes);
    let has_errors = !errors.is_empty();
    Ok(GenerateResult {
        out_dir: args.out_dir.clone(),
        targets: summaries,
        errors,
        dry_run: args.dry_run,
        has_errors,
    })
}

fn build_summaries(
    registry: &Registry,
    outcomes: Vec<(Target, Vec<std::path::PathBuf>)>,
) -> Vec<TargetSummary> {
    outcomes
        .into_iter()
        .map(|(target, files)| TargetSummary {
            target: target.name(),
            theme_count: registry.themes.len(),
            files,
        })
        .collect()
}

fn theme_slugs(theme: ThemeArg) -> Vec<&'static str> {
    match theme {
        ThemeArg::Standard => vec!["standard"],
        ThemeArg::Inverse => vec!["inverse"],
        ThemeArg::All => vec!["standard", "inverse"],
    }
}

fn selected_targets(targets: &[TargetArg]) -> Vec<Target> {
    if targets.is_empty() {
        return Target::ALL.to_vec();
    }
    let mut selected = Vec::new();
    for arg in targets {
        let target = match arg {
            TargetArg::Ghostty => Target::Ghostty,
            TargetArg::Tmux => Target::Tmux,
            TargetArg::Fish => Target::Fish,
            TargetArg::Vscode => Target::Vscode,
            TargetArg::Zed => Target::Zed,
            TargetArg::Sublime => Target::Sublime,
        };
        if !selected.contains(&target) {
            selected.push(target);
        }
    }
    selected
}
