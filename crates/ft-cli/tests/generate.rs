//! Integration tests for the generation pipeline.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ft_cli::pipeline::{Target, build_registry, render_all, render_target};

fn collect_files(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                files.insert(
                    relative.to_string_lossy().into_owned(),
                    fs::read(&path).unwrap(),
                );
            }
        }
    }
    files
}

#[test]
fn all_targets_write_expected_files() {
    let registry = build_registry(&["standard", "inverse"]).unwrap();
    let out = tempfile::tempdir().unwrap();
    let (outcomes, errors) = render_all(&Target::ALL, &registry, out.path(), false);
    assert!(errors.is_empty(), "render errors: {errors:?}");
    assert_eq!(outcomes.len(), Target::ALL.len());

    let files = collect_files(out.path());
    let names: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "fish/financial-times-inverse.theme",
            "fish/financial-times-standard.theme",
            "ghostty/financial-times-inverse",
            "ghostty/financial-times-standard",
            "sublime/Financial Times Inverse.sublime-color-scheme",
            "sublime/Financial Times Standard.sublime-color-scheme",
            "tmux/financial-times-inverse.conf",
            "tmux/financial-times-standard.conf",
            "vscode/ft-inverse.json",
            "vscode/ft-standard.json",
            "vscode/package.json",
            "zed/financial-times.json",
        ]
    );

    // every generated file ends with exactly one trailing newline
    for (name, contents) in &files {
        assert!(contents.ends_with(b"\n"), "{name} missing trailing newline");
    }
}

#[test]
fn generation_is_idempotent() {
    let registry = build_registry(&["standard", "inverse"]).unwrap();
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let (_, errors) = render_all(&Target::ALL, &registry, first.path(), false);
    assert!(errors.is_empty());
    let (_, errors) = render_all(&Target::ALL, &registry, second.path(), false);
    assert!(errors.is_empty());
    assert_eq!(collect_files(first.path()), collect_files(second.path()));
}

#[test]
fn dry_run_writes_nothing_but_plans_the_same_paths() {
    let registry = build_registry(&["standard", "inverse"]).unwrap();
    let out = tempfile::tempdir().unwrap();
    let planned = render_target(Target::Vscode, &registry, out.path(), true).unwrap();
    assert_eq!(planned.len(), 3);
    assert!(
        fs::read_dir(out.path()).unwrap().next().is_none(),
        "dry run must not create files"
    );
    let written = render_target(Target::Vscode, &registry, out.path(), false).unwrap();
    assert_eq!(planned, written);
}

#[test]
fn single_theme_registry_renders_one_file_per_target() {
    let registry = build_registry(&["inverse"]).unwrap();
    let out = tempfile::tempdir().unwrap();
    let paths = render_target(Target::Ghostty, &registry, out.path(), false).unwrap();
    assert_eq!(paths.len(), 1);
    let contents = fs::read_to_string(&paths[0]).unwrap();
    assert!(contents.starts_with("# Financial Times Inverse (Ghostty)\n"));
}
