//! Integration tests for style-sheet discovery.

mod common;

use common::{relative, workspace};
use stylepeek::config::{ScopingConfig, ScopingMode};
use stylepeek::discovery::find_candidate_files;
use stylepeek::fs::OsFileSystem;

fn discover(
    root: &std::path::Path,
    source: &str,
    config: &ScopingConfig,
) -> Vec<String> {
    let found = find_candidate_files(&OsFileSystem, &root.join(source), root, config);
    relative(root, found.iter())
}

#[test]
fn smart_tiers_in_priority_order() {
    let ws = workspace(&[
        ("src/components/button.html", ""),
        ("src/components/button.module.css", ""),
        ("src/components/button.css", ""),
        ("src/components/icons.css", ""),
        ("styles/base.css", ""),
        ("styles/theme.scss", ""),
        ("unrelated/far.css", ""),
    ]);

    let found = discover(ws.path(), "src/components/button.html", &ScopingConfig::default());

    assert_eq!(
        found,
        [
            "src/components/button.css",
            "src/components/button.module.css",
            "src/components/icons.css",
            "styles/base.css",
            "styles/theme.scss",
        ]
    );
}

#[test]
fn smart_never_repeats_a_path() {
    let ws = workspace(&[("styles/index.html", ""), ("styles/index.css", ""), ("styles/a.css", "")]);

    // The source directory is also a common directory.
    let found = discover(ws.path(), "styles/index.html", &ScopingConfig::default());

    assert_eq!(found, ["styles/index.css", "styles/a.css"]);
}

#[test]
fn smart_falls_back_to_global_only_when_empty() {
    let ws = workspace(&[("pages/home.html", ""), ("deep/nested/site.css", "")]);

    let found = discover(ws.path(), "pages/home.html", &ScopingConfig::default());
    assert_eq!(found, ["deep/nested/site.css"]);

    let no_fallback = ScopingConfig::default().with_fallback_to_global(false);
    assert!(discover(ws.path(), "pages/home.html", &no_fallback).is_empty());
}

#[test]
fn smart_fallback_skipped_when_common_directory_has_sheets() {
    let ws = workspace(&[
        ("pages/home.html", ""),
        ("css/site.css", ""),
        ("deep/nested/other.css", ""),
    ]);

    let found = discover(ws.path(), "pages/home.html", &ScopingConfig::default());
    assert_eq!(found, ["css/site.css"]);
}

#[test]
fn folder_mode_ignores_other_directories() {
    let ws = workspace(&[
        ("app/page.html", ""),
        ("app/page.css", ""),
        ("app/z.less", ""),
        ("styles/base.css", ""),
    ]);

    let config = ScopingConfig::default().with_mode(ScopingMode::Folder);
    assert_eq!(discover(ws.path(), "app/page.html", &config), ["app/page.css", "app/z.less"]);
}

#[test]
fn filename_mode_only_named_sheets() {
    let ws = workspace(&[
        ("app/page.html", ""),
        ("app/page.styles.scss", ""),
        ("app/other.css", ""),
    ]);

    let config = ScopingConfig::default().with_mode(ScopingMode::Filename);
    assert_eq!(discover(ws.path(), "app/page.html", &config), ["app/page.styles.scss"]);
}

#[test]
fn global_mode_custom_excludes() {
    let ws = workspace(&[
        ("a.css", ""),
        ("vendor/lib.css", ""),
        ("node_modules/x.css", ""),
        ("src/b.scss", ""),
    ]);

    let config = ScopingConfig::default()
        .with_mode(ScopingMode::Global)
        .with_exclude_directories(["vendor"]);

    // Custom excludes replace the defaults.
    assert_eq!(
        discover(ws.path(), "index.html", &config),
        ["a.css", "node_modules/x.css", "src/b.scss"]
    );
}

#[test]
fn extension_filter_is_case_sensitive() {
    let ws = workspace(&[("Upper.CSS", ""), ("lower.css", "")]);

    let config = ScopingConfig::default().with_mode(ScopingMode::Global);
    assert_eq!(discover(ws.path(), "index.html", &config), ["lower.css"]);
}

#[test]
fn discovery_is_deterministic() {
    let ws = workspace(&[
        ("b/one.css", ""),
        ("a/two.css", ""),
        ("c.scss", ""),
        ("page.html", ""),
    ]);
    let config = ScopingConfig::default().with_mode(ScopingMode::Global);

    let first = discover(ws.path(), "page.html", &config);
    let second = discover(ws.path(), "page.html", &config);
    assert_eq!(first, second);
    assert_eq!(first, ["a/two.css", "b/one.css", "c.scss"]);
}
