//! Candidate style-sheet discovery.

use std::path::{Path, PathBuf};

use super::CandidateFileList;
use crate::config::{FILENAME_PLACEHOLDER, ScopingConfig, ScopingMode};
use crate::fs::{DirEntry, FileSystem};
use crate::logging::targets;

/// Find the style sheets that may define rules for `source_file`.
///
/// The result is ordered by priority and never repeats a path. A missing or
/// unlistable workspace root gives an empty list; a directory that cannot be
/// listed during the search is skipped.
///
/// # Modes
///
/// - [`ScopingMode::Global`]: every style sheet under the root, walked in
///   name order up to [`ScopingConfig::max_scan_depth`].
/// - [`ScopingMode::Filename`]: `pattern.ext` next to the source file, for
///   each name pattern and then each extension.
/// - [`ScopingMode::Folder`]: style sheets next to the source file, for each
///   extension.
/// - [`ScopingMode::Smart`]: filename matches, then folder matches, then the
///   direct children of each common directory, then (if enabled and nothing
///   was found) the global walk.
#[tracing::instrument(skip(fs, config), target = "stylepeek::discovery", level = "debug")]
pub fn find_candidate_files(
    fs: &dyn FileSystem,
    source_file: &Path,
    workspace_root: &Path,
    config: &ScopingConfig,
) -> CandidateFileList {
    let mut candidates = CandidateFileList::new();

    if !fs.is_dir(workspace_root) {
        tracing::debug!(
            target: targets::DISCOVERY,
            "workspace root {} is not a readable directory",
            workspace_root.display()
        );
        return candidates;
    }

    let source_dir = source_file.parent();

    match config.mode {
        ScopingMode::Global => {
            candidates.extend(global_files(fs, workspace_root, config));
        }
        ScopingMode::Filename => {
            if let Some(dir) = source_dir {
                candidates.extend(filename_matches(fs, dir, source_file, config));
            }
        }
        ScopingMode::Folder => {
            if let Some(dir) = source_dir {
                candidates.extend(folder_files(fs, dir, config));
            }
        }
        ScopingMode::Smart => {
            if let Some(dir) = source_dir {
                candidates.extend(filename_matches(fs, dir, source_file, config));
                candidates.extend(folder_files(fs, dir, config));
            }

            for common in &config.common_directories {
                let dir = workspace_root.join(common);
                if fs.is_dir(&dir) {
                    candidates.extend(folder_files(fs, &dir, config));
                }
            }

            if candidates.is_empty() && config.fallback_to_global {
                tracing::debug!(
                    target: targets::DISCOVERY,
                    "no scoped style sheets for {}, falling back to global search",
                    source_file.display()
                );
                candidates.extend(global_files(fs, workspace_root, config));
            }
        }
    }

    tracing::debug!(
        target: targets::DISCOVERY,
        mode = %config.mode,
        count = candidates.len(),
        "discovered candidate style sheets"
    );

    candidates
}

/// Files next to the source named after it, pattern order then extension
/// order.
pub fn filename_matches(
    fs: &dyn FileSystem,
    dir: &Path,
    source_file: &Path,
    config: &ScopingConfig,
) -> Vec<PathBuf> {
    let stem = match source_file.file_stem() {
        Some(stem) => stem.to_string_lossy(),
        None => return vec![],
    };

    let mut files = vec![];
    for pattern in &config.file_name_patterns {
        let base = pattern.replacen(FILENAME_PLACEHOLDER, &stem, 1);
        for ext in &config.file_extensions {
            let candidate = dir.join(format!("{base}.{ext}"));
            if fs.is_file(&candidate) {
                files.push(candidate);
            }
        }
    }
    files
}

/// Style sheets directly inside `dir`, extension order then listing order.
pub fn folder_files(fs: &dyn FileSystem, dir: &Path, config: &ScopingConfig) -> Vec<PathBuf> {
    let Some(entries) = list_dir(fs, dir) else {
        return vec![];
    };

    let mut files = vec![];
    for ext in &config.file_extensions {
        let suffix = format!(".{ext}");
        files.extend(
            entries
                .iter()
                .filter(|e| e.is_file() && e.name().ends_with(&suffix))
                .map(|e| e.path().to_path_buf()),
        );
    }
    files
}

/// Every style sheet under `root`, in walk order.
///
/// Excluded names and hidden directories are skipped. The root is depth 0;
/// files are collected at every visited depth, and a directory at the
/// maximum depth is not descended into.
pub fn global_files(fs: &dyn FileSystem, root: &Path, config: &ScopingConfig) -> Vec<PathBuf> {
    walk_files(fs, root, config, |name| config.has_style_extension(name))
}

/// Walk `root` under the config's exclusion and depth rules, collecting the
/// files whose name satisfies `wanted`.
pub(crate) fn walk_files(
    fs: &dyn FileSystem,
    root: &Path,
    config: &ScopingConfig,
    wanted: impl Fn(&str) -> bool,
) -> Vec<PathBuf> {
    let mut files = vec![];
    walk(fs, root, 0, config.scan_depth(), config, &wanted, &mut files);
    files
}

fn walk(
    fs: &dyn FileSystem,
    dir: &Path,
    depth: usize,
    max_depth: usize,
    config: &ScopingConfig,
    wanted: &dyn Fn(&str) -> bool,
    files: &mut Vec<PathBuf>,
) {
    let Some(entries) = list_dir(fs, dir) else {
        return;
    };

    for entry in entries {
        if config.is_excluded(entry.name()) {
            continue;
        }

        if entry.is_file() {
            if wanted(entry.name()) {
                files.push(entry.path().to_path_buf());
            }
        } else if entry.is_dir() && !entry.name().starts_with('.') {
            if depth < max_depth {
                walk(fs, entry.path(), depth + 1, max_depth, config, wanted, files);
            } else {
                tracing::trace!(
                    target: targets::DISCOVERY,
                    "scan depth reached at {}",
                    entry.path().display()
                );
            }
        }
    }
}

fn list_dir(fs: &dyn FileSystem, dir: &Path) -> Option<Vec<DirEntry>> {
    match fs.read_dir(dir) {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::debug!(target: targets::DISCOVERY, "skipping directory: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::OsFileSystem;

    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn workspace(files: &[&str]) -> TempDir {
        let dir = tempdir().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        dir
    }

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn filename_pattern_then_extension_order() {
        let ws = workspace(&[
            "src/page.html",
            "src/page.scss",
            "src/page.css",
            "src/page.module.css",
            "src/other.css",
        ]);
        let config = ScopingConfig::default();
        let found = filename_matches(
            &OsFileSystem,
            &ws.path().join("src"),
            &ws.path().join("src/page.html"),
            &config,
        );

        assert_eq!(
            names(ws.path(), &found),
            ["src/page.css", "src/page.scss", "src/page.module.css"]
        );
    }

    #[test]
    fn folder_extension_then_listing_order() {
        let ws = workspace(&["b.scss", "b.css", "a.css", "notes.txt", "a.less"]);
        let found = folder_files(&OsFileSystem, ws.path(), &ScopingConfig::default());

        assert_eq!(names(ws.path(), &found), ["a.css", "b.css", "b.scss", "a.less"]);
    }

    #[test]
    fn global_skips_excluded_and_hidden() {
        let ws = workspace(&[
            "app.css",
            "node_modules/lib/lib.css",
            ".cache/c.css",
            "dist/out.css",
            "src/ui/button.scss",
        ]);
        let found = global_files(&OsFileSystem, ws.path(), &ScopingConfig::default());

        assert_eq!(names(ws.path(), &found), ["app.css", "src/ui/button.scss"]);
    }

    #[test]
    fn global_respects_depth() {
        let ws = workspace(&["top.css", "a/one.css", "a/b/two.css"]);

        let shallow = ScopingConfig::default().with_max_scan_depth(1);
        let found = global_files(&OsFileSystem, ws.path(), &shallow);
        assert_eq!(names(ws.path(), &found), ["a/one.css", "top.css"]);

        let none = ScopingConfig::default().with_max_scan_depth(-5);
        let found = global_files(&OsFileSystem, ws.path(), &none);
        assert_eq!(names(ws.path(), &found), ["top.css"]);
    }

    #[test]
    fn missing_root_gives_empty_list() {
        let ws = workspace(&["a.css"]);
        let root = ws.path().join("missing");
        let found = find_candidate_files(
            &OsFileSystem,
            &root.join("index.html"),
            &root,
            &ScopingConfig::default().with_mode(ScopingMode::Global),
        );
        assert!(found.is_empty());
    }
}
