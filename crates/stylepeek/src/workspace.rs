//! Workspace-root resolution.
//!
//! The rule index asks a [`WorkspaceResolver`] which workspace a source file
//! belongs to. A file with no workspace yields no candidates at all.

use std::path::{Component, Path, PathBuf};

use crate::fs::FileSystem;

/// Resolves the workspace root enclosing a source file.
pub trait WorkspaceResolver: Send + Sync {
    /// The root directory of the workspace containing `source_file`, if any.
    fn resolve_workspace_root(&self, source_file: &Path) -> Option<PathBuf>;
}

/// A single fixed workspace root.
///
/// Source files outside the root resolve to nothing.
#[derive(Debug, Clone)]
pub struct FixedRoot {
    root: PathBuf,
}

impl FixedRoot {
    /// Create a resolver for one root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: normalize_lexically(&root.into()),
        }
    }

    /// The configured root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WorkspaceResolver for FixedRoot {
    fn resolve_workspace_root(&self, source_file: &Path) -> Option<PathBuf> {
        normalize_lexically(source_file)
            .starts_with(&self.root)
            .then(|| self.root.clone())
    }
}

/// Files and directories whose presence marks a workspace root.
pub const DEFAULT_MARKERS: &[&str] = &[".git", "package.json", "Cargo.toml", "stylepeek.toml"];

/// Resolves the nearest ancestor directory containing a marker entry.
pub struct MarkerResolver<F> {
    fs: F,
    markers: Vec<String>,
}

impl<F: FileSystem> MarkerResolver<F> {
    /// Create a resolver using [`DEFAULT_MARKERS`].
    pub fn new(fs: F) -> Self {
        Self::with_markers(fs, DEFAULT_MARKERS.iter().copied())
    }

    /// Create a resolver with custom marker names.
    pub fn with_markers<S: Into<String>>(fs: F, markers: impl IntoIterator<Item = S>) -> Self {
        Self {
            fs,
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }
}

impl<F: FileSystem> WorkspaceResolver for MarkerResolver<F> {
    fn resolve_workspace_root(&self, source_file: &Path) -> Option<PathBuf> {
        source_file.ancestors().skip(1).find_map(|dir| {
            let marked = self.markers.iter().any(|marker| {
                let candidate = dir.join(marker);
                self.fs.is_file(&candidate) || self.fs.is_dir(&candidate)
            });
            marked.then(|| dir.to_path_buf())
        })
    }
}

/// Resolve `.` and `..` components without touching the file system.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
