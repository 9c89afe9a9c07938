//! File watching for rule-cache invalidation.

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{DebouncedEventKind, Debouncer, new_debouncer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::config::ScopingConfig;
use crate::index::RuleIndex;
use crate::logging::targets;
use crate::{Error, Result};

/// Event indicating a style sheet changed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetChangeEvent {
    /// Path to the changed file.
    pub path: PathBuf,
    /// Type of change.
    pub kind: ChangeKind,
}

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was created or modified.
    Modified,
    /// File was removed.
    Removed,
}

/// Watches workspace roots for style-sheet changes.
///
/// # Example
///
/// ```ignore
/// let mut watcher = WorkspaceWatcher::new(index.config())?;
/// watcher.watch("/work/site")?;
///
/// // In your event loop:
/// let changes = watcher.poll();
/// watcher.apply_changes(&index, &changes);
/// ```
pub struct WorkspaceWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    watched_roots: HashSet<PathBuf>,
    config: ScopingConfig,
}

impl WorkspaceWatcher {
    /// Create a watcher reporting files with the config's style extensions.
    pub fn new(config: &ScopingConfig) -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let debouncer = new_debouncer(Duration::from_millis(100), tx)
            .map_err(|e| Error::HotReload(e.to_string()))?;

        Ok(Self {
            debouncer,
            rx,
            watched_roots: HashSet::new(),
            config: config.clone(),
        })
    }

    /// Start watching a workspace root recursively.
    pub fn watch(&mut self, root: impl AsRef<Path>) -> Result<()> {
        let root = root
            .as_ref()
            .canonicalize()
            .map_err(|e| Error::io(root.as_ref(), e))?;

        if !self.watched_roots.contains(&root) {
            self.debouncer
                .watcher()
                .watch(&root, RecursiveMode::Recursive)
                .map_err(|e| Error::HotReload(e.to_string()))?;

            tracing::info!(target: targets::WATCH, "Watching workspace: {}", root.display());
            self.watched_roots.insert(root);
        }

        Ok(())
    }

    /// Stop watching a workspace root.
    pub fn unwatch(&mut self, root: impl AsRef<Path>) -> Result<()> {
        let root = match root.as_ref().canonicalize() {
            Ok(p) => p,
            Err(_) => return Ok(()), // Directory is gone, nothing to unwatch
        };

        if self.watched_roots.remove(&root) {
            if let Err(e) = self.debouncer.watcher().unwatch(&root) {
                tracing::debug!(target: targets::WATCH, "unwatch {} failed: {}", root.display(), e);
            }
            tracing::info!(target: targets::WATCH, "Stopped watching workspace: {}", root.display());
        }

        Ok(())
    }

    /// Poll for style-sheet changes.
    ///
    /// Returns each changed style sheet once. Call this in your event loop.
    pub fn poll(&mut self) -> Vec<StylesheetChangeEvent> {
        let mut changes = vec![];

        loop {
            match self.rx.try_recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.kind != DebouncedEventKind::Any || !self.is_style_sheet(&event.path) {
                            continue;
                        }

                        let kind = if event.path.exists() {
                            ChangeKind::Modified
                        } else {
                            ChangeKind::Removed
                        };
                        changes.push(StylesheetChangeEvent {
                            path: event.path,
                            kind,
                        });
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!(target: targets::WATCH, "File watcher error: {}", e);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!(target: targets::WATCH, "File watcher disconnected");
                    break;
                }
            }
        }

        // Deduplicate changes (same file may have multiple events)
        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes.dedup_by(|a, b| a.path == b.path);

        changes
    }

    /// Invalidate the index if any style sheet changed.
    ///
    /// Returns true if the index was invalidated.
    pub fn apply_changes(&self, index: &RuleIndex, changes: &[StylesheetChangeEvent]) -> bool {
        if changes.is_empty() {
            return false;
        }

        for change in changes {
            tracing::debug!(
                target: targets::WATCH,
                "Style sheet {:?}: {}",
                change.kind,
                change.path.display()
            );
        }
        index.invalidate();
        true
    }

    /// Get the number of watched roots.
    pub fn watched_count(&self) -> usize {
        self.watched_roots.len()
    }

    /// Get the watched roots.
    pub fn watched_paths(&self) -> impl Iterator<Item = &Path> {
        self.watched_roots.iter().map(|p| p.as_path())
    }

    fn is_style_sheet(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.config.has_style_extension(name))
    }
}
