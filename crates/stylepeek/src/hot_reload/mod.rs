//! Rule-cache invalidation on style-sheet changes.
//!
//! This module is only available with the `hot-reload` feature.

mod watcher;

pub use watcher::{ChangeKind, StylesheetChangeEvent, WorkspaceWatcher};
