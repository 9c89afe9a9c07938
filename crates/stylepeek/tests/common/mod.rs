//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use stylepeek::Result;
use stylepeek::fs::{DirEntry, FileSystem, OsFileSystem};
use tempfile::{TempDir, tempdir};

/// Route library logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Create a workspace containing `(path, content)` files.
pub fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (file, content) in files {
        write(dir.path(), file, content);
    }
    dir
}

/// Write a file under `root`, creating parent directories.
pub fn write(root: &Path, file: &str, content: &str) {
    let path = root.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Paths relative to `root`, with `/` separators.
pub fn relative(root: &Path, paths: impl IntoIterator<Item = impl AsRef<Path>>) -> Vec<String> {
    paths
        .into_iter()
        .map(|p| {
            p.as_ref()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// The real file system, counting file reads and directory listings.
#[derive(Debug, Default, Clone)]
pub struct CountingFs {
    reads: Arc<AtomicUsize>,
    listings: Arc<AtomicUsize>,
}

impl CountingFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn listings(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }
}

impl FileSystem for CountingFs {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        OsFileSystem.read_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        OsFileSystem.read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        OsFileSystem.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        OsFileSystem.is_dir(path)
    }
}
