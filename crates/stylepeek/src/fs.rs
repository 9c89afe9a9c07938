//! File-system capability used by discovery and the rule index.
//!
//! Every operation may fail. Callers in this crate treat a failure as "this
//! entry contributes nothing" and keep going, so implementations should
//! report errors rather than panic.
//!
//! # Example
//!
//! ```ignore
//! use stylepeek::fs::{FileSystem, OsFileSystem};
//!
//! let fs = OsFileSystem;
//! for entry in fs.read_dir(Path::new("styles"))? {
//!     if entry.is_file() {
//!         println!("{}", entry.name());
//!     }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::targets;
use crate::{Error, Result};

// ============================================================================
// DirEntry
// ============================================================================

/// What a directory entry turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file (or a symlink to one).
    File,
    /// A directory (or a symlink to one).
    Directory,
    /// Anything else, including entries whose type could not be read.
    Other,
}

/// A directory entry returned from [`FileSystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
}

impl DirEntry {
    /// Creates a new entry.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            kind,
        }
    }

    /// Returns the full path to this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file name of this entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entry kind.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns true if this entry is a file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns true if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

// ============================================================================
// FileSystem
// ============================================================================

/// Read-only file-system operations.
pub trait FileSystem: Send + Sync {
    /// List a directory's direct children.
    ///
    /// Entries must come back in a stable order for a fixed file-system
    /// state; discovery order depends on it.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Returns true if `path` is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Returns true if `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The real file system, via `std::fs`.
///
/// Directory listings are sorted by file name. Symbolic links are followed
/// when classifying entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = vec![];

        for entry in fs::read_dir(path).map_err(|e| Error::io(path, e))? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(
                        target: targets::DISCOVERY,
                        "skipping unreadable entry in {}: {}",
                        path.display(),
                        e
                    );
                    continue;
                }
            };

            let entry_path = entry.path();
            let kind = match fs::metadata(&entry_path) {
                Ok(meta) if meta.is_file() => EntryKind::File,
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                _ => EntryKind::Other,
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(DirEntry::new(entry_path, name, kind));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn read_dir_sorted_and_classified() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.css"), "").unwrap();
        fs::write(dir.path().join("a.css"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let entries = OsFileSystem.read_dir(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["a.css", "b.css", "nested"]);
        assert!(entries[0].is_file());
        assert!(entries[2].is_dir());
        assert_eq!(entries[1].path(), dir.path().join("b.css"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let err = OsFileSystem.read_dir(&dir.path().join("gone")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn read_and_probe_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("app.css");
        fs::write(&file, ".a { color: red; }").unwrap();

        assert_eq!(OsFileSystem.read_to_string(&file).unwrap(), ".a { color: red; }");
        assert!(OsFileSystem.is_file(&file));
        assert!(!OsFileSystem.is_dir(&file));
        assert!(OsFileSystem.is_dir(dir.path()));
        assert!(OsFileSystem.read_to_string(&dir.path().join("nope.css")).is_err());
    }
}
