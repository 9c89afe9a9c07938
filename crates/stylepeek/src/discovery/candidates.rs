//! Ordered, de-duplicated candidate file list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::workspace::normalize_lexically;

/// Style-sheet paths in priority order, earliest first.
///
/// A path is only ever stored once; pushing it again keeps the earlier,
/// higher-priority position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFileList {
    paths: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl CandidateFileList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path unless it is already present. Returns true if added.
    pub fn push(&mut self, path: impl AsRef<Path>) -> bool {
        let path = normalize_lexically(path.as_ref());
        if self.seen.insert(path.clone()) {
            self.paths.push(path);
            true
        } else {
            false
        }
    }

    /// Append every path not already present.
    pub fn extend<P: AsRef<Path>>(&mut self, paths: impl IntoIterator<Item = P>) {
        for path in paths {
            self.push(path);
        }
    }

    /// Returns true if the path is in the list.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.seen.contains(&normalize_lexically(path.as_ref()))
    }

    /// Get the number of candidates.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the candidates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// The candidates as a slice.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Consume the list, returning the ordered paths.
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl<P: AsRef<Path>> FromIterator<P> for CandidateFileList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a CandidateFileList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_keep_first_position() {
        let mut list = CandidateFileList::new();
        assert!(list.push("/w/a.css"));
        assert!(list.push("/w/b.css"));
        assert!(!list.push("/w/a.css"));
        assert!(!list.push("/w/./a.css"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0], PathBuf::from("/w/a.css"));
        assert!(list.contains("/w/b.css"));
    }

    #[test]
    fn collect_from_iterator() {
        let list: CandidateFileList = ["/w/x.css", "/w/y.css", "/w/x.css"].into_iter().collect();
        assert_eq!(
            list.into_vec(),
            vec![PathBuf::from("/w/x.css"), PathBuf::from("/w/y.css")]
        );
    }
}
