//! Parsed-rule cache.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::rules::StyleRule;

/// Cache key for parsed rules.
///
/// The key pairs the style sheet with the source file that asked for it.
/// Both paths are compared case-sensitively with `\` normalized to `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleCacheKey {
    style_file: String,
    source_file: String,
}

impl RuleCacheKey {
    /// Create a new cache key.
    pub fn new(style_file: &Path, source_file: &Path) -> Self {
        Self {
            style_file: normalize_separators(style_file),
            source_file: normalize_separators(source_file),
        }
    }

    /// The normalized style-sheet path.
    pub fn style_file(&self) -> &str {
        &self.style_file
    }

    /// The normalized source-file path.
    pub fn source_file(&self) -> &str {
        &self.source_file
    }
}

fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Parsed rules per (style sheet, source file).
///
/// An entry is either the parsed rules or an empty list recorded for a sheet
/// that could not be read. Entries are never evicted one by one; the whole
/// cache is cleared on invalidation.
#[derive(Debug, Default)]
pub struct RuleCache {
    entries: HashMap<RuleCacheKey, Arc<[StyleRule]>>,
}

impl RuleCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get cached rules.
    pub fn get(&self, key: &RuleCacheKey) -> Option<Arc<[StyleRule]>> {
        self.entries.get(key).cloned()
    }

    /// Store rules for a key, replacing any previous entry.
    pub fn insert(&mut self, key: RuleCacheKey, rules: impl Into<Arc<[StyleRule]>>) {
        self.entries.insert(key, rules.into());
    }

    /// Returns true if the key has an entry.
    pub fn contains(&self, key: &RuleCacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every entry.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Declarations;

    fn key(style: &str, source: &str) -> RuleCacheKey {
        RuleCacheKey::new(Path::new(style), Path::new(source))
    }

    #[test]
    fn cache_basic_operations() {
        let mut cache = RuleCache::new();
        let k = key("/w/app.css", "/w/index.html");

        assert!(cache.get(&k).is_none());

        cache.insert(k.clone(), vec![StyleRule::new(".a", Declarations::new(), "/w/app.css")]);
        assert_eq!(cache.get(&k).unwrap().len(), 1);
        assert!(cache.contains(&k));
    }

    #[test]
    fn failed_read_cached_as_empty() {
        let mut cache = RuleCache::new();
        let k = key("/w/gone.css", "/w/index.html");

        cache.insert(k.clone(), Vec::<StyleRule>::new());
        assert!(cache.contains(&k));
        assert!(cache.get(&k).unwrap().is_empty());
    }

    #[test]
    fn key_pairs_style_and_source() {
        assert_ne!(key("/w/app.css", "/w/a.html"), key("/w/app.css", "/w/b.html"));
    }

    #[test]
    fn key_normalizes_separators_but_not_case() {
        assert_eq!(
            key(r"C:\w\app.css", r"C:\w\index.html"),
            key("C:/w/app.css", "C:/w/index.html")
        );
        assert_ne!(key("/w/App.css", "/w/a.html"), key("/w/app.css", "/w/a.html"));
        assert_eq!(key(r"a\b.css", "s").style_file(), "a/b.css");
    }

    #[test]
    fn cache_invalidate_all() {
        let mut cache = RuleCache::new();

        for i in 0..10 {
            cache.insert(key(&format!("/w/{i}.css"), "/w/index.html"), Vec::<StyleRule>::new());
        }

        assert_eq!(cache.len(), 10);
        cache.invalidate_all();
        assert!(cache.is_empty());
    }
}
