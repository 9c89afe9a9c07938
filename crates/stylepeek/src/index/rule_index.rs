//! Rule lookup: discovery, parsing and matching behind one cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::ScopingConfig;
use crate::discovery::{CandidateFileList, find_candidate_files};
use crate::fs::{FileSystem, OsFileSystem};
use crate::index::cache::{RuleCache, RuleCacheKey};
use crate::logging::targets;
use crate::parser::parse_css;
use crate::rules::StyleRule;
use crate::selector::{ReferenceToken, SelectorMatcher};
use crate::workspace::{FixedRoot, WorkspaceResolver};

/// Finds the style rules relevant to a token referenced from a source file.
///
/// The index owns the parse cache for one logical workspace. Lookups may run
/// concurrently; each cache read-or-populate step and each invalidation
/// holds the same lock, so a lookup never sees a half-cleared cache.
///
/// # Example
///
/// ```ignore
/// let index = RuleIndex::for_root("/work/site", ScopingConfig::default());
///
/// for rule in index.rules_for("btn", Path::new("/work/site/src/index.html")) {
///     println!("{}\n{}", rule.source_file().display(), rule);
/// }
///
/// // After style sheets change on disk:
/// index.invalidate();
/// ```
pub struct RuleIndex {
    fs: Arc<dyn FileSystem>,
    resolver: Arc<dyn WorkspaceResolver>,
    config: ScopingConfig,
    cache: Mutex<RuleCache>,
}

impl RuleIndex {
    /// Create an index over a file system and workspace resolver.
    pub fn new<F, R>(fs: F, resolver: R, config: ScopingConfig) -> Self
    where
        F: FileSystem + 'static,
        R: WorkspaceResolver + 'static,
    {
        Self::with_shared(Arc::new(fs), Arc::new(resolver), config)
    }

    /// Create an index from shared handles.
    pub fn with_shared(
        fs: Arc<dyn FileSystem>,
        resolver: Arc<dyn WorkspaceResolver>,
        config: ScopingConfig,
    ) -> Self {
        Self {
            fs,
            resolver,
            config,
            cache: Mutex::new(RuleCache::new()),
        }
    }

    /// Create an index over the real file system with a fixed workspace root.
    pub fn for_root(root: impl Into<PathBuf>, config: ScopingConfig) -> Self {
        Self::new(OsFileSystem, FixedRoot::new(root), config)
    }

    /// The scoping configuration in use.
    pub fn config(&self) -> &ScopingConfig {
        &self.config
    }

    /// The file system the index reads through.
    pub fn file_system(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// The workspace root for a source file, if it has one.
    pub fn workspace_root(&self, source_file: &Path) -> Option<PathBuf> {
        self.resolver.resolve_workspace_root(source_file)
    }

    /// Candidate style sheets for a source file, in priority order.
    ///
    /// Empty when the source file has no workspace.
    pub fn candidate_files(&self, source_file: &Path) -> CandidateFileList {
        match self.workspace_root(source_file) {
            Some(root) => find_candidate_files(self.fs.as_ref(), source_file, &root, &self.config),
            None => {
                tracing::debug!(
                    target: targets::INDEX,
                    "no workspace for {}",
                    source_file.display()
                );
                CandidateFileList::new()
            }
        }
    }

    /// Rules relevant to `token` as referenced from `source_file`.
    ///
    /// Rules keep their order within each style sheet, and sheets follow
    /// candidate priority. An empty result means nothing relevant was found;
    /// unreadable sheets are skipped rather than reported.
    #[tracing::instrument(skip(self), target = "stylepeek::index", level = "debug")]
    pub fn rules_for(&self, token: &str, source_file: &Path) -> Vec<StyleRule> {
        let token = ReferenceToken::parse(token);
        let mut relevant = vec![];

        for style_file in &self.candidate_files(source_file) {
            let rules = self.rules_in(style_file, source_file);
            relevant.extend(
                rules
                    .iter()
                    .filter(|rule| SelectorMatcher::matches_token(rule.selector(), &token))
                    .cloned(),
            );
        }

        tracing::debug!(target: targets::INDEX, matches = relevant.len(), "lookup finished");
        relevant
    }

    /// All parsed rules of one style sheet, cached per source file.
    ///
    /// A sheet that cannot be read is cached as empty and not retried until
    /// [`invalidate`](Self::invalidate).
    pub fn rules_in(&self, style_file: &Path, source_file: &Path) -> Arc<[StyleRule]> {
        let key = RuleCacheKey::new(style_file, source_file);
        let mut cache = self.cache.lock();

        if let Some(rules) = cache.get(&key) {
            return rules;
        }

        let rules: Arc<[StyleRule]> = match self.fs.read_to_string(style_file) {
            Ok(content) => parse_css(&content, style_file).into(),
            Err(e) => {
                tracing::debug!(target: targets::INDEX, "caching empty rules: {}", e);
                Vec::<StyleRule>::new().into()
            }
        };

        tracing::trace!(
            target: targets::INDEX,
            path = %style_file.display(),
            rules = rules.len(),
            "cache miss"
        );

        cache.insert(key, rules.clone());
        rules
    }

    /// Resolve and memoize the line of a rule's selector in its style sheet.
    ///
    /// Returns `None` if the sheet cannot be read or the selector is not
    /// found in it.
    pub fn resolve_line(&self, rule: &StyleRule) -> Option<usize> {
        if rule.is_line_resolved() {
            return rule.source_line();
        }

        match self.fs.read_to_string(rule.source_file()) {
            Ok(content) => rule.resolve_line(&content),
            Err(e) => {
                tracing::debug!(target: targets::INDEX, "cannot resolve line: {}", e);
                None
            }
        }
    }

    /// Clear every cached parse.
    pub fn invalidate(&self) {
        let mut cache = self.cache.lock();
        tracing::debug!(target: targets::INDEX, entries = cache.len(), "invalidating rule cache");
        cache.invalidate_all();
    }

    /// Get the number of cached (style sheet, source file) entries.
    pub fn cached_entries(&self) -> usize {
        self.cache.lock().len()
    }
}

impl std::fmt::Debug for RuleIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleIndex")
            .field("config", &self.config)
            .field("cached_entries", &self.cached_entries())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn rules_for_filters_by_token() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::write(
            dir.path().join("index.css"),
            ".btn { color: red; }\n.card { padding: 0; }\n.btn:hover { color: blue; }",
        )
        .unwrap();

        let index = RuleIndex::for_root(dir.path(), ScopingConfig::default());
        let rules = index.rules_for("btn", &dir.path().join("index.html"));

        let selectors: Vec<_> = rules.iter().map(|r| r.selector()).collect();
        assert_eq!(selectors, [".btn", ".btn:hover"]);
    }

    #[test]
    fn source_outside_workspace_yields_nothing() {
        let dir = tempdir().unwrap();
        let other = tempdir().unwrap();
        fs::write(other.path().join("a.css"), ".a { color: red; }").unwrap();

        let index = RuleIndex::for_root(dir.path(), ScopingConfig::default());
        assert!(index.rules_for("a", &other.path().join("a.html")).is_empty());
        assert_eq!(index.cached_entries(), 0);
    }

    #[test]
    fn resolve_line_reads_sheet_once() {
        let dir = tempdir().unwrap();
        let sheet = dir.path().join("page.css");
        fs::write(&sheet, "body { margin: 0; }\n\n.hero { height: 10rem; }").unwrap();

        let index = RuleIndex::for_root(dir.path(), ScopingConfig::default());
        let rules = index.rules_for("hero", &dir.path().join("page.html"));
        assert_eq!(rules.len(), 1);
        assert_eq!(index.resolve_line(&rules[0]), Some(2));

        fs::remove_file(&sheet).unwrap();
        assert_eq!(index.resolve_line(&rules[0]), Some(2));
    }

    #[test]
    fn invalidate_clears_cache() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.css"), ".a { color: red; }").unwrap();

        let index = RuleIndex::for_root(dir.path(), ScopingConfig::default());
        index.rules_for("a", &dir.path().join("a.html"));
        assert_eq!(index.cached_entries(), 1);

        index.invalidate();
        assert_eq!(index.cached_entries(), 0);
    }
}
