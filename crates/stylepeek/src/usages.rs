//! Searching markup for uses of a class or id.
//!
//! The reverse of a rule lookup: given a token, find the `class`,
//! `className` and `id` attributes across the workspace that mention it.
//! Like the selector matcher this is text matching, not HTML parsing.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use crate::config::ScopingConfig;
use crate::discovery::walk_files;
use crate::fs::FileSystem;
use crate::logging::targets;

/// Extensions of files searched for usages by default.
pub const DEFAULT_MARKUP_EXTENSIONS: &[&str] = &[
    "html", "htm", "js", "jsx", "ts", "tsx", "vue", "php", "erb", "ejs", "hbs",
];

/// Which attribute a usage was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageKind {
    /// `class="..."`
    Class,
    /// `className="..."`
    ClassName,
    /// `id="..."`
    Id,
}

/// One place a token is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usage {
    /// The file containing the usage.
    pub path: PathBuf,
    /// 0-based line of the token.
    pub line: usize,
    /// 0-based column of the token, in characters.
    pub column: usize,
    /// The attribute the token appeared in.
    pub kind: UsageKind,
}

/// Options for [`find_usages`].
#[derive(Debug, Clone)]
pub struct UsageOptions {
    /// Extensions (without the dot) of files to search.
    pub extensions: Vec<String>,
    /// Walk rules: exclusions and scan depth are taken from here.
    pub scoping: ScopingConfig,
}

impl Default for UsageOptions {
    fn default() -> Self {
        Self::from_config(&ScopingConfig::default())
    }
}

impl UsageOptions {
    /// Default markup extensions with the walk rules of `config`.
    pub fn from_config(config: &ScopingConfig) -> Self {
        Self {
            extensions: DEFAULT_MARKUP_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            scoping: config.clone(),
        }
    }

    fn wants(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => self.extensions.iter().any(|e| e == ext),
            _ => false,
        }
    }
}

/// Find every usage of `token` in markup files under `workspace_root`.
///
/// A leading `.` or `#` on the token is ignored. Class usages match the
/// token as a whole word anywhere in the attribute value, reporting its
/// first such occurrence; id usages match
/// the whole value. Matching is case-sensitive. Files that cannot be read
/// are skipped.
#[tracing::instrument(skip(fs, options), target = "stylepeek::usages", level = "debug")]
pub fn find_usages(
    fs: &dyn FileSystem,
    token: &str,
    workspace_root: &Path,
    options: &UsageOptions,
) -> Vec<Usage> {
    let Some(patterns) = UsagePatterns::new(token) else {
        return vec![];
    };

    let files = walk_files(fs, workspace_root, &options.scoping, |name| options.wants(name));
    let mut usages = vec![];

    for path in files {
        match fs.read_to_string(&path) {
            Ok(text) => usages.extend(patterns.scan(&path, &text)),
            Err(e) => tracing::debug!(target: targets::USAGES, "skipping file: {}", e),
        }
    }

    usages
}

/// Compiled attribute patterns for one token.
struct UsagePatterns {
    patterns: [(UsageKind, Regex); 3],
}

impl UsagePatterns {
    fn new(token: &str) -> Option<Self> {
        let token = token.trim();
        let token = token
            .strip_prefix('.')
            .or_else(|| token.strip_prefix('#'))
            .unwrap_or(token);
        if token.is_empty() {
            return None;
        }

        let escaped = regex::escape(token);
        let class_value = format!(r#"=["'][^"']*?\b(?P<token>{escaped})\b[^"']*["']"#);
        let build = |pattern: String| Regex::new(&pattern).ok();

        Some(Self {
            patterns: [
                (UsageKind::Class, build(format!(r"\bclass{class_value}"))?),
                (UsageKind::ClassName, build(format!(r"\bclassName{class_value}"))?),
                (UsageKind::Id, build(format!(r#"\bid=["'](?P<token>{escaped})["']"#))?),
            ],
        })
    }

    fn scan(&self, path: &Path, text: &str) -> Vec<Usage> {
        let mut usages = vec![];

        for (kind, re) in &self.patterns {
            for caps in re.captures_iter(text) {
                let Some(token) = caps.name("token") else {
                    continue;
                };
                let (line, column) = line_and_column(text, token.start());
                usages.push(Usage {
                    path: path.to_path_buf(),
                    line,
                    column,
                    kind: *kind,
                });
            }
        }

        usages.sort_by_key(|u| (u.line, u.column));
        usages
    }
}

fn line_and_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, before[line_start..].chars().count())
}
