//! Scoping configuration.
//!
//! A [`ScopingConfig`] decides which style sheets are searched for a given
//! source file. It is built once by the host (from code or a TOML file) and
//! passed explicitly to discovery; nothing in the crate reads ambient
//! settings.
//!
//! # Loading from TOML
//!
//! ```ignore
//! let config = ScopingConfig::load("stylepeek.toml")?;
//! ```
//!
//! ```toml
//! mode = "smart"
//! file-extensions = ["css", "scss"]
//! fallback-to-global = false
//! common-directories = ["styles"]
//! max-scan-depth = 4
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Placeholder substituted with the source file's stem in name patterns.
pub const FILENAME_PLACEHOLDER: &str = "${filename}";

/// Policy for which directories are searched for style sheets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopingMode {
    /// Every style sheet in the workspace.
    Global,
    /// Style sheets in the source file's directory.
    Folder,
    /// Style sheets named after the source file, in its directory.
    Filename,
    /// Filename, then folder, then common directories, then optionally global.
    #[default]
    Smart,
}

impl ScopingMode {
    /// The mode's configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Folder => "folder",
            Self::Filename => "filename",
            Self::Smart => "smart",
        }
    }
}

impl FromStr for ScopingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "folder" => Ok(Self::Folder),
            "filename" => Ok(Self::Filename),
            "smart" => Ok(Self::Smart),
            other => Err(Error::config(None, format!("unknown scoping mode '{other}'"))),
        }
    }
}

impl std::fmt::Display for ScopingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for style-sheet discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScopingConfig {
    /// Which scoping policy to apply.
    pub mode: ScopingMode,
    /// Style-sheet extensions without the dot, in priority order.
    pub file_extensions: Vec<String>,
    /// In smart mode, walk the whole workspace when nothing closer is found.
    pub fallback_to_global: bool,
    /// Directories (relative to the workspace root) searched in smart mode.
    pub common_directories: Vec<String>,
    /// File-name templates containing `${filename}`.
    pub file_name_patterns: Vec<String>,
    /// Entry names never walked into.
    pub exclude_directories: Vec<String>,
    /// Deepest directory level a global walk descends to. Negative values
    /// are treated as 0.
    pub max_scan_depth: i64,
}

impl Default for ScopingConfig {
    fn default() -> Self {
        Self {
            mode: ScopingMode::Smart,
            file_extensions: strings(&["css", "scss", "sass", "less"]),
            fallback_to_global: true,
            common_directories: strings(&[
                "css",
                "styles",
                "src/styles",
                "src/css",
                "assets/css",
                "static",
            ]),
            file_name_patterns: strings(&[
                "${filename}",
                "${filename}.module",
                "${filename}.styles",
            ]),
            exclude_directories: strings(&[
                "node_modules",
                ".git",
                "target",
                "dist",
                "build",
                ".vscode",
            ]),
            max_scan_depth: 10,
        }
    }
}

impl ScopingConfig {
    /// Create the default (smart) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(None, e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&text).map_err(|e| Error::config(Some(path.to_path_buf()), e.to_string()))
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(None, e.to_string()))
    }

    /// Set the scoping mode.
    pub fn with_mode(mut self, mode: ScopingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the style-sheet extensions.
    pub fn with_extensions<S: Into<String>>(mut self, exts: impl IntoIterator<Item = S>) -> Self {
        self.file_extensions = exts.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the global fallback.
    pub fn with_fallback_to_global(mut self, enabled: bool) -> Self {
        self.fallback_to_global = enabled;
        self
    }

    /// Set the common directories.
    pub fn with_common_directories<S: Into<String>>(
        mut self,
        dirs: impl IntoIterator<Item = S>,
    ) -> Self {
        self.common_directories = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file-name patterns.
    pub fn with_file_name_patterns<S: Into<String>>(
        mut self,
        patterns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.file_name_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the excluded directory names.
    pub fn with_exclude_directories<S: Into<String>>(
        mut self,
        dirs: impl IntoIterator<Item = S>,
    ) -> Self {
        self.exclude_directories = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum scan depth.
    pub fn with_max_scan_depth(mut self, depth: i64) -> Self {
        self.max_scan_depth = depth;
        self
    }

    /// The scan depth, clamped to zero.
    pub fn scan_depth(&self) -> usize {
        usize::try_from(self.max_scan_depth).unwrap_or(0)
    }

    /// Returns true if `name` is an excluded directory name.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_directories.iter().any(|d| d == name)
    }

    /// Returns true if the file name carries a configured extension.
    ///
    /// The extension is the text after the last dot and is compared
    /// case-sensitively.
    pub fn has_style_extension(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                self.file_extensions.iter().any(|e| e == ext)
            }
            _ => false,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
