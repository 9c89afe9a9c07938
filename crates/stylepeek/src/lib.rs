//! Style-rule lookup for CSS class and id references.
//!
//! Given a token referenced from a source file (a class name, an id, or a
//! compound such as `div.card`), this crate finds the style rules that apply
//! to it, featuring:
//!
//! - **Discovery**: Scoped search for candidate style sheets (global, folder,
//!   filename or smart tiers)
//! - **Parsing**: A lightweight, regex-based rule extractor
//! - **Matching**: Textual selector matching with class, id and element
//!   boundaries
//! - **Caching**: Per-workspace parse cache with explicit invalidation
//! - **Hot Reload**: Invalidate the cache when style sheets change
//!
//! # Example
//!
//! ```ignore
//! use stylepeek::prelude::*;
//!
//! let config = ScopingConfig::load("stylepeek.toml")?;
//! let index = RuleIndex::for_root("/work/site", config);
//!
//! for rule in index.rules_for("btn", Path::new("/work/site/src/index.html")) {
//!     println!("{rule}");
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod fs;
pub mod index;
pub mod locate;
pub mod logging;
pub mod parser;
pub mod rules;
pub mod selector;
pub mod usages;
pub mod workspace;

#[cfg(feature = "hot-reload")]
pub mod hot_reload;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{ScopingConfig, ScopingMode};
    pub use crate::discovery::{CandidateFileList, find_candidate_files};
    pub use crate::fs::{FileSystem, OsFileSystem};
    pub use crate::index::RuleIndex;
    pub use crate::parser::parse_css;
    pub use crate::rules::{Declarations, RuleGroup, StyleRule, group_by_file};
    pub use crate::selector::{ReferenceToken, SelectorMatcher, matches};
    pub use crate::usages::{Usage, UsageOptions, find_usages};
    pub use crate::workspace::{FixedRoot, MarkerResolver, WorkspaceResolver};

    #[cfg(feature = "hot-reload")]
    pub use crate::hot_reload::WorkspaceWatcher;
}
