//! CLI command implementations

pub mod files;
pub mod rules;
pub mod usages;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use stylepeek::config::{ScopingConfig, ScopingMode};
use stylepeek::fs::OsFileSystem;
use stylepeek::workspace::{MarkerResolver, WorkspaceResolver};

/// Name of the config file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = "stylepeek.toml";

/// Options shared by every subcommand.
pub struct GlobalOptions {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub mode: Option<ScopingMode>,
}

/// Resolved workspace root and configuration for one command.
#[derive(Debug)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: ScopingConfig,
}

impl Workspace {
    /// Resolve the workspace for a command, optionally anchored at a source file.
    ///
    /// The root is `--root` if given, else the nearest marked ancestor of the
    /// source file, else the current directory.
    pub fn resolve(options: &GlobalOptions, source: Option<&Path>) -> Result<Self> {
        let root = match (&options.root, source) {
            (Some(root), _) => absolute(root)?,
            (None, Some(source)) => MarkerResolver::new(OsFileSystem)
                .resolve_workspace_root(&absolute(source)?)
                .map_or_else(current_dir, Ok)?,
            (None, None) => current_dir()?,
        };

        let mut config = match &options.config {
            Some(path) => ScopingConfig::load(path)?,
            None => {
                let path = root.join(CONFIG_FILE_NAME);
                if path.is_file() {
                    ScopingConfig::load(&path)?
                } else {
                    ScopingConfig::default()
                }
            }
        };

        if let Some(mode) = options.mode {
            config.mode = mode;
        }

        tracing::debug!("workspace root {}, mode {}", root.display(), config.mode);
        Ok(Self { root, config })
    }
}

/// Make a path absolute against the current directory.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Invalid path '{}'", path.display()))
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Cannot determine the current directory")
}
