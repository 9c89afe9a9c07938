//! Usages command implementation

use anyhow::Result;

use stylepeek::fs::OsFileSystem;
use stylepeek::usages::{UsageOptions, find_usages};

use super::{GlobalOptions, Workspace};

/// Print every markup usage of `token` as `path:line:column` (1-based).
pub fn usages_command(options: &GlobalOptions, token: &str) -> Result<()> {
    let workspace = Workspace::resolve(options, None)?;
    let usage_options = UsageOptions::from_config(&workspace.config);

    let usages = find_usages(&OsFileSystem, token, &workspace.root, &usage_options);
    if usages.is_empty() {
        println!("No usages found for '{}'.", token);
        return Ok(());
    }

    for usage in &usages {
        println!(
            "{}:{}:{}",
            usage.path.display(),
            usage.line + 1,
            usage.column + 1
        );
    }

    Ok(())
}
