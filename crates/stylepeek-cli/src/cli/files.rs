//! Files command implementation

use anyhow::Result;
use std::path::Path;

use stylepeek::index::RuleIndex;

use super::{GlobalOptions, Workspace, absolute};

/// Print the candidate style sheets for `source`, highest priority first.
pub fn files_command(options: &GlobalOptions, source: &Path) -> Result<()> {
    let source = absolute(source)?;
    let workspace = Workspace::resolve(options, Some(&source))?;
    let index = RuleIndex::for_root(&workspace.root, workspace.config);

    let candidates = index.candidate_files(&source);
    if candidates.is_empty() {
        println!("No style sheets found.");
        return Ok(());
    }

    for path in &candidates {
        println!("{}", path.display());
    }

    Ok(())
}
