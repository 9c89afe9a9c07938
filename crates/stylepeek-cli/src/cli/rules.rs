//! Rules command implementation

use anyhow::Result;
use std::path::Path;

use stylepeek::index::RuleIndex;
use stylepeek::rules::group_by_file;

use super::{GlobalOptions, Workspace, absolute};

/// Print the rules that apply to `token` as referenced from `source`.
pub fn rules_command(options: &GlobalOptions, token: &str, source: &Path, json: bool) -> Result<()> {
    let source = absolute(source)?;
    let workspace = Workspace::resolve(options, Some(&source))?;
    let index = RuleIndex::for_root(&workspace.root, workspace.config);

    let rules = index.rules_for(token, &source);
    for rule in &rules {
        index.resolve_line(rule);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    if rules.is_empty() {
        println!("No rules found for '{}'.", token);
        return Ok(());
    }

    for group in group_by_file(&rules) {
        println!("/* {} */", group.file_name);
        for rule in group.rules {
            let line = rule
                .source_line()
                .map(|l| format!(":{}", l + 1))
                .unwrap_or_default();
            println!("/* {}{} */", rule.source_file().display(), line);
            println!("{}\n", rule);
        }
    }

    Ok(())
}
