//! Grouping lookup results by style sheet.

use std::path::Path;

use super::StyleRule;

/// Rules from one style sheet, as returned by [`group_by_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup<'a> {
    /// File name of the style sheet (no directory).
    pub file_name: String,
    /// The rules, in result order.
    pub rules: Vec<&'a StyleRule>,
}

/// Group rules by style-sheet file name.
///
/// Groups appear in the order their first rule appears. Two sheets with the
/// same file name in different directories share a group.
pub fn group_by_file(rules: &[StyleRule]) -> Vec<RuleGroup<'_>> {
    let mut groups: Vec<RuleGroup<'_>> = vec![];

    for rule in rules {
        let file_name = file_name(rule.source_file());
        match groups.iter_mut().find(|g| g.file_name == file_name) {
            Some(group) => group.rules.push(rule),
            None => groups.push(RuleGroup {
                file_name,
                rules: vec![rule],
            }),
        }
    }

    groups
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}
