//! Single style rule definition.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::Declarations;
use crate::locate::selector_line;

/// A style rule extracted from a style sheet.
///
/// Each rule has:
/// - The selector exactly as written (trimmed, never empty)
/// - Its property declarations, in source order
/// - The file it was parsed from
/// - The selector's line in that file, resolved lazily
#[derive(Debug, Clone)]
pub struct StyleRule {
    selector: String,
    properties: Declarations,
    source_file: PathBuf,
    source_line: OnceLock<Option<usize>>,
}

impl StyleRule {
    /// Create a new style rule.
    pub fn new(
        selector: impl Into<String>,
        properties: Declarations,
        source_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            selector: selector.into(),
            properties,
            source_file: source_file.into(),
            source_line: OnceLock::new(),
        }
    }

    /// The selector text.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The property declarations.
    pub fn properties(&self) -> &Declarations {
        &self.properties
    }

    /// The style sheet this rule came from.
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// The 0-based line of the selector, if it has been resolved.
    pub fn source_line(&self) -> Option<usize> {
        self.source_line.get().copied().flatten()
    }

    /// Resolve the selector's line against the style sheet's content.
    ///
    /// The first resolution is kept; later calls return it without looking
    /// at `content`.
    pub fn resolve_line(&self, content: &str) -> Option<usize> {
        *self
            .source_line
            .get_or_init(|| selector_line(content, &self.selector))
    }

    /// Returns true once a line lookup has been attempted.
    pub fn is_line_resolved(&self) -> bool {
        self.source_line.get().is_some()
    }
}

impl PartialEq for StyleRule {
    fn eq(&self, other: &Self) -> bool {
        self.selector == other.selector
            && self.properties == other.properties
            && self.source_file == other.source_file
    }
}

impl Eq for StyleRule {}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (name, value) in self.properties.iter() {
            writeln!(f, "  {name}: {value};")?;
        }
        write!(f, "}}")
    }
}

impl Serialize for StyleRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StyleRule", 4)?;
        state.serialize_field("selector", &self.selector)?;
        state.serialize_field("properties", &self.properties)?;
        state.serialize_field("file", &self.source_file)?;
        state.serialize_field("line", &self.source_line())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> StyleRule {
        let props = [("color", "red"), ("margin", "0 auto")].into_iter().collect();
        StyleRule::new(".card", props, "/w/styles/app.css")
    }

    #[test]
    fn display_as_css_block() {
        assert_eq!(
            rule().to_string(),
            ".card {\n  color: red;\n  margin: 0 auto;\n}"
        );
    }

    #[test]
    fn line_resolved_once() {
        let rule = rule();
        assert!(!rule.is_line_resolved());
        assert_eq!(rule.source_line(), None);

        assert_eq!(rule.resolve_line("body {}\n.card { color: red; }"), Some(1));
        assert!(rule.is_line_resolved());

        // Later content is ignored once resolved.
        assert_eq!(rule.resolve_line(".card {}"), Some(1));
        assert_eq!(rule.source_line(), Some(1));
    }

    #[test]
    fn equality_ignores_line_state() {
        let a = rule();
        let b = rule();
        a.resolve_line(".card {}");
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_with_file_and_line() {
        let json = serde_json::to_value(rule()).unwrap();
        assert_eq!(json["selector"], ".card");
        assert_eq!(json["properties"]["margin"], "0 auto");
        assert_eq!(json["file"], "/w/styles/app.css");
        assert!(json["line"].is_null());
    }
}
