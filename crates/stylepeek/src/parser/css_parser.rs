//! Lightweight style-sheet parser.
//!
//! This module turns raw style-sheet text into [`StyleRule`]s without a CSS
//! grammar. Blocks are found by naive brace pairing and declarations by a
//! `name: value;` scan, which is enough to show and locate rules for a
//! selector. Nesting and at-rules are not modeled: a nested block ends at the
//! first `}`, and whatever text precedes it becomes part of the outer body.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::logging::targets;
use crate::rules::{Declarations, StyleRule};

fn comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid comment pattern"))
}

fn block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([^{]+)\{([^}]+)\}").expect("valid block pattern"))
}

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([a-zA-Z-]+)\s*:\s*([^;]+);").expect("valid declaration pattern")
    })
}

/// Parse style-sheet text into a list of style rules.
///
/// # Arguments
///
/// * `css` - The style-sheet content, already read by the caller.
/// * `source_path` - The file the content came from, recorded on each rule.
///
/// # Returns
///
/// The rules in source order. Malformed input never fails: unbalanced
/// braces simply stop block extraction, and blocks whose selector or body is
/// blank are skipped.
///
/// # Example
///
/// ```ignore
/// let rules = parse_css(".a { color: red; }", Path::new("app.css"));
/// assert_eq!(rules[0].selector(), ".a");
/// assert_eq!(rules[0].properties().get("color"), Some("red"));
/// ```
pub fn parse_css(css: &str, source_path: &Path) -> Vec<StyleRule> {
    let stripped = strip_comments(css);
    let mut rules = vec![];

    for caps in block_regex().captures_iter(&stripped) {
        let selector = caps[1].trim();
        let body = caps[2].trim();

        if selector.is_empty() || body.is_empty() {
            continue;
        }

        rules.push(StyleRule::new(
            selector,
            parse_declarations(body),
            source_path,
        ));
    }

    tracing::trace!(
        target: targets::PARSER,
        path = %source_path.display(),
        rules = rules.len(),
        "parsed style sheet"
    );

    rules
}

/// Remove `/* ... */` comments. An unterminated comment is left in place.
pub fn strip_comments(css: &str) -> String {
    comment_regex().replace_all(css, "").into_owned()
}

/// Parse `name: value;` pairs from a declaration body.
///
/// A trailing declaration without a semicolon is ignored. Later duplicates
/// replace earlier values.
pub fn parse_declarations(body: &str) -> Declarations {
    declaration_regex()
        .captures_iter(body)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
        .collect()
}
