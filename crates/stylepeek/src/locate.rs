//! Locating a selector's line in style-sheet text.
//!
//! Parsing strips comments and does not track positions, so the line of a
//! rule is recovered afterwards by searching the original text. The search
//! is heuristic and returns the first plausible line.

use regex::RegexBuilder;

/// Find the 0-based line on which `selector` is defined in `content`.
///
/// A selector list spanning several lines is located by its first line.
/// Tried in order:
/// 1. a line (trimmed) where the selector, minus a leading `.` or `#`, is
///    followed by optional whitespace and one of `{`, `#`, `,`, `)`
///    (case-insensitive);
/// 2. for hyphenated selectors, a line containing `.part` or `#part` for any
///    hyphen-separated part;
/// 3. any line containing the selector text.
pub fn selector_line(content: &str, selector: &str) -> Option<usize> {
    let selector = selector
        .trim()
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches(',')
        .trim_end();
    let bare = selector
        .strip_prefix('.')
        .or_else(|| selector.strip_prefix('#'))
        .unwrap_or(selector);
    if bare.is_empty() {
        return None;
    }

    let pattern = format!(r"{}\s*[{{#,)]", regex::escape(bare));
    if let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() {
        if let Some(line) = content.lines().position(|line| re.is_match(line.trim())) {
            return Some(line);
        }
    }

    if bare.contains('-') {
        let needles: Vec<String> = bare
            .split('-')
            .filter(|part| !part.is_empty())
            .flat_map(|part| [format!(".{part}"), format!("#{part}")])
            .collect();
        let hit = content
            .lines()
            .position(|line| needles.iter().any(|n| line.contains(n.as_str())));
        if hit.is_some() {
            return hit;
        }
    }

    content.lines().position(|line| line.contains(bare))
}
