//! Reference tokens: the bare symbols a caller wants matched.

use std::fmt;

/// A reference token, normalized and split into its match candidates.
///
/// A token is whatever the caller picked up from markup or code: a bare word
/// (`btn`), a class reference (`.btn`), an id reference (`#header`), or a
/// compound (`.btn.active`, `div.card`). Parsing it once lets the index
/// filter many selectors without re-scanning the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceToken {
    normalized: String,
    classes: Vec<String>,
    ids: Vec<String>,
    element: Option<String>,
}

impl ReferenceToken {
    /// Parse a raw token. Surrounding whitespace and case are ignored.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();

        let mut classes = prefixed_names(&normalized, '.');
        let mut ids = prefixed_names(&normalized, '#');

        // A bare word may name a class or an id.
        if is_bare_word(&normalized) {
            classes.push(normalized.clone());
            ids.push(normalized.clone());
        }

        let element = if normalized.starts_with('.') || normalized.starts_with('#') {
            None
        } else {
            leading_identifier(&normalized).map(str::to_owned)
        };

        Self {
            normalized,
            classes,
            ids,
            element,
        }
    }

    /// The lower-cased, trimmed token text.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns true if the token has no text left after trimming.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Candidate class names, in token order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Candidate id names, in token order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The leading element name, if the token could name an element.
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }
}

impl fmt::Display for ReferenceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

fn is_bare_word(token: &str) -> bool {
    !token.is_empty() && !token.contains(['.', '#'])
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Every non-empty name run following `prefix`.
fn prefixed_names(token: &str, prefix: char) -> Vec<String> {
    let mut names = vec![];
    let mut rest = token;

    while let Some(pos) = rest.find(prefix) {
        rest = &rest[pos + prefix.len_utf8()..];
        let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        if end > 0 {
            names.push(rest[..end].to_string());
        }
        rest = &rest[end..];
    }

    names
}

/// The `[A-Za-z][A-Za-z0-9]*` run at the start of the token.
fn leading_identifier(token: &str) -> Option<&str> {
    let mut chars = token.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    let end = chars
        .find(|(_, c)| !c.is_ascii_alphanumeric())
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    Some(&token[..end])
}
