//! Selector-vs-token matching heuristic.
//!
//! This is a "fuzzy contains" matcher, not a selector engine. Selectors are
//! compared as lower-cased text, without parsing combinators or compound
//! parts, so a class candidate `btn` matches `.btn-primary` as well as
//! `.btn:hover`.

use super::token::ReferenceToken;

/// Combinators that may precede an element name in a selector.
const ELEMENT_PREFIXES: [char; 4] = [' ', '>', '+', '~'];

/// Check whether a style-sheet selector covers a reference token.
///
/// Both inputs are trimmed and compared case-insensitively. See
/// [`SelectorMatcher::matches_token`] for the individual checks.
pub fn matches(selector: &str, token: &str) -> bool {
    SelectorMatcher::matches_token(selector, &ReferenceToken::parse(token))
}

/// Selector matching engine.
pub struct SelectorMatcher;

impl SelectorMatcher {
    /// Check a selector against an already parsed token.
    ///
    /// Checks run in order and stop at the first hit:
    /// 1. the whole selector equals the token;
    /// 2. a class candidate appears as `.name`, `[class*="name"]` or
    ///    `[class~="name"]`;
    /// 3. an id candidate appears as `#name`;
    /// 4. the token's leading identifier appears as an element, either at the
    ///    start of the selector or right after a combinator.
    ///
    /// An empty token matches nothing.
    pub fn matches_token(selector: &str, token: &ReferenceToken) -> bool {
        if token.is_empty() {
            return false;
        }

        let selector = selector.trim().to_lowercase();

        selector == token.as_str()
            || token.classes().iter().any(|c| Self::has_class(&selector, c))
            || token.ids().iter().any(|id| Self::has_id(&selector, id))
            || token
                .element()
                .is_some_and(|name| Self::has_element(&selector, name))
    }

    /// Substring check for a class reference. `selector` must be lower-case.
    pub fn has_class(selector: &str, class: &str) -> bool {
        selector.contains(&format!(".{class}"))
            || selector.contains(&format!("[class*=\"{class}\"]"))
            || selector.contains(&format!("[class~=\"{class}\"]"))
    }

    /// Substring check for an id reference. `selector` must be lower-case.
    pub fn has_id(selector: &str, id: &str) -> bool {
        selector.contains(&format!("#{id}"))
    }

    /// Element check. The name only counts at the start of the selector or
    /// after a combinator, never inside a class or id name.
    pub fn has_element(selector: &str, name: &str) -> bool {
        selector.starts_with(name)
            || ELEMENT_PREFIXES
                .iter()
                .any(|prefix| selector.contains(&format!("{prefix}{name}")))
    }
}
