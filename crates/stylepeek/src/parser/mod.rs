//! Style-sheet parsing module.

mod css_parser;

pub use css_parser::{parse_css, parse_declarations, strip_comments};
