//! Reference tokens and selector matching.

mod matcher;
mod token;

pub use matcher::{SelectorMatcher, matches};
pub use token::ReferenceToken;
