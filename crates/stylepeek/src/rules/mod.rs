//! Style rules and their declarations.

mod declarations;
mod group;
mod rule;

pub use declarations::Declarations;
pub use group::{RuleGroup, group_by_file};
pub use rule::StyleRule;
