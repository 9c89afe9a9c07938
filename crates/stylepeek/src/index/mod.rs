//! Rule index and parse cache.

mod cache;
mod rule_index;

pub use cache::{RuleCache, RuleCacheKey};
pub use rule_index::RuleIndex;
