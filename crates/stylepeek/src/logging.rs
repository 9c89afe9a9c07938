//! Tracing targets used by stylepeek.
//!
//! stylepeek uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. Embedders decide what to see:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("stylepeek::discovery=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// File discovery and directory walking.
    pub const DISCOVERY: &str = "stylepeek::discovery";
    /// Rule index and parse cache.
    pub const INDEX: &str = "stylepeek::index";
    /// Style-sheet parsing.
    pub const PARSER: &str = "stylepeek::parser";
    /// Usage search.
    pub const USAGES: &str = "stylepeek::usages";
    /// File watching.
    pub const WATCH: &str = "stylepeek::watch";
}
