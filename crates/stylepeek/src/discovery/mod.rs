//! Style-sheet discovery.
//!
//! Given a source file and its workspace root, discovery produces the
//! priority-ordered list of style sheets that may hold rules for it. Which
//! directories are searched is governed by a [`ScopingConfig`].
//!
//! [`ScopingConfig`]: crate::config::ScopingConfig

mod candidates;
mod engine;

pub use candidates::CandidateFileList;
pub use engine::{filename_matches, find_candidate_files, folder_files, global_files};
pub(crate) use engine::walk_files;
