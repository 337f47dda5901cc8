//! Upward file search
//!
//! Checks the start directory and each of its lexical parents for an entry
//! with an exact name:
//! - `contains`: membership test for a single directory
//! - `walk`: ancestor traversal that collects matching directories

mod contains;
mod walk;

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

pub use contains::dir_contains;
pub use walk::search_up;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("could not read directory entries of \"{path}\": {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parameters for a single upward search
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Exact entry name to look for, compared byte for byte
    pub target_name: OsString,
    /// Directory the walk starts from, normally the working directory
    pub start_path: PathBuf,
    /// Stop after the first (deepest) match
    pub stop_at_first: bool,
}

impl SearchQuery {
    pub fn new(target_name: impl Into<OsString>, start_path: impl Into<PathBuf>) -> Self {
        Self {
            target_name: target_name.into(),
            start_path: start_path.into(),
            stop_at_first: false,
        }
    }

    pub fn with_stop_at_first(mut self, stop_at_first: bool) -> Self {
        self.stop_at_first = stop_at_first;
        self
    }
}
