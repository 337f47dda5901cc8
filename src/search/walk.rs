use super::{SearchError, SearchQuery, dir_contains};
use std::path::{Path, PathBuf};

/// Walk from `query.start_path` towards the root, returning every directory
/// that contains `query.target_name`, deepest first.
///
/// The root is only searched when it is the start directory itself. Parents are
/// derived lexically, so symlinked components are not resolved.
pub fn search_up(query: SearchQuery) -> Result<Vec<PathBuf>, SearchError> {
    let SearchQuery {
        target_name,
        start_path,
        stop_at_first,
    } = query;

    let mut found = Vec::new();
    let mut current: &Path = &start_path;

    loop {
        tracing::debug!(dir = %current.display(), "checking");
        let matched =
            dir_contains(current, &target_name).map_err(|source| SearchError::DirectoryRead {
                path: current.to_path_buf(),
                source,
            })?;

        if matched {
            tracing::debug!(dir = %current.display(), name = ?target_name, "match");
            found.push(current.to_path_buf());
            if stop_at_first {
                break;
            }
        }

        // A parent without a parent of its own is the root; it is not searched.
        match current.parent() {
            Some(parent) if parent.parent().is_some() => current = parent,
            _ => {
                tracing::trace!(dir = %current.display(), "reached root boundary");
                break;
            }
        }
    }

    Ok(found)
}
