use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Scratch directory removed on drop
pub struct ScratchDir(PathBuf);

impl ScratchDir {
    pub fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "searchup_{}_{}_{}_{}",
            prefix,
            std::process::id(),
            nanos,
            counter
        ));
        fs::create_dir_all(&dir).unwrap();
        // Canonical so results compare equal on platforms with a symlinked temp dir
        Self(dir.canonicalize().unwrap())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Creates `SubA/SubB/SubC` with `file_name` in each level.
    /// Returns the sub-directories deepest first.
    pub fn nested_with_file(&self, file_name: &str) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        let mut current = self.0.clone();
        for name in ["SubA", "SubB", "SubC"] {
            current = current.join(name);
            fs::create_dir(&current).unwrap();
            fs::write(current.join(file_name), "").unwrap();
            dirs.push(current.clone());
        }
        dirs.reverse();
        dirs
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}
