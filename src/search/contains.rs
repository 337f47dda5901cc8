use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

/// Returns true if `dir` directly contains an entry named exactly `name`.
///
/// Any entry type counts. Names are compared as raw OS strings, so the match
/// is case-sensitive and unnormalized.
pub fn dir_contains(dir: &Path, name: &OsStr) -> io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        if entry?.file_name().as_os_str() == name {
            return Ok(true);
        }
    }
    Ok(false)
}
