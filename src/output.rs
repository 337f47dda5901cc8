//! Output formatting for JSON and text modes

use serde::Serialize;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Result of a search, as printed by `--json`
///
/// JSON strings must be Unicode, so names and paths that are not valid UTF-8
/// appear here with replacement characters. Text mode prints them verbatim.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub filename: String,
    pub start: String,
    pub first_only: bool,
    pub paths: Vec<String>,
}

impl SearchResult {
    pub fn new(filename: &OsStr, start: &Path, first_only: bool, paths: &[PathBuf]) -> Self {
        Self {
            filename: filename.to_string_lossy().into_owned(),
            start: start.display().to_string(),
            first_only,
            paths: paths.iter().map(|p| p.display().to_string()).collect(),
        }
    }
}

/// Write one path per line, byte for byte as the OS reported it
pub fn write_paths<W: Write>(out: &mut W, paths: &[PathBuf]) -> io::Result<()> {
    for path in paths {
        out.write_all(path.as_os_str().as_encoded_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Print JSON output to stdout
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    }
}
