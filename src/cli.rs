use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use std::ffi::OsString;
use thiserror::Error;

/// Find FILENAME in the current directory and each of its ancestors
#[derive(Parser, Debug)]
#[command(name = "searchup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print the first occurrence of FILENAME and stop walking up the tree
    #[arg(short = 'f', long = "first")]
    pub first_only: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Log each checked directory to stderr (-vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Exact name of the file or directory to look for
    #[arg(value_name = "FILENAME", value_parser = filename_parser())]
    pub filename: OsString,
}

/// Accepts any non-empty OS string, UTF-8 or not
fn filename_parser() -> impl TypedValueParser<Value = OsString> {
    OsStringValueParser::new().try_map(|name| {
        if name.is_empty() {
            Err("FILENAME cannot be empty")
        } else {
            Ok(name)
        }
    })
}

#[derive(Error, Debug)]
pub enum UsageError {
    #[error("could not get working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}
