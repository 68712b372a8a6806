use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, error::ErrorKind};

use crate::error::AppError;

/// Resolve a JSON list of coordinates to IANA timezone identifiers using an offline
/// timezone boundary dataset. Results are printed to stdout as a single JSON line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON file containing a list of `{"latitude": .., "longitude": ..}` objects
    #[arg(allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Arguments after the input path are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,

    /// Exit with status 1 when the run fails as a whole (the printed JSON is unchanged)
    #[arg(long)]
    pub fail_on_error: bool,
}

impl Cli {
    /// Parses `args`, turning any rejection into `AppError::Usage` so that it can be reported
    /// on stdout like every other failure. Help and version requests are printed and exit.
    pub fn parse_args<I, T>(args: I) -> Result<Cli, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).or_else(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => Err(AppError::Usage(usage_message(&e))),
        })
    }
}

/// First line of clap's rendered error without its `error: ` prefix.
fn usage_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").trim().to_string()
}
