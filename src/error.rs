use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that abort the whole run.
///
/// The `Display` form of each variant is exactly the message reported to the caller in the
/// top-level `{"error": ...}` object.
#[derive(Error, Debug)]
pub enum AppError {
    /// No input path was given on the command line
    #[error("No input provided")]
    NoInput,

    /// The command line arguments were rejected
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// The input file could not be opened or read
    #[error("Unable to read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input was read but is not a usable list of locations
    #[error("JSON decode error or invalid data: {0}")]
    InvalidInput(#[from] InputError),

    /// Writing the result line to stdout failed
    #[error("Failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
}

/// Problems with the content of the input file.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file has no content at all
    #[error("File is empty")]
    Empty,

    /// The input parsed as JSON but its top-level value is not an array
    #[error("Input should be a list of locations")]
    NotAList,

    /// The input file is not valid UTF-8
    #[error("{0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    /// Wrapper for JSON parse errors
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Per-record failures. These never abort the run, each one becomes a single result entry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid input: Location should be an object")]
    NotAnObject,

    #[error("Invalid input: Missing latitude or longitude")]
    MissingCoordinate,

    #[error("Invalid input: Latitude and longitude should be numbers")]
    NotNumeric,

    /// The point is not covered by any timezone polygon
    #[error("Timezone not found")]
    NotFound,
}
