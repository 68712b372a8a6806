use std::{fs, path::Path};

use serde_json::Value;
use tracing::{Level, debug, info, span, warn};

use crate::{
    error::{AppError, InputError, RecordError},
    timezone::{Coordinate, ResultRecord, TimezoneLookup},
};

/// Reads the input file and returns its elements, one per location.
///
/// # Arguments
/// * `input` - Path given on the command line, if any
///
/// # Returns
/// * The elements of the top-level JSON array, in file order
/// * `AppError::NoInput` when no path was given
/// * `AppError::ReadInput` when the file cannot be opened or read
/// * `AppError::InvalidInput` when the content is empty, malformed or not a list
pub fn load_locations(input: Option<&Path>) -> Result<Vec<Value>, AppError> {
    let path = input.ok_or(AppError::NoInput)?;
    info!("Reading locations from {}", path.display());

    let bytes = fs::read(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let content = std::str::from_utf8(&bytes).map_err(InputError::from)?;

    let locations = parse_locations(content)?;
    debug!("Parsed {} locations", locations.len());
    Ok(locations)
}

/// Parses file content into the list of raw location values.
pub fn parse_locations(content: &str) -> Result<Vec<Value>, InputError> {
    if content.is_empty() {
        return Err(InputError::Empty);
    }

    match serde_json::from_str::<Value>(content)? {
        Value::Array(locations) => Ok(locations),
        _ => Err(InputError::NotAList),
    }
}

/// Resolves every location with `lookup`. The result has one record per location, in the
/// same order; failures for individual locations are recorded in place.
pub fn resolve_all<L: TimezoneLookup>(lookup: &L, locations: &[Value]) -> Vec<ResultRecord> {
    span!(Level::INFO, "resolve", count = locations.len()).in_scope(|| {
        locations
            .iter()
            .enumerate()
            .map(|(index, location)| {
                let outcome = resolve(lookup, location);
                match &outcome {
                    Ok(timezone) => debug!(index, timezone, "Resolved location"),
                    Err(e) => warn!(index, "Unresolved location: {}", e),
                }
                ResultRecord::from(outcome)
            })
            .collect()
    })
}

fn resolve<'a, L: TimezoneLookup>(lookup: &'a L, location: &Value) -> Result<&'a str, RecordError> {
    let coordinate = Coordinate::try_from(location)?;
    lookup
        .timezone_at(coordinate)
        .ok_or(RecordError::NotFound)
}
