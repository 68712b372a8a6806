// Data types for coordinates read from the input and the records written back out
pub mod record;

use tracing::{debug, info};
use tzf_rs::DefaultFinder;

pub use record::{Coordinate, ErrorRecord, ResultRecord};

/// Something that can resolve a coordinate to an IANA timezone identifier.
pub trait TimezoneLookup {
    /// Returns the timezone identifier covering `coordinate`, or `None` when no timezone
    /// polygon contains it.
    fn timezone_at(&self, coordinate: Coordinate) -> Option<&str>;
}

/// Offline lookup backed by the boundary dataset embedded in `tzf-rs`.
///
/// Building the finder decodes the embedded polygons and indexes them, so a single instance
/// should be created per process and shared across all records.
pub struct TzfLookup {
    finder: DefaultFinder,
}

impl TzfLookup {
    pub fn new() -> Self {
        info!("Loading timezone boundary index");
        let finder = DefaultFinder::new();
        debug!("Timezone boundary index loaded");
        Self { finder }
    }
}

impl Default for TzfLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLookup for TzfLookup {
    fn timezone_at(&self, coordinate: Coordinate) -> Option<&str> {
        // tzf-rs takes longitude first and signals a miss with an empty name
        let name = self
            .finder
            .get_tz_name(coordinate.longitude, coordinate.latitude);
        if name.is_empty() { None } else { Some(name) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_york() {
        let lookup = TzfLookup::new();
        let tz = lookup.timezone_at(Coordinate {
            latitude: 40.7128,
            longitude: -74.0060,
        });
        assert_eq!(tz, Some("America/New_York"));
    }

    #[test]
    fn test_several_cities() {
        let lookup = TzfLookup::new();
        let cases = [
            (48.8566, 2.3522, "Europe/Paris"),
            (35.6762, 139.6503, "Asia/Tokyo"),
            (52.5200, 13.4050, "Europe/Berlin"),
            (19.4326, -99.1332, "America/Mexico_City"),
        ];
        for (latitude, longitude, expected) in cases {
            let tz = lookup.timezone_at(Coordinate {
                latitude,
                longitude,
            });
            assert_eq!(tz, Some(expected), "lookup for ({}, {})", latitude, longitude);
        }
    }

    #[test]
    fn test_miss_is_none() {
        let lookup = TzfLookup::new();
        let tz = lookup.timezone_at(Coordinate {
            latitude: 40.0,
            longitude: 200.0,
        });
        assert_eq!(tz, None);
    }
}
