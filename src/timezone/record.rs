use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, RecordError};

/// A validated input location, in degrees. No range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<&Value> for Coordinate {
    type Error = RecordError;

    /// Reads `latitude` and `longitude` from one element of the input list.
    ///
    /// A field that is absent or `null` counts as missing. Missing fields are reported
    /// before wrongly typed ones.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let location = value.as_object().ok_or(RecordError::NotAnObject)?;

        let (Some(latitude), Some(longitude)) =
            (field(location, "latitude"), field(location, "longitude"))
        else {
            return Err(RecordError::MissingCoordinate);
        };

        match (latitude.as_f64(), longitude.as_f64()) {
            (Some(latitude), Some(longitude)) => Ok(Coordinate {
                latitude,
                longitude,
            }),
            _ => Err(RecordError::NotNumeric),
        }
    }
}

fn field<'a>(location: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    location.get(key).filter(|value| !value.is_null())
}

/// Outcome for a single input location. Serializes to a one-key object, either
/// `{"timezone": ...}` or `{"error": ...}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ResultRecord {
    Timezone { timezone: String },
    Error { error: String },
}

impl From<Result<&str, RecordError>> for ResultRecord {
    fn from(outcome: Result<&str, RecordError>) -> Self {
        match outcome {
            Ok(timezone) => ResultRecord::Timezone {
                timezone: timezone.to_string(),
            },
            Err(e) => ResultRecord::Error {
                error: e.to_string(),
            },
        }
    }
}

/// Object printed in place of the result list when the run fails as a whole
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub error: String,
}

impl From<&AppError> for ErrorRecord {
    fn from(e: &AppError) -> Self {
        ErrorRecord {
            error: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_coordinate() {
        let value = json!({"latitude": 40.7128, "longitude": -74.0060, "name": "NYC"});
        let coordinate = Coordinate::try_from(&value).unwrap();
        assert_eq!(coordinate.latitude, 40.7128);
        assert_eq!(coordinate.longitude, -74.0060);
    }

    #[test]
    fn test_integer_coordinates_are_numbers() {
        let value = json!({"latitude": 52, "longitude": 13});
        let coordinate = Coordinate::try_from(&value).unwrap();
        assert_eq!(coordinate.latitude, 52.0);
        assert_eq!(coordinate.longitude, 13.0);
    }

    #[test]
    fn test_missing_and_null_fields() {
        for value in [
            json!({"latitude": 40.0}),
            json!({"longitude": -74.0}),
            json!({}),
            json!({"latitude": null, "longitude": -74.0}),
            json!({"latitude": 40.0, "longitude": null}),
        ] {
            assert_eq!(
                Coordinate::try_from(&value),
                Err(RecordError::MissingCoordinate),
                "value: {}",
                value
            );
        }
    }

    #[test]
    fn test_missing_wins_over_wrong_type() {
        let value = json!({"latitude": "40.0"});
        assert_eq!(
            Coordinate::try_from(&value),
            Err(RecordError::MissingCoordinate)
        );
    }

    #[test]
    fn test_non_numeric_fields() {
        for value in [
            json!({"latitude": "40.0", "longitude": -74.0}),
            json!({"latitude": 40.0, "longitude": true}),
            json!({"latitude": [40.0], "longitude": {"deg": -74.0}}),
        ] {
            assert_eq!(
                Coordinate::try_from(&value),
                Err(RecordError::NotNumeric),
                "value: {}",
                value
            );
        }
    }

    #[test]
    fn test_non_object_elements() {
        for value in [json!([40.0, -74.0]), json!("40,-74"), json!(null), json!(3)] {
            assert_eq!(
                Coordinate::try_from(&value),
                Err(RecordError::NotAnObject),
                "value: {}",
                value
            );
        }
    }

    #[test]
    fn test_result_record_shape() {
        let ok = ResultRecord::from(Ok("Europe/Paris"));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"timezone": "Europe/Paris"})
        );

        let miss = ResultRecord::from(Err(RecordError::NotFound));
        assert_eq!(
            serde_json::to_value(&miss).unwrap(),
            json!({"error": "Timezone not found"})
        );
    }

    #[test]
    fn test_error_record_from_app_error() {
        let record = ErrorRecord::from(&AppError::NoInput);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"error": "No input provided"})
        );
    }
}
