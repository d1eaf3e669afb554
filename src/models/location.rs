//! Location model

use serde::{Deserialize, Serialize};

use crate::serialize::DictionaryValue;

/// A geographic point attached to a verification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Horizontal accuracy in meters (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl DictionaryValue for Location {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_dictionary_value() {
        let location = Location {
            latitude: 40.7128,
            longitude: -74.0060,
            accuracy: Some(5.0),
        };

        let map = location.dictionary_value();

        assert_eq!(map.get("latitude"), Some(&serde_json::json!(40.7128)));
        assert_eq!(map.get("longitude"), Some(&serde_json::json!(-74.0060)));
        assert_eq!(map.get("accuracy"), Some(&serde_json::json!(5.0)));
    }

    #[test]
    fn test_location_omits_absent_accuracy() {
        let location = Location {
            latitude: 0.0,
            longitude: 0.0,
            accuracy: None,
        };

        let map = location.dictionary_value();

        assert!(!map.contains_key("accuracy"));
    }

    #[test]
    fn test_location_deserializes_without_accuracy() {
        let location: Location =
            serde_json::from_str(r#"{"latitude": 51.5, "longitude": -0.12}"#).unwrap();

        assert_eq!(location.latitude, 51.5);
        assert_eq!(location.accuracy, None);
    }
}
