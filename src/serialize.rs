//! Structural serialization support
//!
//! Every model in this crate can render itself as a generic key/value
//! mapping, the intermediate form used before JSON encoding or logging.
//! Nested models render through their own conversion, so a mapping is
//! always self-contained.

use serde::Serialize;
use serde_json::{Map, Value};

/// Structural conversion to a generic key/value mapping.
pub trait DictionaryValue: Serialize {
    /// Render this model as a map from field name to JSON value.
    ///
    /// Deterministic for an unmodified value and never fails: a value
    /// that does not serialize to a JSON object yields an empty map.
    fn dictionary_value(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl DictionaryValue for Point {}

    #[test]
    fn test_dictionary_value_maps_fields() {
        let point = Point { x: 3, y: 7 };
        let map = point.dictionary_value();

        assert_eq!(map.get("x"), Some(&Value::from(3)));
        assert_eq!(map.get("y"), Some(&Value::from(7)));
    }

    #[test]
    fn test_dictionary_value_is_deterministic() {
        let point = Point { x: -1, y: 0 };
        assert_eq!(point.dictionary_value(), point.dictionary_value());
    }
}
