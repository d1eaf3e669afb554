//! Fraud signal model

use serde::{Deserialize, Serialize};

use crate::serialize::DictionaryValue;

/// Fraud signals evaluated by the verification backend
///
/// Each flag defaults to false when the server omits it, so a partial
/// payload still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fraud {
    /// Whether the user passed all fraud checks
    #[serde(default)]
    pub passed: bool,

    /// Whether fraud checks were bypassed for this user
    #[serde(default)]
    pub bypassed: bool,

    /// Whether the location was verified by the backend
    #[serde(default)]
    pub verified: bool,

    /// Whether the request came through a proxy or VPN
    #[serde(default)]
    pub proxy: bool,

    /// Whether the location was mocked on the device
    #[serde(default)]
    pub mocked: bool,

    /// Whether the device appears jailbroken or rooted
    #[serde(default)]
    pub compromised: bool,

    /// Whether the user moved implausibly fast between updates
    #[serde(default)]
    pub jumped: bool,
}

impl DictionaryValue for Fraud {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraud_defaults_to_all_false() {
        let fraud = Fraud::default();

        assert!(!fraud.passed);
        assert!(!fraud.proxy);
        assert!(!fraud.jumped);
    }

    #[test]
    fn test_fraud_decodes_partial_payload() {
        let fraud: Fraud =
            serde_json::from_str(r#"{"passed": true, "verified": true}"#).unwrap();

        assert!(fraud.passed);
        assert!(fraud.verified);
        assert!(!fraud.mocked);
    }

    #[test]
    fn test_fraud_dictionary_value_has_all_flags() {
        let map = Fraud::default().dictionary_value();

        assert_eq!(map.len(), 7);
        assert_eq!(map.get("passed"), Some(&serde_json::json!(false)));
    }
}
