//! User model

use serde::{Deserialize, Serialize};

use crate::models::{Fraud, Location};
use crate::serialize::DictionaryValue;

/// The verified subject of a location result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned user record ID
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Stable app-assigned user ID (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Installation-scoped device ID (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// Free-form description set by the app (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Last known location (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Fraud signals for this user (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud: Option<Fraud>,
}

impl DictionaryValue for User {}
