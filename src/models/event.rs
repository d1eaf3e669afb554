//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Location;
use crate::serialize::DictionaryValue;

/// Event types reported by the verification backend
///
/// Types the server added after this crate was released decode as
/// `Unknown` instead of failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "user.entered_geofence")]
    UserEnteredGeofence,

    #[serde(rename = "user.exited_geofence")]
    UserExitedGeofence,

    #[serde(rename = "user.dwelled_in_geofence")]
    UserDwelledInGeofence,

    #[serde(rename = "user.entered_place")]
    UserEnteredPlace,

    #[serde(rename = "user.exited_place")]
    UserExitedPlace,

    #[serde(rename = "user.failed_fraud")]
    UserFailedFraud,

    #[serde(other, rename = "unknown")]
    Unknown,
}

/// A domain occurrence detected by the SDK and confirmed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server-assigned event record ID
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Detection time as an absolute UTC instant
    pub created_at: DateTime<Utc>,

    /// Whether the event was generated with a live API key
    #[serde(default)]
    pub live: bool,

    /// Event type (e.g. "user.entered_geofence")
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Detection confidence: 0 none, 1 low, 2 medium, 3 high
    #[serde(default)]
    pub confidence: u8,

    /// Location at which the event was detected (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl DictionaryValue for Event {}
