//! Verified location token model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{Event, User};
use crate::serialize::DictionaryValue;

/// A user's verified location result.
///
/// Produced once by the verification subsystem from a server response and
/// handed to callers as a finished, read-only record. Every field is
/// independently optional: a present `token` does not imply a present
/// `expires_at`, and constructing with nothing at all is legal. The signed
/// token is opaque here; verify it server-side with your secret key, and
/// compare `expires_at` against the current time in calling code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedLocationToken {
    #[serde(default)]
    user: Option<User>,

    #[serde(default)]
    events: Option<Vec<Event>>,

    #[serde(default)]
    token: Option<String>,

    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

impl VerifiedLocationToken {
    /// Create a token from verification output.
    ///
    /// No validation is performed; any combination of present and absent
    /// fields produces a valid instance.
    pub fn new(
        user: Option<User>,
        events: Option<Vec<Event>>,
        token: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            user,
            events,
            token,
            expires_at,
        }
    }

    /// Decode a token from a server response object.
    ///
    /// An object with none of the expected keys decodes to an all-absent
    /// token; anything other than a JSON object is rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidPayload(format!(
                "expected object, got {}",
                json_type_name(value)
            )));
        }

        let token: Self = serde_json::from_value(value.clone())?;
        log::debug!(
            "decoded verified location token with {} event(s)",
            token.events.as_ref().map_or(0, Vec::len)
        );
        Ok(token)
    }

    /// The verified user
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Events associated with this verification, in detection order
    pub fn events(&self) -> Option<&[Event]> {
        self.events.as_deref()
    }

    /// The signed JWT containing the user and events
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The instant the token expires
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl DictionaryValue for VerifiedLocationToken {}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
