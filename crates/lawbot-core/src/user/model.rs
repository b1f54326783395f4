//! UserProfile domain model.
//!
//! Represents the identity the backend reports for the current session.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque user identity.
///
/// The backend sends a numeric primary key; the client never does arithmetic
/// on it, so both numbers and strings are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawUserId {
            Number(i64),
            Text(String),
        }

        Ok(match RawUserId::deserialize(deserializer)? {
            RawUserId::Number(n) => UserId(n.to_string()),
            RawUserId::Text(s) => UserId(s),
        })
    }
}

/// The authenticated user of the current session.
///
/// Only `id`, `name` and `email` are guaranteed; the profile fields are filled
/// in at signup and may be `null` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl UserProfile {
    /// Human-readable location, most specific first ("Chennai, Tamil Nadu, India").
    pub fn display_location(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
