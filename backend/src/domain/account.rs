//! Finalized account record and preference sets.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DisplayName, EmailAddress, Password, Username};

/// Preferred genres and owned streaming services.
///
/// Pure data: the preference stage echoes exactly what was submitted, and the
/// completion stage copies the sets into the finalized record. Sets, not
/// lists — duplicates collapse and ordering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "preferredGenre")]
    pub preferred_genres: BTreeSet<String>,
    #[serde(rename = "ownedOtt")]
    pub owned_services: BTreeSet<String>,
}

/// The record handed to the user store at completion.
///
/// Created once, never read back by this system. Field names on the wire
/// follow the client contract of the registration API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRecord {
    #[serde(rename = "userId")]
    pub username: Username,
    // TODO: hash the password before persisting once a hashing scheme is chosen.
    #[serde(rename = "userPassword")]
    pub password: Password,
    #[serde(rename = "userName")]
    pub display_name: DisplayName,
    #[serde(rename = "userEmail")]
    pub email: EmailAddress,
    #[serde(rename = "preferredGenre")]
    pub preferred_genres: BTreeSet<String>,
    #[serde(rename = "ownedOtt")]
    pub owned_services: BTreeSet<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Serialisation contract for the finalized record.

    use chrono::TimeZone;
    use serde_json::Value;

    use super::*;

    #[test]
    fn record_serializes_with_wire_field_names() {
        let record = AccountRecord {
            username: Username::new("alice01").expect("valid username"),
            password: Password::new("abc123").expect("valid password"),
            display_name: DisplayName::new("Alice"),
            email: EmailAddress::new("alice@example.com").expect("valid email"),
            preferred_genres: BTreeSet::from(["drama".to_owned()]),
            owned_services: BTreeSet::from(["netflix".to_owned()]),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid time"),
        };

        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value.get("userId").and_then(Value::as_str), Some("alice01"));
        assert_eq!(
            value.get("userEmail").and_then(Value::as_str),
            Some("alice@example.com")
        );
        assert_eq!(
            value
                .get("preferredGenre")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(1)
        );
        assert!(
            value
                .get("createdAt")
                .and_then(Value::as_str)
                .is_some_and(|timestamp| !timestamp.is_empty())
        );
    }

    #[test]
    fn preferences_collapse_duplicates() {
        let parsed: Preferences = serde_json::from_value(serde_json::json!({
            "preferredGenre": ["drama", "drama", "sf"],
            "ownedOtt": ["netflix"],
        }))
        .expect("deserialize");
        assert_eq!(parsed.preferred_genres.len(), 2);
    }
}
