//! Newtype wrappers for all domain identifiers.
//!
//! Using distinct types prevents accidentally passing a `UserId` where a
//! `MovieId` is expected. Server-assigned identifiers are opaque strings:
//! the API owns their format, so the client never parses or constructs
//! them. The [`AlertId`] is the one client-generated identifier and uses a
//! random UUID so ids stay unique for the lifetime of the queue.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype wrapper around an opaque, server-assigned
/// string identifier.
macro_rules! define_opaque_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

define_opaque_id!(
    /// Server-assigned identifier for a user account.
    UserId
);

define_opaque_id!(
    /// Server-assigned identifier for a movie record.
    MovieId
);

/// Client-generated identifier for an alert in the notification queue.
///
/// Random UUIDs keep ids collision-resistant, so a removed id never
/// reappears for the lifetime of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub Uuid);

impl AlertId {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return the inner UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_id_new() {
        let id1 = AlertId::new();
        let id2 = AlertId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_movie_id_display() {
        let id = MovieId::from("64a7f0c2e1");
        assert_eq!(id.to_string(), "64a7f0c2e1");
        assert_eq!(id.as_str(), "64a7f0c2e1");
    }

    #[test]
    fn test_opaque_id_serde_transparent() {
        let id = UserId::from("abc123");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"abc123\"");
        let parsed: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
