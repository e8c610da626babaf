//! Authenticated user identity.

use serde::{Deserialize, Serialize};

use reelhub_core::types::UserId;

/// The signed-in user: id, email, and the bearer token attached to every
/// authenticated API call.
///
/// An `Identity` is created wholesale from a successful sign-in response
/// and is never mutated in place; the session store replaces it as a unit.
/// The API serializes the record id under `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Server-assigned user identifier.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Email address used to sign in.
    pub email: String,
    /// Opaque bearer token for the `Authorization` header.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wire_format() {
        let json = r#"{"_id":"5e8c2f","email":"a@b.com","token":"33ad6372f"}"#;
        let identity: Identity = serde_json::from_str(json).expect("deserialize");
        assert_eq!(identity.id.as_str(), "5e8c2f");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.token, "33ad6372f");
    }
}
