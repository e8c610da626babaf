//! Movie entity model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reelhub_core::types::MovieId;

/// A movie record owned by the API server.
///
/// The client holds no invariants on movies beyond what the create/update
/// form enforces. The API serializes the record id under `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Server-assigned movie identifier.
    #[serde(rename = "_id")]
    pub id: MovieId,
    /// Movie title.
    pub title: String,
    /// Movie director.
    pub director: String,
}

/// Data entered into the create/update movie form.
///
/// Both fields are required; validation runs before any request is built,
/// mirroring the `required` markers of the original form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MovieParams {
    /// Movie title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Movie director.
    #[validate(length(min = 1, message = "Director is required"))]
    pub director: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_decodes_wire_format() {
        let json = r#"{"_id":"42ab","title":"Alien","director":"Ridley Scott"}"#;
        let movie: Movie = serde_json::from_str(json).expect("deserialize");
        assert_eq!(movie.id.as_str(), "42ab");
        assert_eq!(movie.title, "Alien");
    }

    #[test]
    fn test_params_require_both_fields() {
        let empty = MovieParams::default();
        assert!(empty.validate().is_err());

        let full = MovieParams {
            title: "Alien".to_string(),
            director: "Ridley Scott".to_string(),
        };
        assert!(full.validate().is_ok());
    }
}
