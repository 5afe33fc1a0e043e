/*
[INPUT]:  Backend movie DTO schema
[OUTPUT]: Typed movie attributes usable as create/update payloads
[POS]:    Data layer - movie resource model
[UPDATE]: When the movie DTO gains or loses fields
*/

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Movie attributes as exchanged with `/api/filmes`.
///
/// Every field is optional so the same type serves as a create payload
/// (no id, no timestamps) and as a decoded response. Absent fields are not
/// serialized, unknown fields are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "nota", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<NaiveDateTime>,
}

impl Movie {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: Some(title.into()),
            rating: Some(rating),
            ..Self::default()
        }
    }

    /// Decode a movie from a JSON value returned by the client.
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Soft-deleted movies carry a deletion timestamp.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_movie_serializes_only_set_fields() {
        let movie = Movie::new("Central do Brasil", 9.5);
        let value = serde_json::to_value(&movie).expect("serialize");
        assert_eq!(value, json!({"titulo": "Central do Brasil", "nota": 9.5}));
    }

    #[test]
    fn test_decode_backend_dto() {
        let value = json!({
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "titulo": "Test Filme",
            "nota": 5.0,
            "updatedAt": "2024-05-01T12:30:00",
            "completedAt": null,
            "deletedAt": null,
            "usuario": null
        });
        let movie = Movie::from_value(value).expect("decode");
        assert_eq!(movie.title.as_deref(), Some("Test Filme"));
        assert_eq!(movie.rating, Some(5.0));
        assert!(movie.updated_at.is_some());
        assert!(!movie.is_deleted());
    }

    #[test]
    fn test_deleted_movie() {
        let movie = Movie::from_value(json!({"titulo": "Old", "deletedAt": "2024-01-01T00:00:00.123"}))
            .expect("decode");
        assert!(movie.is_deleted());
    }
}
