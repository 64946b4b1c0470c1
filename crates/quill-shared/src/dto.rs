//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`. Every field may be omitted or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Body of `PUT /api/posts/{id}`. Omitted or `null` fields are left as stored.
///
/// Unknown keys (including `id` and `createdAt`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub views: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_empty_body() {
        let req: CreatePostRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, CreatePostRequest::default());
    }

    #[test]
    fn create_request_accepts_null_tags() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"Hello","tags":null}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Hello"));
        assert!(req.tags.is_none());
    }

    #[test]
    fn update_request_ignores_immutable_fields() {
        let req: UpdatePostRequest =
            serde_json::from_str(r#"{"id":"x","createdAt":"2020-01-01","title":"X"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("X"));
        assert!(req.tags.is_none());
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let err = serde_json::from_str::<CreatePostRequest>(r#"{"tags":"x"}"#);
        assert!(err.is_err());
    }
}
