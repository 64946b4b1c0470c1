//! Post document schema for the `posts` collection.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{DateTime as BsonDateTime, Document, doc};
use serde::{Deserialize, Serialize};

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostChanges, PostId};

/// A post as stored in MongoDB.
///
/// Missing `tags`, `views` or `createdAt` read back as their defaults, so
/// documents written by other clients still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "BsonDateTime::now")]
    pub created_at: BsonDateTime,
    #[serde(default)]
    pub views: i64,
}

/// New document with schema defaults. `_id` is left for the store to assign.
impl From<NewPost> for PostDocument {
    fn from(fields: NewPost) -> Self {
        Self {
            id: None,
            title: fields.title,
            content: fields.content,
            author: fields.author,
            tags: fields.tags,
            created_at: BsonDateTime::now(),
            views: 0,
        }
    }
}

/// Conversion from a stored document to the domain post.
impl TryFrom<PostDocument> for Post {
    type Error = RepoError;

    fn try_from(document: PostDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| RepoError::Serialization("post document has no _id".to_string()))?;

        Ok(Self {
            id: PostId::new(id.to_hex()),
            title: document.title,
            content: document.content,
            author: document.author,
            tags: document.tags,
            created_at: to_chrono(document.created_at),
            views: document.views,
        })
    }
}

/// Parse a post id into the ObjectId it addresses.
pub fn parse_id(id: &PostId) -> Result<ObjectId, RepoError> {
    ObjectId::parse_str(id.as_str()).map_err(|_| RepoError::InvalidId(id.to_string()))
}

/// Filter matching a single post by id.
pub fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// Build the `$set` body for a change set. Empty when nothing changes.
pub fn set_fields(changes: PostChanges) -> Document {
    let mut set = Document::new();
    if let Some(title) = changes.title {
        set.insert("title", title);
    }
    if let Some(content) = changes.content {
        set.insert("content", content);
    }
    if let Some(author) = changes.author {
        set.insert("author", author);
    }
    if let Some(tags) = changes.tags {
        set.insert("tags", tags);
    }
    if let Some(views) = changes.views {
        set.insert("views", views);
    }
    set
}

fn to_chrono(at: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson};

    #[test]
    fn new_document_has_defaults_and_no_id() {
        let document = PostDocument::from(NewPost {
            title: Some("Hello".to_string()),
            ..Default::default()
        });

        assert!(document.id.is_none());
        assert_eq!(document.views, 0);
        assert!(document.tags.is_empty());

        let raw = bson::to_document(&document).unwrap();
        assert!(!raw.contains_key("_id"));
        assert!(!raw.contains_key("content"));
        assert_eq!(raw.get_str("title").unwrap(), "Hello");
        assert!(matches!(raw.get("createdAt"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn reads_sparse_document_with_defaults() {
        let id = ObjectId::new();
        let raw = doc! { "_id": id, "title": "Only a title", "__v": 0 };

        let document: PostDocument = bson::from_document(raw).unwrap();
        let post = Post::try_from(document).unwrap();

        assert_eq!(post.id.as_str(), id.to_hex());
        assert_eq!(post.title.as_deref(), Some("Only a title"));
        assert!(post.tags.is_empty());
        assert_eq!(post.views, 0);
    }

    #[test]
    fn document_without_id_is_rejected() {
        let document = PostDocument::from(NewPost::default());
        assert!(matches!(
            Post::try_from(document),
            Err(RepoError::Serialization(_))
        ));
    }

    #[test]
    fn created_at_keeps_millisecond_precision() {
        let at = BsonDateTime::from_millis(1_700_000_000_123);
        assert_eq!(to_chrono(at).timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn malformed_id_is_invalid_not_missing() {
        let err = parse_id(&PostId::new("not-an-object-id")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidId(_)));

        let id = ObjectId::new();
        assert_eq!(parse_id(&PostId::new(id.to_hex())).unwrap(), id);
    }

    #[test]
    fn set_only_contains_changed_fields() {
        let set = set_fields(PostChanges {
            title: Some("X".to_string()),
            tags: Some(vec!["a".to_string()]),
            ..Default::default()
        });

        assert_eq!(set.len(), 2);
        assert_eq!(set.get_str("title").unwrap(), "X");
        assert!(set_fields(PostChanges::default()).is_empty());
    }
}
