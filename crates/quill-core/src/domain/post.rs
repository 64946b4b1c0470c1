use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a post.
///
/// Opaque to the domain: each repository decides which strings it can
/// address and reports the rest as [`RepoError::InvalidId`](crate::RepoError).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Post entity - a single blog entry.
///
/// Every text field is optional; a post with nothing but its id,
/// timestamp and view counter is still a valid post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub views: i64,
}

impl Post {
    /// Build a post from creation fields, applying the schema defaults.
    pub fn new(id: PostId, fields: NewPost) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            author: fields.author,
            tags: fields.tags,
            created_at: Utc::now(),
            views: 0,
        }
    }
}

/// Caller-supplied fields for a new post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

/// Partial update of a post. `None` leaves the stored value alone.
///
/// `id` and `created_at` are not part of the change set: they never move
/// once the post exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub views: Option<i64>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.tags.is_none()
            && self.views.is_none()
    }

    /// Overwrite the fields of `post` that this change set carries.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = Some(title);
        }
        if let Some(content) = self.content {
            post.content = Some(content);
        }
        if let Some(author) = self.author {
            post.author = Some(author);
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        if let Some(views) = self.views {
            post.views = views;
        }
    }
}
