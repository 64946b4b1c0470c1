//! MongoDB post repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::ReturnDocument;

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostChanges, PostId};
use quill_core::ports::PostRepository;

use super::connections::DatabaseConnection;
use super::entity::post::{self, PostDocument};

/// Post repository backed by the `posts` collection.
pub struct MongoPostRepository {
    posts: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(conn: &DatabaseConnection) -> Self {
        Self {
            posts: conn.posts(),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let cursor = self
            .posts
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(store_error)?;

        let documents: Vec<PostDocument> = cursor.try_collect().await.map_err(store_error)?;
        tracing::debug!(count = documents.len(), "Listed posts");

        documents.into_iter().map(Post::try_from).collect()
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let oid = post::parse_id(id)?;

        self.posts
            .find_one(post::by_id(oid))
            .await
            .map_err(store_error)?
            .map(Post::try_from)
            .transpose()
    }

    async fn create(&self, fields: NewPost) -> Result<Post, RepoError> {
        let mut document = PostDocument::from(fields);

        let result = self
            .posts
            .insert_one(&document)
            .await
            .map_err(store_error)?;

        document.id = result.inserted_id.as_object_id();
        tracing::debug!(post_id = ?document.id, "Inserted post");

        Post::try_from(document)
    }

    async fn update_by_id(
        &self,
        id: &PostId,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError> {
        let oid = post::parse_id(id)?;

        // `$set: {}` is rejected by the server; nothing to write anyway.
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        self.posts
            .find_one_and_update(post::by_id(oid), doc! { "$set": post::set_fields(changes) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(store_error)?
            .map(Post::try_from)
            .transpose()
    }

    async fn delete_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let oid = post::parse_id(id)?;

        self.posts
            .find_one_and_delete(post::by_id(oid))
            .await
            .map_err(store_error)?
            .map(Post::try_from)
            .transpose()
    }
}

fn store_error(err: mongodb::error::Error) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => RepoError::Connection(err.to_string()),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            RepoError::Serialization(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}
