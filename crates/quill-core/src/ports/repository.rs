use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::RepoError;

/// Post repository - the document operations the HTTP layer relies on.
///
/// "Absent" is always `Ok(None)`; `Err` is reserved for store failures and
/// ids the store cannot address.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest `created_at` first. No limit is applied.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError>;

    /// Persist a new post and return it with its assigned id.
    async fn create(&self, fields: NewPost) -> Result<Post, RepoError>;

    /// Apply `changes` to the post and return it as stored after the update.
    async fn update_by_id(
        &self,
        id: &PostId,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError>;

    /// Remove a post, returning what was removed.
    async fn delete_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError>;
}
