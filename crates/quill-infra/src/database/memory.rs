//! In-memory post repository - used by tests and by builds without MongoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostChanges, PostId};
use quill_core::ports::PostRepository;

/// Post repository over a `HashMap` behind an async `RwLock`.
///
/// Ids are UUID v4 strings. Note: data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn check_id(id: &PostId) -> Result<(), RepoError> {
        Uuid::parse_str(id.as_str())
            .map(|_| ())
            .map_err(|_| RepoError::InvalidId(id.to_string()))
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        Self::check_id(id)?;
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn create(&self, fields: NewPost) -> Result<Post, RepoError> {
        let post = Post::new(PostId::new(Uuid::new_v4().to_string()), fields);

        let mut store = self.store.write().await;
        store.insert(post.id.clone(), post.clone());

        Ok(post)
    }

    async fn update_by_id(
        &self,
        id: &PostId,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError> {
        Self::check_id(id)?;

        let mut store = self.store.write().await;
        Ok(store.get_mut(id).map(|post| {
            changes.apply_to(post);
            post.clone()
        }))
    }

    async fn delete_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        Self::check_id(id)?;
        Ok(self.store.write().await.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn hello() -> NewPost {
        NewPost {
            title: Some("Hello".to_string()),
            content: Some("World".to_string()),
            author: Some("A".to_string()),
            tags: vec!["x".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(hello()).await.unwrap();

        assert_eq!(created.views, 0);
        let found = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_empty_post_is_persistable() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::default()).await.unwrap();

        assert!(created.title.is_none());
        assert!(repo.find_by_id(&created.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryPostRepository::new();
        let older = repo.create(hello()).await.unwrap();
        let newer = repo.create(NewPost::default()).await.unwrap();

        // Pin timestamps so ordering does not depend on clock resolution.
        {
            let mut store = repo.store.write().await;
            let base = chrono::Utc::now();
            store.get_mut(&older.id).unwrap().created_at = base - Duration::seconds(10);
            store.get_mut(&newer.id).unwrap().created_at = base;
        }

        let ids: Vec<PostId> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(hello()).await.unwrap();

        let changes = PostChanges {
            title: Some("X".to_string()),
            ..Default::default()
        };
        let updated = repo
            .update_by_id(&created.id, changes)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title.as_deref(), Some("X"));
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.author, created.author);
        assert_eq!(updated.tags, created.tags);
        assert_eq!(updated.created_at, created.created_at);

        let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let repo = InMemoryPostRepository::new();
        let id = PostId::new(Uuid::new_v4().to_string());
        let result = repo.update_by_id(&id, PostChanges::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_find() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(hello()).await.unwrap();

        assert!(repo.delete_by_id(&created.id).await.unwrap().is_some());
        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
        assert!(repo.delete_by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_id_is_an_error() {
        let repo = InMemoryPostRepository::new();
        let id = PostId::new("nope");

        assert!(matches!(
            repo.find_by_id(&id).await,
            Err(RepoError::InvalidId(_))
        ));
        assert!(matches!(
            repo.delete_by_id(&id).await,
            Err(RepoError::InvalidId(_))
        ));
    }
}
