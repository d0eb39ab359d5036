//! In-memory post repository - used when the server is built without a
//! database, and as a test double for the HTTP layer.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use summit_core::domain::{NewPost, Post, PostChanges, PostId};
use summit_core::error::RepoError;
use summit_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Store {
    posts: BTreeMap<PostId, Post>,
    last_id: PostId,
}

/// In-memory post store using a `BTreeMap` behind an async RwLock.
///
/// Ids are assigned from a counter and never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("post id space exhausted".to_string()))?;
        store.last_id = id;

        let post = post.into_post(id);
        store.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Post created");
        Ok(post)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        // One write lock covers lookup and write.
        let mut store = self.store.write().await;
        let post = store.posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        changes.apply_to(post);

        tracing::debug!(post_id = id, "Post updated");
        Ok(post.clone())
    }
}
