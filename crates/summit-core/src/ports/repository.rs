use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::RepoError;

/// Generic repository trait defining the key-based operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List every stored entity in primary-key order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when
    /// nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the storage adapter behind the posts API.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Insert a new post. The storage layer assigns `id` and fills the
    /// creation defaults.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Apply a partial update and return the full stored record.
    ///
    /// Fails with `RepoError::NotFound` if the post does not exist, including
    /// when it is removed concurrently between lookup and write.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError>;
}
