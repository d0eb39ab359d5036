//! SQL post repository - the production storage adapter.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr};

use summit_core::domain::{NewPost, Post, PostChanges, PostId};
use summit_core::error::RepoError;
use summit_core::ports::{BaseRepository, PostRepository};

use super::entity::post::{ActiveModel, Entity as PostEntity};
use super::sql_base::{SqlBaseRepository, write_error};

/// SQL post repository.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        tracing::debug!(post_id = model.id, "Post created");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        if changes.is_empty() {
            return <Self as BaseRepository<Post, PostId>>::find_by_id(self, id)
                .await?
                .ok_or(RepoError::NotFound);
        }

        // Single UPDATE keyed on id; a row deleted concurrently surfaces as
        // not-updated rather than as a driver failure.
        let model = ActiveModel::from_changes(id, changes)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
                other => write_error(other),
            })?;

        tracing::debug!(post_id = id, "Post updated");
        Ok(model.into())
    }
}
