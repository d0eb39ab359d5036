//! Post entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use summit_core::domain::{NewPost, Post, PostChanges, PostId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub image: String,
    pub likes: i32,
    pub poster: String,
    pub comments_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Active model that writes only the changed columns of row `id`.
    pub fn from_changes(id: PostId, changes: PostChanges) -> Self {
        Self {
            id: Unchanged(id),
            date: changes.date.map_or(NotSet, Set),
            content: changes.content.map_or(NotSet, Set),
            image: changes.image.map_or(NotSet, Set),
            likes: changes.likes.map_or(NotSet, Set),
            poster: changes.poster.map_or(NotSet, Set),
            comments_count: changes.comments_count.map_or(NotSet, Set),
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            content: model.content,
            image: model.image,
            likes: model.likes,
            poster: model.poster,
            comments_count: model.comments_count,
        }
    }
}

/// Conversion from a create request to an insertable ActiveModel.
/// The id is left to the database.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        let post = post.into_post(PostId::default());
        Self {
            id: NotSet,
            date: Set(post.date),
            content: Set(post.content),
            image: Set(post.image),
            likes: Set(post.likes),
            poster: Set(post.poster),
            comments_count: Set(post.comments_count),
        }
    }
}
