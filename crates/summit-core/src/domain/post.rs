use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Storage key of a post, assigned by the storage layer on insert.
pub type PostId = i32;

/// Post entity - a social-media post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Post {
    pub id: PostId,
    pub date: String,
    pub content: String,
    pub image: String,
    pub likes: i32,
    pub poster: String,
    pub comments_count: i32,
}

impl Post {
    /// Timestamp stamped on posts created without an explicit `date`.
    pub fn timestamp_now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Body of a create request.
///
/// Only `content` is required. An `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<i32>,
}

impl NewPost {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    /// Build the stored record, filling in creation defaults.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            date: self.date.unwrap_or_else(Post::timestamp_now),
            content: self.content,
            image: self.image.unwrap_or_default(),
            likes: self.likes.unwrap_or(0),
            poster: self.poster.unwrap_or_default(),
            comments_count: self.comments_count.unwrap_or(0),
        }
    }
}

/// Partial update of a post. `None` leaves the stored value untouched.
///
/// Keys other than the post fields (including `id`) are ignored, and an
/// explicit JSON `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PostChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<i32>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.content.is_none()
            && self.image.is_none()
            && self.likes.is_none()
            && self.poster.is_none()
            && self.comments_count.is_none()
    }

    /// Overwrite the fields of `post` that are present in this change set.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(date) = self.date {
            post.date = date;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(likes) = self.likes {
            post.likes = likes;
        }
        if let Some(poster) = self.poster {
            post.poster = poster;
        }
        if let Some(comments_count) = self.comments_count {
            post.comments_count = comments_count;
        }
    }
}
