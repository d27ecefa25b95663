//! Comment repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use crate::domain::Comment;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, user_id: i32, topic_id: i32, body: String) -> AppResult<Comment>;

    /// Comments on a topic, newest first
    async fn list_by_topic(&self, topic_id: i32) -> AppResult<Vec<Comment>>;
}

/// SeaORM-backed `CommentRepository`
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn create(&self, user_id: i32, topic_id: i32, body: String) -> AppResult<Comment> {
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            topic_id: Set(topic_id),
            comment: Set(body),
            commented_at: Set(Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write("Comment", e))?;
        Ok(Comment::from(model))
    }

    async fn list_by_topic(&self, topic_id: i32) -> AppResult<Vec<Comment>> {
        let models = CommentEntity::find()
            .filter(comment::Column::TopicId.eq(topic_id))
            .order_by_desc(comment::Column::CommentedAt)
            .order_by_desc(comment::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Comment::from).collect())
    }
}
