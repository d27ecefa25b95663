//! Vote repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::vote::{self, ActiveModel, Entity as VoteEntity};
use crate::domain::{Vote, VoteType};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Vote repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Whether `user_id` already voted on `topic_id`
    async fn exists(&self, topic_id: i32, user_id: i32) -> AppResult<bool>;

    /// Insert a vote. A second vote for the same pair surfaces as `Conflict`.
    async fn create(&self, user_id: i32, topic_id: i32, vote_type: VoteType) -> AppResult<Vote>;

    /// All votes cast by a user, newest first
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Vote>>;
}

/// SeaORM-backed `VoteRepository`
pub struct VoteStore {
    db: DatabaseConnection,
}

impl VoteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VoteRepository for VoteStore {
    async fn exists(&self, topic_id: i32, user_id: i32) -> AppResult<bool> {
        let found = VoteEntity::find()
            .filter(vote::Column::TopicId.eq(topic_id))
            .filter(vote::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        Ok(found.is_some())
    }

    async fn create(&self, user_id: i32, topic_id: i32, vote_type: VoteType) -> AppResult<Vote> {
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            topic_id: Set(topic_id),
            vote_type: Set(vote_type.as_str().to_string()),
            voted_at: Set(Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write("Vote", e))?;
        Vote::try_from(model)
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Vote>> {
        VoteEntity::find()
            .filter(vote::Column::UserId.eq(user_id))
            .order_by_desc(vote::Column::VotedAt)
            .order_by_desc(vote::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Vote::try_from)
            .collect()
    }
}
