//! Vote service - one vote per user per topic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Vote, VoteType};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Vote service trait for dependency injection.
#[async_trait]
pub trait VoteService: Send + Sync {
    /// Whether `user_id` has already voted on `topic_id`
    async fn has_voted(&self, topic_id: i32, user_id: i32) -> AppResult<bool>;

    /// Cast a vote.
    ///
    /// # Errors
    /// `Conflict` if the user already voted on the topic, whether seen by
    /// the existence check or by the store's unique index.
    async fn vote(&self, user_id: i32, topic_id: i32, vote_type: VoteType) -> AppResult<Vote>;

    /// Every vote the user cast, newest first
    async fn vote_history(&self, user_id: i32) -> AppResult<Vec<Vote>>;
}

/// Concrete implementation of VoteService using Unit of Work.
pub struct VoteLedger<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> VoteLedger<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> VoteService for VoteLedger<U> {
    async fn has_voted(&self, topic_id: i32, user_id: i32) -> AppResult<bool> {
        self.uow.votes().exists(topic_id, user_id).await
    }

    async fn vote(&self, user_id: i32, topic_id: i32, vote_type: VoteType) -> AppResult<Vote> {
        if self.has_voted(topic_id, user_id).await? {
            tracing::warn!(user_id, topic_id, "Duplicate vote rejected");
            return Err(AppError::conflict("Vote"));
        }

        let vote = self.uow.votes().create(user_id, topic_id, vote_type).await?;
        tracing::info!(user_id, topic_id, vote_type = %vote_type, "Vote recorded");
        Ok(vote)
    }

    async fn vote_history(&self, user_id: i32) -> AppResult<Vec<Vote>> {
        self.uow.votes().list_by_user(user_id).await
    }
}
