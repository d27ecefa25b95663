//! Comment service - comments on topics.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Comment;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Comment service trait for dependency injection.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Add a comment. The body is stored as given.
    async fn add_comment(&self, user_id: i32, topic_id: i32, body: String) -> AppResult<Comment>;

    /// Comments on a topic, newest first
    async fn comments(&self, topic_id: i32) -> AppResult<Vec<Comment>>;
}

/// Concrete implementation of CommentService using Unit of Work.
pub struct CommentThread<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CommentThread<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CommentService for CommentThread<U> {
    async fn add_comment(&self, user_id: i32, topic_id: i32, body: String) -> AppResult<Comment> {
        let comment = self.uow.comments().create(user_id, topic_id, body).await?;
        tracing::info!(comment_id = comment.id, topic_id, "Comment added");
        Ok(comment)
    }

    async fn comments(&self, topic_id: i32) -> AppResult<Vec<Comment>> {
        self.uow.comments().list_by_topic(topic_id).await
    }
}
