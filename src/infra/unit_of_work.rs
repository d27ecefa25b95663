//! Unit of Work - one place to reach every repository.
//!
//! All repositories share the same pooled connection. Services depend on
//! the `UnitOfWork` trait so tests can swap in mocked repositories.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    CommentRepository, CommentStore, TopicRepository, TopicStore, UserRepository, UserStore,
    VoteRepository, VoteStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn topics(&self) -> Arc<dyn TopicRepository>;

    fn votes(&self) -> Arc<dyn VoteRepository>;

    fn comments(&self) -> Arc<dyn CommentRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    users: Arc<UserStore>,
    topics: Arc<TopicStore>,
    votes: Arc<VoteStore>,
    comments: Arc<CommentStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            topics: Arc::new(TopicStore::new(db.clone())),
            votes: Arc::new(VoteStore::new(db.clone())),
            comments: Arc::new(CommentStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn topics(&self) -> Arc<dyn TopicRepository> {
        self.topics.clone()
    }

    fn votes(&self) -> Arc<dyn VoteRepository> {
        self.votes.clone()
    }

    fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comments.clone()
    }
}
