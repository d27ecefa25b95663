//! Service Container - Centralized service access.
//!
//! Builds every forum service over one shared `Persistence` so callers
//! only have to hand over a connection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AccountService, CommentService, CommentThread, TopicCatalog, TopicService, UserAccount,
    VoteLedger, VoteService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn accounts(&self) -> Arc<dyn AccountService>;

    fn topics(&self) -> Arc<dyn TopicService>;

    fn votes(&self) -> Arc<dyn VoteService>;

    fn comments(&self) -> Arc<dyn CommentService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    account_service: Arc<dyn AccountService>,
    topic_service: Arc<dyn TopicService>,
    vote_service: Arc<dyn VoteService>,
    comment_service: Arc<dyn CommentService>,
}

impl Services {
    /// Create a service container from already-built services
    pub fn new(
        account_service: Arc<dyn AccountService>,
        topic_service: Arc<dyn TopicService>,
        vote_service: Arc<dyn VoteService>,
        comment_service: Arc<dyn CommentService>,
    ) -> Self {
        Self {
            account_service,
            topic_service,
            vote_service,
            comment_service,
        }
    }

    /// Create service container from database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(UserAccount::new(uow.clone())),
            Arc::new(TopicCatalog::new(uow.clone())),
            Arc::new(VoteLedger::new(uow.clone())),
            Arc::new(CommentThread::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn topics(&self) -> Arc<dyn TopicService> {
        self.topic_service.clone()
    }

    fn votes(&self) -> Arc<dyn VoteService> {
        self.vote_service.clone()
    }

    fn comments(&self) -> Arc<dyn CommentService> {
        self.comment_service.clone()
    }
}
