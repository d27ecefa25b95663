//! Application services layer - forum use cases.
//!
//! Each service is stateless and reaches the store through the Unit of
//! Work. Every method returns `AppResult`; `is_ok()` is the plain
//! success/failure view.

mod account_service;
mod comment_service;
pub mod container;
mod topic_service;
mod vote_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use account_service::{AccountService, UserAccount};
pub use comment_service::{CommentService, CommentThread};
pub use topic_service::{TopicCatalog, TopicService};
pub use vote_service::{VoteLedger, VoteService};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};

    use crate::infra::repositories::{
        MockCommentRepository, MockTopicRepository, MockUserRepository, MockVoteRepository,
    };
    use crate::infra::{
        CommentRepository, TopicRepository, UnitOfWork, UserRepository, VoteRepository,
    };

    /// Unit of Work over mocked repositories. Repositories a test does not
    /// configure have no expectations, so any call to them fails the test.
    pub struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        topics: Arc<MockTopicRepository>,
        votes: Arc<MockVoteRepository>,
        comments: Arc<MockCommentRepository>,
    }

    impl Default for TestUnitOfWork {
        fn default() -> Self {
            Self {
                users: Arc::new(MockUserRepository::new()),
                topics: Arc::new(MockTopicRepository::new()),
                votes: Arc::new(MockVoteRepository::new()),
                comments: Arc::new(MockCommentRepository::new()),
            }
        }
    }

    impl TestUnitOfWork {
        pub fn with_users(repo: MockUserRepository) -> Self {
            Self {
                users: Arc::new(repo),
                ..Self::default()
            }
        }

        pub fn with_topics(repo: MockTopicRepository) -> Self {
            Self {
                topics: Arc::new(repo),
                ..Self::default()
            }
        }

        pub fn with_votes(repo: MockVoteRepository) -> Self {
            Self {
                votes: Arc::new(repo),
                ..Self::default()
            }
        }

        pub fn with_comments(repo: MockCommentRepository) -> Self {
            Self {
                comments: Arc::new(repo),
                ..Self::default()
            }
        }
    }

    impl UnitOfWork for TestUnitOfWork {
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

    /// Fixed instant `seconds` after 2024-01-01T00:00:00Z
    pub fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_704_067_200 + seconds, 0).unwrap()
    }
}
