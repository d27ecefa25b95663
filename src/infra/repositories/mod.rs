//! Repository layer - Data access abstraction
//!
//! One repository per table. Each is a trait (mocked in service tests)
//! plus a SeaORM-backed store.

mod comment_repository;
pub(crate) mod entities;
mod topic_repository;
mod user_repository;
mod vote_repository;


pub use comment_repository::{CommentRepository, CommentStore};
pub use topic_repository::{TopicRepository, TopicStore};
pub use user_repository::{UserRepository, UserStore};
pub use vote_repository::{VoteRepository, VoteStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use topic_repository::MockTopicRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use vote_repository::MockVoteRepository;
