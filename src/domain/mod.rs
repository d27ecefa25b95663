//! Domain layer - Core forum entities and value objects
//!
//! Nothing in here talks to the store; repositories convert their
//! rows into these types.

pub mod comment;
pub mod password;
pub mod topic;
pub mod user;
pub mod vote;

pub use comment::Comment;
pub use password::Password;
pub use topic::Topic;
pub use user::{AuthenticatedUser, Registration, User};
pub use vote::{Vote, VoteType};
