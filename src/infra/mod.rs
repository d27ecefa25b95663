//! Infrastructure layer - Store integration
//!
//! - Database connection and schema migrations
//! - SeaORM entities and repositories
//! - Unit of Work giving services access to every repository

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CommentRepository, CommentStore, TopicRepository, TopicStore, UserRepository, UserStore,
    VoteRepository, VoteStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};
