//! Forum backend - accounts, topics, votes and comments
//!
//! This crate provides the service layer of a small discussion forum over
//! a relational store (PostgreSQL or SQLite through SeaORM).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core forum entities and value objects
//! - **services**: Forum use cases (accounts, topics, votes, comments)
//! - **infra**: Infrastructure concerns (database, migrations, repositories)
//! - **presentation**: Relative time formatting and display views
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Register and log in
//! cargo run -- user register --username alice --email alice@example.com --password correcthorse
//! cargo run -- user login --username alice --password correcthorse
//!
//! # Vote on a topic
//! cargo run -- vote cast --user-id 2 --topic-id 1 --vote-type up
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod presentation;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{AuthenticatedUser, Comment, Password, Topic, User, Vote, VoteType};
pub use errors::{AppError, AppResult};
pub use infra::Database;
pub use presentation::RelativeTimeFormatter;
pub use services::{ServiceContainer, Services};
