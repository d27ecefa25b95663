//! CLI module - Command-line interface for the forum backend.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `user` - Registration and login
//! - `topic` - Opening and listing topics
//! - `vote` - Casting votes and reading vote history
//! - `comment` - Adding and reading comments

pub mod args;

pub use args::{Cli, Commands};
