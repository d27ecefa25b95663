//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod comment;
pub mod topic;
pub mod user;
pub mod vote;
