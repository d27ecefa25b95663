//! Topic domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Discussion topic opened by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: i32,
    /// Author's user id
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
