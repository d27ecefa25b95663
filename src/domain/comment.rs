//! Comment domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Comment left on a topic. A user may comment on the same topic any
/// number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub topic_id: i32,
    pub body: String,
    pub commented_at: DateTime<Utc>,
}
