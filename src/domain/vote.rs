//! Vote domain entity and vote types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{VOTE_DOWN, VOTE_UP};
use crate::errors::AppError;

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Value stored in `votes.vote_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => VOTE_UP,
            VoteType::Down => VOTE_DOWN,
        }
    }
}

impl FromStr for VoteType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            VOTE_UP => Ok(VoteType::Up),
            VOTE_DOWN => Ok(VoteType::Down),
            other => Err(AppError::validation(format!(
                "Unknown vote type '{}', expected '{}' or '{}'",
                other, VOTE_UP, VOTE_DOWN
            ))),
        }
    }
}

impl std::fmt::Display for VoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's vote on a topic. At most one exists per (user, topic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub id: i32,
    pub user_id: i32,
    pub topic_id: i32,
    pub vote_type: VoteType,
    pub voted_at: DateTime<Utc>,
}
