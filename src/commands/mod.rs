//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod comment;
pub mod migrate;
pub mod topic;
pub mod user;
pub mod vote;

use serde::Serialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::Services;

/// Connect (applying pending migrations) and build the services.
async fn services(config: &Config) -> AppResult<Services> {
    let db = Database::connect(config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    Ok(Services::from_connection(db.get_connection()))
}

/// Print a command result as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{TopicAction, TopicArgs, VoteAction, VoteArgs};
    use crate::domain::VoteType;

    fn in_memory() -> Config {
        Config::with_database_url("sqlite::memory:")
    }

    #[tokio::test]
    async fn test_vote_history_on_fresh_store_prints_empty_list() {
        let args = VoteArgs {
            action: VoteAction::History { user_id: 1 },
        };
        assert!(vote::execute(args, in_memory()).await.is_ok());
    }

    #[tokio::test]
    async fn test_vote_cast_on_missing_topic_fails() {
        let args = VoteArgs {
            action: VoteAction::Cast {
                user_id: 1,
                topic_id: 1,
                vote_type: VoteType::Up,
            },
        };
        let result = vote::execute(args, in_memory()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_vote_check_and_topic_list_succeed() {
        let check = VoteArgs {
            action: VoteAction::Check {
                user_id: 1,
                topic_id: 1,
            },
        };
        assert!(vote::execute(check, in_memory()).await.is_ok());

        let list = TopicArgs {
            action: TopicAction::List { author: None },
        };
        assert!(topic::execute(list, in_memory()).await.is_ok());
    }

    #[test]
    fn test_print_json_accepts_views() {
        let value = serde_json::json!({ "has_voted": false });
        assert!(print_json(&value).is_ok());
    }
}
