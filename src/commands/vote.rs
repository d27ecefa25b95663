//! Vote command - cast, check and list votes.

use serde_json::json;

use super::{print_json, services};
use crate::cli::args::{VoteAction, VoteArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::presentation::{RelativeTimeFormatter, VoteHistoryItem};
use crate::services::ServiceContainer;

/// Execute the vote command
pub async fn execute(args: VoteArgs, config: Config) -> AppResult<()> {
    let votes = services(&config).await?.votes();

    match args.action {
        VoteAction::Cast {
            user_id,
            topic_id,
            vote_type,
        } => print_json(&votes.vote(user_id, topic_id, vote_type).await?),
        VoteAction::Check { user_id, topic_id } => {
            let voted = votes.has_voted(topic_id, user_id).await?;
            print_json(&json!({ "user_id": user_id, "topic_id": topic_id, "has_voted": voted }))
        }
        VoteAction::History { user_id } => {
            let formatter = RelativeTimeFormatter::new();
            let history: Vec<VoteHistoryItem> = votes
                .vote_history(user_id)
                .await?
                .iter()
                .map(|vote| VoteHistoryItem::new(vote, &formatter))
                .collect();
            print_json(&history)
        }
    }
}
