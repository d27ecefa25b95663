//! Comment command - add and list comments.

use super::{print_json, services};
use crate::cli::args::{CommentAction, CommentArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::presentation::{CommentItem, RelativeTimeFormatter};
use crate::services::ServiceContainer;

/// Execute the comment command
pub async fn execute(args: CommentArgs, config: Config) -> AppResult<()> {
    let comments = services(&config).await?.comments();

    match args.action {
        CommentAction::Add {
            user_id,
            topic_id,
            body,
        } => print_json(&comments.add_comment(user_id, topic_id, body).await?),
        CommentAction::List { topic_id } => {
            let formatter = RelativeTimeFormatter::new();
            let thread: Vec<CommentItem> = comments
                .comments(topic_id)
                .await?
                .iter()
                .map(|comment| CommentItem::new(comment, &formatter))
                .collect();
            print_json(&thread)
        }
    }
}
