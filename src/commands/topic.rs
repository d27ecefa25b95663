//! Topic command - open and list topics.

use super::{print_json, services};
use crate::cli::args::{TopicAction, TopicArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the topic command
pub async fn execute(args: TopicArgs, config: Config) -> AppResult<()> {
    let topics = services(&config).await?.topics();

    match args.action {
        TopicAction::Create {
            user_id,
            title,
            description,
        } => print_json(&topics.create_topic(user_id, title, description).await?),
        TopicAction::List { author: Some(user_id) } => {
            print_json(&topics.list_topics_by_author(user_id).await?)
        }
        TopicAction::List { author: None } => print_json(&topics.list_topics().await?),
    }
}
