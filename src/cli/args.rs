//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::domain::VoteType;

/// Forum backend - accounts, topics, votes and comments
#[derive(Parser, Debug)]
#[command(name = "forum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Register users and check credentials
    User(UserArgs),

    /// Open and list topics
    Topic(TopicArgs),

    /// Cast votes and read vote history
    Vote(VoteArgs),

    /// Add and read comments
    Comment(CommentArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Register a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// At least 9 characters
        #[arg(long, env = "FORUM_PASSWORD")]
        password: String,
    },
    /// Verify a username and password
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "FORUM_PASSWORD")]
        password: String,
    },
}

#[derive(Parser, Debug)]
pub struct TopicArgs {
    #[command(subcommand)]
    pub action: TopicAction,
}

#[derive(Subcommand, Debug)]
pub enum TopicAction {
    /// Open a new topic
    Create {
        #[arg(long)]
        user_id: i32,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List topics, newest first
    List {
        /// Only topics opened by this user
        #[arg(long)]
        author: Option<i32>,
    },
}

#[derive(Parser, Debug)]
pub struct VoteArgs {
    #[command(subcommand)]
    pub action: VoteAction,
}

#[derive(Subcommand, Debug)]
pub enum VoteAction {
    /// Vote on a topic (once per user)
    Cast {
        #[arg(long)]
        user_id: i32,
        #[arg(long)]
        topic_id: i32,
        /// "up" or "down"
        #[arg(long)]
        vote_type: VoteType,
    },
    /// Report whether a user has voted on a topic
    Check {
        #[arg(long)]
        user_id: i32,
        #[arg(long)]
        topic_id: i32,
    },
    /// A user's votes, newest first
    History {
        #[arg(long)]
        user_id: i32,
    },
}

#[derive(Parser, Debug)]
pub struct CommentArgs {
    #[command(subcommand)]
    pub action: CommentAction,
}

#[derive(Subcommand, Debug)]
pub enum CommentAction {
    /// Comment on a topic
    Add {
        #[arg(long)]
        user_id: i32,
        #[arg(long)]
        topic_id: i32,
        #[arg(long)]
        body: String,
    },
    /// Comments on a topic, newest first
    List {
        #[arg(long)]
        topic_id: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_vote_cast() {
        let cli = Cli::try_parse_from([
            "forum", "vote", "cast", "--user-id", "2", "--topic-id", "5", "--vote-type", "down",
        ])
        .unwrap();

        match cli.command {
            Commands::Vote(VoteArgs {
                action:
                    VoteAction::Cast {
                        user_id,
                        topic_id,
                        vote_type,
                    },
            }) => {
                assert_eq!((user_id, topic_id, vote_type), (2, 5, VoteType::Down));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_vote_type_rejected() {
        let result = Cli::try_parse_from([
            "forum", "vote", "cast", "--user-id", "2", "--topic-id", "5", "--vote-type", "meh",
        ]);
        assert!(result.is_err());
    }
}
