//! Display rows for vote history and comment threads.

use serde::Serialize;

use super::RelativeTimeFormatter;
use crate::domain::{Comment, Vote, VoteType};

/// One line of a user's vote history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteHistoryItem {
    pub topic_id: i32,
    pub vote_type: VoteType,
    pub voted_at: String,
}

impl VoteHistoryItem {
    pub fn new(vote: &Vote, formatter: &RelativeTimeFormatter) -> Self {
        Self {
            topic_id: vote.topic_id,
            vote_type: vote.vote_type,
            voted_at: formatter.format(vote.voted_at),
        }
    }
}

/// One comment as shown under a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentItem {
    pub user_id: i32,
    pub comment: String,
    pub commented_at: String,
}

impl CommentItem {
    pub fn new(comment: &Comment, formatter: &RelativeTimeFormatter) -> Self {
        Self {
            user_id: comment.user_id,
            comment: comment.body.clone(),
            commented_at: formatter.format(comment.commented_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_views_format_timestamps() {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap();
        let formatter = RelativeTimeFormatter::at(now);

        let vote = Vote {
            id: 1,
            user_id: 2,
            topic_id: 3,
            vote_type: VoteType::Down,
            voted_at: now - Duration::hours(5),
        };
        let comment = Comment {
            id: 4,
            user_id: 2,
            topic_id: 3,
            body: "agreed".to_string(),
            commented_at: now - Duration::days(3),
        };

        let vote_item = VoteHistoryItem::new(&vote, &formatter);
        let comment_item = CommentItem::new(&comment, &formatter);

        assert_eq!(vote_item.voted_at, "5 hours ago");
        assert_eq!(comment_item.commented_at, "3 days ago");
        assert_eq!(
            serde_json::to_value(&vote_item).unwrap(),
            serde_json::json!({"topic_id": 3, "vote_type": "down", "voted_at": "5 hours ago"})
        );
        assert_eq!(
            serde_json::to_value(&comment_item).unwrap(),
            serde_json::json!({"user_id": 2, "comment": "agreed", "commented_at": "3 days ago"})
        );
    }
}
