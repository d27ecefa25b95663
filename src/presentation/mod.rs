//! Presentation layer - turning stored rows into display values.
//!
//! Services hand back raw `DateTime<Utc>` instants; this is the only
//! place they become strings like "3 hours ago".

mod relative_time;
mod views;

pub use relative_time::RelativeTimeFormatter;
pub use views::{CommentItem, VoteHistoryItem};
