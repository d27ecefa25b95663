//! "N units ago" rendering of timestamps.

use chrono::{DateTime, Utc};

use crate::config::{
    CALENDAR_DATE_FORMAT, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    SECONDS_PER_MONTH, SECONDS_PER_YEAR,
};

/// Formats instants relative to a fixed reference time.
///
/// Units are never singularised, so 90 seconds renders as "1 minutes ago".
/// Anything a year (365 days) or older renders as a calendar date such as
/// "Mar 04, 2024".
#[derive(Debug, Clone, Copy)]
pub struct RelativeTimeFormatter {
    now: DateTime<Utc>,
}

impl Default for RelativeTimeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RelativeTimeFormatter {
    /// Formatter anchored at the current time
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Formatter anchored at `now`
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn format(&self, timestamp: DateTime<Utc>) -> String {
        // Future timestamps (clock skew) count as "just now"
        let diff = (self.now - timestamp).num_seconds().max(0);

        if diff < SECONDS_PER_MINUTE {
            format!("{} seconds ago", diff)
        } else if diff < SECONDS_PER_HOUR {
            format!("{} minutes ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{} hours ago", diff / SECONDS_PER_HOUR)
        } else if diff < SECONDS_PER_MONTH {
            format!("{} days ago", diff / SECONDS_PER_DAY)
        } else if diff < SECONDS_PER_YEAR {
            format!("{} months ago", diff / SECONDS_PER_MONTH)
        } else {
            timestamp.format(CALENDAR_DATE_FORMAT).to_string()
        }
    }
}
