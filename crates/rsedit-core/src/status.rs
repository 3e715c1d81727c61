use chrono::{DateTime, TimeDelta, Utc};

/// How long a status message stays on screen by default.
pub const DEFAULT_STATUS_TIMEOUT: TimeDelta = TimeDelta::seconds(5);

/// A transient message for the status row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub created_at: DateTime<Utc>,
    expired: bool,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, Utc::now())
    }

    pub fn at(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            created_at,
            expired: false,
        }
    }

    /// Whether the message should still be shown at `now`.
    pub fn is_live(&self, now: DateTime<Utc>, timeout: TimeDelta) -> bool {
        !self.expired && now - self.created_at < timeout
    }

    /// Drop the message from the screen without forgetting its text.
    pub fn expire(&mut self) {
        self.expired = true;
    }
}
