//! Chat message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Clock;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Typed by the person using the app
    User,
    /// Produced by the response engine
    Bot,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Bot => "bot",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single message in the transcript
///
/// Messages are created once and never mutated. Ids are UUIDv7, so sorting
/// by id follows creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Suggested follow-ups, bot messages only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<String>>,
}

impl ChatMessage {
    fn new(role: MessageRole, content: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            role,
            content,
            timestamp,
            quick_replies: None,
        }
    }

    /// Create a user message stamped with the clock's current time
    pub fn user(content: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::new(MessageRole::User, content.into(), clock.now_utc())
    }

    /// Create a bot message stamped with the clock's current time
    pub fn bot(content: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::new(MessageRole::Bot, content.into(), clock.now_utc())
    }

    /// Attach quick replies
    pub fn with_quick_replies(mut self, replies: Vec<String>) -> Self {
        self.quick_replies = Some(replies);
        self
    }

    pub fn is_bot(&self) -> bool {
        self.role == MessageRole::Bot
    }

    pub fn quick_replies(&self) -> &[String] {
        self.quick_replies.as_deref().unwrap_or_default()
    }
}
