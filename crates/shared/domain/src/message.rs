//! Investor relations messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_avatar: Option<String>,
    pub recipient_id: String,
    pub recipient_name: String,
    pub subject: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    pub fn is_addressed_to(&self, user_id: &str) -> bool {
        self.recipient_id == user_id
    }
}

/// Compose form payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub sender_id: String,
    pub sender_name: String,
    pub sender_avatar: Option<String>,
    pub recipient_id: String,
    pub recipient_name: String,
    pub subject: String,
    pub content: String,
}

impl NewMessage {
    /// Stamp the draft as an unread message sent at `now`
    pub fn into_message(self, now: DateTime<Utc>) -> Message {
        Message {
            id: Uuid::new_v4().to_string(),
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            sender_avatar: self.sender_avatar,
            recipient_id: self.recipient_id,
            recipient_name: self.recipient_name,
            subject: self.subject,
            content: self.content,
            sent_at: now,
            read: false,
        }
    }
}
