use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::chat_role::ChatRole;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    pub fn new(role: ChatRole, text: String) -> Self {
        Self {
            role,
            text,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: String) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: String) -> Self {
        Self::new(ChatRole::Assistant, text)
    }
}
