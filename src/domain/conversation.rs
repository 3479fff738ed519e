use chrono::{DateTime, Utc};

use super::{ConversationId, UserId};

const TITLE_PREFIX_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: ConversationId,
    pub user_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// A conversation comes into existence with its opening message; the
    /// title is the first 50 characters of that message plus an ellipsis.
    pub fn from_first_message(user_id: UserId, message: &str) -> Self {
        let prefix: String = message.chars().take(TITLE_PREFIX_CHARS).collect();

        Self {
            id: ConversationId::new(),
            user_id,
            title: format!("{}...", prefix),
            created_at: Utc::now(),
        }
    }
}
