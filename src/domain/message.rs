use chrono::{DateTime, Utc};

use super::{ConversationId, MessageId, MessageRole, UserId};

#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub role: MessageRole,
    pub content: String,
    pub image_url: Option<String>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(conversation_id: ConversationId, user_id: UserId, content: String) -> Self {
        Self::new(conversation_id, user_id, MessageRole::User, content, None)
    }

    pub fn assistant(
        conversation_id: ConversationId,
        user_id: UserId,
        content: String,
        image_url: Option<String>,
    ) -> Self {
        Self::new(
            conversation_id,
            user_id,
            MessageRole::Assistant,
            content,
            image_url,
        )
    }

    fn new(
        conversation_id: ConversationId,
        user_id: UserId,
        role: MessageRole,
        content: String,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            role,
            content,
            image_url,
            user_id,
            created_at: Utc::now(),
        }
    }
}
