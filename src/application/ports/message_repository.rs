use async_trait::async_trait;

use crate::domain::{ConversationId, Message, UserId};

use super::RepositoryError;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn append(&self, message: &Message) -> Result<(), RepositoryError>;

    /// Messages in the conversation that belong to the user, oldest first.
    /// The conversation's own ownership is not checked; a foreign
    /// conversation id matches nothing and yields an empty list.
    async fn list_for_conversation(
        &self,
        conversation_id: ConversationId,
        user_id: &UserId,
    ) -> Result<Vec<Message>, RepositoryError>;
}
