use async_trait::async_trait;

use crate::domain::{Conversation, ConversationId, UserId};

use super::RepositoryError;

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create(&self, conversation: &Conversation) -> Result<(), RepositoryError>;

    /// All conversations owned by the user, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Conversation>, RepositoryError>;

    /// Scoped to (id, owner). Deleting a conversation that does not exist or
    /// belongs to someone else is a no-op, not an error.
    async fn delete(&self, id: ConversationId, user_id: &UserId) -> Result<(), RepositoryError>;
}
