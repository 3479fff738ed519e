use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{MessageRepository, RepositoryError};
use crate::domain::{ConversationId, Message, MessageId, MessageRole, UserId};

pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_message(row: PgRow) -> Result<Message, RepositoryError> {
    let role = row
        .try_get::<String, _>("role")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
        .parse::<MessageRole>()
        .map_err(RepositoryError::QueryFailed)?;

    let field = |e: sqlx::Error| RepositoryError::QueryFailed(e.to_string());

    Ok(Message {
        id: MessageId::from_uuid(row.try_get("id").map_err(field)?),
        conversation_id: ConversationId::from_uuid(row.try_get("conversation_id").map_err(field)?),
        role,
        content: row.try_get("content").map_err(field)?,
        image_url: row.try_get("image_url").map_err(field)?,
        user_id: UserId::new(row.try_get::<String, _>("user_id").map_err(field)?),
        created_at: row.try_get("created_at").map_err(field)?,
    })
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id.as_uuid(), conversation_id = %message.conversation_id.as_uuid()))]
    async fn append(&self, message: &Message) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, conversation_id, role, content, image_url, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.conversation_id.as_uuid())
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(&message.image_url)
        .bind(message.user_id.as_str())
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id.as_uuid(), user_id = %user_id))]
    async fn list_for_conversation(
        &self,
        conversation_id: ConversationId,
        user_id: &UserId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, conversation_id, role, content, image_url, user_id, created_at
            FROM messages
            WHERE conversation_id = $1 AND user_id = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(conversation_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(row_to_message).collect()
    }
}
