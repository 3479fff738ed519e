use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{GenerationClient, GenerationModel};
use crate::domain::{Conversation, ConversationId, Message};
use crate::infrastructure::auth::AuthenticatedUser;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<Uuid>,
    #[serde(default)]
    pub model: GenerationModel,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub message: String,
    pub conversation_id: Uuid,
    pub message_id: Uuid,
    pub image_url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDto {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationDto {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id.as_uuid(),
            user_id: conversation.user_id.as_str().to_string(),
            title: conversation.title,
            created_at: conversation.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: String,
    pub content: String,
    pub image_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.as_uuid(),
            conversation_id: message.conversation_id.as_uuid(),
            role: message.role.as_str().to_string(),
            content: message.content,
            image_url: message.image_url,
            user_id: message.user_id.as_str().to_string(),
            created_at: message.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteConversationResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Serialize)]
pub struct ApiError {
    pub message: String,
    pub r#type: String,
}

fn validation_error(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: ApiError {
                message: message.to_string(),
                r#type: "invalid_request_error".to_string(),
            },
        }),
    )
        .into_response()
}

/// Generic failure surface. Details stay in the logs, not the response.
fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: ApiError {
                message: "Something went wrong. Please try again.".to_string(),
                r#type: "api_error".to_string(),
            },
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, user, request), fields(model = request.model.as_str()))]
pub async fn send_message_handler<G>(
    State(state): State<AppState<G>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<SendMessageRequest>,
) -> impl IntoResponse
where
    G: GenerationClient + 'static,
{
    tracing::debug!(prompt = %sanitize_prompt(&request.message), "Processing send message");

    if request.message.trim().is_empty() {
        tracing::warn!("Send message request with empty message");
        return validation_error("message must not be empty");
    }

    let conversation_id = request.conversation_id.map(ConversationId::from_uuid);

    match state
        .chat_service
        .send_message(
            &user.user_id,
            &request.message,
            conversation_id,
            request.model,
        )
        .await
    {
        Ok(reply) => (
            StatusCode::OK,
            Json(SendMessageResponse {
                message: reply.message,
                conversation_id: reply.conversation_id.as_uuid(),
                message_id: reply.message_id.as_uuid(),
                image_url: reply.image_url,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Send message failed");
            internal_error()
        }
    }
}

#[tracing::instrument(skip(state, user))]
pub async fn list_conversations_handler<G>(
    State(state): State<AppState<G>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> impl IntoResponse
where
    G: GenerationClient + 'static,
{
    match state.chat_service.conversations(&user.user_id).await {
        Ok(conversations) => (
            StatusCode::OK,
            Json(
                conversations
                    .into_iter()
                    .map(ConversationDto::from)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Listing conversations failed");
            internal_error()
        }
    }
}

#[tracing::instrument(skip(state, user), fields(conversation_id = %conversation_id))]
pub async fn list_messages_handler<G>(
    State(state): State<AppState<G>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(conversation_id): Path<Uuid>,
) -> impl IntoResponse
where
    G: GenerationClient + 'static,
{
    let conversation_id = ConversationId::from_uuid(conversation_id);

    match state
        .chat_service
        .messages(conversation_id, &user.user_id)
        .await
    {
        Ok(messages) => (
            StatusCode::OK,
            Json(
                messages
                    .into_iter()
                    .map(MessageDto::from)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Listing messages failed");
            internal_error()
        }
    }
}

#[tracing::instrument(skip(state, user), fields(conversation_id = %conversation_id))]
pub async fn delete_conversation_handler<G>(
    State(state): State<AppState<G>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(conversation_id): Path<Uuid>,
) -> impl IntoResponse
where
    G: GenerationClient + 'static,
{
    let conversation_id = ConversationId::from_uuid(conversation_id);

    match state
        .chat_service
        .delete_conversation(conversation_id, &user.user_id)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteConversationResponse { success: true }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Deleting conversation failed");
            internal_error()
        }
    }
}
