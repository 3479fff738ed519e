use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{
    ConversationRepository, GenerationClient, GenerationError, GenerationModel, MessageRepository,
    RepositoryError,
};
use crate::domain::{Conversation, ConversationId, Message, MessageId, UserId};

const IMAGE_PROMPT_PREFIX: &str =
    "Create a detailed description for an image based on this request:";
const IMAGE_REPLY_PREFIX: &str = "I've created a description for your image request:";
const IMAGE_FAILURE_REPLY: &str =
    "I'm sorry, I couldn't generate an image at the moment. Please try again.";
const PLACEHOLDER_IMAGE_URL: &str = "/placeholder.svg?height=300&width=300&text=Generated%20Image";

/// The conversation/message protocol behind the four chat procedures.
///
/// Writes are independent: there is no transaction spanning the user-message
/// append and the assistant-message append, so a generation or store failure
/// in between leaves the user message persisted without a reply. That partial
/// state is accepted and observable.
pub struct ChatService<G>
where
    G: GenerationClient,
{
    conversations: Arc<dyn ConversationRepository>,
    messages: Arc<dyn MessageRepository>,
    generation: Arc<G>,
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: String,
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
    pub image_url: Option<String>,
}

impl<G> ChatService<G>
where
    G: GenerationClient,
{
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        messages: Arc<dyn MessageRepository>,
        generation: Arc<G>,
    ) -> Self {
        Self {
            conversations,
            messages,
            generation,
        }
    }

    #[instrument(skip_all, fields(user_id = %user_id, model = model.as_str()))]
    pub async fn send_message(
        &self,
        user_id: &UserId,
        message: &str,
        conversation_id: Option<ConversationId>,
        model: GenerationModel,
    ) -> Result<ChatReply, ChatError> {
        let conversation_id = match conversation_id {
            Some(id) => id,
            None => {
                let conversation = Conversation::from_first_message(user_id.clone(), message);
                self.conversations.create(&conversation).await?;
                tracing::debug!(conversation_id = %conversation.id.as_uuid(), "Created conversation");
                conversation.id
            }
        };

        let user_message = Message::user(conversation_id, user_id.clone(), message.to_string());
        self.messages.append(&user_message).await?;

        let (reply_text, image_url) = if is_image_request(model, message) {
            self.image_reply(message, model).await
        } else {
            (self.generation.generate(message, model).await?, None)
        };

        let assistant_message = Message::assistant(
            conversation_id,
            user_id.clone(),
            reply_text.clone(),
            image_url.clone(),
        );
        self.messages.append(&assistant_message).await?;

        Ok(ChatReply {
            message: reply_text,
            conversation_id,
            message_id: assistant_message.id,
            image_url,
        })
    }

    /// Image requests degrade instead of failing: a generation error becomes
    /// a fixed apology reply with no image reference, and the call still
    /// succeeds. Text requests get no such treatment; their errors propagate.
    async fn image_reply(
        &self,
        message: &str,
        model: GenerationModel,
    ) -> (String, Option<String>) {
        let prompt = format!(
            "{} {}. Respond with just the description, no additional text.",
            IMAGE_PROMPT_PREFIX, message
        );

        match self.generation.generate(&prompt, model).await {
            Ok(description) => (
                format!("{} {}", IMAGE_REPLY_PREFIX, description),
                Some(PLACEHOLDER_IMAGE_URL.to_string()),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Image description generation failed, degrading to apology reply");
                (IMAGE_FAILURE_REPLY.to_string(), None)
            }
        }
    }

    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn conversations(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Conversation>, ChatError> {
        Ok(self.conversations.list_for_user(user_id).await?)
    }

    #[instrument(skip_all, fields(user_id = %user_id, conversation_id = %conversation_id.as_uuid()))]
    pub async fn messages(
        &self,
        conversation_id: ConversationId,
        user_id: &UserId,
    ) -> Result<Vec<Message>, ChatError> {
        Ok(self
            .messages
            .list_for_conversation(conversation_id, user_id)
            .await?)
    }

    #[instrument(skip_all, fields(user_id = %user_id, conversation_id = %conversation_id.as_uuid()))]
    pub async fn delete_conversation(
        &self,
        conversation_id: ConversationId,
        user_id: &UserId,
    ) -> Result<(), ChatError> {
        Ok(self.conversations.delete(conversation_id, user_id).await?)
    }
}

/// The vision model always takes the image path; so does any message that
/// mentions an image or picture, regardless of the selected model.
fn is_image_request(model: GenerationModel, message: &str) -> bool {
    if model == GenerationModel::GeminiProVision {
        return true;
    }

    let lowered = message.to_lowercase();
    lowered.contains("image") || lowered.contains("picture")
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),
}
