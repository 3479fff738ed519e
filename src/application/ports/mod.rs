mod conversation_repository;
mod generation_client;
mod message_repository;
mod repository_error;

pub use conversation_repository::ConversationRepository;
pub use generation_client::{GenerationClient, GenerationError, GenerationModel};
pub use message_repository::MessageRepository;
pub use repository_error::RepositoryError;
