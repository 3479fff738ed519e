use std::sync::Arc;

use crate::application::ports::GenerationClient;
use crate::application::services::ChatService;
use crate::infrastructure::auth::SessionVerifier;

pub struct AppState<G>
where
    G: GenerationClient,
{
    pub chat_service: Arc<ChatService<G>>,
    pub session_verifier: Arc<dyn SessionVerifier>,
}

impl<G> Clone for AppState<G>
where
    G: GenerationClient,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            session_verifier: Arc::clone(&self.session_verifier),
        }
    }
}
