use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use sibu::application::services::ChatService;
use sibu::infrastructure::auth::{JwtSessionVerifier, SessionVerifier};
use sibu::infrastructure::llm::GeminiClient;
use sibu::infrastructure::observability::{TracingConfig, init_tracing};
use sibu::infrastructure::persistence::{
    PgConversationRepository, PgMessageRepository, create_pool,
};
use sibu::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: settings.logging.json_format,
        },
        settings.server.port,
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    sqlx::migrate!().run(&pool).await?;

    let conversations = Arc::new(PgConversationRepository::new(pool.clone()));
    let messages = Arc::new(PgMessageRepository::new(pool.clone()));
    let generation = Arc::new(GeminiClient::with_base_url(
        settings.generation.api_key.clone(),
        settings.generation.base_url.clone(),
    ));

    let chat_service = Arc::new(ChatService::new(conversations, messages, generation));
    let session_verifier: Arc<dyn SessionVerifier> =
        Arc::new(JwtSessionVerifier::new(&settings.auth.session_secret));

    let state = AppState {
        chat_service,
        session_verifier,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
