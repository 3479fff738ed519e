use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::GenerationClient;
use crate::infrastructure::auth::session_auth_middleware;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_conversation_handler, health_handler, list_conversations_handler,
    list_messages_handler, send_message_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: GenerationClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Every chat procedure sits behind the session gate; /health does not.
    let chat_routes = Router::new()
        .route("/message", post(send_message_handler::<G>))
        .route("/conversations", get(list_conversations_handler::<G>))
        .route(
            "/conversations/{conversation_id}/messages",
            get(list_messages_handler::<G>),
        )
        .route(
            "/conversations/{conversation_id}",
            delete(delete_conversation_handler::<G>),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.session_verifier),
            session_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/chat", chat_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
