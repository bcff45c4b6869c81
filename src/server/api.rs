use crate::models::chat::{ ChatRequest, ChatResponse, ErrorResponse };
use crate::service;
use axum::{
    extract::{ Request, State },
    http::StatusCode,
    middleware::{ self, Next },
    response::{ IntoResponse, Response },
    routing::{ get, post },
    Json,
    Router,
};
use log::{ debug, error, warn };
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{ Any, CorsLayer };

#[derive(Clone)]
pub struct AppState {
    pub api_key: Option<String>,
    pub knowledge_path: String,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("El campo \"message\" es requerido.")]
    EmptyMessage,
    #[error("Ocurrió un error interno en el servidor.")]
    Internal,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = match self {
            ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
            ChatError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .route("/", get(liveness))
        .layer(cors)
        .with_state(state)
}

/// API key auth middleware — validates the `x-api-key` header against the
/// configured secret before the request reaches the chat handler.
async fn require_api_key(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(expected) = &state.api_key else {
        return next.run(req).await;
    };

    let provided = req.headers().get("x-api-key").and_then(|v| v.to_str().ok());
    if provided == Some(expected.as_str()) {
        return next.run(req).await;
    }

    warn!("Rejected request with bad or missing API key");
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Acceso no autorizado. API Key inválida o no proporcionada.".to_string(),
        }),
    )
        .into_response()
}

async fn liveness() -> &'static str {
    "API del chatbot FAQ funcionando correctamente."
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let message = payload.message.as_deref().unwrap_or("").trim().to_string();
    if message.is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    debug!("Processing chat message ({} chars)", message.len());

    // Run the pipeline in its own task so a panic surfaces as a 500 response
    // instead of tearing down the connection.
    let knowledge_path = state.knowledge_path.clone();
    let reply = tokio::spawn(async move {
        service::process_message(&message, &knowledge_path).await
    })
    .await
    .map_err(|e| {
        error!("Chat pipeline failed: {}", e);
        ChatError::Internal
    })?;

    Ok(Json(ChatResponse { reply }))
}
