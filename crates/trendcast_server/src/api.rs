//! HTTP API.

use crate::Orchestrator;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};
use trendcast_core::{GenerateOutcome, PublishRequest, Topic};
use trendcast_error::{ServerError, ServerErrorKind, TrendcastError};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct ApiState {
    orchestrator: Arc<Orchestrator>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Free-text subject
    pub topic: Topic,
}

/// Failure surfaced to HTTP clients as a 500 with `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError(TrendcastError);

impl From<TrendcastError> for ApiError {
    fn from(err: TrendcastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// Creates the application router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/generate", post(generate))
        .route("/post", post(publish))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `address` and serve until Ctrl-C.
#[instrument(skip(state))]
pub async fn serve(address: &str, state: ApiState) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(address).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: address.to_string(),
            reason: e.to_string(),
        })
    })?;
    info!("Listening on http://{}", address);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for Ctrl-C");
            }
            info!("Shutting down");
        })
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))
}

/// Landing page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn generate(
    State(state): State<ApiState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateOutcome>, ApiError> {
    let outcome = state.orchestrator.generate(&request.topic).await?;
    Ok(Json(outcome))
}

async fn publish(
    State(state): State<ApiState>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let response = state.orchestrator.publish(&request).await?;
    Ok(Json(response))
}
