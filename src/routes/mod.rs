use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::AppError,
    middleware::{make_span_with_request_id, request_id_middleware},
    services::catalog::Catalog,
};

pub mod destinations;
pub mod health;
pub mod recommendations;

/// Endpoints advertised by the not-found handler
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET /api/health",
    "GET /api/destinations",
    "POST /api/recommendations",
];

/// Shared, read-only application state
pub struct AppState {
    pub catalog: Catalog,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(endpoint_not_found)
        .with_state(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check).fallback(endpoint_not_found))
        .route(
            "/destinations",
            get(destinations::list_destinations).fallback(endpoint_not_found),
        )
        .route(
            "/recommendations",
            post(recommendations::recommend).fallback(endpoint_not_found),
        )
}

/// Unknown paths and unsupported methods on known paths
async fn endpoint_not_found() -> AppError {
    AppError::EndpointNotFound
}

/// Converts a handler panic into a 500 response instead of dropping the connection
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(details = %details, "Handler panicked");
    AppError::Internal(details).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, http::StatusCode};

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("catalog index out of range"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["details"], "catalog index out of range");
    }

    #[tokio::test]
    async fn test_formatted_panic_message_is_kept() {
        let response = handle_panic(Box::new(format!("bad score {}", 101)));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["details"], "bad score 101");
    }
}
