use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{
    models::{iso_timestamp, HealthResponse},
    routes::AppState,
};

pub const SERVICE_NAME: &str = "vacation-recommendation-microservice";

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: iso_timestamp(),
            uptime: state.started_at.elapsed().as_secs_f64(),
        }),
    )
}
