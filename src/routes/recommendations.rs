use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{iso_timestamp, NoMatchesResponse, RecommendationRequest, RecommendationResponse},
    routes::AppState,
    services::recommendations::{self, RecommendationOutcome},
};

const NO_MATCHES_MESSAGE: &str = "No destinations found matching your criteria. Try expanding your region preferences or adjusting your budget range.";

/// Handler for recommendations endpoint
///
/// Answers 200 with ranked recommendations, 404 with suggestions when
/// nothing clears the match threshold, or 400 for malformed bodies.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Response> {
    let started = Instant::now();

    let Json(body) = payload.map_err(|rejection| AppError::InvalidInput {
        details: rejection.body_text(),
        user_id: Value::Null,
    })?;
    let RecommendationRequest {
        profile,
        raw_filters,
    } = RecommendationRequest::try_from(body)?;

    tracing::info!(
        request_id = %request_id,
        user_id = %profile.user_id,
        past_vacations = profile.past_vacations.len(),
        "Processing recommendation request"
    );

    let outcome = recommendations::recommend(&profile, &state.catalog);
    let response_time_ms = started.elapsed().as_millis() as u64;

    let response = match outcome {
        RecommendationOutcome::Matches {
            recommendations,
            pattern,
        } => {
            tracing::info!(
                request_id = %request_id,
                recommendations = recommendations.len(),
                pattern = %pattern,
                response_time_ms,
                "Recommendations generated"
            );

            let body = RecommendationResponse {
                status: "success",
                user_id: profile.user_id,
                total_recommendations: recommendations.len(),
                recommendations,
                based_on_pattern: pattern.to_string(),
                filters: raw_filters,
                generated_at: iso_timestamp(),
                response_time_ms,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        RecommendationOutcome::NoMatches { suggestions } => {
            tracing::info!(
                request_id = %request_id,
                suggestions = suggestions.len(),
                response_time_ms,
                "No destinations matched"
            );

            let body = NoMatchesResponse {
                status: "error",
                message: NO_MATCHES_MESSAGE,
                suggestions,
                user_id: profile.user_id,
                timestamp: iso_timestamp(),
                response_time_ms,
            };
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    };

    Ok(response)
}
