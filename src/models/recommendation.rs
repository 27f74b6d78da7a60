use serde::Serialize;
use serde_json::{Map, Value};

use super::Destination;

/// A destination recommended to a user, as returned to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(flatten)]
    pub destination: Destination,
    /// Integer percentage, e.g. "75%"
    pub match_score: String,
    /// Past vacations that influenced the match (at most two)
    pub similar_to: Vec<String>,
}

/// Body of `GET /api/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// Seconds since the service started
    pub uptime: f64,
}

/// Body of `GET /api/destinations`
#[derive(Debug, Serialize)]
pub struct DestinationListResponse {
    pub status: &'static str,
    pub total: usize,
    pub destinations: Vec<Destination>,
}

/// Successful body of `POST /api/recommendations`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub status: &'static str,
    pub user_id: String,
    pub total_recommendations: usize,
    pub recommendations: Vec<Recommendation>,
    pub based_on_pattern: String,
    pub filters: Map<String, Value>,
    pub generated_at: String,
    pub response_time_ms: u64,
}

/// Body returned when no destination clears the match threshold
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoMatchesResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub suggestions: Vec<String>,
    pub user_id: String,
    pub timestamp: String,
    pub response_time_ms: u64,
}
