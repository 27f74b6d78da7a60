use chrono::{SecondsFormat, Utc};

pub mod destination;
pub mod recommendation;
pub mod user_profile;

pub use destination::{Budget, Destination};
pub use recommendation::{
    DestinationListResponse, HealthResponse, NoMatchesResponse, Recommendation,
    RecommendationResponse,
};
pub use user_profile::{RecommendationRequest, TravelFilters, UserProfile};

/// Current UTC time as an ISO-8601 string with millisecond precision
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
