use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    models::DestinationListResponse,
    routes::AppState,
    services::catalog::BrowseFilter,
};

#[derive(Debug, Default, Deserialize)]
pub struct DestinationQuery {
    region: Option<String>,
    budget: Option<String>,
    climate: Option<String>,
}

/// Handler for browsing the catalog with optional exact-match filters
pub async fn list_destinations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DestinationQuery>,
) -> Json<DestinationListResponse> {
    let destinations = state.catalog.browse(&BrowseFilter {
        region: params.region.as_deref(),
        budget: params.budget.as_deref(),
        climate: params.climate.as_deref(),
    });

    tracing::debug!(
        region = ?params.region,
        budget = ?params.budget,
        climate = ?params.climate,
        total = destinations.len(),
        "Browsed destinations"
    );

    Json(DestinationListResponse {
        status: "success",
        total: destinations.len(),
        destinations,
    })
}
