//! Heuristic matching between a destination and a traveller's history.
//!
//! All comparisons are plain lowercase substring checks. Place names are
//! reduced to the text before their first comma, so "Kyoto, Japan" is
//! compared as "kyoto". This is deliberately loose: short or common city
//! names can produce false positives.

use crate::models::{Destination, TravelFilters};

pub const CLIMATE_WEIGHT: u32 = 30;
pub const BUDGET_WEIGHT: u32 = 25;
pub const REGION_WEIGHT: u32 = 25;
/// Upper bound for the past-vacation similarity dimension
pub const SIMILARITY_WEIGHT: u32 = 20;
/// Points per (past vacation, tag) pair that match
pub const SIMILARITY_POINTS_PER_TAG: u32 = 3;
pub const MAX_SCORE: u32 = 100;

/// Provenance used when no past vacation mentions any of the destination's tags
pub const FALLBACK_SIMILARITY: &str = "Based on your travel preferences";

const MAX_SIMILAR_TO: usize = 2;

/// Text before the first comma, or the whole string if there is none
fn leading_segment(text: &str) -> &str {
    text.split_once(',').map_or(text, |(head, _)| head)
}

/// Single-valued filter: absent, empty or "any" always matches
fn single_filter_matches(filter: Option<&str>, value: &str) -> bool {
    let wanted = filter.unwrap_or_default().trim().to_lowercase();
    wanted.is_empty() || wanted == "any" || wanted == value.to_lowercase()
}

/// Comma-separated region filter, matched against any listed region
fn region_filter_matches(filter: Option<&str>, region: &str) -> bool {
    let wanted: Vec<String> = filter
        .unwrap_or_default()
        .to_lowercase()
        .split(',')
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();

    let region = region.to_lowercase();
    wanted.is_empty() || wanted.iter().any(|r| r == "any" || *r == region)
}

/// Points earned from past vacations that resemble the destination's tags,
/// before capping
fn similarity_points(destination: &Destination, past_vacations: &[String]) -> u32 {
    let mut points = 0;
    for vacation in past_vacations {
        let vacation = vacation.to_lowercase();
        let place = leading_segment(&vacation);
        for tag in &destination.tags {
            let tag = tag.to_lowercase();
            if vacation.contains(&tag) || tag.contains(place) {
                points += SIMILARITY_POINTS_PER_TAG;
            }
        }
    }
    points
}

/// Computes a 0-100 match score for a destination
///
/// Climate, budget and region each contribute their full weight when the
/// filter is satisfied and nothing otherwise. Past vacations add up to
/// [`SIMILARITY_WEIGHT`] more.
pub fn match_score(
    destination: &Destination,
    past_vacations: &[String],
    filters: &TravelFilters,
) -> u32 {
    let mut score = 0;

    if single_filter_matches(filters.climate.as_deref(), &destination.climate) {
        score += CLIMATE_WEIGHT;
    }
    if single_filter_matches(filters.budget.as_deref(), destination.budget.as_str()) {
        score += BUDGET_WEIGHT;
    }
    if region_filter_matches(filters.region.as_deref(), &destination.region) {
        score += REGION_WEIGHT;
    }

    score += similarity_points(destination, past_vacations).min(SIMILARITY_WEIGHT);

    score.min(MAX_SCORE)
}

/// Whether any past vacation appears to be the destination itself
///
/// Containment is checked both ways: the destination name may contain the
/// vacation's leading segment, or the vacation may contain the
/// destination's leading segment.
pub fn is_already_visited(destination: &Destination, past_vacations: &[String]) -> bool {
    let name = destination.name.to_lowercase();
    let name_place = leading_segment(&name);

    past_vacations.iter().any(|vacation| {
        let vacation = vacation.to_lowercase();
        name.contains(leading_segment(&vacation)) || vacation.contains(name_place)
    })
}

/// Up to two past vacations mentioning one of the destination's tags
pub fn similar_to(destination: &Destination, past_vacations: &[String]) -> Vec<String> {
    let tags: Vec<String> = destination.tags.iter().map(|t| t.to_lowercase()).collect();

    let similar: Vec<String> = past_vacations
        .iter()
        .filter(|vacation| {
            let vacation = vacation.to_lowercase();
            tags.iter().any(|tag| vacation.contains(tag.as_str()))
        })
        .take(MAX_SIMILAR_TO)
        .cloned()
        .collect();

    if similar.is_empty() {
        vec![FALLBACK_SIMILARITY.to_string()]
    } else {
        similar
    }
}
