use crate::{
    models::{Recommendation, TravelFilters, UserProfile},
    services::{
        catalog::Catalog,
        matching::{is_already_visited, match_score, similar_to},
        patterns::{analyze_patterns, TravelPattern},
    },
};

/// Lowest score a destination needs to be recommended
pub const MIN_MATCH_SCORE: u32 = 60;
/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Result of running the recommendation pipeline for one profile
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    /// At least one destination cleared the threshold
    Matches {
        recommendations: Vec<Recommendation>,
        pattern: TravelPattern,
    },
    /// Nothing matched; suggestions on how to relax the filters
    NoMatches { suggestions: Vec<String> },
}

/// A scored destination that has not yet been ranked
struct Candidate {
    score: u32,
    recommendation: Recommendation,
}

/// Recommends unvisited destinations for a profile
///
/// Destinations are scored in catalog order, kept when they reach
/// [`MIN_MATCH_SCORE`], stably sorted by score (ties keep catalog order)
/// and capped at [`MAX_RECOMMENDATIONS`]. Pure: the catalog is only read.
pub fn recommend(profile: &UserProfile, catalog: &Catalog) -> RecommendationOutcome {
    let past_vacations = &profile.past_vacations;

    let mut candidates: Vec<Candidate> = catalog
        .destinations()
        .iter()
        .filter(|destination| !is_already_visited(destination, past_vacations))
        .filter_map(|destination| {
            let score = match_score(destination, past_vacations, &profile.filters);
            (score >= MIN_MATCH_SCORE).then(|| Candidate {
                score,
                recommendation: Recommendation {
                    destination: destination.clone(),
                    match_score: format!("{score}%"),
                    similar_to: similar_to(destination, past_vacations),
                },
            })
        })
        .collect();

    // sort_by is stable
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_RECOMMENDATIONS);

    tracing::debug!(
        user_id = %profile.user_id,
        candidates = candidates.len(),
        "Scored catalog"
    );

    if candidates.is_empty() {
        return RecommendationOutcome::NoMatches {
            suggestions: no_match_suggestions(&profile.filters),
        };
    }

    RecommendationOutcome::Matches {
        recommendations: candidates.into_iter().map(|c| c.recommendation).collect(),
        pattern: analyze_patterns(past_vacations),
    }
}

/// Set to something other than empty or "any"
fn is_constrained(filter: Option<&str>) -> bool {
    filter.is_some_and(|value| {
        let value = value.to_lowercase();
        !value.is_empty() && value != "any"
    })
}

/// Builds suggestions for relaxing filters that produced no matches
///
/// Rules accumulate in a fixed order: region, budget, climate. A generic
/// suggestion is used when none applies.
pub fn no_match_suggestions(filters: &TravelFilters) -> Vec<String> {
    let mut suggestions = Vec::new();

    if is_constrained(filters.region.as_deref()) {
        suggestions.push("Consider expanding your region preferences to include more areas".to_string());
    }
    if filters
        .budget
        .as_deref()
        .is_some_and(|budget| budget.to_lowercase() == "low")
    {
        suggestions.push("Try 'medium' or 'high' budget range for more luxury options".to_string());
    }
    if is_constrained(filters.climate.as_deref()) {
        suggestions.push("Consider 'temperate' climate for more variety".to_string());
    }
    if suggestions.is_empty() {
        suggestions.push("Try different filter combinations or expand your criteria".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Destination};

    fn profile(past: &[&str], climate: &str, budget: &str, region: &str) -> UserProfile {
        let field = |value: &str| (!value.is_empty()).then(|| value.to_string());
        UserProfile {
            user_id: "u1".to_string(),
            past_vacations: past.iter().map(|p| p.to_string()).collect(),
            filters: TravelFilters {
                climate: field(climate),
                budget: field(budget),
                region: field(region),
            },
        }
    }

    fn unwrap_matches(outcome: RecommendationOutcome) -> (Vec<Recommendation>, TravelPattern) {
        match outcome {
            RecommendationOutcome::Matches {
                recommendations,
                pattern,
            } => (recommendations, pattern),
            other => panic!("expected matches, got {other:?}"),
        }
    }

    fn unwrap_suggestions(outcome: RecommendationOutcome) -> Vec<String> {
        match outcome {
            RecommendationOutcome::NoMatches { suggestions } => suggestions,
            other => panic!("expected no matches, got {other:?}"),
        }
    }

    fn generated_catalog(size: u32) -> Catalog {
        let destinations = (1..=size)
            .map(|id| Destination {
                id,
                name: format!("Town {id}, Somewhere"),
                image: String::new(),
                description: String::new(),
                tags: vec!["warm".to_string()],
                climate: "warm".to_string(),
                budget: Budget::Medium,
                region: "Oceania".to_string(),
                estimated_budget: String::new(),
                best_time_to_visit: String::new(),
                activities: vec![],
            })
            .collect();
        Catalog::new(destinations).unwrap()
    }

    #[test]
    fn test_rome_traveller_gets_morocco() {
        let outcome = recommend(
            &profile(&["Rome, Italy"], "warm", "medium", "Asia, Africa"),
            &Catalog::builtin(),
        );

        let (recommendations, pattern) = unwrap_matches(outcome);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].destination.name, "Morocco");
        assert_eq!(recommendations[0].match_score, "80%");
        assert_eq!(
            recommendations[0].similar_to,
            vec!["Based on your travel preferences".to_string()]
        );
        assert_eq!(pattern, TravelPattern::Establishing);
    }

    #[test]
    fn test_visited_destinations_are_excluded() {
        let past = ["Kyoto, Japan", "Lisbon, Portugal", "Bali, Indonesia"];
        let (recommendations, _) =
            unwrap_matches(recommend(&profile(&past, "", "", ""), &Catalog::builtin()));

        let names: Vec<&str> = recommendations
            .iter()
            .map(|r| r.destination.name.as_str())
            .collect();
        assert!(!names.contains(&"Japan"));
        assert!(!names.contains(&"Portugal"));
        assert!(!names.contains(&"Bali, Indonesia"));
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        // Chiang Mai precedes Bali in the catalog, but Bali earns a
        // similarity bonus from the beach trip
        let past = ["Beaches of Goa", "Seoul, Korea"];
        let (recommendations, _) = unwrap_matches(recommend(
            &profile(&past, "warm", "", "Asia"),
            &Catalog::builtin(),
        ));

        let ranked: Vec<(&str, &str)> = recommendations
            .iter()
            .map(|r| (r.destination.name.as_str(), r.match_score.as_str()))
            .collect();
        assert_eq!(
            ranked,
            vec![("Bali, Indonesia", "83%"), ("Chiang Mai, Thailand", "80%")]
        );
        assert_eq!(recommendations[0].similar_to, vec!["Beaches of Goa".to_string()]);
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let (recommendations, _) = unwrap_matches(recommend(
            &profile(&["London, UK"], "", "", ""),
            &Catalog::builtin(),
        ));

        let ids: Vec<u32> = recommendations.iter().map(|r| r.destination.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert!(recommendations.iter().all(|r| r.match_score == "80%"));
    }

    #[test]
    fn test_results_capped_at_ten() {
        let (recommendations, _) = unwrap_matches(recommend(
            &profile(&["Nowhere"], "", "", ""),
            &generated_catalog(25),
        ));
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recommendations[0].destination.id, 1);
    }

    #[test]
    fn test_nothing_matches_in_antarctica() {
        let suggestions = unwrap_suggestions(recommend(
            &profile(&["New York, USA"], "cold", "low", "Antarctica"),
            &Catalog::builtin(),
        ));

        assert_eq!(
            suggestions,
            vec![
                "Consider expanding your region preferences to include more areas".to_string(),
                "Try 'medium' or 'high' budget range for more luxury options".to_string(),
                "Consider 'temperate' climate for more variety".to_string(),
            ]
        );
    }

    #[test]
    fn test_fallback_suggestion_when_no_rule_applies() {
        let suggestions = no_match_suggestions(&TravelFilters {
            climate: Some("any".to_string()),
            budget: Some("high".to_string()),
            region: Some(String::new()),
        });
        assert_eq!(
            suggestions,
            vec!["Try different filter combinations or expand your criteria".to_string()]
        );
    }

    #[test]
    fn test_suggestion_rules_accumulate_in_order() {
        let suggestions = no_match_suggestions(&TravelFilters {
            climate: Some("Cold".to_string()),
            budget: Some("LOW".to_string()),
            region: None,
        });
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("budget"));
        assert!(suggestions[1].contains("temperate"));
    }

    #[test]
    fn test_pattern_attached_on_success() {
        let past = ["Rome, Italy", "Kyoto, Japan", "Bangkok, Thailand"];
        let (recommendations, pattern) = unwrap_matches(recommend(
            &profile(&past, "warm", "medium", "Asia, Africa"),
            &Catalog::builtin(),
        ));
        assert_eq!(recommendations[0].destination.name, "Morocco");
        assert_eq!(pattern, TravelPattern::Asian);
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let catalog = Catalog::builtin();
        let user = profile(&["Rome, Italy", "Kyoto, Japan"], "", "medium", "");
        let before = catalog.clone();

        assert_eq!(recommend(&user, &catalog), recommend(&user, &catalog));
        assert_eq!(catalog, before);
    }
}
