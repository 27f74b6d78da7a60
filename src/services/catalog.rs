use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::{Budget, Destination};

/// Error types for catalog construction
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog contains no destinations")]
    Empty,
    #[error("Duplicate destination id {0}")]
    DuplicateId(u32),
}

/// Immutable, ordered set of destinations available for recommendation
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

/// Optional exact-match filters for browsing the catalog
#[derive(Debug, Clone, Default)]
pub struct BrowseFilter<'a> {
    pub region: Option<&'a str>,
    pub budget: Option<&'a str>,
    pub climate: Option<&'a str>,
}

/// Absent, empty and "any" place no constraint on a browse dimension
fn browse_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None | Some("") => true,
        Some(wanted) if wanted.eq_ignore_ascii_case("any") => true,
        Some(wanted) => wanted.to_lowercase() == value.to_lowercase(),
    }
}

impl Catalog {
    /// Creates a catalog, rejecting empty input and repeated ids
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        if destinations.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for destination in &destinations {
            if !seen.insert(destination.id) {
                return Err(CatalogError::DuplicateId(destination.id));
            }
        }

        Ok(Self { destinations })
    }

    /// Loads a catalog from a JSON array of destination records
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Self::new(destinations)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Destinations matching every supplied filter, in catalog order
    pub fn browse(&self, filter: &BrowseFilter<'_>) -> Vec<Destination> {
        self.destinations
            .iter()
            .filter(|d| browse_matches(filter.region, &d.region))
            .filter(|d| browse_matches(filter.budget, d.budget.as_str()))
            .filter(|d| browse_matches(filter.climate, &d.climate))
            .cloned()
            .collect()
    }

    /// The ten destinations the service ships with
    pub fn builtin() -> Self {
        Self {
            destinations: builtin_destinations(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn builtin_destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: 1,
            name: "Seychelles, Africa".to_string(),
            image: "https://images.example.com/seychelles.jpg".to_string(),
            description: "Pristine tropical beaches with crystal-clear waters and luxury resorts, perfect for relaxation and water activities.".to_string(),
            tags: strings(&["warm", "medium", "high", "Africa", "beaches", "tropical", "luxury"]),
            climate: "warm".to_string(),
            budget: Budget::High,
            region: "Africa".to_string(),
            estimated_budget: "$2500-3500".to_string(),
            best_time_to_visit: "April-October".to_string(),
            activities: strings(&["beaches", "snorkeling", "diving", "luxury resorts"]),
        },
        Destination {
            id: 2,
            name: "Chiang Mai, Thailand".to_string(),
            image: "https://images.example.com/chiangmai.jpg".to_string(),
            description: "Cultural hub with ancient temples, vibrant markets, and rich history, offering affordable luxury and authentic experiences.".to_string(),
            tags: strings(&["warm", "low", "medium", "Asia", "cultural", "temples", "food"]),
            climate: "warm".to_string(),
            budget: Budget::Low,
            region: "Asia".to_string(),
            estimated_budget: "$1200-2000".to_string(),
            best_time_to_visit: "November-February".to_string(),
            activities: strings(&["temples", "markets", "cooking classes", "cultural tours"]),
        },
        Destination {
            id: 3,
            name: "Prague, Czech Republic".to_string(),
            image: "https://images.example.com/prague.jpg".to_string(),
            description: "Medieval charm with stunning architecture, rich history, and affordable prices in the heart of Europe.".to_string(),
            tags: strings(&["temperate", "low", "medium", "Europe", "historical", "architecture", "beer"]),
            climate: "temperate".to_string(),
            budget: Budget::Medium,
            region: "Europe".to_string(),
            estimated_budget: "$1500-2500".to_string(),
            best_time_to_visit: "April-October".to_string(),
            activities: strings(&["architecture", "museums", "beer tours", "river cruises"]),
        },
        Destination {
            id: 4,
            name: "Iceland".to_string(),
            image: "https://images.example.com/iceland.jpg".to_string(),
            description: "Dramatic landscapes with glaciers, geysers, and northern lights, offering unique natural experiences.".to_string(),
            tags: strings(&["cold", "medium", "high", "Europe", "nature", "adventure", "northern lights"]),
            climate: "cold".to_string(),
            budget: Budget::High,
            region: "Europe".to_string(),
            estimated_budget: "$3000-4500".to_string(),
            best_time_to_visit: "June-September".to_string(),
            activities: strings(&["glaciers", "geysers", "northern lights", "hot springs"]),
        },
        Destination {
            id: 5,
            name: "Bali, Indonesia".to_string(),
            image: "https://images.example.com/bali.jpg".to_string(),
            description: "Tropical paradise with beautiful beaches, temples, and vibrant culture at affordable prices.".to_string(),
            tags: strings(&["warm", "low", "medium", "Asia", "beaches", "cultural", "temples"]),
            climate: "warm".to_string(),
            budget: Budget::Low,
            region: "Asia".to_string(),
            estimated_budget: "$1000-2000".to_string(),
            best_time_to_visit: "April-October".to_string(),
            activities: strings(&["beaches", "temples", "rice terraces", "yoga retreats"]),
        },
        Destination {
            id: 6,
            name: "Morocco".to_string(),
            image: "https://images.example.com/morocco.jpg".to_string(),
            description: "Exotic markets, desert adventures, and rich cultural heritage in North Africa.".to_string(),
            tags: strings(&["warm", "temperate", "low", "medium", "Africa", "cultural", "desert", "markets"]),
            climate: "warm".to_string(),
            budget: Budget::Medium,
            region: "Africa".to_string(),
            estimated_budget: "$1500-2500".to_string(),
            best_time_to_visit: "March-May, September-November".to_string(),
            activities: strings(&["markets", "desert tours", "architecture", "cuisine"]),
        },
        Destination {
            id: 7,
            name: "Norway".to_string(),
            image: "https://images.example.com/norway.jpg".to_string(),
            description: "Stunning fjords, northern lights, and pristine wilderness for nature lovers.".to_string(),
            tags: strings(&["cold", "high", "Europe", "nature", "fjords", "northern lights"]),
            climate: "cold".to_string(),
            budget: Budget::High,
            region: "Europe".to_string(),
            estimated_budget: "$3500-5000".to_string(),
            best_time_to_visit: "June-August".to_string(),
            activities: strings(&["fjords", "northern lights", "hiking", "midnight sun"]),
        },
        Destination {
            id: 8,
            name: "Costa Rica".to_string(),
            image: "https://images.example.com/costarica.jpg".to_string(),
            description: "Biodiversity hotspot with rainforests, beaches, and adventure activities.".to_string(),
            tags: strings(&["warm", "medium", "Americas", "nature", "adventure", "wildlife"]),
            climate: "warm".to_string(),
            budget: Budget::Medium,
            region: "Americas".to_string(),
            estimated_budget: "$2000-3000".to_string(),
            best_time_to_visit: "December-April".to_string(),
            activities: strings(&["wildlife", "rainforests", "adventure sports", "beaches"]),
        },
        Destination {
            id: 9,
            name: "Japan".to_string(),
            image: "https://images.example.com/japan.jpg".to_string(),
            description: "Perfect blend of traditional culture and modern innovation with excellent cuisine.".to_string(),
            tags: strings(&["temperate", "medium", "high", "Asia", "cultural", "cuisine", "temples"]),
            climate: "temperate".to_string(),
            budget: Budget::High,
            region: "Asia".to_string(),
            estimated_budget: "$3000-4000".to_string(),
            best_time_to_visit: "March-May, September-November".to_string(),
            activities: strings(&["temples", "cuisine", "cherry blossoms", "technology"]),
        },
        Destination {
            id: 10,
            name: "Portugal".to_string(),
            image: "https://images.example.com/portugal.jpg".to_string(),
            description: "Charming coastal towns, historic cities, and excellent wine at reasonable prices.".to_string(),
            tags: strings(&["temperate", "medium", "Europe", "coastal", "wine", "historical"]),
            climate: "temperate".to_string(),
            budget: Budget::Medium,
            region: "Europe".to_string(),
            estimated_budget: "$2000-3000".to_string(),
            best_time_to_visit: "April-October".to_string(),
            activities: strings(&["wine tours", "coastal towns", "history", "surfing"]),
        },
    ]
}
