use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Spending tier of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
        }
    }
}

impl Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vacation destination from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u32,
    /// Display name, conventionally "City, Country"
    pub name: String,
    pub image: String,
    pub description: String,
    /// Free-form keywords mixing climate, budget, region and activity words
    pub tags: Vec<String>,
    pub climate: String,
    pub budget: Budget,
    pub region: String,
    pub estimated_budget: String,
    pub best_time_to_visit: String,
    pub activities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_serialization() {
        assert_eq!(serde_json::to_string(&Budget::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&Budget::High).unwrap(), "\"high\"");
        let parsed: Budget = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Budget::Medium);
    }

    #[test]
    fn test_budget_rejects_unknown_tier() {
        assert!(serde_json::from_str::<Budget>("\"luxury\"").is_err());
    }

    #[test]
    fn test_destination_uses_camel_case_fields() {
        let destination = Destination {
            id: 42,
            name: "Hanoi, Vietnam".to_string(),
            image: "https://images.example.com/hanoi.jpg".to_string(),
            description: "Street food and lakes".to_string(),
            tags: vec!["warm".to_string(), "Asia".to_string()],
            climate: "warm".to_string(),
            budget: Budget::Low,
            region: "Asia".to_string(),
            estimated_budget: "$900-1500".to_string(),
            best_time_to_visit: "October-April".to_string(),
            activities: vec!["street food".to_string()],
        };

        let json = serde_json::to_value(&destination).unwrap();
        assert_eq!(json["estimatedBudget"], "$900-1500");
        assert_eq!(json["bestTimeToVisit"], "October-April");
        assert_eq!(json["budget"], "low");
        assert!(json.get("estimated_budget").is_none());
    }
}
