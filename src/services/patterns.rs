use std::fmt::Display;

/// Minimum number of past vacations before a pattern is inferred
const MIN_VACATIONS_FOR_PATTERN: usize = 2;
/// Matches needed for a bucket to become the primary pattern
const PATTERN_THRESHOLD: usize = 2;

const ASIA_KEYWORDS: &[&str] = &[
    "japan", "thailand", "china", "korea", "vietnam", "asia", "bali", "indonesia",
];
const EUROPE_KEYWORDS: &[&str] = &[
    "italy", "france", "spain", "germany", "uk", "europe", "prague", "portugal",
];
const AFRICA_KEYWORDS: &[&str] = &["africa", "morocco", "egypt", "kenya", "tanzania"];
const AMERICAS_KEYWORDS: &[&str] = &["usa", "canada", "mexico", "brazil", "america"];
const CULTURAL_KEYWORDS: &[&str] = &["temple", "museum", "culture", "history", "art"];
const BEACH_KEYWORDS: &[&str] = &["beach", "island", "tropical", "coast"];
const NATURE_KEYWORDS: &[&str] = &["mountain", "nature", "hiking", "wildlife"];

/// Travel preference inferred from past vacations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelPattern {
    Establishing,
    Asian,
    European,
    Cultural,
    Beaches,
    Nature,
    Diverse,
}

impl TravelPattern {
    pub fn label(&self) -> &'static str {
        match self {
            TravelPattern::Establishing => "Establishing travel preferences",
            TravelPattern::Asian => "Asian cultural and adventure destinations",
            TravelPattern::European => "European historical and cultural destinations",
            TravelPattern::Cultural => "Cultural and historical destinations",
            TravelPattern::Beaches => "Tropical and beach destinations",
            TravelPattern::Nature => "Nature and adventure destinations",
            TravelPattern::Diverse => "Diverse international travel experiences",
        }
    }
}

impl Display for TravelPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-bucket counts of past vacations mentioning a bucket keyword
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatternTally {
    pub asia: usize,
    pub europe: usize,
    pub africa: usize,
    pub americas: usize,
    pub cultural: usize,
    pub beaches: usize,
    pub nature: usize,
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

impl PatternTally {
    /// Counts every bucket a vacation mentions; one vacation may hit several
    pub fn from_vacations(past_vacations: &[String]) -> Self {
        let mut tally = Self::default();

        for vacation in past_vacations {
            let vacation = vacation.to_lowercase();
            let buckets = [
                (ASIA_KEYWORDS, &mut tally.asia),
                (EUROPE_KEYWORDS, &mut tally.europe),
                (AFRICA_KEYWORDS, &mut tally.africa),
                (AMERICAS_KEYWORDS, &mut tally.americas),
                (CULTURAL_KEYWORDS, &mut tally.cultural),
                (BEACH_KEYWORDS, &mut tally.beaches),
                (NATURE_KEYWORDS, &mut tally.nature),
            ];
            for (keywords, count) in buckets {
                if mentions_any(&vacation, keywords) {
                    *count += 1;
                }
            }
        }

        tally
    }

    /// First bucket reaching the threshold, checked in priority order
    ///
    /// Africa and Americas are tallied but never selected.
    pub fn primary_pattern(&self) -> TravelPattern {
        let candidates = [
            (self.asia, TravelPattern::Asian),
            (self.europe, TravelPattern::European),
            (self.cultural, TravelPattern::Cultural),
            (self.beaches, TravelPattern::Beaches),
            (self.nature, TravelPattern::Nature),
        ];

        candidates
            .into_iter()
            .find(|(count, _)| *count >= PATTERN_THRESHOLD)
            .map_or(TravelPattern::Diverse, |(_, pattern)| pattern)
    }
}

/// Infers a travel pattern from free-text past vacations
pub fn analyze_patterns(past_vacations: &[String]) -> TravelPattern {
    if past_vacations.len() < MIN_VACATIONS_FOR_PATTERN {
        return TravelPattern::Establishing;
    }

    PatternTally::from_vacations(past_vacations).primary_pattern()
}
