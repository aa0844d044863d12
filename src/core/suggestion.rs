use serde::{Deserialize, Serialize};

use crate::ranking::MatchCandidate;
use crate::text::normalize;

/// One autocomplete suggestion as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Primary name, with " (a.k.a: <matched name>)" when another name won
    pub display_name: String,

    /// The name that matched, when it differs from the primary name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,

    /// ISO 3166 country code
    pub country_code: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Confidence (0.0 - 1.0)
    pub score: f64,
}

impl Suggestion {
    /// Build the client view of a ranked candidate
    pub fn from_candidate(candidate: &MatchCandidate<'_>) -> Self {
        let record = candidate.record;
        let primary = &record.name.original;

        // Names that differ only by case or punctuation are the same name.
        let alternate_name = (normalize(&candidate.best_name) != record.name.normalized)
            .then(|| candidate.best_name.clone());

        let display_name = match &alternate_name {
            Some(alt) => format!("{} (a.k.a: {})", primary, alt),
            None => primary.clone(),
        };

        Self {
            display_name,
            alternate_name,
            country_code: record.country.clone(),
            latitude: record.latitude(),
            longitude: record.longitude(),
            score: candidate.score,
        }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!("{}, {} ({:.3})", self.display_name, self.country_code, self.score)
    }
}

/// Suggestions for one query with request metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Query string as received
    pub query: String,

    /// Ranked suggestions, best first
    pub suggestions: Vec<Suggestion>,

    /// Scoring strategy used (Prefix Priority, Jaro-Winkler)
    pub scoring_method: String,

    /// Ranking latency in milliseconds
    pub latency_ms: f64,
}

impl SuggestionResponse {
    pub fn new(
        query: impl Into<String>,
        suggestions: Vec<Suggestion>,
        scoring_method: impl Into<String>,
        latency_ms: f64,
    ) -> Self {
        Self {
            query: query.into(),
            suggestions,
            scoring_method: scoring_method.into(),
            latency_ms,
        }
    }

    /// Best suggestion, if any
    pub fn top(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlaceRecord;

    fn record() -> PlaceRecord {
        PlaceRecord::new(6173331, "Vancouver", 49.24966, -123.11934, "CA")
            .unwrap()
            .with_alt_names(["Bankuba"])
    }

    #[test]
    fn test_primary_name_match() {
        let record = record();
        let candidate = MatchCandidate::new(&record, 0.9, "Vancouver");
        let suggestion = Suggestion::from_candidate(&candidate);

        assert_eq!(suggestion.display_name, "Vancouver");
        assert_eq!(suggestion.alternate_name, None);
        assert_eq!(suggestion.country_code, "CA");
        assert_eq!(suggestion.score, 0.9);
    }

    #[test]
    fn test_alternate_name_match() {
        let record = record();
        let candidate = MatchCandidate::new(&record, 0.4, "Bankuba");
        let suggestion = Suggestion::from_candidate(&candidate);

        assert_eq!(suggestion.display_name, "Vancouver (a.k.a: Bankuba)");
        assert_eq!(suggestion.alternate_name.as_deref(), Some("Bankuba"));
    }

    #[test]
    fn test_case_variant_is_not_an_alias() {
        let record = PlaceRecord::new(1, "St. John's", 47.56, -52.71, "CA").unwrap();
        let candidate = MatchCandidate::new(&record, 0.5, "ST JOHNS");
        let suggestion = Suggestion::from_candidate(&candidate);
        assert_eq!(suggestion.display_name, "St. John's");
    }

    #[test]
    fn test_response_json_shape() {
        let record = record();
        let candidate = MatchCandidate::new(&record, 0.4, "Bankuba");
        let response = SuggestionResponse::new(
            "bank",
            vec![Suggestion::from_candidate(&candidate)],
            "Prefix Priority",
            0.2,
        );

        let json: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(json["query"], "bank");
        assert_eq!(json["suggestions"][0]["display_name"], "Vancouver (a.k.a: Bankuba)");
        assert_eq!(json["suggestions"][0]["country_code"], "CA");
        assert_eq!(response.top().map(|s| s.score), Some(0.4));
    }

    #[test]
    fn test_primary_match_omits_alternate_field() {
        let record = record();
        let candidate = MatchCandidate::new(&record, 0.9, "Vancouver");
        let json = serde_json::to_value(Suggestion::from_candidate(&candidate)).unwrap();
        assert!(json.get("alternate_name").is_none());
    }
}
