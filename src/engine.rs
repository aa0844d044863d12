use crate::config::EngineConfig;
use crate::core::{Query, Suggestion, SuggestionResponse};
use crate::error::Result;
use crate::loader::PlaceSet;
use crate::phonetic::PhoneticEncoder;
use crate::ranking::RankingEngine;
use std::sync::Arc;
use std::time::Instant;

/// Autocomplete orchestrator: owns the place set and the configured ranker
#[derive(Clone)]
pub struct PlaceEngine {
    places: Arc<PlaceSet>,
    ranker: RankingEngine,
    default_limit: i64,
}

impl PlaceEngine {
    /// Create an engine over `places`.
    ///
    /// `encoder` must be the one used to precompute the records' phonetic codes.
    pub fn new(
        places: impl Into<Arc<PlaceSet>>,
        config: &EngineConfig,
        encoder: Arc<dyn PhoneticEncoder>,
    ) -> Result<Self> {
        config.validate()?;

        let ranker = RankingEngine::new(config.scoring.build(), encoder, config.ranking_params());
        let places = places.into();

        tracing::info!(
            "🚀 Place engine ready: {} places, scoring: {}",
            places.len(),
            ranker.strategy_name()
        );

        Ok(Self {
            places,
            ranker,
            default_limit: config.default_limit,
        })
    }

    pub fn places(&self) -> &PlaceSet {
        &self.places
    }

    pub fn ranker(&self) -> &RankingEngine {
        &self.ranker
    }

    /// Suggest places for raw caller input.
    ///
    /// `limit` falls back to the configured default; a negative limit returns
    /// every candidate above the threshold.
    pub fn suggest(
        &self,
        raw: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        limit: Option<i64>,
    ) -> Result<SuggestionResponse> {
        let start = Instant::now();
        let query = Query::new(raw, latitude, longitude)?;

        let ranked = self.ranker.rank(&query, self.places.records());
        let limit = limit.unwrap_or(self.default_limit);
        let take = usize::try_from(limit).unwrap_or(ranked.len());

        let suggestions: Vec<Suggestion> = ranked
            .iter()
            .take(take)
            .map(Suggestion::from_candidate)
            .collect();

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        match suggestions.first() {
            Some(top) => tracing::info!(
                "✅ {:?} -> {} suggestions, top: {} ({:.1}ms)",
                raw,
                suggestions.len(),
                top.display(),
                latency_ms
            ),
            None => tracing::info!("⚠️ {:?} -> no suggestions ({:.1}ms)", raw, latency_ms),
        }

        Ok(SuggestionResponse::new(
            raw,
            suggestions,
            self.ranker.strategy_name(),
            latency_ms,
        ))
    }
}
