use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::core::{PlaceRecord, Query};
use crate::geo::{proximity, Coordinate};
use crate::phonetic::{PhoneticCodes, PhoneticEncoder};
use crate::scoring::ScoringStrategy;
use crate::text::normalize;

/// Shortest query phonetic code that takes part in matching
const MIN_PHONETIC_CODE_LEN: usize = 2;

/// Per-signal weights applied while ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingParams {
    /// Multiplier for scores obtained through phonetic codes
    pub phonetic_penalty: f64,
    /// Candidates must score strictly above this
    pub min_score: f64,
    /// Multiplier for scores obtained through alternate names
    pub alt_name_penalty: f64,
    /// Influence of caller proximity on the final score
    pub proximity_weight: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            phonetic_penalty: 0.6,
            min_score: 0.1,
            alt_name_penalty: 0.5,
            proximity_weight: 0.1,
        }
    }
}

/// A record that cleared the threshold, with the name that earned its score
#[derive(Debug, Clone)]
pub struct MatchCandidate<'a> {
    pub record: &'a PlaceRecord,
    pub score: f64,
    /// Original spelling of the highest-scoring name
    pub best_name: String,
}

impl<'a> MatchCandidate<'a> {
    pub fn new(record: &'a PlaceRecord, score: f64, best_name: impl Into<String>) -> Self {
        Self {
            record,
            score,
            best_name: best_name.into(),
        }
    }
}

/// Multi-signal ranker over a full scan of the record set
#[derive(Clone)]
pub struct RankingEngine {
    strategy: Arc<dyn ScoringStrategy>,
    encoder: Arc<dyn PhoneticEncoder>,
    params: RankingParams,
}

impl RankingEngine {
    pub fn new(
        strategy: Arc<dyn ScoringStrategy>,
        encoder: Arc<dyn PhoneticEncoder>,
        params: RankingParams,
    ) -> Self {
        Self {
            strategy,
            encoder,
            params,
        }
    }

    pub fn params(&self) -> &RankingParams {
        &self.params
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Rank `records` against `query`, best first.
    ///
    /// Only candidates scoring strictly above `min_score` are returned. Equal
    /// scores keep the order of `records`.
    pub fn rank<'a>(&self, query: &Query, records: &'a [PlaceRecord]) -> Vec<MatchCandidate<'a>> {
        let start = Instant::now();

        let normalized = normalize(query.text());
        let query_codes = self.encoder.encode(query.text());
        let use_phonetics = query_codes.primary.chars().count() >= MIN_PHONETIC_CODE_LEN;

        let mut ranked: Vec<MatchCandidate<'a>> = records
            .iter()
            .filter_map(|record| {
                self.score_record(
                    &normalized,
                    use_phonetics.then_some(&query_codes),
                    query.coordinate(),
                    record,
                )
            })
            .collect();

        // Stable: ties keep scan order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        tracing::debug!(
            "Ranked {} candidates for {:?} -> {} results ({}, {:.2}ms)",
            records.len(),
            query.text(),
            ranked.len(),
            self.strategy.name(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        ranked
    }

    /// Best score for one record, or `None` when it doesn't clear the threshold
    fn score_record<'a>(
        &self,
        normalized_query: &str,
        query_codes: Option<&PhoneticCodes>,
        caller: Option<Coordinate>,
        record: &'a PlaceRecord,
    ) -> Option<MatchCandidate<'a>> {
        let params = &self.params;

        let mut best = self.strategy.score(normalized_query, &record.name.normalized);
        let mut best_name = record.name.original.as_str();

        for alt in &record.alt_names {
            let score = params.alt_name_penalty * self.strategy.score(normalized_query, &alt.normalized);
            if score > best {
                best = score;
                best_name = alt.original.as_str();
            }
        }

        if let Some(query_codes) = query_codes {
            for (original, codes) in &record.phonetics {
                for code in codes.iter() {
                    for query_code in query_codes.iter() {
                        let score = params.phonetic_penalty * self.strategy.score(query_code, code);
                        if score > best {
                            best = score;
                            best_name = original.as_str();
                        }
                    }
                }
            }
        }

        // Proximity only reorders plausible matches; it never rescues a weak one.
        if let Some(caller) = caller {
            if best > params.min_score {
                let p = proximity(caller, record.coordinate);
                best = (best + p * best * params.proximity_weight) / (1.0 + params.proximity_weight);
            }
        }

        (best > params.min_score).then(|| MatchCandidate::new(record, best, best_name))
    }
}
