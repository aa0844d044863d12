use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};

use crate::scoring::ScoringStrategy;

/// Rapidfuzz-based Jaro-Winkler scorer (alternative to prefix priority)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerScorer {
    /// Apply Winkler's common-prefix boost; plain Jaro when false
    pub winkler: bool,
    /// Winkler prefix scaling factor (at most 0.25 to stay within [0, 1])
    pub prefix_scale: f64,
}

impl Default for JaroWinklerScorer {
    fn default() -> Self {
        Self {
            winkler: true,
            prefix_scale: 0.1,
        }
    }
}

impl JaroWinklerScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix_scale(prefix_scale: f64) -> Self {
        Self {
            winkler: true,
            prefix_scale,
        }
    }
}

impl ScoringStrategy for JaroWinklerScorer {
    fn score(&self, pattern: &str, text: &str) -> f64 {
        if pattern.is_empty() || text.is_empty() {
            return 0.0;
        }

        let prefix_weight = if self.winkler { self.prefix_scale } else { 0.0 };
        let args = jaro_winkler::Args::default().prefix_weight(prefix_weight);

        jaro_winkler::normalized_similarity_with_args(pattern.chars(), text.chars(), &args)
            .clamp(0.0, 1.0)
    }

    fn name(&self) -> &str {
        "Jaro-Winkler"
    }
}
