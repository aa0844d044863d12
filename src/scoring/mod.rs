pub mod jaro_winkler;
pub mod prefix_priority;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use jaro_winkler::JaroWinklerScorer;
pub use prefix_priority::PrefixPriorityScorer;

/// Trait for string-similarity strategies used by the ranking engine
pub trait ScoringStrategy: Send + Sync {
    /// Score `text` against `pattern` in [0, 1]: 0 = no usable match, 1 = exact.
    ///
    /// Both strings are expected to be normalized by the caller.
    fn score(&self, pattern: &str, text: &str) -> f64;

    /// Get strategy name for logging
    fn name(&self) -> &str;
}

/// Serializable selector for the scoring strategy and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ScoringMethod {
    PrefixPriority(PrefixPriorityScorer),
    JaroWinkler(JaroWinklerScorer),
}

impl Default for ScoringMethod {
    fn default() -> Self {
        ScoringMethod::PrefixPriority(PrefixPriorityScorer::default())
    }
}

impl ScoringMethod {
    /// Build the shared strategy object
    pub fn build(&self) -> Arc<dyn ScoringStrategy> {
        match self {
            ScoringMethod::PrefixPriority(scorer) => Arc::new(scorer.clone()),
            ScoringMethod::JaroWinkler(scorer) => Arc::new(scorer.clone()),
        }
    }

    /// Look up a method with default parameters by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "prefix" | "prefix_priority" | "prefix-priority" => {
                Some(ScoringMethod::PrefixPriority(PrefixPriorityScorer::default()))
            }
            "jaro" | "jaro_winkler" | "jaro-winkler" => {
                Some(ScoringMethod::JaroWinkler(JaroWinklerScorer::default()))
            }
            _ => None,
        }
    }
}
