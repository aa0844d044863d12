use serde::{Deserialize, Serialize};

use crate::scoring::ScoringStrategy;
use crate::text::find_matches_chars;

/// Logistic function mapping an unbounded raw score onto (0, 1)
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Scorer that favours queries matching at the start of a name.
///
/// The raw score is the share of the text covered by multi-character runs,
/// shifted left by `base_shift` so weak matches land below 0.5 once the
/// sigmoid is applied (sigmoid(-2) ≈ 0.12). Bonuses are added when the whole
/// query appears in the text, when query and text have equal length, and per
/// character of a run anchored at offset 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixPriorityScorer {
    pub base_shift: f64,
    pub substring_bonus: f64,
    pub exact_match_bonus: f64,
    pub start_match_bonus: f64,
    pub min_run_length: usize,
}

impl Default for PrefixPriorityScorer {
    fn default() -> Self {
        Self {
            base_shift: 2.0,
            substring_bonus: 1.5,
            exact_match_bonus: 2.0,
            start_match_bonus: 0.2,
            min_run_length: 1,
        }
    }
}

impl PrefixPriorityScorer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoringStrategy for PrefixPriorityScorer {
    fn score(&self, pattern: &str, text: &str) -> f64 {
        let pattern_chars: Vec<char> = pattern.chars().collect();
        let text_chars: Vec<char> = text.chars().collect();

        let spans = find_matches_chars(&pattern_chars, &text_chars, self.min_run_length);
        let Some(first) = spans.first() else {
            return 0.0;
        };

        if pattern == text {
            return 1.0;
        }

        // Single-character runs match almost everything, so they don't count.
        let mut matched_len = 0usize;
        let mut full_substring = false;
        for span in spans.iter().filter(|s| s.len > 1) {
            matched_len += span.len;
            if span.len >= pattern_chars.len() {
                full_substring = true;
            }
        }

        let mut base = matched_len as f64 / text_chars.len() as f64 - self.base_shift;

        if full_substring {
            base += self.substring_bonus;
            if pattern_chars.len() == text_chars.len() {
                base += self.exact_match_bonus;
            }
        }

        if first.start == 0 {
            base += self.start_match_bonus * first.len as f64;
        }

        sigmoid(base)
    }

    fn name(&self) -> &str {
        "Prefix Priority"
    }
}
