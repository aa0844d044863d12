use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{AutocompleteError, Result};
use crate::ranking::RankingParams;
use crate::scoring::ScoringMethod;

/// Engine configuration with per-signal weights and the scoring method.
///
/// Every field has a default, so a partial JSON file only overrides what it names.
///
/// ```
/// use place_autocomplete::config::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{"min_score": 0.12}"#).unwrap();
/// assert_eq!(config.min_score, 0.12);
/// assert_eq!(config.phonetic_penalty, 0.6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringMethod,
    pub phonetic_penalty: f64,
    pub min_score: f64,
    pub alt_name_penalty: f64,
    pub proximity_weight: f64,
    /// Suggestions returned when the caller gives no limit (negative = all)
    pub default_limit: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let params = RankingParams::default();
        Self {
            scoring: ScoringMethod::default(),
            phonetic_penalty: params.phonetic_penalty,
            min_score: params.min_score,
            alt_name_penalty: params.alt_name_penalty,
            proximity_weight: params.proximity_weight,
            default_limit: 10,
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply flat numeric overrides such as `{"min_score": 0.2}`.
    ///
    /// Unknown keys are rejected so typos don't pass silently.
    pub fn with_overrides(mut self, overrides: &HashMap<String, f64>) -> Result<Self> {
        for (key, value) in overrides {
            let value = *value;
            match key.as_str() {
                "phonetic_penalty" => self.phonetic_penalty = value,
                "min_score" => self.min_score = value,
                "alt_name_penalty" => self.alt_name_penalty = value,
                "proximity_weight" => self.proximity_weight = value,
                "default_limit" => self.default_limit = value as i64,
                other => {
                    return Err(AutocompleteError::Config(format!("unknown setting: {}", other)));
                }
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that weights are in range
    pub fn validate(&self) -> Result<()> {
        let unit = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(AutocompleteError::Config(format!("{} must be in [0, 1], got {}", name, v)))
            }
        };

        unit("phonetic_penalty", self.phonetic_penalty)?;
        unit("alt_name_penalty", self.alt_name_penalty)?;

        if !(0.0..1.0).contains(&self.min_score) {
            return Err(AutocompleteError::Config(format!(
                "min_score must be in [0, 1), got {}",
                self.min_score
            )));
        }

        if !self.proximity_weight.is_finite() || self.proximity_weight < 0.0 {
            return Err(AutocompleteError::Config(format!(
                "proximity_weight must be a non-negative number, got {}",
                self.proximity_weight
            )));
        }

        match &self.scoring {
            ScoringMethod::PrefixPriority(scorer) if scorer.min_run_length == 0 => Err(
                AutocompleteError::Config("min_run_length must be at least 1".to_string()),
            ),
            ScoringMethod::JaroWinkler(scorer) if !(0.0..=0.25).contains(&scorer.prefix_scale) => {
                Err(AutocompleteError::Config(format!(
                    "prefix_scale must be in [0, 0.25], got {}",
                    scorer.prefix_scale
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn ranking_params(&self) -> RankingParams {
        RankingParams {
            phonetic_penalty: self.phonetic_penalty,
            min_score: self.min_score,
            alt_name_penalty: self.alt_name_penalty,
            proximity_weight: self.proximity_weight,
        }
    }
}

impl std::fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let method = match &self.scoring {
            ScoringMethod::PrefixPriority(_) => "prefix_priority",
            ScoringMethod::JaroWinkler(_) => "jaro_winkler",
        };
        write!(
            f,
            "scoring={}, phonetic_penalty={}, min_score={}, alt_name_penalty={}, proximity_weight={}, default_limit={}",
            method,
            self.phonetic_penalty,
            self.min_score,
            self.alt_name_penalty,
            self.proximity_weight,
            self.default_limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{JaroWinklerScorer, PrefixPriorityScorer};

    #[test]
    fn test_default_values() {
        let config = EngineConfig::default();
        assert_eq!(config.phonetic_penalty, 0.6);
        assert_eq!(config.min_score, 0.1);
        assert_eq!(config.alt_name_penalty, 0.5);
        assert_eq!(config.proximity_weight, 0.1);
        assert_eq!(config.default_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "scoring": {"method": "prefix_priority", "start_match_bonus": 0.3},
            "min_score": 0.12
        }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.min_score, 0.12);
        assert_eq!(config.alt_name_penalty, 0.5);
        match config.scoring {
            ScoringMethod::PrefixPriority(scorer) => {
                assert_eq!(scorer.start_match_bonus, 0.3);
                assert_eq!(scorer.base_shift, 2.0);
            }
            other => panic!("unexpected method: {other:?}"),
        }
    }

    #[test]
    fn test_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("min_score".to_string(), 0.3);
        overrides.insert("default_limit".to_string(), -1.0);

        let config = EngineConfig::default().with_overrides(&overrides).unwrap();
        assert_eq!(config.min_score, 0.3);
        assert_eq!(config.default_limit, -1);
        assert_eq!(config.phonetic_penalty, 0.6);
    }

    #[test]
    fn test_unknown_override_rejected() {
        let mut overrides = HashMap::new();
        overrides.insert("min_scroe".to_string(), 0.3);
        assert!(matches!(
            EngineConfig::default().with_overrides(&overrides),
            Err(AutocompleteError::Config(_))
        ));
    }

    #[test]
    fn test_validation() {
        let bad = EngineConfig {
            alt_name_penalty: 1.5,
            ..EngineConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = EngineConfig {
            min_score: 1.0,
            ..EngineConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = EngineConfig {
            proximity_weight: -0.1,
            ..EngineConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = EngineConfig {
            scoring: ScoringMethod::PrefixPriority(PrefixPriorityScorer {
                min_run_length: 0,
                ..PrefixPriorityScorer::default()
            }),
            ..EngineConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = EngineConfig {
            scoring: ScoringMethod::JaroWinkler(JaroWinklerScorer::with_prefix_scale(0.3)),
            ..EngineConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_ranking_params() {
        let params = EngineConfig::default().ranking_params();
        assert_eq!(params, RankingParams::default());
    }

    #[test]
    fn test_display() {
        let display = EngineConfig::default().to_string();
        assert_eq!(
            display,
            "scoring=prefix_priority, phonetic_penalty=0.6, min_score=0.1, alt_name_penalty=0.5, proximity_weight=0.1, default_limit=10"
        );
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
