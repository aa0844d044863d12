//! # Place Autocomplete Engine
//!
//! Typo-tolerant place-name suggestions with:
//! - Prefix-priority fuzzy scoring (or Jaro-Winkler)
//! - Alternate names and Double Metaphone phonetic codes
//! - Optional proximity boost from the caller's location
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use place_autocomplete::{load_tsv, DoubleMetaphoneEncoder, EngineConfig, PlaceEngine};
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let encoder = Arc::new(DoubleMetaphoneEncoder::new());
//!     let places = load_tsv("data/cities_canada-usa.tsv", encoder.as_ref())?;
//!     let engine = PlaceEngine::new(places, &EngineConfig::default(), encoder)?;
//!
//!     let response = engine.suggest("Londo", Some(43.70011), Some(-79.4163), Some(5))?;
//!     for suggestion in &response.suggestions {
//!         println!("{}", suggestion.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod geo;
pub mod loader;
pub mod phonetic;
pub mod ranking;
pub mod scoring;
pub mod text;

// Re-export primary types
pub use crate::core::{PlaceName, PlaceRecord, Query, Suggestion, SuggestionResponse};
pub use config::EngineConfig;
pub use engine::PlaceEngine;
pub use error::{AutocompleteError, Result};
pub use geo::Coordinate;
pub use loader::{load_tsv, read_tsv, PlaceSet};
pub use phonetic::{DoubleMetaphoneEncoder, NoPhonetics, PhoneticCodes, PhoneticEncoder};
pub use ranking::{MatchCandidate, RankingEngine, RankingParams};
pub use scoring::{JaroWinklerScorer, PrefixPriorityScorer, ScoringMethod, ScoringStrategy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
