use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::geo::Coordinate;
use crate::phonetic::{PhoneticCodes, PhoneticEncoder};
use crate::text::normalize;

/// A name in comparison form alongside its original spelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceName {
    /// Normalized form used for matching (e.g. "STJOHNS")
    pub normalized: String,
    /// Spelling as it appeared in the source (e.g. "St. John's")
    pub original: String,
}

impl PlaceName {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            normalized: normalize(&original),
            original,
        }
    }
}

/// A place that queries are ranked against.
///
/// Two records are equal when their ids are equal, whatever their other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Unique id within a record set
    pub id: u64,

    /// Best-known name
    pub name: PlaceName,

    /// Other names the place is known by, in source order
    #[serde(default)]
    pub alt_names: Vec<PlaceName>,

    pub coordinate: Coordinate,

    /// ISO 3166 country code
    pub country: String,

    /// Phonetic codes per original (unnormalized) name variant, primary name first
    #[serde(default)]
    pub phonetics: Vec<(String, PhoneticCodes)>,
}

impl PlaceRecord {
    /// Create a record with required fields; coordinates are validated
    pub fn new(
        id: u64,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        country: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id,
            name: PlaceName::new(name),
            alt_names: Vec::new(),
            coordinate: Coordinate::new(latitude, longitude)?,
            country: country.into(),
            phonetics: Vec::new(),
        })
    }

    /// Add alternate names; blank entries are skipped
    pub fn with_alt_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt_names.extend(
            names
                .into_iter()
                .map(Into::<String>::into)
                .filter(|n| !n.trim().is_empty())
                .map(PlaceName::new),
        );
        self
    }

    /// Attach precomputed codes for one name variant.
    ///
    /// A variant seen before keeps its position and takes the new codes.
    pub fn with_phonetic(mut self, original_name: impl Into<String>, codes: PhoneticCodes) -> Self {
        if codes.is_empty() {
            return self;
        }

        let original_name = original_name.into();
        match self.phonetics.iter_mut().find(|(name, _)| *name == original_name) {
            Some((_, existing)) => *existing = codes,
            None => self.phonetics.push((original_name, codes)),
        }
        self
    }

    /// Codes stored for one name variant
    pub fn phonetic_codes(&self, original_name: &str) -> Option<&PhoneticCodes> {
        self.phonetics
            .iter()
            .find(|(name, _)| name == original_name)
            .map(|(_, codes)| codes)
    }

    /// Compute codes for the primary name and every alternate name
    pub fn with_phonetics_from(mut self, encoder: &dyn PhoneticEncoder) -> Self {
        let originals: Vec<String> = std::iter::once(&self.name)
            .chain(self.alt_names.iter())
            .map(|n| n.original.clone())
            .collect();

        for original in originals {
            let codes = encoder.encode(&original);
            self = self.with_phonetic(original, codes);
        }
        self
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name.original, self.country)
    }
}

impl PartialEq for PlaceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PlaceRecord {}

impl Hash for PlaceRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
