use serde::{Deserialize, Serialize};

use crate::error::{AutocompleteError, Result};

/// Mean Earth radius (IUGG) in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Approximate largest surface distance between two points (half a great circle)
pub const MAX_SURFACE_DISTANCE_KM: f64 = 20016.0;

/// Decimal-degree coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    ///
    /// Rejects non-finite values, latitudes outside [-90, 90] and longitudes
    /// outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !Self::is_valid(latitude, longitude) {
            return Err(AutocompleteError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build from optional parts: both or neither.
    ///
    /// A lone latitude or longitude means "no location" and yields `Ok(None)`.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Result<Option<Self>> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            _ => Ok(None),
        }
    }

    pub fn is_valid(latitude: f64, longitude: f64) -> bool {
        latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
    }
}

/// Great-circle distance in kilometers (haversine formula)
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon * 0.5).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.min(1.0).sqrt().asin()
}

/// Closeness score in [0, 1]: 1 for the same place, ~0 for antipodes
pub fn proximity(a: Coordinate, b: Coordinate) -> f64 {
    (1.0 - haversine_km(a, b) / MAX_SURFACE_DISTANCE_KM).clamp(0.0, 1.0)
}
