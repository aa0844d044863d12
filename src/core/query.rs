use crate::error::{AutocompleteError, Result};
use crate::geo::Coordinate;

/// A user query with an optional caller location
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    text: String,
    coordinate: Option<Coordinate>,
}

impl Query {
    /// Create a query.
    ///
    /// Fails with `EmptyQuery` for a zero-length string and with
    /// `InvalidCoordinate` when both parts are given but out of range. A lone
    /// latitude or longitude is treated as no location.
    pub fn new(text: impl Into<String>, latitude: Option<f64>, longitude: Option<f64>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(AutocompleteError::EmptyQuery);
        }

        Ok(Self {
            text,
            coordinate: Coordinate::from_parts(latitude, longitude)?,
        })
    }

    /// Query without a caller location
    pub fn text_only(text: impl Into<String>) -> Result<Self> {
        Self::new(text, None, None)
    }

    /// Raw query string as typed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(Query::text_only(""), Err(AutocompleteError::EmptyQuery)));
    }

    #[test]
    fn test_punctuation_query_accepted() {
        // Normalizes to nothing, but is not empty as typed
        let query = Query::text_only("##$@!!").unwrap();
        assert_eq!(query.text(), "##$@!!");
    }

    #[test]
    fn test_coordinate_both_or_neither() {
        let query = Query::new("lond", Some(43.0), None).unwrap();
        assert!(query.coordinate().is_none());

        let query = Query::new("lond", Some(43.0), Some(-81.2)).unwrap();
        assert_eq!(query.coordinate().map(|c| c.latitude), Some(43.0));
    }

    #[test]
    fn test_out_of_range_coordinate_rejected() {
        let err = Query::new("lond", Some(43.0), Some(-281.2)).unwrap_err();
        assert!(matches!(err, AutocompleteError::InvalidCoordinate { .. }));
    }
}
