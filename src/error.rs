use thiserror::Error;

/// Main error type for the autocomplete engine
#[derive(Error, Debug)]
pub enum AutocompleteError {
    /// Query string was empty
    #[error("Query string cannot be empty")]
    EmptyQuery,

    /// Coordinate outside decimal-degree ranges
    #[error("Invalid coordinate: latitude={latitude}, longitude={longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Two records share the same identifier
    #[error("Duplicate place identifier: {0}")]
    DuplicateIdentifier(u64),

    /// Malformed row in an ingestion source
    #[error("Ingestion error at line {line}: {message}")]
    Ingest { line: u64, message: String },

    /// Invalid engine configuration
    #[error("Config error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TSV reader errors
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AutocompleteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AutocompleteError::EmptyQuery.to_string(), "Query string cannot be empty");
        assert_eq!(
            AutocompleteError::Ingest {
                line: 4,
                message: "missing field `lat`".to_string()
            }
            .to_string(),
            "Ingestion error at line 4: missing field `lat`"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "places.tsv");
        let err: AutocompleteError = io.into();
        assert!(matches!(err, AutocompleteError::Io(_)));
    }
}
