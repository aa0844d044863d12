use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::core::PlaceRecord;
use crate::error::{AutocompleteError, Result};
use crate::loader::PlaceSet;
use crate::phonetic::PhoneticEncoder;

/// One row of a tab-separated place file (header names match the columns)
#[derive(Debug, Deserialize)]
struct PlaceRow {
    id: String,
    name: String,
    #[serde(default)]
    alt_name: String,
    lat: String,
    long: String,
    country: String,
}

fn parse_field<T: std::str::FromStr>(value: &str, field: &str, line: u64) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| AutocompleteError::Ingest {
        line,
        message: format!("invalid {}: {:?}", field, value),
    })
}

/// Malformed rows become `Ingest` errors; I/O failures stay `Csv`
fn row_error(err: csv::Error, line: u64) -> AutocompleteError {
    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
        return AutocompleteError::Csv(err);
    }

    let message = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    };
    AutocompleteError::Ingest { line, message }
}

impl PlaceRow {
    fn into_record(self, line: u64, encoder: &dyn PhoneticEncoder) -> Result<PlaceRecord> {
        let id: u64 = parse_field(&self.id, "id", line)?;
        let latitude: f64 = parse_field(&self.lat, "lat", line)?;
        let longitude: f64 = parse_field(&self.long, "long", line)?;

        let record = PlaceRecord::new(id, self.name, latitude, longitude, self.country)
            .map_err(|e| AutocompleteError::Ingest {
                line,
                message: e.to_string(),
            })?;

        Ok(record
            .with_alt_names(self.alt_name.split(','))
            .with_phonetics_from(encoder))
    }
}

/// Read places from tab-separated data with a header row.
///
/// Expected columns: `id`, `name`, `alt_name` (comma-separated), `lat`,
/// `long`, `country`. Fields are never quoted. Duplicate ids fail with
/// `DuplicateIdentifier`.
pub fn read_tsv<R: Read>(reader: R, encoder: &dyn PhoneticEncoder) -> Result<PlaceSet> {
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in tsv.deserialize::<PlaceRow>() {
        // Header is line 1
        let line = records.len() as u64 + 2;
        let row = row.map_err(|e| row_error(e, line))?;
        records.push(row.into_record(line, encoder)?);
    }

    PlaceSet::new(records)
}

/// Load places from a TSV file on disk
pub fn load_tsv(path: impl AsRef<Path>, encoder: &dyn PhoneticEncoder) -> Result<PlaceSet> {
    let start = Instant::now();
    let path = path.as_ref();
    let file = File::open(path)?;
    let places = read_tsv(file, encoder)?;

    tracing::info!(
        "✅ Loaded {} places from {} ({:.0}ms, phonetics: {})",
        places.len(),
        path.display(),
        start.elapsed().as_secs_f64() * 1000.0,
        encoder.name()
    );

    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::NoPhonetics;

    const SAMPLE: &str = "id\tname\tascii\talt_name\tlat\tlong\tcountry\n\
        5881791\tAbbotsford\tAbbotsford\tAbbotsford,YXX\t49.05798\t-122.25257\tCA\n\
        5882142\tActon Vale\tActon Vale\t\t45.65007\t-72.56582\tCA\n";

    #[test]
    fn test_read_sample() {
        let places = read_tsv(SAMPLE.as_bytes(), &NoPhonetics).unwrap();
        assert_eq!(places.len(), 2);

        let first = &places[0];
        assert_eq!(first.id, 5881791);
        assert_eq!(first.name.normalized, "ABBOTSFORD");
        assert_eq!(first.latitude(), 49.05798);
        assert_eq!(first.longitude(), -122.25257);
        assert_eq!(first.country, "CA");
        assert_eq!(first.alt_names.len(), 2);
        assert_eq!(first.alt_names[1].normalized, "YXX");

        assert_eq!(places[1].name.normalized, "ACTONVALE");
        assert!(places[1].alt_names.is_empty());
    }

    #[test]
    fn test_duplicate_id() {
        let data = "id\tname\talt_name\tlat\tlong\tcountry\n\
            1\tAjax\t\t43.85\t-79.03\tCA\n\
            1\tBanff\t\t51.18\t-115.57\tCA\n";
        let err = read_tsv(data.as_bytes(), &NoPhonetics).unwrap_err();
        assert!(matches!(err, AutocompleteError::DuplicateIdentifier(1)));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let data = "id\tname\talt_name\tlat\tlong\tcountry\n\
            1\tAjax\t\t43.85\t-79.03\tCA\n\
            2\tBanff\t\tnorth\t-115.57\tCA\n";
        match read_tsv(data.as_bytes(), &NoPhonetics) {
            Err(AutocompleteError::Ingest { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("lat"));
            }
            other => panic!("expected ingest error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_reports_line() {
        let data = "id\tname\talt_name\tlat\tlong\tcountry\n\
            1\tAjax\t\t43.85\t-79.03\tCA\n\
            2\tBanff\t\t51.18\n";
        match read_tsv(data.as_bytes(), &NoPhonetics) {
            Err(AutocompleteError::Ingest { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected ingest error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_header_column_reports_line() {
        let data = "id\tname\talt_name\tlat\tlong\n\
            1\tAjax\t\t43.85\t-79.03\n";
        assert!(matches!(
            read_tsv(data.as_bytes(), &NoPhonetics),
            Err(AutocompleteError::Ingest { line: 2, .. })
        ));
    }

    #[test]
    fn test_out_of_range_coordinate() {
        let data = "id\tname\talt_name\tlat\tlong\tcountry\n\
            1\tAjax\t\t143.85\t-79.03\tCA\n";
        assert!(matches!(
            read_tsv(data.as_bytes(), &NoPhonetics),
            Err(AutocompleteError::Ingest { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_tsv("/nonexistent/places.tsv", &NoPhonetics),
            Err(AutocompleteError::Io(_))
        ));
    }
}
