pub mod tsv;

use std::collections::HashSet;
use std::ops::Deref;

use crate::core::PlaceRecord;
use crate::error::{AutocompleteError, Result};

pub use tsv::{load_tsv, read_tsv};

/// Validated, read-only collection of places with unique ids
#[derive(Debug, Clone, Default)]
pub struct PlaceSet {
    records: Vec<PlaceRecord>,
}

impl PlaceSet {
    /// Assemble a set, rejecting the first duplicated id
    pub fn new(records: Vec<PlaceRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(AutocompleteError::DuplicateIdentifier(record.id));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PlaceRecord] {
        &self.records
    }
}

impl Deref for PlaceSet {
    type Target = [PlaceRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: u64, name: &str) -> PlaceRecord {
        PlaceRecord::new(id, name, 45.0, -75.0, "CA").unwrap()
    }

    #[test]
    fn test_unique_ids_accepted() {
        let set = PlaceSet::new(vec![place(1, "Ajax"), place(2, "Banff")]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[1].name.original, "Banff");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = PlaceSet::new(vec![place(1, "Ajax"), place(2, "Banff"), place(1, "Barrie")]).unwrap_err();
        assert!(matches!(err, AutocompleteError::DuplicateIdentifier(1)));
    }

    #[test]
    fn test_empty_set() {
        let set = PlaceSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
    }
}
