//! Flavor catalogue: the static table of flavor records shown by the showcase.
//!
//! The table is parsed once from `assets/flavors.json` (compiled into the crate)
//! and is read-only afterwards. Parsing enforces the invariants the rest of the
//! UI relies on: at least one record, no blank names, no duplicate names.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_FLAVORS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/flavors.json"
));

static BUNDLED: Lazy<Result<FlavorTable, FlavorTableError>> =
    Lazy::new(|| FlavorTable::from_json(BUNDLED_FLAVORS_JSON));

/// One product variant: display name, illustration path and page gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorRecord {
    pub name: String,
    pub image: String,
    pub gradient: String,
}

#[derive(Debug, Error)]
pub enum FlavorTableError {
    #[error("flavor table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("flavor table is empty")]
    Empty,
    #[error("flavor #{index} has a blank name")]
    BlankName { index: usize },
    #[error("flavor `{0}` is listed more than once")]
    DuplicateName(String),
}

/// Ordered, immutable flavor table. Cloning shares the underlying records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorTable {
    records: Arc<[FlavorRecord]>,
}

impl FlavorTable {
    /// Validate and wrap a list of records.
    pub fn new(records: Vec<FlavorRecord>) -> Result<Self, FlavorTableError> {
        if records.is_empty() {
            return Err(FlavorTableError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(FlavorTableError::BlankName { index });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(FlavorTableError::DuplicateName(record.name.clone()));
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Parse a JSON array of `{ name, image, gradient }` objects.
    pub fn from_json(raw: &str) -> Result<Self, FlavorTableError> {
        let records: Vec<FlavorRecord> = serde_json::from_str(raw)?;
        Self::new(records)
    }

    /// The table compiled into the crate, parsed on first access.
    pub fn bundled() -> Result<&'static FlavorTable, &'static FlavorTableError> {
        BUNDLED.as_ref()
    }

    pub fn all(&self) -> &[FlavorRecord] {
        &self.records
    }

    pub fn find(&self, name: &str) -> Option<&FlavorRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// First record in table order. Always present: the table is never empty.
    pub fn first(&self) -> &FlavorRecord {
        &self.records[0]
    }

    pub fn get(&self, index: usize) -> Option<&FlavorRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
