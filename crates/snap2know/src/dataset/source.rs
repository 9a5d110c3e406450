//! Read-only lookup over equipment records.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::model::EquipmentRecord;
use crate::error::{Error, Result};

/// The dataset shipped with the binary.
const BUILTIN_DATASET: &str = include_str!("../../data/knowledge_base.json");

/// Origin label used in errors and logs for the embedded dataset.
const BUILTIN_ORIGIN: &str = "<embedded>";

/// An id/name pair as offered by the equipment selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Unique equipment key.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Read-only access to equipment records.
///
/// Implementors hold an immutable dataset; nothing in the crate mutates
/// records after construction.
pub trait EquipmentSource: std::fmt::Debug {
    /// Look up a record by its key.
    fn get(&self, id: &str) -> Option<&EquipmentRecord>;

    /// List every record as id/name pairs, in a stable order.
    fn catalog(&self) -> Vec<CatalogEntry>;

    /// Number of records.
    fn len(&self) -> usize;

    /// Check whether the source holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a key exists.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// In-memory dataset keyed by equipment id.
///
/// Records keep the order they appear in the dataset, which is the order the
/// selector offers them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    records: IndexMap<String, EquipmentRecord>,
}

impl KnowledgeBase {
    /// Load the dataset embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON does not parse.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET, BUILTIN_ORIGIN)
    }

    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid dataset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading dataset from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| Error::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text, &path.display().to_string())
    }

    /// Parse a dataset from JSON text; `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of equipment records.
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self> {
        let records: IndexMap<String, EquipmentRecord> =
            serde_json::from_str(text).map_err(|source| Error::DatasetParse {
                origin: origin.to_string(),
                source,
            })?;

        for (id, record) in &records {
            if record.is_empty() {
                warn!(equipment = %id, "Equipment record has no sections");
            }
        }

        info!(origin, count = records.len(), "Dataset loaded");
        Ok(Self { records })
    }

    /// Iterate over all records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EquipmentRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }
}

impl EquipmentSource for KnowledgeBase {
    fn get(&self, id: &str) -> Option<&EquipmentRecord> {
        self.records.get(id)
    }

    fn catalog(&self) -> Vec<CatalogEntry> {
        self.iter()
            .map(|(id, record)| CatalogEntry {
                id: id.to_string(),
                name: record.name.clone(),
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
