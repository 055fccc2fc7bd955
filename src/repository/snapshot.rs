// Built once per reload and never mutated; a new load replaces the whole
// snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::document::Record;
use crate::types::identifiers::Slug;

/// One complete, published load: records by identifier plus records newest
/// first. Built in one go and shared behind an `Arc`.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    version: String,
    loaded_at: DateTime<Utc>,
    records: Vec<Arc<Record>>,
    #[serde(skip)]
    by_identifier: HashMap<Slug, Arc<Record>>,
}

impl Snapshot {
    /// `records` must be in source file order and free of duplicate
    /// identifiers. The stable sort keeps file order among equal timestamps.
    pub(crate) fn build(records: Vec<Record>, loaded_at: DateTime<Utc>) -> Self {
        let mut ordered: Vec<Arc<Record>> = records.into_iter().map(Arc::new).collect();
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        debug_assert!(ordered
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp));

        let by_identifier: HashMap<Slug, Arc<Record>> = ordered
            .iter()
            .map(|record| (record.identifier.clone(), Arc::clone(record)))
            .collect();

        debug_assert_eq!(by_identifier.len(), ordered.len());

        // "identifier:version" in published order
        let mut hasher = Sha256::new();
        for record in &ordered {
            let line = format!("{}:{}\n", record.identifier.as_str(), record.version.as_str());
            hasher.update(line.as_bytes());
        }
        let version = format!("sha256:{}", hex::encode(hasher.finalize()));

        Snapshot {
            version,
            loaded_at,
            records: ordered,
            by_identifier,
        }
    }

    /// Newest first; equal timestamps keep file name order.
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn get(&self, identifier: &str) -> Option<&Arc<Record>> {
        self.by_identifier.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Digest of the published identifiers and source versions. Unchanged
    /// content gives the same version on every load.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
