//! Shared-instance registry.
//!
//! Deduplicates immutable records by structural key. Records live in an arena
//! owned by the registry and callers receive [`Handle`]s, so "same instance"
//! is plain handle equality. The registry only grows; there is no eviction.

pub mod key;

use std::collections::HashMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::config::RegistryConfig;
use crate::error::CanopyResult;
use crate::traits::SharedRecord;
use crate::types::Handle;

/// Lookup counters for a registry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Calls to `get_or_create`.
    pub lookups: usize,
    /// Lookups answered with an existing record.
    pub hits: usize,
    /// Lookups that created a record (equals the number of records).
    pub misses: usize,
}

/// Flyweight factory: one shared record per distinct key.
pub struct Registry<R: SharedRecord> {
    id: Uuid,
    records: Vec<R>,
    by_key: HashMap<R::Key, usize>,
    separator: char,
    stats: RegistryStats,
}

impl<R: SharedRecord> Registry<R> {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Create an empty registry from configuration.
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            records: Vec::with_capacity(config.initial_capacity),
            by_key: HashMap::with_capacity(config.initial_capacity),
            separator: config.key_separator,
            stats: RegistryStats::default(),
        }
    }

    /// Return the shared record for `key`, creating it on first request.
    ///
    /// Equal keys always yield equal handles.
    pub fn get_or_create(&mut self, key: R::Key) -> Handle<R> {
        self.stats.lookups += 1;

        if let Some(&index) = self.by_key.get(&key) {
            self.stats.hits += 1;
            trace!(?key, index, "Registry hit");
            return Handle::new(self.id, index);
        }

        // Build the record before anything becomes visible through the map.
        let record = R::from_key(&key);
        let index = self.records.len();
        self.records.push(record);
        debug!(?key, index, "Registry miss, created shared record");

        self.by_key.insert(key, index);
        self.stats.misses += 1;
        Handle::new(self.id, index)
    }

    /// Look up an existing record without creating one.
    pub fn get(&self, key: &R::Key) -> Option<Handle<R>> {
        self.by_key.get(key).map(|&index| Handle::new(self.id, index))
    }

    /// Whether a record exists for `key`.
    pub fn contains(&self, key: &R::Key) -> bool {
        self.by_key.contains_key(key)
    }

    /// Resolve a handle to its record.
    ///
    /// Returns `None` for handles issued by another registry.
    pub fn resolve(&self, handle: Handle<R>) -> Option<&R> {
        if handle.registry_id() != self.id {
            return None;
        }
        self.records.get(handle.index())
    }

    /// String label for a record, e.g. `"Oak-Green-Rough"`.
    ///
    /// `Ok(None)` for handles issued by another registry; `MalformedKey` when a
    /// field contains the configured separator.
    pub fn label(&self, handle: Handle<R>) -> CanopyResult<Option<String>> {
        self.resolve(handle)
            .map(|record| key::encode(&record.fields(), self.separator))
            .transpose()
    }

    /// Number of distinct records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records with their handles, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<R>, &R)> + '_ {
        let id = self.id;
        self.records
            .iter()
            .enumerate()
            .map(move |(i, r)| (Handle::new(id, i), r))
    }

    /// Lookup counters.
    pub fn stats(&self) -> RegistryStats {
        self.stats
    }

    /// Id stamped into every handle this registry issues.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl<R: SharedRecord> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SharedRecord> Index<Handle<R>> for Registry<R> {
    type Output = R;

    /// Panics if the handle was issued by another registry.
    fn index(&self, handle: Handle<R>) -> &R {
        match self.resolve(handle) {
            Some(record) => record,
            None => panic!("handle {:?} does not belong to registry {}", handle, self.id),
        }
    }
}
