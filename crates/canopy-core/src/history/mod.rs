//! Linear snapshot history.
//!
//! An append-only, in-memory [`SnapshotStore`]. Snapshots are indexed from 0 in
//! the order they were recorded; nothing is ever removed or reordered, and
//! restoring a subject from history leaves the history untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::HistoryConfig;
use crate::error::{CanopyError, CanopyResult};
use crate::traits::{Originator, SnapshotStore};
use crate::types::Snapshot;

/// Summary of a history's contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total: usize,
    pub first_taken: DateTime<Utc>,
    pub last_taken: DateTime<Utc>,
}

/// In-memory caretaker for snapshots of one state type.
#[derive(Debug, Clone)]
pub struct History<S> {
    snapshots: Vec<Snapshot<S>>,
}

impl<S> History<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::with_config(&HistoryConfig::default())
    }

    /// Create an empty history from configuration.
    pub fn with_config(config: &HistoryConfig) -> Self {
        Self {
            snapshots: Vec::with_capacity(config.initial_capacity),
        }
    }

    /// Oldest snapshot.
    pub fn first(&self) -> Option<&Snapshot<S>> {
        self.snapshots.first()
    }

    /// Most recently recorded snapshot.
    pub fn latest(&self) -> Option<&Snapshot<S>> {
        self.snapshots.last()
    }

    /// Snapshots in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot<S>> + '_ {
        self.snapshots.iter()
    }

    /// Summary of the history, `None` while empty.
    pub fn summary(&self) -> Option<HistorySummary> {
        let first = self.snapshots.first()?;
        let last = self.snapshots.last()?;
        Some(HistorySummary {
            total: self.snapshots.len(),
            first_taken: first.taken_at(),
            last_taken: last.taken_at(),
        })
    }

    /// Restore `subject` from the snapshot at `index`.
    ///
    /// On `IndexOutOfRange` the subject is left unchanged.
    pub fn restore_into<O>(&self, index: isize, subject: &mut O) -> CanopyResult<()>
    where
        O: Originator<State = S>,
    {
        let snapshot = self.get(index)?;
        subject.restore(snapshot);
        debug!(index, snapshot_id = %snapshot.id(), "Restored subject from history");
        Ok(())
    }
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SnapshotStore<S> for History<S> {
    fn record(&mut self, snapshot: Snapshot<S>) -> usize {
        let index = self.snapshots.len();
        debug!(index, snapshot_id = %snapshot.id(), origin = %snapshot.origin(), "Recorded snapshot");
        self.snapshots.push(snapshot);
        index
    }

    fn get(&self, index: isize) -> CanopyResult<&Snapshot<S>> {
        let len = self.snapshots.len();
        let snapshot = usize::try_from(index)
            .ok()
            .and_then(|i| self.snapshots.get(i))
            .ok_or_else(|| CanopyError::index_out_of_range(index, len))?;
        trace!(index, "History lookup");
        Ok(snapshot)
    }

    fn len(&self) -> usize {
        self.snapshots.len()
    }
}

impl<'a, S> IntoIterator for &'a History<S> {
    type Item = &'a Snapshot<S>;
    type IntoIter = std::slice::Iter<'a, Snapshot<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
