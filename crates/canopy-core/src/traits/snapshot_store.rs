//! Snapshot store trait (the caretaker contract).

use crate::error::CanopyResult;
use crate::types::Snapshot;

/// Ordered, append-only storage of snapshots.
///
/// Stores treat snapshots as opaque and never inspect their state.
pub trait SnapshotStore<S> {
    /// Append a snapshot and return its index.
    fn record(&mut self, snapshot: Snapshot<S>) -> usize;

    /// Get the snapshot at `index`.
    ///
    /// Fails with `IndexOutOfRange` when `index < 0` or `index >= len()`.
    fn get(&self, index: isize) -> CanopyResult<&Snapshot<S>>;

    /// Number of recorded snapshots.
    fn len(&self) -> usize;

    /// Whether nothing has been recorded yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
