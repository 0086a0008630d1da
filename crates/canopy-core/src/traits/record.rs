//! Shared record trait.

use std::fmt::Debug;
use std::hash::Hash;

/// An immutable value that a [`Registry`](crate::Registry) deduplicates.
///
/// Identity is structural: records built from equal keys are the same
/// logical entity and are stored once.
pub trait SharedRecord {
    /// Structural key made of every identity field.
    type Key: Eq + Hash + Clone + Debug;

    /// Build the record for a key. Called once per distinct key.
    fn from_key(key: &Self::Key) -> Self;

    /// Identity fields in key order, used for string labels.
    fn fields(&self) -> Vec<&str>;
}
