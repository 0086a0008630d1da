//! Snapshot types for point-in-time subject state.
//!
//! A snapshot owns a deep copy of the state it captured, so later mutation of
//! the subject can never show through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a subject that produces snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(Uuid);

impl SubjectId {
    /// Generate a fresh subject id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable capture of a subject's state at one instant.
///
/// Only [`Originator::save`](crate::Originator::save) creates snapshots. There
/// is no public constructor:
///
/// ```compile_fail
/// use canopy_core::{Snapshot, SubjectId, TextState};
///
/// let forged = Snapshot::capture(SubjectId::new(), TextState::default());
/// ```
///
/// and no way to decode one from bytes:
///
/// ```compile_fail
/// use canopy_core::{Snapshot, TextState};
///
/// let forged: Snapshot<TextState> = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<S> {
    id: Uuid,
    origin: SubjectId,
    taken_at: DateTime<Utc>,
    state: S,
}

impl<S> Snapshot<S> {
    pub(crate) fn capture(origin: SubjectId, state: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            taken_at: Utc::now(),
            state,
        }
    }

    /// Unique snapshot identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Subject that produced this snapshot.
    pub fn origin(&self) -> SubjectId {
        self.origin
    }

    /// When the snapshot was taken.
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// The captured state.
    pub fn state(&self) -> &S {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_owns_state() {
        let origin = SubjectId::new();
        let mut lines = vec!["a".to_string()];
        let snap = Snapshot::capture(origin, lines.clone());
        lines.push("b".to_string());

        assert_eq!(snap.state(), &vec!["a".to_string()]);
        assert_eq!(snap.origin(), origin);
        assert!(snap.taken_at() <= Utc::now());
    }

    #[test]
    fn test_snapshots_get_distinct_ids() {
        let origin = SubjectId::new();
        let a = Snapshot::capture(origin, 1u8);
        let b = Snapshot::capture(origin, 1u8);
        assert_ne!(a.id(), b.id());
        assert_ne!(SubjectId::new(), origin);
    }
}
