//! Originator trait: subjects that can be saved and restored.

use crate::types::{Snapshot, SubjectId};

/// A mutable subject whose state can be captured in a [`Snapshot`].
///
/// Implementors expose their state and a way to replace it wholesale; `save`
/// and `restore` are provided on top of that.
pub trait Originator {
    /// Everything observable about the subject. `Clone` must be a deep copy.
    type State: Clone;

    /// Stable identity of this subject instance.
    fn subject_id(&self) -> SubjectId;

    /// Current state.
    fn state(&self) -> &Self::State;

    /// Replace the current state.
    fn replace_state(&mut self, state: Self::State);

    /// Capture the current state by value.
    fn save(&self) -> Snapshot<Self::State> {
        Snapshot::capture(self.subject_id(), self.state().clone())
    }

    /// Overwrite the current state with a snapshot's state.
    ///
    /// Origin is not checked: a snapshot from another subject of the same
    /// state type is applied as-is. Use [`owns`](Self::owns) to check first.
    fn restore(&mut self, snapshot: &Snapshot<Self::State>) {
        self.replace_state(snapshot.state().clone());
    }

    /// Whether `snapshot` was produced by this subject.
    fn owns(&self, snapshot: &Snapshot<Self::State>) -> bool {
        snapshot.origin() == self.subject_id()
    }
}
