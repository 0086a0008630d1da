//! Registry handles and placed instances.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// Opaque reference to a record owned by a [`Registry`](crate::Registry).
///
/// Two handles are equal exactly when they name the same shared instance:
/// same registry, same arena slot. Handles from different registries never
/// compare equal, even when the records behind them are field-equal.
pub struct Handle<R> {
    registry: Uuid,
    index: usize,
    _record: PhantomData<fn() -> R>,
}

impl<R> Handle<R> {
    pub(crate) fn new(registry: Uuid, index: usize) -> Self {
        Self {
            registry,
            index,
            _record: PhantomData,
        }
    }

    /// Id of the registry that issued this handle.
    pub fn registry_id(&self) -> Uuid {
        self.registry
    }

    /// Arena slot within the issuing registry (insertion order).
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<R> Clone for Handle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Handle<R> {}

impl<R> PartialEq for Handle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.registry == other.registry && self.index == other.index
    }
}

impl<R> Eq for Handle<R> {}

impl<R> Hash for Handle<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.registry.hash(state);
        self.index.hash(state);
    }
}

impl<R> fmt::Debug for Handle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("registry", &self.registry)
            .field("index", &self.index)
            .finish()
    }
}

/// Per-use coordinates of a placed instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Extrinsic state paired with a non-owning handle to a shared record.
pub struct PlacedInstance<R> {
    position: Position,
    kind: Handle<R>,
}

impl<R> PlacedInstance<R> {
    /// Place a shared record at a position.
    pub fn new(position: Position, kind: Handle<R>) -> Self {
        Self { position, kind }
    }

    /// Where this instance sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Handle of the shared record this instance uses.
    pub fn kind(&self) -> Handle<R> {
        self.kind
    }
}

impl<R> Clone for PlacedInstance<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for PlacedInstance<R> {}

impl<R> PartialEq for PlacedInstance<R> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.kind == other.kind
    }
}

impl<R> Eq for PlacedInstance<R> {}

impl<R> fmt::Debug for PlacedInstance<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacedInstance")
            .field("position", &self.position)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Marker;

    #[test]
    fn test_handle_equality_is_registry_scoped() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let h1: Handle<Marker> = Handle::new(a, 0);
        let h2: Handle<Marker> = Handle::new(a, 0);
        let h3: Handle<Marker> = Handle::new(b, 0);

        assert_eq!(h1, h2);
        assert_ne!(h1, h3);

        let set: HashSet<_> = [h1, h2, h3].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_placed_instance_is_copy() {
        let handle: Handle<Marker> = Handle::new(Uuid::new_v4(), 3);
        let placed = PlacedInstance::new(Position::new(1, 2), handle);
        let copy = placed;

        assert_eq!(placed, copy);
        assert_eq!(copy.kind().index(), 3);
        assert_eq!(copy.position().to_string(), "(1, 2)");
    }
}
