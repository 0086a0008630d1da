//! Core types for canopy.

mod handle;
mod snapshot;
mod text;
mod tree;

pub use handle::{Handle, PlacedInstance, Position};
pub use snapshot::{Snapshot, SubjectId};
pub use text::TextState;
pub use tree::{Tree, TreeKind, TreeKindKey};
