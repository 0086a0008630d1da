//! canopy-core - shared-instance registry and snapshot history.
//!
//! Two independent components:
//!
//! - [`Registry`]: a flyweight factory that stores one immutable record per
//!   distinct structural key and hands out copyable [`Handle`]s. Equal keys
//!   always give equal handles.
//! - [`History`]: an append-only store of [`Snapshot`]s produced by an
//!   [`Originator`], with indexed retrieval and restoration.
//!
//! # Example
//!
//! ```
//! use canopy_core::{Forest, History, Originator, SnapshotStore, TextEditor};
//!
//! let mut forest = Forest::new();
//! let a = forest.plant(1, 1, "Oak", "Green", "Rough");
//! let b = forest.plant(3, 5, "Oak", "Green", "Rough");
//! assert_eq!(a, b);
//!
//! let mut editor = TextEditor::new();
//! let mut history = History::new();
//! editor.set_text("Hello, World!");
//! history.record(editor.save());
//! editor.set_text("This is a new text.");
//! history.restore_into(0, &mut editor).unwrap();
//! assert_eq!(editor.text(), "Hello, World!");
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod forest;
pub mod history;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{CanopyConfig, HistoryConfig, RegistryConfig};
pub use editor::TextEditor;
pub use error::{CanopyError, CanopyResult, ErrorCode};
pub use forest::Forest;
pub use history::{History, HistorySummary};
pub use registry::{Registry, RegistryStats};
pub use traits::{Originator, SharedRecord, SnapshotStore};
pub use types::{
    Handle, PlacedInstance, Position, Snapshot, SubjectId, TextState, Tree, TreeKind, TreeKindKey,
};
