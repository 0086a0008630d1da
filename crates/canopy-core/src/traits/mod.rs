//! Core traits for canopy.

mod originator;
mod record;
mod snapshot_store;

pub use originator::*;
pub use record::*;
pub use snapshot_store::*;
