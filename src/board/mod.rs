//! The live board and its immutable snapshots.

pub mod grid;
pub mod snapshot;

pub use grid::Board;
pub use snapshot::Snapshot;
