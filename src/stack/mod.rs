//! Undo history.
//!
//! Committed moves are recorded as a LIFO chain of board snapshots. Each
//! frame owns a shared reference to its predecessor, so cloning a history
//! is O(1) and clones share every frame they have in common.
//!
//! ## Example Usage
//!
//! ```
//! use peg_solitaire::board::{Board, Snapshot};
//! use peg_solitaire::stack::History;
//!
//! let mut history = History::new();
//! history.push(Snapshot::of(&Board::initial(7)));
//! assert_eq!(history.depth(), 1);
//!
//! let restored = history.pop().unwrap();
//! assert_eq!(restored.to_board(), Board::initial(7));
//! assert!(history.is_empty());
//! ```

mod history;

pub use history::{History, Iter};
