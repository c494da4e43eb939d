//! # peg-solitaire
//!
//! Rule engine for peg solitaire on the English cross board.
//!
//! A move jumps a peg over an orthogonally adjacent peg into the empty hole
//! behind it, removing the jumped peg. The engine owns the board, the
//! selection state and an undo history; rendering and input handling live
//! outside and talk to it through [`Solitaire`].
//!
//! ## Design Principles
//!
//! 1. **Closed cell kinds**: a cell is a `CellKind` tag and behavior is a
//!    `match` on it. No per-cell objects.
//!
//! 2. **Single authority**: one `Solitaire` owns all board storage. The
//!    presentation layer borrows a [`BoardView`] and never holds references
//!    into the grid.
//!
//! 3. **Nothing is fatal**: bad coordinates and out-of-turn operations come
//!    back as [`GameError`] values and leave the game untouched.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the grid is an `im::Vector`, so a
//!   snapshot is an O(1) structural copy that later writes cannot reach.
//!
//! - **Linked History**: undo frames form an `Arc`-linked stack, most
//!   recent first.
//!
//! ## Modules
//!
//! - `core`: coordinates, cell kinds, cross geometry, configuration
//! - `board`: the live grid and immutable snapshots with their encodings
//! - `rules`: `RulesEngine` trait and the orthogonal jump rules
//! - `stack`: undo history
//! - `game`: the selection state machine and read-only board view
//! - `error`: structured error types
//!
//! ## Example
//!
//! ```
//! use peg_solitaire::{CellKind, Coord, Solitaire, Transition};
//!
//! let mut game = Solitaire::new_game(7).unwrap();
//! game.select(Coord::new(1, 3)).unwrap();
//! assert_eq!(game.targets(), &[Coord::new(3, 3)]);
//!
//! let t = game.confirm_move(Coord::new(3, 3)).unwrap();
//! assert!(matches!(t, Transition::Moved { .. }));
//! assert_eq!(game.view().kind_at(Coord::new(2, 3)), CellKind::Empty);
//!
//! game.step_back().unwrap();
//! assert_eq!(game.peg_count(), 32);
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{
    CellKind, Coord, Direction,
    GameConfig, Landing, StalematePolicy,
};

pub use crate::board::{Board, Snapshot};

pub use crate::rules::{CrossJumpRules, Jump, RulesEngine, Targets};

pub use crate::stack::History;

pub use crate::game::{BoardView, EndCheck, Operation, Phase, Solitaire, Transition};

pub use crate::error::{ConfigError, GameError, SnapshotError};
