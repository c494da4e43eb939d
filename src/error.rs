//! Structured error types.
//!
//! None of these are fatal. A `GameError` means the requested operation was
//! a no-op and the game is exactly as it was before the call.

use crate::core::Coord;
use crate::game::Operation;

/// Why a state-machine operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The coordinate is outside the grid or outside the cross.
    #[error("{0} is not a playable cell")]
    InvalidCoordinate(Coord),

    /// The operation's precondition does not hold in the current state.
    #[error("cannot {operation}: {reason}")]
    InvalidTransition {
        operation: Operation,
        reason: &'static str,
    },

    /// Step back was requested with no committed move to revert.
    #[error("no move to step back from")]
    EmptyHistory,
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid board size {size}: {reason}")]
    InvalidBoardSize { size: usize, reason: &'static str },
}

/// Errors that can occur when decoding or loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot is missing its size header")]
    MissingHeader,

    #[error("invalid size header {0:?}")]
    BadHeader(String),

    #[error("header declares size {declared} but grid has {rows} rows")]
    RowCount { declared: usize, rows: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("snapshot is {found}x{found}, game board is {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("cell {0} does not match the cross shape")]
    ShapeMismatch(Coord),

    #[error("snapshot has {0} selected pegs, at most one is allowed")]
    MultipleSelected(usize),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),
}
