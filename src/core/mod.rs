//! Core types: coordinates, cell kinds, board geometry, configuration.
//!
//! These are the leaf building blocks. Everything here is plain data or a
//! pure function; the live board and the state machine build on top.

pub mod cell;
pub mod config;
pub mod coord;
pub mod geometry;

pub use cell::CellKind;
pub use config::{GameConfig, Landing, StalematePolicy, MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_BOARD_SIZE};
pub use coord::{Coord, Direction};
pub use geometry::{band, is_center, is_playable, playable_coords, playable_count};
