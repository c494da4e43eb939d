//! The game: a selection state machine over the board, with undo.
//!
//! A presentation layer translates gestures into calls on one
//! [`Solitaire`] instance and renders [`Solitaire::view`] afterwards.
//! Refused operations return a [`GameError`](crate::error::GameError) and
//! leave the game untouched.

mod machine;
mod view;

pub use machine::{EndCheck, Operation, Phase, Solitaire, Transition};
pub use view::BoardView;
