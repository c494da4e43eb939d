//! Jump rules.
//!
//! The state machine calls into a `RulesEngine` to find legal targets and
//! captured cells, but never interprets the jump geometry itself.

pub mod engine;
pub mod jump;

pub use engine::{Jump, RulesEngine, Targets};
pub use jump::CrossJumpRules;
