//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - the board size (odd, so the cross has an exact center)
//! - a `Landing` policy: what happens to the peg after a jump
//! - a `StalematePolicy`: what happens when no jump is left anywhere
//!
//! `GameConfig::default()` is the standard 7×7 English cross with the
//! jump ending the turn and the board restarting on stalemate.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Side length of the standard English board.
pub const STANDARD_BOARD_SIZE: usize = 7;

/// Smallest board whose cross has room for a jump along each arm.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board.
pub const MAX_BOARD_SIZE: usize = 255;

/// What the jumping peg becomes once it lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landing {
    /// The jump ends the turn. The landed peg is a plain `Peg`.
    #[default]
    Release,
    /// The landed peg stays `Selected` with its own targets highlighted,
    /// so a chain of jumps can continue with the same peg.
    KeepSelected,
}

/// What happens when no peg has a legal jump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StalematePolicy {
    /// Reset the board to the initial layout. History is kept.
    #[default]
    Restart,
    /// Leave the finished board in place and report the stalemate.
    Hold,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid (odd, `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`).
    pub board_size: usize,

    /// Landing policy after a confirmed jump.
    pub landing: Landing,

    /// Stalemate handling.
    pub stalemate: StalematePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            landing: Landing::default(),
            stalemate: StalematePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the landing policy.
    #[must_use]
    pub fn with_landing(mut self, landing: Landing) -> Self {
        self.landing = landing;
        self
    }

    /// Set the stalemate policy.
    #[must_use]
    pub fn with_stalemate(mut self, stalemate: StalematePolicy) -> Self {
        self.stalemate = stalemate;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.board_size;
        if size < MIN_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize {
                size,
                reason: "board must be at least 5 cells wide",
            });
        }
        if size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize {
                size,
                reason: "board must be at most 255 cells wide",
            });
        }
        if size % 2 == 0 {
            return Err(ConfigError::InvalidBoardSize {
                size,
                reason: "board size must be odd so the cross has a center",
            });
        }
        Ok(())
    }
}
