//! Rules engine trait.
//!
//! Implementations define:
//! - which cells a peg may jump into
//! - which cell a jump captures
//!
//! Move enumeration and stalemate detection are built on those two.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::Coord;

/// Legal landing cells for one origin.
///
/// At most one per direction, so four fit inline without allocating.
pub type Targets = SmallVec<[Coord; 4]>;

/// A single jump: `from` leaps over `over` into `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub from: Coord,
    pub over: Coord,
    pub to: Coord,
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} -> {}", self.from, self.over, self.to)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_targets_from`: never fails; coordinates outside the grid or the
///   cross simply contribute no target. Order must be deterministic.
/// - `capture_cell_for`: `None` when `destination` is not one jump away.
pub trait RulesEngine {
    /// Cells the peg at `origin` can currently jump into.
    fn legal_targets_from(&self, board: &Board, origin: Coord) -> Targets;

    /// The cell a jump from `origin` to `destination` removes.
    fn capture_cell_for(&self, origin: Coord, destination: Coord) -> Option<Coord>;

    // === Convenience Methods ===

    /// Whether `origin -> destination` is a legal jump on `board`.
    fn is_legal(&self, board: &Board, origin: Coord, destination: Coord) -> bool {
        self.legal_targets_from(board, origin).contains(&destination)
    }

    /// True iff some peg (selected or not) has at least one legal jump.
    fn has_any_legal_move(&self, board: &Board) -> bool {
        board
            .iter()
            .filter(|(_, kind)| kind.is_peg())
            .any(|(coord, _)| !self.legal_targets_from(board, coord).is_empty())
    }

    /// Every legal jump on the board, origins in row-major order.
    fn legal_moves(&self, board: &Board) -> Vec<Jump> {
        let mut moves = Vec::new();
        for (from, kind) in board.iter() {
            if !kind.is_peg() {
                continue;
            }
            for to in self.legal_targets_from(board, from) {
                if let Some(over) = self.capture_cell_for(from, to) {
                    moves.push(Jump { from, over, to });
                }
            }
        }
        moves
    }

    /// Whether `board` has pegs but no legal jump.
    fn is_stalemate(&self, board: &Board) -> bool {
        board.peg_count() > 0 && !self.has_any_legal_move(board)
    }
}
