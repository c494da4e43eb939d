//! Orthogonal jump rules for the cross board.

use tracing::trace;

use super::engine::{RulesEngine, Targets};
use crate::board::Board;
use crate::core::{Coord, Direction};

/// The standard rule: a peg jumps an adjacent peg in one of the four axis
/// directions into the empty hole directly behind it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrossJumpRules;

impl CrossJumpRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn jump_lands(board: &Board, origin: Coord, direction: Direction) -> Option<Coord> {
        let mid = origin.offset(direction, 1);
        let dst = origin.offset(direction, 2);
        let mid_ok = board.is_playable(mid) && board.kind_at(mid).is_peg();
        let dst_ok = board.is_playable(dst) && board.kind_at(dst).is_open();
        (mid_ok && dst_ok).then_some(dst)
    }
}

impl RulesEngine for CrossJumpRules {
    fn legal_targets_from(&self, board: &Board, origin: Coord) -> Targets {
        if !board.kind_at(origin).is_peg() {
            return Targets::new();
        }
        let targets: Targets = Direction::ALL
            .iter()
            .filter_map(|&dir| Self::jump_lands(board, origin, dir))
            .collect();
        trace!(%origin, count = targets.len(), "computed jump targets");
        targets
    }

    fn capture_cell_for(&self, origin: Coord, destination: Coord) -> Option<Coord> {
        origin.midpoint(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellKind;
    use crate::rules::Jump;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_initial_targets_from_top_arm() {
        let board = Board::initial(7);
        let rules = CrossJumpRules::new();

        assert_eq!(rules.legal_targets_from(&board, c(1, 3)).as_slice(), &[c(3, 3)]);
        assert!(rules.legal_targets_from(&board, c(0, 3)).is_empty());
    }

    #[test]
    fn test_initial_board_has_four_moves() {
        let board = Board::initial(7);
        let rules = CrossJumpRules::new();

        let origins: Vec<Coord> = rules.legal_moves(&board).iter().map(|j| j.from).collect();
        assert_eq!(origins, vec![c(1, 3), c(3, 1), c(3, 5), c(5, 3)]);
        assert!(rules.has_any_legal_move(&board));
        assert!(!rules.is_stalemate(&board));
    }

    #[test]
    fn test_direction_order_up_down_right_left() {
        // Center peg surrounded by pegs, with all four landing holes open.
        let mut board = Board::initial(7);
        board.set(c(3, 3), CellKind::Peg);
        for hole in [c(1, 3), c(5, 3), c(3, 5), c(3, 1)] {
            board.set(hole, CellKind::Empty);
        }
        let rules = CrossJumpRules::new();

        assert_eq!(
            rules.legal_targets_from(&board, c(3, 3)).as_slice(),
            &[c(1, 3), c(5, 3), c(3, 5), c(3, 1)]
        );
    }

    #[test]
    fn test_edge_jumps_do_not_leave_the_grid() {
        let board = Board::initial(7);
        let rules = CrossJumpRules::new();

        // Up and left fall outside the grid or the cross; no panic, no target.
        assert!(rules.legal_targets_from(&board, c(0, 2)).is_empty());
        assert!(rules.legal_targets_from(&board, c(2, 0)).is_empty());
    }

    #[test]
    fn test_highlight_and_selection_markers_count() {
        let mut board = Board::initial(7);
        board.set(c(3, 3), CellKind::AvailableTarget);
        board.set(c(2, 3), CellKind::Selected);
        let rules = CrossJumpRules::new();

        // A selected mid-peg can be jumped, an available target can be landed on.
        assert_eq!(rules.legal_targets_from(&board, c(1, 3)).as_slice(), &[c(3, 3)]);
    }

    #[test]
    fn test_non_peg_origin_has_no_targets() {
        let board = Board::initial(7);
        let rules = CrossJumpRules::new();

        assert!(rules.legal_targets_from(&board, c(3, 3)).is_empty());
        assert!(rules.legal_targets_from(&board, c(0, 0)).is_empty());
        assert!(rules.legal_targets_from(&board, c(-5, 40)).is_empty());
    }

    #[test]
    fn test_capture_cell() {
        let rules = CrossJumpRules::new();
        assert_eq!(rules.capture_cell_for(c(1, 3), c(3, 3)), Some(c(2, 3)));
        assert_eq!(rules.capture_cell_for(c(3, 5), c(3, 3)), Some(c(3, 4)));
        assert_eq!(rules.capture_cell_for(c(1, 3), c(3, 5)), None);
    }

    #[test]
    fn test_stalemate_detection() {
        let mut board = Board::initial(7);
        for (coord, kind) in Board::initial(7).iter() {
            if kind.is_playable() {
                board.set(coord, CellKind::Empty);
            }
        }
        board.set(c(0, 2), CellKind::Peg);
        board.set(c(6, 4), CellKind::Peg);
        let rules = CrossJumpRules::new();

        assert!(!rules.has_any_legal_move(&board));
        assert!(rules.is_stalemate(&board));
        assert!(rules.legal_moves(&board).is_empty());

        // (0, 3) can't jump left: (0, 1) is off the cross.
        board.set(c(0, 3), CellKind::Peg);
        assert!(rules.has_any_legal_move(&board));
        assert_eq!(
            rules.legal_moves(&board),
            vec![Jump { from: c(0, 2), over: c(0, 3), to: c(0, 4) }]
        );
    }
}
