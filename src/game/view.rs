//! Read-only projection of the live board for rendering.

use crate::board::{Board, Snapshot};
use crate::core::{CellKind, Coord};

/// Borrowed view of the board, the selection and the highlighted targets.
///
/// The presentation layer reads from this and never holds references into
/// the game's own storage past the borrow.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    selected: Option<Coord>,
    targets: &'a [Coord],
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(board: &'a Board, selected: Option<Coord>, targets: &'a [Coord]) -> Self {
        Self {
            board,
            selected,
            targets,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Kind at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<CellKind> {
        self.board.get(coord)
    }

    /// Kind at `coord`, `OffBoard` outside the grid.
    #[must_use]
    pub fn kind_at(&self, coord: Coord) -> CellKind {
        self.board.kind_at(coord)
    }

    /// The selected peg, if a move is in progress.
    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Highlighted landing cells, in direction order.
    #[must_use]
    pub fn targets(&self) -> &'a [Coord] {
        self.targets
    }

    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.board.peg_count()
    }

    /// Every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellKind)> + 'a {
        self.board.iter()
    }

    /// One string of snapshot symbols per row.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.board.rows()
    }

    /// Freeze the viewed state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self.board)
    }
}

impl std::fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.board, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_reads_through() {
        let mut board = Board::initial(7);
        board.set(Coord::new(1, 3), CellKind::Selected);
        board.set(Coord::new(3, 3), CellKind::AvailableTarget);
        let targets = [Coord::new(3, 3)];

        let view = BoardView::new(&board, Some(Coord::new(1, 3)), &targets);

        assert_eq!(view.size(), 7);
        assert_eq!(view.selected(), Some(Coord::new(1, 3)));
        assert_eq!(view.targets(), &[Coord::new(3, 3)]);
        assert_eq!(view.kind_at(Coord::new(3, 3)), CellKind::AvailableTarget);
        assert_eq!(view.get(Coord::new(7, 0)), None);
        assert_eq!(view.peg_count(), 32);
        assert_eq!(view.cells().count(), 49);
        assert_eq!(view.rows()[1], "nnpspnn");
        assert_eq!(view.snapshot(), Snapshot::of(&board));
    }
}
