//! The authoritative board: an owned N×N grid of cell kinds.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board (or
//! taking a snapshot of it) is O(1) and later writes copy only the touched
//! chunk. The set of playable coordinates is fixed by the geometry; only
//! kinds at playable coordinates ever change.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::{geometry, CellKind, Coord};

/// Square grid of `CellKind` values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vector<CellKind>,
}

impl Board {
    /// Initial layout: every playable hole holds a peg except the center.
    #[must_use]
    pub fn initial(size: usize) -> Self {
        let n = size as i32;
        let cells = (0..n)
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .map(|(row, col)| {
                if !geometry::is_playable(size, row, col) {
                    CellKind::OffBoard
                } else if geometry::is_center(size, row, col) {
                    CellKind::Empty
                } else {
                    CellKind::Peg
                }
            })
            .collect();
        Self { size, cells }
    }

    pub(crate) fn from_parts(size: usize, cells: Vector<CellKind>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    pub(crate) fn cells(&self) -> &Vector<CellKind> {
        &self.cells
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major index of `coord`, or `None` outside the grid.
    #[must_use]
    pub fn index(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Cell kind at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<CellKind> {
        self.index(coord).and_then(|i| self.cells.get(i).copied())
    }

    /// Cell kind at `coord`, treating anything outside the grid as `OffBoard`.
    #[must_use]
    pub fn kind_at(&self, coord: Coord) -> CellKind {
        self.get(coord).unwrap_or(CellKind::OffBoard)
    }

    /// Inside the grid and inside the cross.
    #[must_use]
    pub fn is_playable(&self, coord: Coord) -> bool {
        geometry::is_playable(self.size, coord.row, coord.col)
    }

    /// Overwrite the kind of a playable cell, returning the previous kind.
    ///
    /// Refuses (returns `None`) for off-board coordinates and for `OffBoard`
    /// as the new kind, so the cross shape cannot change.
    pub(crate) fn set(&mut self, coord: Coord, kind: CellKind) -> Option<CellKind> {
        if kind == CellKind::OffBoard || !self.is_playable(coord) {
            return None;
        }
        let index = self.index(coord)?;
        Some(self.cells.set(index, kind))
    }

    /// Iterate over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, &kind)| {
            (Coord::new((i / size) as i32, (i % size) as i32), kind)
        })
    }

    /// Coordinates currently holding `kind`, row-major.
    pub fn coords_of(&self, kind: CellKind) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter(move |&(_, k)| k == kind).map(|(c, _)| c)
    }

    /// Number of cells of `kind`.
    #[must_use]
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Number of pegs on the board, including a selected one.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|k| k.is_peg()).count()
    }

    /// Number of playable holes.
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.cells.iter().filter(|k| k.is_playable()).count()
    }

    /// Count of every kind present on the board.
    #[must_use]
    pub fn census(&self) -> FxHashMap<CellKind, usize> {
        let mut counts = FxHashMap::default();
        for &kind in self.cells.iter() {
            *counts.entry(kind).or_insert(0) += 1;
        }
        counts
    }

    /// Copy of this board with selection and highlight markers stripped.
    #[must_use]
    pub fn settled(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|k| k.settled()).collect(),
        }
    }

    /// One string of snapshot symbols per row.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                self.cells
                    .iter()
                    .skip(row * self.size)
                    .take(self.size)
                    .map(|k| k.symbol())
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rows().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::initial(7);

        assert_eq!(board.size(), 7);
        assert_eq!(board.playable_count(), 33);
        assert_eq!(board.peg_count(), 32);
        assert_eq!(board.count(CellKind::Empty), 1);
        assert_eq!(board.get(Coord::new(3, 3)), Some(CellKind::Empty));
        assert_eq!(board.get(Coord::new(0, 0)), Some(CellKind::OffBoard));
        assert_eq!(board.get(Coord::new(0, 2)), Some(CellKind::Peg));
    }

    #[test]
    fn test_out_of_grid_lookups() {
        let board = Board::initial(7);

        assert_eq!(board.get(Coord::new(-1, 3)), None);
        assert_eq!(board.get(Coord::new(3, 7)), None);
        assert_eq!(board.kind_at(Coord::new(9, 9)), CellKind::OffBoard);
        assert_eq!(board.index(Coord::new(1, 2)), Some(9));
    }

    #[test]
    fn test_set_refuses_off_board() {
        let mut board = Board::initial(7);

        assert_eq!(board.set(Coord::new(0, 0), CellKind::Peg), None);
        assert_eq!(board.set(Coord::new(-1, 3), CellKind::Peg), None);
        assert_eq!(board.set(Coord::new(3, 3), CellKind::OffBoard), None);
        assert_eq!(board.get(Coord::new(0, 0)), Some(CellKind::OffBoard));

        assert_eq!(board.set(Coord::new(3, 3), CellKind::Peg), Some(CellKind::Empty));
        assert_eq!(board.get(Coord::new(3, 3)), Some(CellKind::Peg));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::initial(7);
        let before = board.clone();

        board.set(Coord::new(2, 3), CellKind::Empty);

        assert_eq!(before.get(Coord::new(2, 3)), Some(CellKind::Peg));
        assert_ne!(before, board);
    }

    #[test]
    fn test_census_and_settled() {
        let mut board = Board::initial(7);
        board.set(Coord::new(1, 3), CellKind::Selected);
        board.set(Coord::new(3, 3), CellKind::AvailableTarget);

        let census = board.census();
        assert_eq!(census[&CellKind::Selected], 1);
        assert_eq!(census[&CellKind::AvailableTarget], 1);
        assert_eq!(census[&CellKind::Peg], 31);
        assert_eq!(census[&CellKind::OffBoard], 16);
        assert!(!census.contains_key(&CellKind::Empty));

        assert_eq!(board.settled(), Board::initial(7));
    }

    #[test]
    fn test_display() {
        let board = Board::initial(7);
        let expected = "nnpppnn\nnnpppnn\nppppppp\npppeppp\nppppppp\nnnpppnn\nnnpppnn";
        assert_eq!(board.to_string(), expected);
    }
}
