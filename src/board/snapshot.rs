//! Immutable board snapshots and their encodings.
//!
//! A `Snapshot` is a frozen copy of every cell kind on the board, including
//! selection and highlight markers. It shares structure with the board it
//! was taken from, but no later write to that board can reach it.
//!
//! ## Text format
//!
//! ```text
//! 7
//! nnpppnn
//! nnpppnn
//! ppppppp
//! pppeppp
//! ppppppp
//! nnpppnn
//! nnpppnn
//! ```
//!
//! The first line is the grid size, followed by one line of symbols per row
//! (see [`CellKind::symbol`]). Every line ends with `\n`.

use std::str::FromStr;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::grid::Board;
use crate::core::{geometry, CellKind, Coord};
use crate::error::SnapshotError;

/// Immutable copy of a board's cell kinds at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "SnapshotRepr", try_from = "SnapshotRepr")]
pub struct Snapshot {
    size: usize,
    cells: Vector<CellKind>,
}

/// Serde form: the size alongside one symbol string per row.
#[derive(Serialize, Deserialize)]
struct SnapshotRepr {
    size: usize,
    rows: Vec<String>,
}

impl Snapshot {
    /// Capture the current state of `board`.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board.cells().clone(),
        }
    }

    /// Side length of the captured grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Captured kind at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<CellKind> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// A live board holding exactly the captured kinds.
    #[must_use]
    pub fn to_board(&self) -> Board {
        Board::from_parts(self.size, self.cells.clone())
    }

    /// One string of symbols per row.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.to_board().rows()
    }

    /// Build a snapshot from symbol rows. The grid must be square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, SnapshotError> {
        let size = rows.len();
        let mut cells = Vector::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != size {
                return Err(SnapshotError::RaggedRow {
                    row,
                    expected: size,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let kind = CellKind::from_symbol(symbol)
                    .ok_or(SnapshotError::UnknownSymbol { symbol, row, col })?;
                cells.push_back(kind);
            }
        }
        Ok(Self { size, cells })
    }

    /// Encode as the size header followed by the symbol grid.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = format!("{}\n", self.size);
        for row in self.rows() {
            out.push_str(&row);
            out.push('\n');
        }
        out
    }

    /// Decode the text produced by [`Snapshot::encode`].
    pub fn decode(text: &str) -> Result<Self, SnapshotError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(SnapshotError::MissingHeader)?.trim();
        if header.is_empty() {
            return Err(SnapshotError::MissingHeader);
        }
        let declared: usize = header
            .parse()
            .map_err(|_| SnapshotError::BadHeader(header.to_string()))?;

        let rows: Vec<&str> = lines.collect();
        if rows.len() != declared {
            return Err(SnapshotError::RowCount {
                declared,
                rows: rows.len(),
            });
        }
        Self::from_rows(&rows)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode the bytes produced by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check that the grid is a legal position for the cross of its size:
    /// `OffBoard` exactly outside the cross and at most one selected peg.
    pub fn validate_shape(&self) -> Result<(), SnapshotError> {
        let board = self.to_board();
        for (coord, kind) in board.iter() {
            let playable = geometry::is_playable(self.size, coord.row, coord.col);
            if playable != kind.is_playable() {
                return Err(SnapshotError::ShapeMismatch(coord));
            }
        }
        let selected = board.count(CellKind::Selected);
        if selected > 1 {
            return Err(SnapshotError::MultipleSelected(selected));
        }
        Ok(())
    }
}

impl From<&Board> for Snapshot {
    fn from(board: &Board) -> Self {
        Self::of(board)
    }
}

impl From<Snapshot> for SnapshotRepr {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            size: snapshot.size,
            rows: snapshot.rows(),
        }
    }
}

impl TryFrom<SnapshotRepr> for Snapshot {
    type Error = SnapshotError;

    fn try_from(repr: SnapshotRepr) -> Result<Self, Self::Error> {
        if repr.rows.len() != repr.size {
            return Err(SnapshotError::RowCount {
                declared: repr.size,
                rows: repr.rows.len(),
            });
        }
        Self::from_rows(&repr.rows)
    }
}

impl FromStr for Snapshot {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rows().join("\n"))
    }
}
