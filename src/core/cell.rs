//! What a single board position can hold.
//!
//! Behavior is determined by the kind alone, so the kinds form a closed
//! enumeration and callers dispatch with `match`.
//!
//! ## Serialization symbols
//!
//! | Kind              | Symbol |
//! |-------------------|--------|
//! | `Empty`           | `e`    |
//! | `Peg`             | `p`    |
//! | `Selected`        | `s`    |
//! | `AvailableTarget` | `a`    |
//! | `OffBoard`        | `n`    |

use serde::{Deserialize, Serialize};

/// Kind of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// A playable hole holding a peg.
    Peg,
    /// A playable hole with no peg.
    Empty,
    /// The peg chosen as origin of the move in progress.
    Selected,
    /// An empty hole the selected peg can jump into.
    AvailableTarget,
    /// Outside the cross. Never changes and never takes part in rules.
    OffBoard,
}

impl CellKind {
    /// Every kind, in symbol-table order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Empty,
        CellKind::Peg,
        CellKind::Selected,
        CellKind::AvailableTarget,
        CellKind::OffBoard,
    ];

    /// Snapshot symbol for this kind.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Empty => 'e',
            CellKind::Peg => 'p',
            CellKind::Selected => 's',
            CellKind::AvailableTarget => 'a',
            CellKind::OffBoard => 'n',
        }
    }

    /// Parse a snapshot symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'e' => Some(CellKind::Empty),
            'p' => Some(CellKind::Peg),
            's' => Some(CellKind::Selected),
            'a' => Some(CellKind::AvailableTarget),
            'n' => Some(CellKind::OffBoard),
            _ => None,
        }
    }

    /// Holds a peg, including one that is mid-move.
    #[must_use]
    pub const fn is_peg(self) -> bool {
        matches!(self, CellKind::Peg | CellKind::Selected)
    }

    /// An empty hole, highlighted or not.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, CellKind::Empty | CellKind::AvailableTarget)
    }

    /// Inside the cross.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, CellKind::OffBoard)
    }

    /// The kind with selection and highlight markers stripped.
    #[must_use]
    pub const fn settled(self) -> Self {
        match self {
            CellKind::Selected => CellKind::Peg,
            CellKind::AvailableTarget => CellKind::Empty,
            other => other,
        }
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellKind::Peg => "peg",
            CellKind::Empty => "empty",
            CellKind::Selected => "selected peg",
            CellKind::AvailableTarget => "available target",
            CellKind::OffBoard => "off-board",
        };
        f.write_str(name)
    }
}
