//! Selection state machine.
//!
//! ## States
//!
//! - `Idle`: no peg selected, nothing highlighted.
//! - `Selecting`: exactly one `Selected` peg, its legal landing cells
//!   marked `AvailableTarget`.
//!
//! ## Transitions
//!
//! | Operation      | Valid on                | Result                               |
//! |----------------|-------------------------|--------------------------------------|
//! | `select`       | a `Peg`                 | `Selecting` with fresh highlights    |
//! | `select`       | the `Selected` peg      | `Idle`                               |
//! | `confirm_move` | an `AvailableTarget`    | jump applied, end-of-game check      |
//! | `deselect`     | `Selecting`             | `Idle`                               |
//! | `step_back`    | non-empty history       | board restored to before last jump   |
//!
//! Every committed jump pushes a snapshot *before* the board changes, so
//! stepping back restores the exact pre-move position, selection included.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::view::BoardView;
use crate::board::{Board, Snapshot};
use crate::core::{CellKind, Coord, GameConfig, Landing, StalematePolicy};
use crate::error::{ConfigError, GameError, SnapshotError};
use crate::rules::{CrossJumpRules, Jump, RulesEngine, Targets};
use crate::stack::History;

/// State-machine entry points, named in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Select,
    ConfirmMove,
    Deselect,
    StepBack,
    Activate,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Select => "select",
            Operation::ConfirmMove => "confirm move",
            Operation::Deselect => "deselect",
            Operation::StepBack => "step back",
            Operation::Activate => "activate",
        };
        f.write_str(name)
    }
}

/// Where the machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selecting { origin: Coord },
}

/// Outcome of the end-of-game check after a jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCheck {
    /// At least one legal jump remains.
    Continue,
    /// No jump was left; the board is back to the initial layout.
    Restarted,
    /// No jump is left; the finished board is kept.
    Stalemate,
}

/// What a successful operation did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Selected { origin: Coord, targets: Targets },
    Deselected { origin: Coord },
    Moved { jump: Jump, end: EndCheck },
    SteppedBack { remaining: usize },
}

/// A running game of peg solitaire.
///
/// Owns the board, the selection, the highlighted targets and the undo
/// history. All mutation goes through the operations below.
#[derive(Clone, Debug)]
pub struct Solitaire<R = CrossJumpRules> {
    config: GameConfig,
    rules: R,
    board: Board,
    selected: Option<Coord>,
    targets: Targets,
    history: History,
}

impl Solitaire<CrossJumpRules> {
    /// Start a standard game on a board of `board_size`.
    pub fn new_game(board_size: usize) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::default().with_board_size(board_size))
    }

    /// Start a game with the standard jump rules.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rules(config, CrossJumpRules::new())
    }
}

impl Default for Solitaire<CrossJumpRules> {
    fn default() -> Self {
        Self::start(GameConfig::default(), CrossJumpRules::new())
    }
}

impl<R: RulesEngine> Solitaire<R> {
    /// Start a game with custom rules.
    pub fn with_rules(config: GameConfig, rules: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, rules))
    }

    fn start(config: GameConfig, rules: R) -> Self {
        Self {
            board: Board::initial(config.board_size),
            config,
            rules,
            selected: None,
            targets: Targets::new(),
            history: History::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.board, self.selected, &self.targets)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.selected {
            Some(origin) => Phase::Selecting { origin },
            None => Phase::Idle,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    #[must_use]
    pub fn targets(&self) -> &[Coord] {
        &self.targets
    }

    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.board.peg_count()
    }

    /// Number of jumps that can be stepped back.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.history.depth()
    }

    #[must_use]
    pub fn can_step_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Every legal jump on the current board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Jump> {
        self.rules.legal_moves(&self.board)
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.rules.is_stalemate(&self.board)
    }

    /// Freeze the current board, markers included.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.board)
    }

    // === Transitions ===

    /// Select the peg at `cell`, or deselect it if it is already selected.
    #[instrument(skip(self))]
    pub fn select(&mut self, cell: Coord) -> Result<Transition, GameError> {
        match self.playable_kind(cell)? {
            CellKind::Selected => self.deselect(),
            CellKind::Peg => {
                self.clear_selection();
                let targets = self.mark_selection(cell);
                debug!(origin = %cell, targets = targets.len(), "peg selected");
                self.check_invariants();
                Ok(Transition::Selected {
                    origin: cell,
                    targets,
                })
            }
            CellKind::AvailableTarget => Err(GameError::InvalidTransition {
                operation: Operation::Select,
                reason: "cell is a jump target, confirm the move instead",
            }),
            _ => Err(GameError::InvalidTransition {
                operation: Operation::Select,
                reason: "cell holds no peg",
            }),
        }
    }

    /// Jump the selected peg into `target`.
    #[instrument(skip(self))]
    pub fn confirm_move(&mut self, target: Coord) -> Result<Transition, GameError> {
        let kind = self.playable_kind(target)?;
        let Some(origin) = self.selected else {
            return Err(GameError::InvalidTransition {
                operation: Operation::ConfirmMove,
                reason: "no peg is selected",
            });
        };
        if kind != CellKind::AvailableTarget {
            return Err(GameError::InvalidTransition {
                operation: Operation::ConfirmMove,
                reason: "cell is not an available target",
            });
        }
        let over = self
            .rules
            .capture_cell_for(origin, target)
            .ok_or(GameError::InvalidTransition {
                operation: Operation::ConfirmMove,
                reason: "target is not one jump away",
            })?;
        if !self.rules.is_legal(&self.board, origin, target) {
            return Err(GameError::InvalidTransition {
                operation: Operation::ConfirmMove,
                reason: "no peg to jump over",
            });
        }

        self.history.push(Snapshot::of(&self.board));

        self.clear_selection();
        self.board.set(origin, CellKind::Empty);
        self.board.set(over, CellKind::Empty);
        self.board.set(target, CellKind::Peg);
        let jump = Jump {
            from: origin,
            over,
            to: target,
        };

        if self.config.landing == Landing::KeepSelected {
            self.mark_selection(target);
        }

        let end = self.check_end();
        debug!(%jump, ?end, pegs = self.board.peg_count(), "move committed");
        self.check_invariants();
        Ok(Transition::Moved { jump, end })
    }

    /// Drop the current selection and its highlights.
    #[instrument(skip(self))]
    pub fn deselect(&mut self) -> Result<Transition, GameError> {
        let Some(origin) = self.selected else {
            return Err(GameError::InvalidTransition {
                operation: Operation::Deselect,
                reason: "no peg is selected",
            });
        };
        self.clear_selection();
        debug!(%origin, "peg deselected");
        self.check_invariants();
        Ok(Transition::Deselected { origin })
    }

    /// Undo the most recent jump.
    #[instrument(skip(self))]
    pub fn step_back(&mut self) -> Result<Transition, GameError> {
        let snapshot = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.load(&snapshot);
        let remaining = self.history.depth();
        info!(remaining, "stepped back one move");
        self.check_invariants();
        Ok(Transition::SteppedBack { remaining })
    }

    /// Do whatever a click on `cell` means for its current kind.
    pub fn activate(&mut self, cell: Coord) -> Result<Transition, GameError> {
        match self.playable_kind(cell)? {
            CellKind::Peg | CellKind::Selected => self.select(cell),
            CellKind::AvailableTarget => self.confirm_move(cell),
            _ => Err(GameError::InvalidTransition {
                operation: Operation::Activate,
                reason: "cell is an empty hole",
            }),
        }
    }

    /// Apply the stalemate policy if no peg can jump.
    pub fn check_end(&mut self) -> EndCheck {
        if self.rules.has_any_legal_move(&self.board) {
            return EndCheck::Continue;
        }
        let pegs_left = self.board.peg_count();
        match self.config.stalemate {
            StalematePolicy::Restart => {
                info!(pegs_left, "no legal move left, restarting");
                self.selected = None;
                self.targets.clear();
                self.board = Board::initial(self.config.board_size);
                EndCheck::Restarted
            }
            StalematePolicy::Hold => {
                info!(pegs_left, "no legal move left");
                EndCheck::Stalemate
            }
        }
    }

    /// Start over: initial layout, no selection, empty history.
    pub fn reset(&mut self) {
        self.board = Board::initial(self.config.board_size);
        self.selected = None;
        self.targets.clear();
        self.history.clear();
    }

    /// Load a position. History is cleared.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if snapshot.size() != self.config.board_size {
            return Err(SnapshotError::SizeMismatch {
                expected: self.config.board_size,
                found: snapshot.size(),
            });
        }
        snapshot.validate_shape()?;
        self.load(snapshot);
        self.history.clear();
        self.check_invariants();
        Ok(())
    }

    // === Internals ===

    fn playable_kind(&self, cell: Coord) -> Result<CellKind, GameError> {
        match self.board.get(cell) {
            Some(kind) if kind.is_playable() => Ok(kind),
            _ => Err(GameError::InvalidCoordinate(cell)),
        }
    }

    /// Mark `origin` selected and highlight its targets.
    fn mark_selection(&mut self, origin: Coord) -> Targets {
        self.board.set(origin, CellKind::Selected);
        let targets = self.rules.legal_targets_from(&self.board, origin);
        for &target in &targets {
            self.board.set(target, CellKind::AvailableTarget);
        }
        self.selected = Some(origin);
        self.targets = targets.clone();
        targets
    }

    /// Revert the selected peg to `Peg` and highlights to `Empty`.
    fn clear_selection(&mut self) {
        if let Some(origin) = self.selected.take() {
            if self.board.kind_at(origin) == CellKind::Selected {
                self.board.set(origin, CellKind::Peg);
            }
        }
        for target in std::mem::take(&mut self.targets) {
            if self.board.kind_at(target) == CellKind::AvailableTarget {
                self.board.set(target, CellKind::Empty);
            }
        }
    }

    /// Replace the board with `snapshot`. Highlights are recomputed from the
    /// selected peg, never taken from the snapshot.
    fn load(&mut self, snapshot: &Snapshot) {
        let board = snapshot.to_board();
        let origin = board.coords_of(CellKind::Selected).next();
        self.board = board.settled();
        self.selected = None;
        self.targets.clear();
        if let Some(origin) = origin {
            self.mark_selection(origin);
        }
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.board.count(CellKind::Selected),
            usize::from(self.selected.is_some()),
            "selection marker out of sync"
        );
        debug_assert_eq!(
            self.board.count(CellKind::AvailableTarget),
            self.targets.len(),
            "highlight markers out of sync"
        );
        debug_assert!(
            self.targets.is_empty() || self.selected.is_some(),
            "targets highlighted without a selection"
        );
    }
}
