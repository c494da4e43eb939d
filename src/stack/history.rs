//! Persistent snapshot stack.

use std::sync::Arc;

use crate::board::Snapshot;

#[derive(Debug)]
struct Frame {
    snapshot: Snapshot,
    prev: Option<Arc<Frame>>,
}

/// Stack of snapshots, most recent first.
#[derive(Clone, Debug, Default)]
pub struct History {
    head: Option<Arc<Frame>>,
    depth: usize,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded snapshots.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Record a snapshot on top of the stack.
    pub fn push(&mut self, snapshot: Snapshot) {
        let prev = self.head.take();
        self.head = Some(Arc::new(Frame { snapshot, prev }));
        self.depth += 1;
    }

    /// A new history with `snapshot` on top; `self` is left untouched.
    #[must_use]
    pub fn pushed(&self, snapshot: Snapshot) -> Self {
        let mut next = self.clone();
        next.push(snapshot);
        next
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        let frame = self.head.take()?;
        self.depth -= 1;
        match Arc::try_unwrap(frame) {
            Ok(frame) => {
                self.head = frame.prev;
                Some(frame.snapshot)
            }
            // Shared with another clone: leave the frame alive for it.
            Err(shared) => {
                self.head = shared.prev.clone();
                Some(shared.snapshot.clone())
            }
        }
    }

    /// The most recent snapshot, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&Snapshot> {
        self.head.as_deref().map(|frame| &frame.snapshot)
    }

    /// Iterate from the most recent snapshot to the oldest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

// Unlink frames one at a time so a long chain can't overflow the stack
// through recursive drops.
impl Drop for History {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Arc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for History {
    fn eq(&self, other: &Self) -> bool {
        self.depth == other.depth && self.iter().eq(other.iter())
    }
}

impl Eq for History {}

/// Iterator over a history, most recent first.
pub struct Iter<'a> {
    next: Option<&'a Frame>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Snapshot;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.prev.as_deref();
        Some(&frame.snapshot)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{CellKind, Coord};

    fn snapshot_with_empty(row: i32, col: i32) -> Snapshot {
        let mut board = Board::initial(7);
        board.set(Coord::new(row, col), CellKind::Empty);
        Snapshot::of(&board)
    }

    #[test]
    fn test_lifo_order() {
        let mut history = History::new();
        let a = snapshot_with_empty(0, 2);
        let b = snapshot_with_empty(0, 3);
        let c = snapshot_with_empty(0, 4);

        history.push(a.clone());
        history.push(b.clone());
        history.push(c.clone());
        assert_eq!(history.depth(), 3);
        assert_eq!(history.peek(), Some(&c));

        let order: Vec<&Snapshot> = history.iter().collect();
        assert_eq!(order, vec![&c, &b, &a]);

        assert_eq!(history.pop(), Some(c));
        assert_eq!(history.pop(), Some(b));
        assert_eq!(history.pop(), Some(a));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
        assert_eq!(history.depth(), 0);
    }

    #[test]
    fn test_clones_share_but_do_not_interfere() {
        let mut history = History::new();
        history.push(snapshot_with_empty(0, 2));
        history.push(snapshot_with_empty(0, 3));

        let mut fork = history.clone();
        assert_eq!(fork, history);

        assert_eq!(fork.pop(), Some(snapshot_with_empty(0, 3)));
        fork.push(snapshot_with_empty(6, 4));

        assert_eq!(history.depth(), 2);
        assert_eq!(history.peek(), Some(&snapshot_with_empty(0, 3)));
        assert_eq!(fork.peek(), Some(&snapshot_with_empty(6, 4)));
        assert_ne!(fork, history);
    }

    #[test]
    fn test_pushed_is_persistent() {
        let base = History::new().pushed(snapshot_with_empty(0, 2));
        let next = base.pushed(snapshot_with_empty(0, 3));

        assert_eq!(base.depth(), 1);
        assert_eq!(next.depth(), 2);
        assert_eq!(next.iter().nth(1), base.peek());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(snapshot_with_empty(0, 2));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.peek(), None);
    }

    #[test]
    fn test_long_chain_drops() {
        let mut history = History::new();
        let snapshot = Snapshot::of(&Board::initial(7));
        for _ in 0..200_000 {
            history.push(snapshot.clone());
        }
        assert_eq!(history.depth(), 200_000);
        drop(history);
    }
}
