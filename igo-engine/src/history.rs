use serde::{Deserialize, Serialize};

use crate::Point;
use crate::grid::{Captures, Grid};
use crate::stone::Stone;

/// State captured immediately before an accepted placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub to_move: Stone,
    pub captures: Captures,
    /// The placement this snapshot precedes.
    pub mv: Point,
}

/// Undo stack, one snapshot per committed placement. Passes are not recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.stack
    }

    pub fn record_before_move(
        &mut self,
        grid: &Grid,
        to_move: Stone,
        captures: &Captures,
        mv: Point,
    ) {
        self.stack.push(Snapshot {
            grid: grid.clone(),
            to_move,
            captures: *captures,
            mv,
        });
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop()
    }

    /// The move whose result is the current position, if any.
    pub fn last_move(&self) -> Option<Point> {
        self.stack.last().map(|s| s.mv)
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
