use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::board_size::BoardSize;

/// A request from the caller to change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Intent {
    Place(Point),
    Pass,
    Undo,
    Reset,
    ChangeBoardSize(BoardSize),
}

impl Intent {
    pub fn place(row: u8, col: u8) -> Self {
        Intent::Place((row, col))
    }

    pub fn is_place(&self) -> bool {
        matches!(self, Intent::Place(_))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Place((row, col)) => write!(f, "place {row},{col}"),
            Intent::Pass => write!(f, "pass"),
            Intent::Undo => write!(f, "undo"),
            Intent::Reset => write!(f, "reset"),
            Intent::ChangeBoardSize(size) => write!(f, "board size {size}"),
        }
    }
}
