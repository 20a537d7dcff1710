use std::fmt;

/// Why an intent was refused. A rejected intent never mutates the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotOnBoard,
    Occupied,
    BentFourCorner,
    Suicide,
    GameOver,
    NothingToUndo,
    UnsupportedBoardSize(u8),
    /// A grid whose side differs from the active board size.
    SizeMismatch { grid: u8, board: u8 },
    /// Ascii layout rows that do not form a square.
    MalformedLayout,
    /// Restored state whose pass streak, game-over flag and score disagree.
    InconsistentState,
}

impl Rejection {
    /// Illegal placements, as opposed to requests that cannot act right now.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            Rejection::NotOnBoard
                | Rejection::Occupied
                | Rejection::BentFourCorner
                | Rejection::Suicide
        )
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotOnBoard => write!(f, "not on board"),
            Rejection::Occupied => write!(f, "occupied"),
            Rejection::BentFourCorner => write!(f, "bent four in the corner"),
            Rejection::Suicide => write!(f, "suicide"),
            Rejection::GameOver => write!(f, "game is over"),
            Rejection::NothingToUndo => write!(f, "nothing to undo"),
            Rejection::UnsupportedBoardSize(n) => write!(f, "unsupported board size {n}"),
            Rejection::SizeMismatch { grid, board } => {
                write!(f, "grid side {grid} does not match board size {board}")
            }
            Rejection::MalformedLayout => write!(f, "layout must be square"),
            Rejection::InconsistentState => write!(f, "inconsistent game state"),
        }
    }
}

impl std::error::Error for Rejection {}
