use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

use crate::Point;
use crate::error::Rejection;

/// Supported square board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum BoardSize {
    #[default]
    Nine = 9,
    Thirteen = 13,
    Nineteen = 19,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Nine, BoardSize::Thirteen, BoardSize::Nineteen];

    pub fn side(self) -> u8 {
        self as u8
    }

    pub fn area(self) -> usize {
        self.side() as usize * self.side() as usize
    }

    /// Hoshi used as display guides. Carries no game logic.
    pub fn star_points(self) -> Vec<Point> {
        // Offset from the edge: 2 on 9x9, 3 otherwise
        let off = if self == BoardSize::Nine { 2 } else { 3 };
        let far = self.side() - 1 - off;
        let mid = self.side() / 2;

        match self {
            BoardSize::Nine | BoardSize::Thirteen => {
                vec![(off, off), (off, far), (far, off), (far, far), (mid, mid)]
            }
            BoardSize::Nineteen => {
                let lines = [off, mid, far];
                lines
                    .iter()
                    .flat_map(|&r| lines.iter().map(move |&c| (r, c)))
                    .collect()
            }
        }
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = Rejection;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            9 => Ok(BoardSize::Nine),
            13 => Ok(BoardSize::Thirteen),
            19 => Ok(BoardSize::Nineteen),
            _ => Err(Rejection::UnsupportedBoardSize(n)),
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}
