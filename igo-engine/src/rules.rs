use serde::{Deserialize, Serialize};

use crate::board_size::BoardSize;
use crate::scoring::KOMI;

/// Game configuration. Missing fields fall back to a 9x9 board and 6.5 komi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub board_size: BoardSize,
    pub komi: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            board_size: BoardSize::Nine,
            komi: KOMI,
        }
    }
}

impl Rules {
    pub fn new(board_size: BoardSize) -> Self {
        Rules {
            board_size,
            ..Self::default()
        }
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
