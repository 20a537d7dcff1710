use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::grid::{ByColor, Captures, Grid};
use crate::stone::Stone;

/// Compensation awarded to White.
pub const KOMI: f64 = 6.5;

/// Final result of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub territory: ByColor<u32>,
    /// Stones keep their color; owned empty points take the owner's color;
    /// neutral points stay empty.
    pub territory_map: Grid,
    pub captures: Captures,
    pub komi: f64,
    pub final_score: ByColor<f64>,
    /// Equal totals go to White.
    pub winner: Stone,
    pub margin: f64,
}

impl ScoreResult {
    pub fn result(&self) -> String {
        format_result(self.final_score.black, self.final_score.white)
    }
}

/// Assign every empty region to the single color that borders it.
///
/// Regions bordering both colors, or none, are neutral (dame).
pub fn territory(grid: &Grid) -> (ByColor<u32>, Grid) {
    let mut counts = ByColor::<u32>::default();
    let mut map = grid.clone();
    let mut visited = vec![false; grid.cells().len()];

    for start in grid.points() {
        if visited[grid.idx(start)] || grid.stone_at(start).is_some() {
            continue;
        }

        // Breadth-first over this empty region
        let mut region = Vec::new();
        let mut border_colors: u8 = 0; // bit 0 = Black seen, bit 1 = White seen
        let mut queue = VecDeque::from([start]);
        visited[grid.idx(start)] = true;

        while let Some(p) = queue.pop_front() {
            region.push(p);
            for n in grid.neighbors(p) {
                match grid.stone_at(n) {
                    Some(Stone::Black) => border_colors |= 1,
                    Some(Stone::White) => border_colors |= 2,
                    None => {
                        let ni = grid.idx(n);
                        if !visited[ni] {
                            visited[ni] = true;
                            queue.push_back(n);
                        }
                    }
                }
            }
        }

        let owner = match border_colors {
            1 => Stone::Black,
            2 => Stone::White,
            _ => continue,
        };

        *counts.get_mut(owner) += region.len() as u32;
        for p in region {
            map.set_stone(p, owner);
        }
    }

    (counts, map)
}

/// Score = territory + captures, plus komi for White.
pub fn score(grid: &Grid, captures: &Captures, komi: f64) -> ScoreResult {
    let (territory, territory_map) = territory(grid);

    let black = (territory.black + captures.black) as f64;
    let white = (territory.white + captures.white) as f64 + komi;

    let winner = if black > white {
        Stone::Black
    } else {
        Stone::White
    };

    ScoreResult {
        territory,
        territory_map,
        captures: *captures,
        komi,
        final_score: ByColor::new(black, white),
        winner,
        margin: (black - white).abs(),
    }
}

/// Format the game result string from final scores.
///
/// Returns "B+{diff}" or "W+{diff}"; a tie reads "W+0".
pub fn format_result(black_score: f64, white_score: f64) -> String {
    if black_score > white_score {
        format!("B+{}", black_score - white_score)
    } else {
        format!("W+{}", white_score - black_score)
    }
}
