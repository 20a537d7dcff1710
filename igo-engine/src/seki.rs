use crate::Point;
use crate::grid::Grid;
use crate::group::{Group, all_groups};

/// Board-shaped map of stones exempt from capture through mutual life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SekiMap {
    exempt: Vec<bool>,
    size: u8,
}

impl SekiMap {
    /// A map with no exempt stones.
    pub fn none(size: u8) -> Self {
        SekiMap {
            exempt: vec![false; size as usize * size as usize],
            size,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_exempt(&self, (row, col): Point) -> bool {
        row < self.size
            && col < self.size
            && self.exempt[row as usize * self.size as usize + col as usize]
    }

    pub fn exempt_count(&self) -> usize {
        self.exempt.iter().filter(|&&e| e).count()
    }

    pub fn mark(&mut self, (row, col): Point) {
        if row < self.size && col < self.size {
            self.exempt[row as usize * self.size as usize + col as usize] = true;
        }
    }

    fn mark_group(&mut self, group: &Group) {
        for &p in &group.stones {
            self.mark(p);
        }
    }
}

/// Mark every pair of opposite-colored groups whose liberties are exactly
/// the points they share.
///
/// This is a structural heuristic, not a life-and-death solver. Every pair on
/// the board is compared, adjacent or not.
pub fn detect_seki(grid: &Grid) -> SekiMap {
    seki_from_groups(grid.size(), &all_groups(grid))
}

/// Same as [`detect_seki`] over a precomputed grouping.
pub fn seki_from_groups(size: u8, groups: &[Group]) -> SekiMap {
    let mut map = SekiMap::none(size);

    for (i, a) in groups.iter().enumerate() {
        for b in &groups[i + 1..] {
            if a.stone == b.stone {
                continue;
            }
            let shared = a
                .liberties
                .iter()
                .filter(|lib| b.liberties.contains(lib))
                .count();
            if shared > 0 && shared == a.liberties.len() && shared == b.liberties.len() {
                map.mark_group(a);
                map.mark_group(b);
            }
        }
    }

    map
}
