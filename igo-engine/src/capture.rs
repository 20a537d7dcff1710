use crate::Point;
use crate::grid::{Captures, Grid};
use crate::group::group_at;
use crate::seki::SekiMap;
use crate::stone::Stone;

/// Remove every non-exempt opponent group adjacent to `point` that has no
/// liberties left, crediting `player` in `captures`.
///
/// Neighbors are handled one after another, so a group touching the placed
/// stone on two sides is only removed once. Returns the removed points.
pub fn resolve_captures(
    grid: &mut Grid,
    point: Point,
    player: Stone,
    seki: &SekiMap,
    captures: &mut Captures,
) -> Vec<Point> {
    let opponent = player.opp();
    let mut dead_stones = Vec::new();

    for n in grid.neighbors(point) {
        if grid.stone_at(n) != Some(opponent) || seki.is_exempt(n) {
            continue;
        }
        let Some(group) = group_at(grid, n) else {
            continue;
        };
        if !group.is_dead() {
            continue;
        }
        for &p in &group.stones {
            grid.clear_stone(p);
        }
        dead_stones.extend(group.stones);
    }

    if !dead_stones.is_empty() {
        captures.add(player, dead_stones.len() as u32);
        tracing::debug!(%player, count = dead_stones.len(), "captured stones");
    }

    dead_stones
}
