use crate::Point;
use crate::capture::resolve_captures;
use crate::error::Rejection;
use crate::grid::{Captures, Grid};
use crate::group::group_at;
use crate::seki::detect_seki;
use crate::stone::Stone;

/// A legal placement, computed on copies and not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub grid: Grid,
    pub captures: Captures,
    pub dead_stones: Vec<Point>,
}

/// Run the legality gates for `player` at `point` and return the resulting
/// position. The inputs are never touched, so a rejection has no effects.
pub fn place_stone(
    grid: &Grid,
    captures: &Captures,
    point: Point,
    player: Stone,
) -> Result<Placement, Rejection> {
    if !grid.on_board(point) {
        return Err(Rejection::NotOnBoard);
    }

    if grid.stone_at(point).is_some() {
        return Err(Rejection::Occupied);
    }

    let mut next = grid.with_stone(point, player);

    if is_bent_four_corner(&next, point, player) {
        return Err(Rejection::BentFourCorner);
    }

    let seki = detect_seki(&next);
    let mut next_captures = *captures;
    let dead_stones = resolve_captures(&mut next, point, player, &seki, &mut next_captures);

    let has_liberties = group_at(&next, point).is_some_and(|g| !g.is_dead());
    if !has_liberties {
        return Err(Rejection::Suicide);
    }

    Ok(Placement {
        grid: next,
        captures: next_captures,
        dead_stones,
    })
}

/// Top-left corner shape: `player` on (0,0), (0,2), (1,1), (2,0) with (0,1)
/// and (1,0) empty, completed by a stone at (0,0). Only this corner is checked.
pub fn is_bent_four_corner(grid: &Grid, point: Point, player: Stone) -> bool {
    if point != (0, 0) || grid.size() < 3 {
        return false;
    }
    let own = |p: Point| grid.stone_at(p) == Some(player);
    let empty = |p: Point| grid.stone_at(p).is_none();

    own((0, 0)) && own((0, 2)) && own((1, 1)) && own((2, 0)) && empty((0, 1)) && empty((1, 0))
}
