use crate::Point;
use crate::grid::Grid;
use crate::stone::Stone;

/// A maximal 4-connected chain of same-colored stones and its liberties.
///
/// Groups are derived on demand from a [`Grid`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stone: Stone,
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }
}

/// The group containing `point`, or `None` if the point is empty or off the board.
pub fn group_at(grid: &Grid, point: Point) -> Option<Group> {
    let mut visited = vec![false; grid.cells().len()];
    group_from(grid, point, &mut visited)
}

/// Partition every occupied point of the grid into groups, in row-major order
/// of each group's first stone.
pub fn all_groups(grid: &Grid) -> Vec<Group> {
    let mut visited = vec![false; grid.cells().len()];
    let mut groups = Vec::new();

    for point in grid.points() {
        if visited[grid.idx(point)] {
            continue;
        }
        if let Some(group) = group_from(grid, point, &mut visited) {
            groups.push(group);
        }
    }

    groups
}

/// Flood-fill from `point` using a shared visited bitset, so no point is
/// expanded twice across calls.
fn group_from(grid: &Grid, point: Point, visited: &mut [bool]) -> Option<Group> {
    let stone = grid.stone_at(point)?;

    let mut stones = Vec::new();
    let mut stack = vec![point];

    while let Some(p) = stack.pop() {
        let vi = grid.idx(p);
        if visited[vi] {
            continue;
        }
        visited[vi] = true;
        stones.push(p);
        for n in grid.neighbors(p) {
            if grid.stone_at(n) == Some(stone) && !visited[grid.idx(n)] {
                stack.push(n);
            }
        }
    }

    let liberties = chain_liberties(grid, &stones);
    Some(Group {
        stone,
        stones,
        liberties,
    })
}

/// Empty points adjacent to any stone of the chain, each listed once.
fn chain_liberties(grid: &Grid, chain: &[Point]) -> Vec<Point> {
    let mut seen = vec![false; grid.cells().len()];
    let mut libs = Vec::new();
    for &p in chain {
        for n in grid.neighbors(p) {
            let ni = grid.idx(n);
            if !seen[ni] && grid.stone_at(n).is_none() {
                seen[ni] = true;
                libs.push(n);
            }
        }
    }
    libs
}
