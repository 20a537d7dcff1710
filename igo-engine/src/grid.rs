use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::Rejection;
use crate::stone::Stone;

/// A pair of values indexed by stone color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ByColor<T> {
    pub black: T,
    pub white: T,
}

impl<T: Copy> ByColor<T> {
    pub fn new(black: T, white: T) -> Self {
        ByColor { black, white }
    }

    pub fn get(&self, stone: Stone) -> T {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub fn get_mut(&mut self, stone: Stone) -> &mut T {
        match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        }
    }
}

/// Opponent stones removed, credited to the capturing color.
pub type Captures = ByColor<u32>;

impl Captures {
    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        *self.get_mut(stone) += count;
    }
}

/// Square board stored as a flat array: `0` empty, `1` black, `-1` white.
///
/// Cloning is the copy-on-write step: every accepted placement produces a
/// fresh grid and leaves the previous one untouched for history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<i8>,
    size: u8,
}

impl Grid {
    /// Create an empty grid of the given side length.
    pub fn new(size: u8) -> Self {
        Grid {
            cells: vec![0i8; size as usize * size as usize],
            size,
        }
    }

    /// Build a grid from an ascii layout, one string per row.
    /// `B` is Black, `W` is White, anything else is empty.
    pub fn from_rows(layout: &[&str]) -> Result<Self, Rejection> {
        let size = layout.len();
        if size > u8::MAX as usize || layout.iter().any(|row| row.chars().count() != size) {
            return Err(Rejection::MalformedLayout);
        }

        let cells = layout
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| Stone::from_letter(c).map_or(0, Stone::to_int))
            .collect();

        Ok(Grid {
            cells,
            size: size as u8,
        })
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// True when the cell count matches the side length.
    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == self.size as usize * self.size as usize
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.cells[self.idx(point)])
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == 0)
    }

    pub fn stone_count(&self, stone: Stone) -> usize {
        let v = stone.to_int();
        self.cells.iter().filter(|&&s| s == v).count()
    }

    /// Every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| (r, c)))
    }

    /// 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    /// Copy of this grid with `stone` at `point`.
    pub fn with_stone(&self, point: Point, stone: Stone) -> Grid {
        let mut grid = self.clone();
        grid.set_stone(point, stone);
        grid
    }

    // -- Internal helpers --

    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.cells[i] = stone.to_int();
        }
    }

    pub(crate) fn clear_stone(&mut self, point: Point) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.cells[i] = 0;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1) as usize) {
            for &v in row {
                let c = Stone::from_int(v).map_or('+', Stone::letter);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
