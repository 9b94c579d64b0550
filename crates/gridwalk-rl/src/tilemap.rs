//! A dense rectangular grid of tiles.
//!
//! [`TileMap`] stores one `T` per cell in row-major order. Coordinates are
//! [`Point`]s with `x` the column and `y` the row, both starting at 0.

use gridwalk_core::{Point, Range};

use crate::error::MapError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap<T> {
    cells: Vec<T>,
    bounds: Range,
}

impl<T: Copy + Default> TileMap<T> {
    /// Create a map filled with `T::default()`.
    pub fn new(height: i32, width: i32) -> Result<Self, MapError> {
        Self::filled(height, width, T::default())
    }
}

impl<T: Copy> TileMap<T> {
    /// Create a map with every cell set to `tile`.
    pub fn filled(height: i32, width: i32, tile: T) -> Result<Self, MapError> {
        if height <= 0 || width <= 0 {
            return Err(MapError::InvalidDimensions { height, width });
        }
        let bounds = Range::with_size(height, width);
        Ok(Self {
            cells: vec![tile; bounds.len()],
            bounds,
        })
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<T> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the tile at a point. Returns `false` (and does nothing) if out of
    /// bounds.
    pub fn set(&mut self, p: Point, tile: T) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }
        let idx = self.index(p);
        self.cells[idx] = tile;
        true
    }

    /// Fill the entire map with the given tile.
    pub fn fill(&mut self, tile: T) {
        self.cells.fill(tile);
    }

    /// Fill the map using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> T) {
        for p in self.bounds.iter() {
            let idx = self.index(p);
            self.cells[idx] = f(p);
        }
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(T) -> bool) -> usize {
        self.cells.iter().filter(|&&t| f(t)).count()
    }

    /// Count the 8 surrounding cells of `p` matching `pred`. Cells outside
    /// the map count as matches when `out_of_bounds_matches` is set.
    pub fn count_adjacent(
        &self,
        p: Point,
        mut pred: impl FnMut(T) -> bool,
        out_of_bounds_matches: bool,
    ) -> usize {
        p.neighbors_8()
            .into_iter()
            .filter(|&n| match self.at(n) {
                Some(t) => pred(t),
                None => out_of_bounds_matches,
            })
            .count()
    }

    /// In-bounds neighbours of `p` whose tile matches `pred`: 4 cardinal
    /// ones, plus diagonals when `diagonals` is set.
    pub fn adjacent(
        &self,
        p: Point,
        mut pred: impl FnMut(T) -> bool,
        diagonals: bool,
    ) -> Vec<Point> {
        let keep = |n: &Point| self.at(*n).is_some_and(&mut pred);
        if diagonals {
            p.neighbors_8().into_iter().filter(keep).collect()
        } else {
            p.neighbors_4().into_iter().filter(keep).collect()
        }
    }

    /// Iterate over `(Point, T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl<T: Copy + PartialEq> TileMap<T> {
    /// Count how many cells equal `tile`.
    pub fn count(&self, tile: T) -> usize {
        self.count_fn(|t| t == tile)
    }
}
