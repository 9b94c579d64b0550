//! Cellular-automaton cave generation.
//!
//! Cells start as walls with probability `wall_init_pct`, then each
//! [`CaveRule`] smooths the map for its number of repetitions: a cell with
//! many wall neighbours becomes a wall, a cell with few becomes floor, and
//! anything in between keeps its state.

use log::debug;
use rand::{Rng, RngExt};

use crate::tilemap::TileMap;

/// Terrain of a generated map cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Floor,
    Wall,
}

/// A rule for one iteration of cellular automata smoothing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaveRule {
    /// A cell with >= this many wall neighbours (out of 8) becomes a wall.
    pub wall_cutoff: usize,
    /// A cell with <= this many wall neighbours becomes floor.
    pub floor_cutoff: usize,
    /// Whether cells outside the map boundary count as walls.
    pub walls_out_of_range: bool,
    /// How many times to apply this rule.
    pub reps: usize,
}

impl Default for CaveRule {
    fn default() -> Self {
        Self {
            wall_cutoff: 5,
            floor_cutoff: 3,
            walls_out_of_range: true,
            reps: 3,
        }
    }
}

/// Map generator operating on a [`TileMap`] of [`Terrain`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: TileMap<Terrain>,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given grid.
    pub fn with_grid(grid: TileMap<Terrain>, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Generate a cave using cellular automata.
    ///
    /// 1. Initialize each cell randomly: `wall_init_pct` chance of being a
    ///    wall, otherwise floor.
    /// 2. Apply each rule in `rules` for its specified number of repetitions.
    ///
    /// Returns the number of floor cells in the final grid.
    pub fn cellular_automata_cave(&mut self, wall_init_pct: f64, rules: &[CaveRule]) -> usize {
        let rng = &mut self.rng;
        self.grid.fill_fn(|_| {
            let r: f64 = rng.random();
            if r < wall_init_pct {
                Terrain::Wall
            } else {
                Terrain::Floor
            }
        });

        for rule in rules {
            for _ in 0..rule.reps {
                let prev = self.grid.clone();
                self.grid.fill_fn(|p| {
                    let walls = prev.count_adjacent(
                        p,
                        |t| t == Terrain::Wall,
                        rule.walls_out_of_range,
                    );
                    if walls >= rule.wall_cutoff {
                        Terrain::Wall
                    } else if walls <= rule.floor_cutoff {
                        Terrain::Floor
                    } else {
                        prev.at(p).unwrap_or(Terrain::Wall)
                    }
                });
            }
        }

        let floors = self.grid.count(Terrain::Floor);
        debug!(
            "cave {}x{}: {floors} floor cells after {} rules",
            self.grid.height(),
            self.grid.width(),
            rules.len()
        );
        floors
    }
}
