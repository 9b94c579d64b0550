//! Shortest-path searches over undirected unit-weight graphs.
//!
//! Every search reads a [`Graph`](gridwalk_core::Graph) and returns a
//! [`Solution`]: a fresh graph whose nodes carry a [`Marker`] for each node
//! the search touched, plus the reconstructed path.
//!
//! - **BFS** ([`Solver::bfs`]): FIFO frontier, exact distances.
//! - **Depth-first relaxation** ([`Solver::dfs`]): recursive visitation
//!   order driven by an explicit frame stack; a node is revisited whenever a
//!   shorter distance to it turns up.
//! - **Stack relaxation** ([`Solver::dfs_stack`]): same relaxation rule,
//!   LIFO frontier.
//! - **Stack flood** ([`Solver::dfs_once`]): LIFO frontier, each node
//!   visited once. The path is valid but not necessarily shortest.
//! - **Best-first** ([`Solver::best_first`]): priority frontier ordered by
//!   `distance + heuristic`.
//!
//! All variants share one backtracking routine that walks from the end
//! towards the start along strictly decreasing distances, breaking ties
//! with the solver's random source.
//!
//! # Determinism
//!
//! [`Solver`] owns its random source. Seed it ([`Solver::seeded`]) to make
//! tie-breaks reproducible.

mod best_first;
mod bfs;
mod dfs;
mod dfs_stack;
mod distances;
mod error;
mod heuristic;
mod marker;
mod solver;
mod trail;

pub use distances::{DistanceMap, UNREACHABLE};
pub use error::SearchError;
pub use heuristic::{Heuristic, Manhattan, Zero, manhattan};
pub use marker::Marker;
pub use solver::{Algorithm, Solution, Solver, SolverConfig};
