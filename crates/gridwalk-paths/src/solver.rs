use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Graph, NodeIndex, Point};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distances::DistanceMap;
use crate::error::SearchError;
use crate::heuristic::{Heuristic, Manhattan};
use crate::marker::Marker;
use crate::trail;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// Search variant selector, used by [`Solver::search`] and the demo CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    DfsStack,
    DfsOnce,
    BestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Self::Bfs,
        Self::Dfs,
        Self::DfsStack,
        Self::DfsOnce,
        Self::BestFirst,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::DfsStack => "dfs-stack",
            Self::DfsOnce => "dfs-once",
            Self::BestFirst => "best-first",
        }
    }

    /// Whether the variant always returns a shortest path.
    pub const fn is_exact(self) -> bool {
        !matches!(self, Self::DfsOnce)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dfs-stack" => Ok(Self::DfsStack),
            "dfs-once" => Ok(Self::DfsOnce),
            "best-first" | "astar" => Ok(Self::BestFirst),
            other => Err(format!(
                "unknown algorithm {other:?} (expected one of: {})",
                Self::ALL.map(Self::name).join(", ")
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Config & results
// ---------------------------------------------------------------------------

/// Tunables shared by every search of a [`Solver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Upper bound on node expansions per search. `None` means unbounded.
    ///
    /// Depth-first relaxation can take exponential time on dense graphs;
    /// a budget turns that into [`SearchError::BudgetExhausted`].
    pub max_steps: Option<usize>,
}

/// Outcome of a successful search.
#[derive(Debug, Clone)]
pub struct Solution<I> {
    /// One node per index the search touched. Path nodes carry
    /// [`Marker::PathStart`], [`Marker::PathPoint`] or [`Marker::PathEnd`];
    /// the rest carry [`Marker::Visited`]. No edges.
    pub marked: Graph<I, Marker>,
    /// Path from start to end, both included.
    pub path: Vec<I>,
    /// Node expansions performed.
    pub steps: usize,
}

impl<I: NodeIndex> Solution<I> {
    /// Path length in edges.
    pub fn distance(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Number of nodes the search touched.
    pub fn visited(&self) -> usize {
        self.marked.node_count()
    }

    pub fn start(&self) -> Option<&I> {
        self.path.first()
    }

    pub fn end(&self) -> Option<&I> {
        self.path.last()
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Entry point for every search variant.
///
/// The solver owns the random source used to break ties while
/// backtracking. It never mutates the graphs it searches, and every call
/// allocates its own distance map and result graph.
#[derive(Debug, Clone)]
pub struct Solver<R> {
    pub(crate) rng: R,
    config: SolverConfig,
}

impl Solver<StdRng> {
    /// Solver with a deterministic random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Solver<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, SolverConfig::default())
    }

    pub fn with_config(rng: R, config: SolverConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    /// Run `algorithm` with `heuristic` guiding best-first search. The
    /// heuristic is ignored by the other variants.
    pub fn search_with<I, V, E, H>(
        &mut self,
        algorithm: Algorithm,
        graph: &Graph<I, V, E>,
        start: &I,
        end: &I,
        heuristic: &H,
    ) -> Result<Solution<I>, SearchError>
    where
        I: NodeIndex,
        H: Heuristic<I>,
    {
        match algorithm {
            Algorithm::Bfs => self.bfs(graph, start, end),
            Algorithm::Dfs => self.dfs(graph, start, end),
            Algorithm::DfsStack => self.dfs_stack(graph, start, end),
            Algorithm::DfsOnce => self.dfs_once(graph, start, end),
            Algorithm::BestFirst => self.best_first(graph, start, end, heuristic),
        }
    }

    /// Run `algorithm` on a grid graph, using [`Manhattan`] for best-first.
    pub fn search<V, E>(
        &mut self,
        algorithm: Algorithm,
        graph: &Graph<Point, V, E>,
        start: Point,
        end: Point,
    ) -> Result<Solution<Point>, SearchError> {
        self.search_with(algorithm, graph, &start, &end, &Manhattan)
    }

    /// Shared driver: validate endpoints, run `traverse` unless start and
    /// end coincide, then reconstruct the path.
    pub(crate) fn drive<'g, I, V, E>(
        &mut self,
        algorithm: Algorithm,
        graph: &'g Graph<I, V, E>,
        start: &I,
        end: &I,
        traverse: impl FnOnce(&mut Run<'g, I, V, E>) -> Result<(), SearchError>,
    ) -> Result<Solution<I>, SearchError>
    where
        I: NodeIndex,
    {
        let mut run = Run::begin(algorithm, graph, start, end, &self.config)?;
        if run.start != run.end {
            traverse(&mut run)?;
        }
        run.finish(&mut self.rng)
    }
}

// ---------------------------------------------------------------------------
// Run: per-call search state
// ---------------------------------------------------------------------------

/// State owned by a single search call.
pub(crate) struct Run<'g, I, V, E> {
    pub(crate) graph: &'g Graph<I, V, E>,
    pub(crate) start: I,
    pub(crate) end: I,
    pub(crate) dist: DistanceMap<I>,
    marked: Graph<I, Marker>,
    algorithm: Algorithm,
    steps: usize,
    max_steps: Option<usize>,
}

impl<'g, I: NodeIndex, V, E> Run<'g, I, V, E> {
    fn begin(
        algorithm: Algorithm,
        graph: &'g Graph<I, V, E>,
        start: &I,
        end: &I,
        config: &SolverConfig,
    ) -> Result<Self, SearchError> {
        graph.node_value(start)?;
        graph.node_value(end)?;
        let mut marked = Graph::new();
        marked.add_node(start.clone(), Marker::Visited);
        Ok(Self {
            graph,
            start: start.clone(),
            end: end.clone(),
            dist: DistanceMap::from_start(start.clone()),
            marked,
            algorithm,
            steps: 0,
            max_steps: config.max_steps,
        })
    }

    /// Record `index` as reached.
    #[inline]
    pub(crate) fn visit(&mut self, index: &I) {
        self.marked.add_node(index.clone(), Marker::Visited);
    }

    /// Count one node expansion against the budget.
    pub(crate) fn tick(&mut self) -> Result<(), SearchError> {
        self.steps += 1;
        match self.max_steps {
            Some(max) if self.steps > max => {
                warn!(
                    "{}: step budget of {max} exhausted searching {:?} -> {:?}",
                    self.algorithm, self.start, self.end
                );
                Err(SearchError::BudgetExhausted { steps: max })
            }
            _ => Ok(()),
        }
    }

    fn finish<R: Rng>(mut self, rng: &mut R) -> Result<Solution<I>, SearchError> {
        let path = trail::reconstruct(
            self.graph,
            &self.dist,
            &self.start,
            &self.end,
            &mut self.marked,
            rng,
        )?;
        debug!(
            "{}: {:?} -> {:?} in {} steps, {} visited, path length {}",
            self.algorithm,
            self.start,
            self.end,
            self.steps,
            self.marked.node_count(),
            path.len() - 1
        );
        Ok(Solution {
            marked: self.marked,
            path,
            steps: self.steps,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;

    /// A fresh run, for inspecting distance maps directly.
    pub(crate) fn run<I: NodeIndex, V, E>(
        graph: &Graph<I, V, E>,
        start: I,
        end: I,
    ) -> Run<'_, I, V, E> {
        Run::begin(Algorithm::Bfs, graph, &start, &end, &SolverConfig::default())
            .expect("endpoints exist")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::{Edge, Node};

    fn triangle() -> Graph<u8, ()> {
        let nodes = (0..3).map(|i| Node::new(i, ()));
        let edges = [Edge::new(0, 1, ()), Edge::new(1, 2, ()), Edge::new(2, 0, ())];
        Graph::from_parts(nodes, edges).unwrap()
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
        }
        assert_eq!("AStar".parse::<Algorithm>(), Ok(Algorithm::BestFirst));
        assert!("dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn missing_endpoint_is_graph_error() {
        let g = triangle();
        let mut solver = Solver::seeded(1);
        for algo in Algorithm::ALL {
            let err = solver
                .search_with(algo, &g, &0, &9, &crate::Zero)
                .unwrap_err();
            assert!(matches!(err, SearchError::Graph(_)), "{algo}: {err}");
        }
    }

    #[test]
    fn start_equals_end_marks_single_node() {
        let g = triangle();
        let mut solver = Solver::seeded(1);
        for algo in Algorithm::ALL {
            let sol = solver
                .search_with(algo, &g, &1, &1, &crate::Zero)
                .unwrap();
            assert_eq!(sol.path, vec![1], "{algo}");
            assert_eq!(sol.distance(), 0);
            assert_eq!(sol.steps, 0);
            assert_eq!(sol.visited(), 1);
            assert_eq!(sol.start(), sol.end());
            assert_eq!(sol.marked[&1], Marker::PathEnd);
        }
    }

    #[test]
    fn budget_stops_search() {
        let g = triangle();
        let config = SolverConfig { max_steps: Some(0) };
        let mut solver = Solver::with_config(StdRng::seed_from_u64(3), config);
        let err = solver.search_with(Algorithm::Bfs, &g, &0, &2, &crate::Zero);
        assert_eq!(err.unwrap_err(), SearchError::BudgetExhausted { steps: 0 });
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trips() {
        let config = SolverConfig {
            max_steps: Some(250),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"max_steps":250}"#);
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let unbounded: SolverConfig = serde_json::from_str(r#"{"max_steps":null}"#).unwrap();
        assert_eq!(unbounded, SolverConfig::default());
    }

    #[test]
    fn algorithm_serializes_as_variant_name() {
        let json = serde_json::to_string(&Algorithm::BestFirst).unwrap();
        assert_eq!(json, r#""BestFirst""#);
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::BestFirst);
    }
}
