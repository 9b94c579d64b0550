use std::collections::{HashMap, VecDeque};

use gridwalk_core::{Graph, Point};
use gridwalk_paths::{Algorithm, Marker, SearchError, Solver, SolverConfig};
use gridwalk_rl::{CaveRule, MapGen, Terrain, TileMap, graph_from_map, random_node};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Plain BFS over the tile map, independent of the graph type.
fn reference_distance(map: &TileMap<Terrain>, start: Point, end: Point) -> Option<usize> {
    let mut dist = HashMap::from([(start, 0usize)]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let here = dist[&p];
        if p == end {
            return Some(here);
        }
        for n in map.adjacent(p, |t| t == Terrain::Floor, false) {
            dist.entry(n).or_insert_with(|| {
                queue.push_back(n);
                here + 1
            });
        }
    }
    None
}

struct Case {
    map: TileMap<Terrain>,
    graph: Graph<Point, Marker>,
    start: Point,
    end: Point,
}

fn case(height: i32, width: i32, wall_pct: f64, seed: u64) -> Option<Case> {
    let grid = TileMap::new(height, width).ok()?;
    let mut mg = MapGen::with_grid(grid, StdRng::seed_from_u64(seed));
    mg.cellular_automata_cave(wall_pct, &[CaveRule::default()]);
    let graph = graph_from_map(&mg.grid);
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let start = random_node(&graph, &mut rng, |_| true)?;
    let end = random_node(&graph, &mut rng, |_| true)?;
    Some(Case {
        map: mg.grid,
        graph,
        start,
        end,
    })
}

fn is_walk(graph: &Graph<Point, Marker>, path: &[Point]) -> bool {
    path.windows(2).all(|w| graph.are_adjacent(&w[0], &w[1]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_variant_agrees_with_reference_bfs(
        height in 3i32..14,
        width in 3i32..14,
        wall_pct in 0.0f64..0.5,
        seed in any::<u64>(),
    ) {
        let Some(c) = case(height, width, wall_pct, seed) else {
            return Ok(());
        };
        let want = reference_distance(&c.map, c.start, c.end);
        let config = SolverConfig { max_steps: Some(500_000) };

        for algorithm in Algorithm::ALL {
            let mut solver = Solver::with_config(StdRng::seed_from_u64(seed), config.clone());
            match (solver.search(algorithm, &c.graph, c.start, c.end), want) {
                (Ok(sol), Some(d)) => {
                    prop_assert_eq!(sol.start(), Some(&c.start));
                    prop_assert_eq!(sol.end(), Some(&c.end));
                    prop_assert!(is_walk(&c.graph, &sol.path), "{} broke the walk", algorithm);
                    if algorithm.is_exact() {
                        prop_assert_eq!(sol.distance(), d, "{}", algorithm);
                    } else {
                        prop_assert!(sol.distance() >= d);
                    }
                }
                (Err(SearchError::Unreachable { .. }), None) => {}
                // Only the relaxing depth-first variants may run out of budget.
                (Err(SearchError::BudgetExhausted { .. }), _)
                    if matches!(algorithm, Algorithm::Dfs | Algorithm::DfsStack) => {}
                (other, want) => {
                    prop_assert!(false, "{}: got {:?}, reference {:?}", algorithm, other.map(|s| s.path), want);
                }
            }
        }
    }

    #[test]
    fn marked_graph_covers_path(seed in any::<u64>()) {
        let Some(c) = case(12, 12, 0.35, seed) else {
            return Ok(());
        };
        let mut solver = Solver::seeded(seed);
        if let Ok(sol) = solver.bfs(&c.graph, &c.start, &c.end) {
            for p in &sol.path {
                prop_assert!(sol.marked.node_value(p).is_ok_and(|m| m.is_path()));
            }
            let path_nodes = sol.marked.nodes().filter(|n| n.value().is_path()).count();
            prop_assert_eq!(path_nodes, sol.path.len());
            prop_assert!(sol.marked.indices().all(|p| c.graph.contains_node(p)));
        }
    }
}
