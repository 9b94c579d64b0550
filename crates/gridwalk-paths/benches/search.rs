use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gridwalk_core::{Graph, Point};
use gridwalk_paths::{Algorithm, Marker, Solver, SolverConfig};
use gridwalk_rl::{CaveRule, MapGen, TileMap, graph_from_map, random_node};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Keeps the depth-first relaxation from dominating the whole run.
const STEP_BUDGET: usize = 200_000;

fn cave(height: i32, width: i32, seed: u64) -> Graph<Point, Marker> {
    let grid = TileMap::new(height, width).unwrap();
    let mut mg = MapGen::with_grid(grid, StdRng::seed_from_u64(seed));
    mg.cellular_automata_cave(0.4, &[CaveRule::default()]);
    graph_from_map(&mg.grid)
}

const PAIR_ATTEMPTS: usize = 1_000;

/// First connected start/end pair drawn from `seed`.
fn connected_pair(graph: &Graph<Point, Marker>, seed: u64) -> (Point, Point) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut solver = Solver::seeded(seed);
    for _ in 0..PAIR_ATTEMPTS {
        let start = random_node(graph, &mut rng, |_| true).unwrap();
        let end = random_node(graph, &mut rng, |_| true).unwrap();
        if start != end && solver.bfs(graph, &start, &end).is_ok() {
            return (start, end);
        }
    }
    panic!("no connected pair after {PAIR_ATTEMPTS} draws with seed {seed}");
}

fn bench_caves(c: &mut Criterion) {
    let mut group = c.benchmark_group("cave_search");
    for (height, width) in [(20, 30), (40, 60), (80, 120)] {
        let graph = cave(height, width, 42);
        let (start, end) = connected_pair(&graph, 7);
        let label = format!("{height}x{width}");

        for algorithm in Algorithm::ALL {
            let config = SolverConfig {
                max_steps: Some(STEP_BUDGET),
            };
            let mut solver = Solver::with_config(StdRng::seed_from_u64(1), config);
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), &label),
                &graph,
                |b, graph| {
                    b.iter(|| black_box(solver.search(algorithm, graph, start, end).ok()));
                },
            );
        }
    }
    group.finish();
}

fn bench_graph_build(c: &mut Criterion) {
    let grid = {
        let grid = TileMap::new(80, 120).unwrap();
        let mut mg = MapGen::with_grid(grid, StdRng::seed_from_u64(42));
        mg.cellular_automata_cave(0.4, &[CaveRule::default()]);
        mg.grid
    };

    c.bench_function("graph_from_map_80x120", |b| {
        b.iter(|| black_box(graph_from_map(&grid).edge_count()));
    });
}

criterion_group!(benches, bench_caves, bench_graph_build);
criterion_main!(benches);
