//! Cave pathfinding demo.
//!
//! Run: cargo run --bin gridwalk -- run --algorithm best-first
//!      cargo run --bin gridwalk -- bench --runs 20
//!
//! Set `RUST_LOG=debug` to see per-search statistics.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gridwalk_core::{Graph, Point};
use gridwalk_paths::{Algorithm, Marker, SearchError, Solver, SolverConfig};
use gridwalk_rl::{CaveRule, MapGen, TileMap, graph_from_map, paint, random_node, render};
use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Expansion budget applied by `bench` when none is given, so the
/// depth-first variants cannot stall a whole run.
const BENCH_STEP_BUDGET: usize = 1_000_000;

#[derive(Parser)]
#[command(name = "gridwalk", about = "Search generated caves and draw the result")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search one cave and print it
    Run {
        #[command(flatten)]
        map: MapArgs,

        /// bfs, dfs, dfs-stack, dfs-once or best-first
        #[arg(long, default_value = "best-first")]
        algorithm: Algorithm,
    },
    /// Time every algorithm over several start/end pairs
    Bench {
        #[command(flatten)]
        map: MapArgs,

        /// Number of start/end pairs
        #[arg(long, default_value_t = 20)]
        runs: usize,
    },
}

#[derive(Args, Debug, Clone)]
struct MapArgs {
    /// Map height in rows
    #[arg(long, default_value_t = 40)]
    height: i32,

    /// Map width in columns
    #[arg(long, default_value_t = 60)]
    width: i32,

    /// Seed for map generation, endpoint choice and tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a cell starts out as a wall
    #[arg(long, default_value_t = 0.4)]
    wall_pct: f64,

    /// Abort a search after this many node expansions
    #[arg(long)]
    max_steps: Option<usize>,
}

struct Scenario {
    graph: Graph<Point, Marker>,
    rng: StdRng,
    height: i32,
    width: i32,
}

impl Scenario {
    fn generate(args: &MapArgs) -> Result<Self> {
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        info!("seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = TileMap::new(args.height, args.width).context("invalid map size")?;
        let mut mg = MapGen::with_grid(grid, StdRng::seed_from_u64(rng.random()));
        mg.cellular_automata_cave(args.wall_pct, &[CaveRule::default()]);
        let graph = graph_from_map(&mg.grid);
        anyhow::ensure!(!graph.is_empty(), "generated cave has no floor cells");
        Ok(Self {
            graph,
            rng,
            height: args.height,
            width: args.width,
        })
    }

    fn endpoints(&mut self) -> (Point, Point) {
        let mut pick = || {
            random_node(&self.graph, &mut self.rng, |n| *n.value() == Marker::Unvisited)
                .unwrap_or_default()
        };
        (pick(), pick())
    }

    fn solver(&mut self, max_steps: Option<usize>) -> Solver<StdRng> {
        Solver::with_config(
            StdRng::seed_from_u64(self.rng.random()),
            SolverConfig { max_steps },
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Run { map, algorithm } => run(&map, algorithm),
        Command::Bench { map, runs } => bench(&map, runs),
    }
}

fn run(args: &MapArgs, algorithm: Algorithm) -> Result<()> {
    let mut scenario = Scenario::generate(args)?;
    let (start, end) = scenario.endpoints();
    let mut solver = scenario.solver(args.max_steps);

    let t0 = Instant::now();
    let outcome = solver.search(algorithm, &scenario.graph, start, end);
    let elapsed = t0.elapsed();

    match outcome {
        Ok(solution) => {
            let map = paint(scenario.height, scenario.width, &[&scenario.graph, &solution.marked])?;
            print!("{}", render(&map));
            println!(
                "{algorithm}: {start} -> {end}, distance {}, {} visited, {} steps, {elapsed:?}",
                solution.distance(),
                solution.visited(),
                solution.steps,
            );
        }
        Err(e @ (SearchError::Unreachable { .. } | SearchError::BudgetExhausted { .. })) => {
            let map = paint(scenario.height, scenario.width, &[&scenario.graph])?;
            print!("{}", render(&map));
            println!("{algorithm}: {start} -> {end}: {e}");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[derive(Default)]
struct Tally {
    total: Duration,
    solved: usize,
    over_budget: usize,
    distance: usize,
}

fn bench(args: &MapArgs, runs: usize) -> Result<()> {
    let mut scenario = Scenario::generate(args)?;
    let budget = args.max_steps.or(Some(BENCH_STEP_BUDGET));
    let mut tallies: Vec<(Algorithm, Tally)> = Algorithm::ALL
        .into_iter()
        .map(|a| (a, Tally::default()))
        .collect();
    let mut skipped = 0;

    for _ in 0..runs {
        let (start, end) = scenario.endpoints();
        let mut solver = scenario.solver(budget);
        if let Err(SearchError::Unreachable { .. }) =
            solver.bfs(&scenario.graph, &start, &end)
        {
            skipped += 1;
            continue;
        }
        for (algorithm, tally) in tallies.iter_mut() {
            let t0 = Instant::now();
            let outcome = solver.search(*algorithm, &scenario.graph, start, end);
            tally.total += t0.elapsed();
            match outcome {
                Ok(solution) => {
                    tally.solved += 1;
                    tally.distance += solution.distance();
                }
                Err(SearchError::BudgetExhausted { .. }) => tally.over_budget += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    println!(
        "{}x{} cave, {} floor cells, {} pairs ({skipped} unreachable skipped)",
        args.height,
        args.width,
        scenario.graph.node_count(),
        runs - skipped
    );
    println!(
        "{:<12} {:>12} {:>8} {:>8} {:>10}",
        "algorithm", "mean", "solved", "budget", "mean dist"
    );
    for (algorithm, tally) in &tallies {
        let attempts = (tally.solved + tally.over_budget).max(1) as u32;
        let mean_dist = tally.distance as f64 / tally.solved.max(1) as f64;
        println!(
            "{:<12} {:>12?} {:>8} {:>8} {:>10.1}",
            algorithm.name(),
            tally.total / attempts,
            tally.solved,
            tally.over_budget,
            mean_dist
        );
    }
    Ok(())
}
