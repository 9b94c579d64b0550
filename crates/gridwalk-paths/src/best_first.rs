use std::collections::{BinaryHeap, HashSet};

use gridwalk_core::{Graph, NodeIndex};
use rand::Rng;

use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::solver::{Algorithm, Run, Solution, Solver};

/// Frontier entry ordered by `f`, then by larger `g` (deeper first) on ties.
struct Open<I> {
    f: i32,
    g: i32,
    index: I,
}

impl<I> PartialEq for Open<I> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g
    }
}

impl<I> Eq for Open<I> {}

impl<I> Ord for Open<I> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f).then(self.g.cmp(&other.g))
    }
}

impl<I> PartialOrd for Open<I> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Rng> Solver<R> {
    /// Best-first search ordered by `distance + heuristic(node, end)`.
    ///
    /// A node is expanded at most once. When a shorter distance to a node
    /// still on the frontier is found, a fresh entry is pushed and the stale
    /// one is skipped when popped, so unlike a visit-once frontier an open
    /// node can be pushed more than once. Stops when `end` is popped. The
    /// path is shortest whenever `heuristic` is consistent; see
    /// [`Heuristic`].
    pub fn best_first<I, V, E, H>(
        &mut self,
        graph: &Graph<I, V, E>,
        start: &I,
        end: &I,
        heuristic: &H,
    ) -> Result<Solution<I>, SearchError>
    where
        I: NodeIndex,
        H: Heuristic<I>,
    {
        self.drive(Algorithm::BestFirst, graph, start, end, |run| {
            run.best_first(heuristic)
        })
    }
}

impl<I: NodeIndex, V, E> Run<'_, I, V, E> {
    pub(crate) fn best_first<H: Heuristic<I>>(&mut self, heuristic: &H) -> Result<(), SearchError> {
        let graph = self.graph;
        let mut closed = HashSet::new();
        let mut open = BinaryHeap::new();
        open.push(Open {
            f: heuristic.estimate(&self.start, &self.end),
            g: 0,
            index: self.start.clone(),
        });

        while let Some(Open { g, index, .. }) = open.pop() {
            // Skip stale entries.
            if g > self.dist.get(&index) || closed.contains(&index) {
                continue;
            }
            self.tick()?;
            if index == self.end {
                break;
            }

            for n in graph.neighbor_indices(&index) {
                if closed.contains(n) || !self.dist.relax(n, g + 1) {
                    continue;
                }
                self.visit(n);
                open.push(Open {
                    f: g + 1 + heuristic.estimate(n, &self.end),
                    g: g + 1,
                    index: n.clone(),
                });
            }
            closed.insert(index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Manhattan, SearchError, Solver, Zero};
    use gridwalk_core::{Edge, Graph, Node, Point, Range};

    /// Open `w`×`h` grid with 4-way edges, minus `walls`.
    fn grid(w: i32, h: i32, walls: &[Point]) -> Graph<Point, ()> {
        let mut g = Graph::new();
        for p in Range::new(0, 0, w, h) {
            if !walls.contains(&p) {
                g.add_node(p, ());
            }
        }
        for p in Range::new(0, 0, w, h) {
            for q in [p.shift(1, 0), p.shift(0, 1)] {
                let _ = g.try_add_edge(&p, &q, ());
            }
        }
        g
    }

    #[test]
    fn open_grid_distance_is_manhattan() {
        let g = grid(10, 10, &[]);
        let from = Point::new(1, 1);
        let to = Point::new(8, 6);
        let sol = Solver::seeded(0).best_first(&g, &from, &to, &Manhattan).unwrap();
        assert_eq!(sol.distance(), 12);
    }

    #[test]
    fn detours_around_a_wall() {
        // Vertical wall at x = 3 from y = 0 to y = 5, gap at the bottom.
        let walls: Vec<_> = (0..6).map(|y| Point::new(3, y)).collect();
        let g = grid(7, 7, &walls);
        let from = Point::new(0, 0);
        let to = Point::new(6, 0);
        let mut solver = Solver::seeded(3);
        let best = solver.best_first(&g, &from, &to, &Manhattan).unwrap();
        let bfs = solver.bfs(&g, &from, &to).unwrap();
        assert_eq!(best.distance(), bfs.distance());
        assert_eq!(best.distance(), 18);
        for w in &walls {
            assert!(best.marked.node(w).is_none());
        }
    }

    #[test]
    fn heuristic_narrows_the_search() {
        let g = grid(30, 30, &[]);
        let from = Point::new(0, 15);
        let to = Point::new(29, 15);
        let mut solver = Solver::seeded(0);
        let guided = solver.best_first(&g, &from, &to, &Manhattan).unwrap();
        let blind = solver.best_first(&g, &from, &to, &Zero).unwrap();
        assert_eq!(guided.distance(), blind.distance());
        assert!(guided.steps < blind.steps);
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let walls: Vec<_> = (0..5).map(|y| Point::new(2, y)).collect();
        let g = grid(5, 5, &walls);
        let err = Solver::seeded(0)
            .best_first(&g, &Point::new(0, 0), &Point::new(4, 4), &Manhattan)
            .unwrap_err();
        assert!(matches!(err, SearchError::Unreachable { .. }));
    }

    #[test]
    fn open_node_is_repushed_when_its_distance_improves() {
        // 0 - 1 - 4 - 5 and 0 - 2 - 3 - 4. The estimate pulls the search
        // down the long branch first, so 4 is opened at distance 3 and
        // later lowered to 2 through 1.
        let nodes = (0..6).map(|i| Node::new(i, ()));
        let edges = [(0, 1), (1, 4), (4, 5), (0, 2), (2, 3), (3, 4)]
            .map(|(a, b)| Edge::new(a, b, ()));
        let g: Graph<u32, ()> = Graph::from_parts(nodes, edges).unwrap();
        let estimate = |n: &u32, _: &u32| [1, 2, 0, 0, 1, 0][*n as usize];

        let sol = Solver::seeded(0).best_first(&g, &0, &5, &estimate).unwrap();
        assert_eq!(sol.path, vec![0, 1, 4, 5]);
        assert_eq!(sol.distance(), 3);
    }
}
