use std::collections::VecDeque;

use gridwalk_core::{Graph, NodeIndex};
use rand::Rng;

use crate::error::SearchError;
use crate::solver::{Algorithm, Run, Solution, Solver};

impl<R: Rng> Solver<R> {
    /// Breadth-first search from `start` to `end`.
    ///
    /// Every edge costs 1, so the first time a node is reached its distance
    /// is final. The traversal stops as soon as `end` is dequeued.
    pub fn bfs<I, V, E>(
        &mut self,
        graph: &Graph<I, V, E>,
        start: &I,
        end: &I,
    ) -> Result<Solution<I>, SearchError>
    where
        I: NodeIndex,
    {
        self.drive(Algorithm::Bfs, graph, start, end, Run::breadth_first)
    }
}

impl<I: NodeIndex, V, E> Run<'_, I, V, E> {
    pub(crate) fn breadth_first(&mut self) -> Result<(), SearchError> {
        let graph = self.graph;
        let mut queue = VecDeque::new();
        queue.push_back(self.start.clone());

        while let Some(current) = queue.pop_front() {
            self.tick()?;
            if current == self.end {
                break;
            }
            let next_dist = self.dist.get(&current) + 1;
            for n in graph.neighbor_indices(&current) {
                if self.dist.is_reachable(n) {
                    continue;
                }
                self.dist.set(n.clone(), next_dist);
                self.visit(n);
                queue.push_back(n.clone());
            }
        }
        Ok(())
    }
}
