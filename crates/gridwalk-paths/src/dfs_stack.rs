use std::collections::HashSet;

use gridwalk_core::{Graph, NodeIndex};
use rand::Rng;

use crate::error::SearchError;
use crate::solver::{Algorithm, Run, Solution, Solver};

impl<R: Rng> Solver<R> {
    /// Distance relaxation driven by an explicit LIFO stack.
    ///
    /// Popping a node relaxes all of its neighbours at once and pushes each
    /// one whose distance dropped. Nodes are skipped when they are `end` or
    /// already farther than the best known distance to `end`. Like
    /// [`dfs`](Self::dfs) this converges to shortest distances and can do
    /// a lot of redundant work on dense graphs.
    pub fn dfs_stack<I, V, E>(
        &mut self,
        graph: &Graph<I, V, E>,
        start: &I,
        end: &I,
    ) -> Result<Solution<I>, SearchError>
    where
        I: NodeIndex,
    {
        self.drive(Algorithm::DfsStack, graph, start, end, Run::stack_relax)
    }

    /// Visit-once traversal with a LIFO stack.
    ///
    /// Each node is reached at most once and keeps the depth at which it
    /// was discovered, so the returned path is valid but usually not the
    /// shortest. Cheapest of the depth-first variants; stops when `end` is
    /// popped.
    pub fn dfs_once<I, V, E>(
        &mut self,
        graph: &Graph<I, V, E>,
        start: &I,
        end: &I,
    ) -> Result<Solution<I>, SearchError>
    where
        I: NodeIndex,
    {
        self.drive(Algorithm::DfsOnce, graph, start, end, Run::stack_flood)
    }
}

impl<I: NodeIndex, V, E> Run<'_, I, V, E> {
    pub(crate) fn stack_relax(&mut self) -> Result<(), SearchError> {
        let graph = self.graph;
        let mut stack = vec![self.start.clone()];

        while let Some(current) = stack.pop() {
            self.tick()?;
            let here = self.dist.get(&current);
            if current == self.end || here > self.dist.get(&self.end) {
                continue;
            }
            for n in graph.neighbor_indices(&current) {
                if !self.dist.relax(n, here + 1) {
                    continue;
                }
                self.visit(n);
                stack.push(n.clone());
            }
        }
        Ok(())
    }

    pub(crate) fn stack_flood(&mut self) -> Result<(), SearchError> {
        let graph = self.graph;
        let mut seen = HashSet::new();
        seen.insert(self.start.clone());
        let mut stack = vec![self.start.clone()];

        while let Some(current) = stack.pop() {
            self.tick()?;
            if current == self.end {
                break;
            }
            let depth = self.dist.get(&current) + 1;
            for n in graph.neighbor_indices(&current) {
                if !seen.insert(n.clone()) {
                    continue;
                }
                self.dist.set(n.clone(), depth);
                self.visit(n);
                stack.push(n.clone());
            }
        }
        Ok(())
    }
}
