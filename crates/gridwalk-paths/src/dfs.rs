use gridwalk_core::{Graph, NodeIndex};
use rand::Rng;

use crate::error::SearchError;
use crate::solver::{Algorithm, Run, Solution, Solver};

/// One pending "call" of the depth-first descent: the node being expanded,
/// its neighbours, and how many of them have been tried.
struct Frame<I> {
    index: I,
    neighbors: Vec<I>,
    next: usize,
}

impl<R: Rng> Solver<R> {
    /// Depth-first distance relaxation in recursive visitation order.
    ///
    /// From each node the search descends into the first neighbour whose
    /// recorded distance would drop, finishes that whole subtree, and only
    /// then tries the next neighbour. A node is re-entered every time a
    /// shorter route to it turns up, so distances converge to shortest
    /// distances. Descent stops at `end` and at nodes already farther than
    /// the best known distance to `end`.
    ///
    /// The descent runs on an explicit frame stack, so deep graphs cannot
    /// overflow the call stack. Work is still exponential in the worst case
    /// on dense graphs; bound it with [`SolverConfig::max_steps`](crate::SolverConfig).
    pub fn dfs<I, V, E>(
        &mut self,
        graph: &Graph<I, V, E>,
        start: &I,
        end: &I,
    ) -> Result<Solution<I>, SearchError>
    where
        I: NodeIndex,
    {
        self.drive(Algorithm::Dfs, graph, start, end, Run::depth_first)
    }
}

impl<I: NodeIndex, V, E> Run<'_, I, V, E> {
    pub(crate) fn depth_first(&mut self) -> Result<(), SearchError> {
        let mut frames = vec![self.enter(self.start.clone())?];

        while let Some(frame) = frames.last_mut() {
            let Some(n) = frame.neighbors.get(frame.next).cloned() else {
                frames.pop();
                continue;
            };
            frame.next += 1;

            // Read the current distance afresh: a deeper frame may have
            // lowered it since this frame was entered.
            let candidate = self.dist.get(&frame.index) + 1;
            if !self.dist.relax(&n, candidate) {
                continue;
            }
            self.visit(&n);

            if n == self.end || candidate > self.dist.get(&self.end) {
                continue;
            }
            let child = self.enter(n)?;
            frames.push(child);
        }
        Ok(())
    }

    fn enter(&mut self, index: I) -> Result<Frame<I>, SearchError> {
        self.tick()?;
        let neighbors = self.graph.neighbor_indices(&index).cloned().collect();
        Ok(Frame {
            index,
            neighbors,
            next: 0,
        })
    }
}
