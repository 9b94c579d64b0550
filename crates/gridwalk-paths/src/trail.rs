//! Path reconstruction shared by every search variant.

use gridwalk_core::{Graph, NodeIndex};
use log::trace;
use rand::{Rng, RngExt};

use crate::distances::{DistanceMap, UNREACHABLE};
use crate::error::SearchError;
use crate::marker::Marker;

/// Walk back from `end` to `start` over the populated distance map.
///
/// Each step moves to a neighbour with the smallest recorded distance,
/// picking uniformly at random among equally close neighbours. Every step
/// must strictly lower the distance, which bounds the walk by the distance
/// of `end`. Path nodes are stamped into `marked`; `start` and `end` get
/// their own markers last, overriding anything set before.
///
/// Returns the path ordered from `start` to `end`.
pub(crate) fn reconstruct<I, V, E, R>(
    graph: &Graph<I, V, E>,
    dist: &DistanceMap<I>,
    start: &I,
    end: &I,
    marked: &mut Graph<I, Marker>,
    rng: &mut R,
) -> Result<Vec<I>, SearchError>
where
    I: NodeIndex,
    R: Rng,
{
    if !dist.is_reachable(end) {
        return Err(unreachable(start, end));
    }

    let mut path = vec![end.clone()];
    let mut current = end.clone();
    let mut tied: Vec<&I> = Vec::new();

    while current != *start {
        let here = dist.get(&current);
        let mut best = UNREACHABLE;
        tied.clear();
        for n in graph.neighbor_indices(&current) {
            let d = dist.get(n);
            if d < best {
                best = d;
                tied.clear();
            }
            if d == best && d != UNREACHABLE {
                tied.push(n);
            }
        }

        if tied.is_empty() || best >= here {
            // Only possible if the distance map was not produced by a
            // traversal from `start`.
            return Err(unreachable(start, end));
        }

        let next = tied[rng.random_range(0..tied.len())].clone();
        trace!("backtrack {current:?} ({here}) -> {next:?} ({best}), {} tied", tied.len());
        stamp(marked, &next, Marker::PathPoint);
        path.push(next.clone());
        current = next;
    }

    stamp(marked, start, Marker::PathStart);
    stamp(marked, end, Marker::PathEnd);
    path.reverse();
    Ok(path)
}

fn stamp<I: NodeIndex>(marked: &mut Graph<I, Marker>, index: &I, marker: Marker) {
    if marked.set_node_value(index, marker).is_err() {
        marked.add_node(index.clone(), marker);
    }
}

fn unreachable<I: NodeIndex>(start: &I, end: &I) -> SearchError {
    SearchError::Unreachable {
        start: format!("{start:?}"),
        end: format!("{end:?}"),
    }
}
