//! Conversion of tile maps into searchable graphs.

use gridwalk_core::{Graph, Node, NodeIndex, Point};
use gridwalk_paths::Marker;
use log::debug;
use rand::{Rng, RngExt};

use crate::mapgen::Terrain;
use crate::tilemap::TileMap;

/// Build a graph with one [`Marker::Unvisited`] node per floor cell and an
/// edge between every pair of orthogonally adjacent floor cells.
///
/// Every edge endpoint is a floor cell, so construction cannot fail.
pub fn graph_from_map(map: &TileMap<Terrain>) -> Graph<Point, Marker> {
    let mut graph = Graph::new();
    for (p, t) in map.iter() {
        if t == Terrain::Floor {
            graph.add_node(p, Marker::Unvisited);
        }
    }
    for (p, t) in map.iter() {
        if t != Terrain::Floor {
            continue;
        }
        for n in map.adjacent(p, |t| t == Terrain::Floor, false) {
            // Both endpoints were inserted above.
            let _ = graph.try_add_edge(&p, &n, ());
        }
    }
    debug!(
        "graph from {}x{} map: {} nodes, {} edges",
        map.height(),
        map.width(),
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

/// Pick a node uniformly among those matching `pred`.
pub fn random_node<I, V, E, R>(
    graph: &Graph<I, V, E>,
    rng: &mut R,
    mut pred: impl FnMut(&Node<I, V>) -> bool,
) -> Option<I>
where
    I: NodeIndex,
    R: Rng,
{
    let candidates: Vec<&I> = graph
        .nodes()
        .filter(|n| pred(*n))
        .map(Node::index)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())].clone())
}
