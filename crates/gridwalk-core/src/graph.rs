//! Index-addressed undirected graph.
//!
//! A [`Graph`] owns three tables:
//!
//! - `nodes`: index → [`Node`], one node per index;
//! - `edges`: [`EdgeKey`] → [`Edge`], at most one edge per unordered pair;
//! - `adjacency`: index → set of neighbour indices, always the symmetric
//!   closure of `edges`.
//!
//! Every index that appears in `edges` or `adjacency` is also a key of
//! `nodes`. Node values can be replaced in place without touching identity
//! or connectivity.
//!
//! All tables hash with a fixed-key [`DefaultHasher`], so iteration order is
//! a pure function of the insertion sequence. Searches that draw from a
//! seeded random source therefore replay identically.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, DefaultHasher, Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::error::GraphError;

type FixedState = BuildHasherDefault<DefaultHasher>;

/// Bounds every graph index satisfies: cheap to clone, hashable, printable
/// in error messages.
pub trait NodeIndex: Clone + Eq + Hash + std::fmt::Debug {}

impl<T: Clone + Eq + Hash + std::fmt::Debug> NodeIndex for T {}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A graph vertex: an identity `index` plus a mutable payload `value`.
///
/// Equality and hashing look at the index only. Two nodes with the same
/// index are the same node whatever their values.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<I, V> {
    index: I,
    pub value: V,
}

impl<I, V> Node<I, V> {
    pub const fn new(index: I, value: V) -> Self {
        Self { index, value }
    }

    #[inline]
    pub fn index(&self) -> &I {
        &self.index
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<I: PartialEq, V> PartialEq for Node<I, V> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<I: Eq, V> Eq for Node<I, V> {}

impl<I: Hash, V> Hash for Node<I, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

// ---------------------------------------------------------------------------
// EdgeKey
// ---------------------------------------------------------------------------

/// Unordered pair of node indices. `EdgeKey::new(a, b) == EdgeKey::new(b, a)`
/// and both hash to the same value.
#[derive(Debug, Clone, Copy)]
pub struct EdgeKey<I> {
    a: I,
    b: I,
}

impl<I> EdgeKey<I> {
    pub const fn new(a: I, b: I) -> Self {
        Self { a, b }
    }

    /// The endpoints in the order they were given.
    pub fn endpoints(&self) -> (&I, &I) {
        (&self.a, &self.b)
    }
}

impl<I: PartialEq> EdgeKey<I> {
    /// Whether `index` is one of the two endpoints.
    pub fn contains(&self, index: &I) -> bool {
        self.a == *index || self.b == *index
    }

    /// The endpoint opposite to `index`, or `None` if `index` is not an
    /// endpoint.
    pub fn other(&self, index: &I) -> Option<&I> {
        if self.a == *index {
            Some(&self.b)
        } else if self.b == *index {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl<I: PartialEq> PartialEq for EdgeKey<I> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<I: Eq> Eq for EdgeKey<I> {}

impl<I: Hash> Hash for EdgeKey<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Commutative combine so (a, b) and (b, a) land in the same slot.
        let ha = hash_one(&self.a);
        let hb = hash_one(&self.b);
        state.write_u64(ha.wrapping_add(hb));
    }
}

fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut h = DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// An undirected edge between two node indices carrying a payload `value`.
///
/// `Edge::new(a, b, v) == Edge::new(b, a, v)`. Storage identity is the
/// [`EdgeKey`], which ignores the value.
#[derive(Debug, Clone, Copy)]
pub struct Edge<I, E> {
    key: EdgeKey<I>,
    pub value: E,
}

impl<I, E> Edge<I, E> {
    pub const fn new(a: I, b: I, value: E) -> Self {
        Self {
            key: EdgeKey::new(a, b),
            value,
        }
    }

    pub fn key(&self) -> &EdgeKey<I> {
        &self.key
    }

    pub fn endpoints(&self) -> (&I, &I) {
        self.key.endpoints()
    }
}

impl<I: Clone, E> Edge<I, E> {
    /// Edge between two existing nodes.
    pub fn between<V>(a: &Node<I, V>, b: &Node<I, V>, value: E) -> Self {
        Self::new(a.index().clone(), b.index().clone(), value)
    }
}

impl<I: PartialEq, E: PartialEq> PartialEq for Edge<I, E> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<I: Eq, E: Eq> Eq for Edge<I, E> {}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Undirected graph keyed by node index `I`, with node payload `V` and edge
/// payload `E`.
#[derive(Debug, Clone)]
pub struct Graph<I, V, E = ()> {
    nodes: HashMap<I, Node<I, V>, FixedState>,
    edges: HashMap<EdgeKey<I>, Edge<I, E>, FixedState>,
    adjacency: HashMap<I, HashSet<I, FixedState>, FixedState>,
}

impl<I, V, E> Default for Graph<I, V, E> {
    fn default() -> Self {
        Self {
            nodes: HashMap::default(),
            edges: HashMap::default(),
            adjacency: HashMap::default(),
        }
    }
}

impl<I, V, E> Graph<I, V, E>
where
    I: Clone + Eq + Hash,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from node and edge lists.
    ///
    /// Duplicate nodes (same index) and duplicate edges (same unordered
    /// pair) keep the first occurrence. An edge naming an index that is not
    /// in `nodes` fails with [`GraphError::InvalidEdgeEndpoint`].
    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node<I, V>>,
        edges: impl IntoIterator<Item = Edge<I, E>>,
    ) -> Result<Self, GraphError>
    where
        I: std::fmt::Debug,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node.index, node.value);
        }
        for edge in edges {
            let (a, b) = edge.key.endpoints();
            for endpoint in [a, b] {
                if !graph.nodes.contains_key(endpoint) {
                    return Err(GraphError::invalid_endpoint(endpoint));
                }
            }
            graph.link(edge);
        }
        Ok(graph)
    }

    /// Insert a node unless one with the same index already exists.
    ///
    /// Returns the stored node. An existing node is returned unchanged and
    /// `value` is dropped; use [`set_node_value`](Self::set_node_value) to
    /// replace a value.
    pub fn add_node(&mut self, index: I, value: V) -> &Node<I, V> {
        self.adjacency.entry(index.clone()).or_default();
        self.nodes
            .entry(index.clone())
            .or_insert_with(|| Node::new(index, value))
    }

    /// Connect `a` and `b`.
    ///
    /// Fails with [`GraphError::InvalidEdgeEndpoint`] if either endpoint is
    /// missing. If the pair is already connected, the existing edge is
    /// returned untouched and `value` is dropped.
    pub fn try_add_edge(&mut self, a: &I, b: &I, value: E) -> Result<&Edge<I, E>, GraphError>
    where
        I: std::fmt::Debug,
    {
        for endpoint in [a, b] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::invalid_endpoint(endpoint));
            }
        }
        Ok(self.link(Edge::new(a.clone(), b.clone(), value)))
    }

    /// Store `edge` if its pair is new and update adjacency for both ends.
    /// Endpoints must already be nodes.
    fn link(&mut self, edge: Edge<I, E>) -> &Edge<I, E> {
        match self.edges.entry(edge.key.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(slot) => {
                let (a, b) = edge.key.endpoints();
                self.adjacency
                    .entry(a.clone())
                    .or_default()
                    .insert(b.clone());
                self.adjacency
                    .entry(b.clone())
                    .or_default()
                    .insert(a.clone());
                slot.insert(edge)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Nodes
    // -----------------------------------------------------------------------

    pub fn contains_node(&self, index: &I) -> bool {
        self.nodes.contains_key(index)
    }

    pub fn node(&self, index: &I) -> Option<&Node<I, V>> {
        self.nodes.get(index)
    }

    /// Value of the node at `index`.
    pub fn node_value(&self, index: &I) -> Result<&V, GraphError>
    where
        I: std::fmt::Debug,
    {
        self.nodes
            .get(index)
            .map(Node::value)
            .ok_or_else(|| GraphError::node_not_found(index))
    }

    /// Replace the value of the node at `index`, returning the old value.
    ///
    /// Identity, edges and adjacency are unaffected.
    pub fn set_node_value(&mut self, index: &I, value: V) -> Result<V, GraphError>
    where
        I: std::fmt::Debug,
    {
        let node = self
            .nodes
            .get_mut(index)
            .ok_or_else(|| GraphError::node_not_found(index))?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    /// Iterate over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<I, V>> {
        self.nodes.values()
    }

    /// Iterate over all node indices in unspecified order.
    pub fn indices(&self) -> impl Iterator<Item = &I> {
        self.nodes.keys()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// The edge between `a` and `b`, in either order.
    pub fn edge(&self, a: &I, b: &I) -> Option<&Edge<I, E>> {
        self.edges.get(&EdgeKey::new(a.clone(), b.clone()))
    }

    pub fn edge_value(&self, a: &I, b: &I) -> Result<&E, GraphError>
    where
        I: std::fmt::Debug,
    {
        self.edge(a, b)
            .map(|e| &e.value)
            .ok_or_else(|| GraphError::edge_not_found(a, b))
    }

    /// Replace the value of the edge between `a` and `b`, returning the old
    /// value.
    pub fn set_edge_value(&mut self, a: &I, b: &I, value: E) -> Result<E, GraphError>
    where
        I: std::fmt::Debug,
    {
        let edge = self
            .edges
            .get_mut(&EdgeKey::new(a.clone(), b.clone()))
            .ok_or_else(|| GraphError::edge_not_found(a, b))?;
        Ok(std::mem::replace(&mut edge.value, value))
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<I, E>> {
        self.edges.values()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Indices adjacent to `index`. Empty for isolated or unknown indices.
    pub fn neighbor_indices<'a>(
        &'a self,
        index: &I,
    ) -> impl Iterator<Item = &'a I> + use<'a, I, V, E> {
        self.adjacency.get(index).into_iter().flatten()
    }

    /// Nodes adjacent to `index`, carrying their current values.
    pub fn neighbors<'a>(
        &'a self,
        index: &I,
    ) -> impl Iterator<Item = &'a Node<I, V>> + use<'a, I, V, E> {
        self.neighbor_indices(index).filter_map(move |n| self.nodes.get(n))
    }

    /// Number of neighbours of `index`.
    pub fn degree(&self, index: &I) -> usize {
        self.adjacency.get(index).map_or(0, HashSet::len)
    }

    /// Whether `a` and `b` are directly connected.
    pub fn are_adjacent(&self, a: &I, b: &I) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(b))
    }
}

/// Panicking node-value lookup. A missing index is a caller bug; use
/// [`Graph::node_value`] when absence is a data condition.
impl<I, V, E> Index<&I> for Graph<I, V, E>
where
    I: Clone + Eq + Hash + std::fmt::Debug,
{
    type Output = V;

    fn index(&self, index: &I) -> &V {
        match self.nodes.get(index) {
            Some(node) => &node.value,
            None => panic!("graph: no node at index {index:?}"),
        }
    }
}

impl<I, V, E> IndexMut<&I> for Graph<I, V, E>
where
    I: Clone + Eq + Hash + std::fmt::Debug,
{
    fn index_mut(&mut self, index: &I) -> &mut V {
        match self.nodes.get_mut(index) {
            Some(node) => &mut node.value,
            None => panic!("graph: no node at index {index:?}"),
        }
    }
}
