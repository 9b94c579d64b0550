use std::fmt;

/// Errors reported by [`Graph`](crate::Graph) lookups and mutations.
///
/// The offending index is rendered with `Debug` so the error stays
/// independent of the graph's index type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node index or edge endpoint pair is not present in the graph.
    NotFound(String),
    /// An edge references a node index that is not present in the graph.
    InvalidEdgeEndpoint(String),
}

impl GraphError {
    pub(crate) fn node_not_found(index: &impl fmt::Debug) -> Self {
        Self::NotFound(format!("node {index:?}"))
    }

    pub(crate) fn edge_not_found(a: &impl fmt::Debug, b: &impl fmt::Debug) -> Self {
        Self::NotFound(format!("edge {a:?} <-> {b:?}"))
    }

    pub(crate) fn invalid_endpoint(index: &impl fmt::Debug) -> Self {
        Self::InvalidEdgeEndpoint(format!("{index:?}"))
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "graph: {what} not found"),
            Self::InvalidEdgeEndpoint(index) => {
                write!(f, "graph: edge endpoint {index} is not a node of the graph")
            }
        }
    }
}

impl std::error::Error for GraphError {}
