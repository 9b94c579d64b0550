use std::fmt;

use gridwalk_core::GraphError;

/// Errors returned by [`Solver`](crate::Solver) searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end index is not a node of the graph.
    Graph(GraphError),
    /// No path connects `start` and `end`.
    Unreachable { start: String, end: String },
    /// The configured step budget ran out before the search finished.
    BudgetExhausted { steps: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graph(e) => write!(f, "search: {e}"),
            Self::Unreachable { start, end } => {
                write!(f, "search: no path from {start} to {end}")
            }
            Self::BudgetExhausted { steps } => {
                write!(f, "search: step budget exhausted after {steps} steps")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}
