//! **gridwalk-core**: generic undirected graph container and grid geometry.
//!
//! This crate provides the foundational types used across the *gridwalk*
//! workspace: integer grid points and rectangles, and an index-addressed
//! undirected [`Graph`] whose nodes are identified solely by their index.

pub mod error;
pub mod geom;
pub mod graph;

pub use error::GraphError;
pub use geom::{Point, Range};
pub use graph::{Edge, EdgeKey, Graph, Node, NodeIndex};
