//! Map utilities around the gridwalk searches: cellular-automaton cave
//! generation, conversion of tile maps into graphs, and text rendering of
//! search results.

pub mod convert;
pub mod error;
pub mod mapgen;
pub mod render;
pub mod tilemap;

pub use convert::{graph_from_map, random_node};
pub use error::MapError;
pub use mapgen::{CaveRule, MapGen, Terrain};
pub use render::{BLOCKED, paint, render};
pub use tilemap::TileMap;
