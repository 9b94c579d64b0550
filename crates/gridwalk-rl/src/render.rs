//! Projection of search results back onto a 2D text map.

use gridwalk_core::{Graph, Point};
use gridwalk_paths::Marker;

use crate::error::MapError;
use crate::tilemap::TileMap;

/// Glyph for cells that no layer covers, typically walls.
pub const BLOCKED: char = '#';

/// Paint graph layers onto a `height`×`width` map.
///
/// Cells start as `None` (blocked). Each layer writes the marker of every
/// node that falls inside the map, so later layers override earlier ones.
/// Pass the full map graph first and a search result after it.
pub fn paint<E>(
    height: i32,
    width: i32,
    layers: &[&Graph<Point, Marker, E>],
) -> Result<TileMap<Option<Marker>>, MapError> {
    let mut map = TileMap::new(height, width)?;
    for layer in layers {
        for node in layer.nodes() {
            map.set(*node.index(), Some(*node.value()));
        }
    }
    Ok(map)
}

/// Render a painted map, one line per row.
pub fn render(map: &TileMap<Option<Marker>>) -> String {
    let width = map.width() as usize;
    let mut out = String::with_capacity(map.bounds().len() * 3 + map.height() as usize);
    for (i, (_, cell)) in map.iter().enumerate() {
        out.push(cell.map_or(BLOCKED, Marker::glyph));
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layers_override() {
        let mut base: Graph<Point, Marker> = Graph::new();
        base.add_node(Point::new(0, 0), Marker::Unvisited);
        base.add_node(Point::new(1, 0), Marker::Unvisited);
        let mut result: Graph<Point, Marker> = Graph::new();
        result.add_node(Point::new(1, 0), Marker::PathEnd);

        let map = paint(2, 2, &[&base, &result]).unwrap();
        assert_eq!(map.at(Point::new(0, 0)), Some(Some(Marker::Unvisited)));
        assert_eq!(map.at(Point::new(1, 0)), Some(Some(Marker::PathEnd)));
        assert_eq!(map.at(Point::new(1, 1)), Some(None));
    }

    #[test]
    fn nodes_outside_are_ignored() {
        let mut g: Graph<Point, Marker> = Graph::new();
        g.add_node(Point::new(5, 5), Marker::Visited);
        g.add_node(Point::new(-1, 0), Marker::Visited);
        let map = paint(2, 2, &[&g]).unwrap();
        assert_eq!(map.count(None), 4);
    }

    #[test]
    fn renders_rows() {
        let mut g: Graph<Point, Marker> = Graph::new();
        g.add_node(Point::new(0, 0), Marker::PathStart);
        g.add_node(Point::new(1, 0), Marker::PathPoint);
        g.add_node(Point::new(2, 0), Marker::PathEnd);
        g.add_node(Point::new(0, 1), Marker::Visited);
        g.add_node(Point::new(1, 1), Marker::Unvisited);
        let text = render(&paint(2, 3, &[&g]).unwrap());
        assert_eq!(text, "♦◌♣\n· #\n");
    }

    #[test]
    fn rejects_bad_dimensions() {
        let g: Graph<Point, Marker> = Graph::new();
        assert_eq!(
            paint(0, 3, &[&g]).unwrap_err(),
            MapError::InvalidDimensions {
                height: 0,
                width: 3
            }
        );
    }
}
