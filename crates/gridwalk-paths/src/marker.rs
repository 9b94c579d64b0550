use std::fmt;

/// Annotation attached to every node of a search result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    #[default]
    Unvisited,
    /// Reached by the traversal.
    Visited,
    PathStart,
    PathEnd,
    /// Interior node of the reconstructed path.
    PathPoint,
}

impl Marker {
    /// Whether the marker belongs to the reconstructed path.
    pub const fn is_path(self) -> bool {
        matches!(self, Self::PathStart | Self::PathEnd | Self::PathPoint)
    }

    /// Single-character rendering used by text maps.
    pub const fn glyph(self) -> char {
        match self {
            Self::Unvisited => ' ',
            Self::Visited => '·',
            Self::PathStart => '♦',
            Self::PathEnd => '♣',
            Self::PathPoint => '◌',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn marker_serializes_as_variant_name() {
        let json = serde_json::to_string(&Marker::PathPoint).unwrap();
        assert_eq!(json, r#""PathPoint""#);
        let back: Marker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Marker::PathPoint);
    }
}
