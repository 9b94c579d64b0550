use std::fmt;

/// Errors raised by grid-shaped map helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Height or width is zero or negative.
    InvalidDimensions { height: i32, width: i32 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { height, width } => {
                write!(f, "map: invalid dimensions {height}x{width} (height x width)")
            }
        }
    }
}

impl std::error::Error for MapError {}
