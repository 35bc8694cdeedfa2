use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell on the warehouse grid.
///
/// The product contract carries locations as `{x, y}` objects; the route
/// contract carries them as `[x, y]` pairs. This type serializes as the
/// object form; the pair form is a wire-DTO concern handled via the array
/// conversions below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GridLocation {
    pub x: i32,
    pub y: i32,
}

impl GridLocation {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for GridLocation {
    fn from(pair: [i32; 2]) -> Self {
        Self {
            x: pair[0],
            y: pair[1],
        }
    }
}

impl From<GridLocation> for [i32; 2] {
    fn from(location: GridLocation) -> Self {
        [location.x, location.y]
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
