//! 2D points in the map's projected plane

use serde::{Deserialize, Serialize};

/// A point in the map's projected 2D plane.
///
/// Distance comparisons throughout the crate happen on squared values;
/// `distance` takes the square root only where a caller needs the real
/// magnitude (e.g. a straight-line routing heuristic).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// True iff both coordinates are finite (no NaN, no infinities)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
