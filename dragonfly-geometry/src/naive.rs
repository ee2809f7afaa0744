//! Brute-force point set
//!
//! Linear-scan nearest neighbor. Correct for any input and trivially
//! auditable, which makes it the oracle for cross-checking the KD-tree;
//! also a reasonable choice for point sets too small to justify a tree.

use dragonfly_common::{Error, Result};

use crate::point::Point;
use crate::PointSet;

pub struct NaivePointSet {
    points: Vec<Point>,
}

impl NaivePointSet {
    pub fn new(points: &[Point]) -> Result<Self> {
        for point in points {
            if !point.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "point coordinates must be finite, got ({}, {})",
                    point.x, point.y
                )));
            }
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointSet for NaivePointSet {
    /// Scans every stored point; among equidistant candidates the
    /// earliest-inserted wins.
    fn nearest(&self, x: f64, y: f64) -> Result<Point> {
        let query = Point::new(x, y);
        let mut candidates = self.points.iter();
        let mut best = *candidates.next().ok_or(Error::EmptyIndex)?;
        for point in candidates {
            if point.distance_squared(&query) < best.distance_squared(&query) {
                best = *point;
            }
        }
        Ok(best)
    }
}
