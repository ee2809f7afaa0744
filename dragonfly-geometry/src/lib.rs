//! Geometry primitives and spatial indexing for the dragonfly routing toolkit
//!
//! The map layer snaps query coordinates to graph vertices through the
//! [`PointSet`] seam: [`KdTree`] is the production index, and
//! [`NaivePointSet`] is the linear-scan reference used to cross-check it.

pub mod kdtree;
pub mod naive;
pub mod point;

pub use kdtree::KdTree;
pub use naive::NaivePointSet;
pub use point::Point;

use dragonfly_common::Result;

/// A queryable set of 2D points.
pub trait PointSet {
    /// The stored point nearest to `(x, y)` by Euclidean distance.
    ///
    /// Fails with `Error::EmptyIndex` when the set holds no points.
    fn nearest(&self, x: f64, y: f64) -> Result<Point>;
}
